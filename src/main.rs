mod app;
mod components;
mod core;
mod hooks;
mod pages;

use app::App;
use crate::core::site_config::{self, SiteConfig};

fn main() {
    // config is read before the logger exists, report problems afterwards
    let loaded = SiteConfig::load_from_document();
    let level = loaded
        .as_ref()
        .map(|config| config.log_level())
        .unwrap_or(log::Level::Info);

    wasm_logger::init(wasm_logger::Config::new(level));

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}, using defaults", e);
            SiteConfig::default()
        }
    };
    site_config::init_site_config(config);

    log::info!("Mounting landing page");
    leptos::mount_to_body(App);
}
