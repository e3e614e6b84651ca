use leptos::*;

use crate::components::{NavBar, PageFooter};
use crate::core::constants::ICON_STYLESHEET_URL;
use crate::core::content::BRAND_LOGOS;
use crate::core::site_config::site_config;
use crate::core::{LandingMsg, LandingState};
use crate::pages::HomePage;

// main app component
#[component]
pub fn App() -> impl IntoView {
    let state = create_rw_signal(LandingState::new(site_config().initial_user_type));

    // every child request goes through the same update
    let on_msg = Callback::new(move |msg: LandingMsg| {
        state.update(|current| current.update(msg));
    });

    let is_logged_in = Signal::derive(move || state.with(|current| current.is_logged_in));
    let user_type = Signal::derive(move || state.with(|current| current.user_type));

    view! {
        <div class="min-h-screen bg-white font-sans text-gray-900 selection-electric">
            <link rel="stylesheet" href=ICON_STYLESHEET_URL/>

            <NavBar is_logged_in=is_logged_in user_type=user_type on_msg=on_msg/>
            <HomePage state=state on_msg=on_msg/>
            <PageFooter brand_logos=&BRAND_LOGOS[..]/>
        </div>
    }
}
