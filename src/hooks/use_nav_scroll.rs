use leptos::*;

use crate::core::nav_state::{is_scrolled, NavMsg, NavState};

fn scroll_offset() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// Keeps `NavState::scrolled` in sync with the window scroll offset.
///
/// The listener is registered when the calling component mounts and removed
/// when its reactive owner is disposed.
pub fn use_nav_scroll(nav: RwSignal<NavState>, threshold: f64) {
    // the browser may restore a scroll position before the first event
    nav.update(|state| state.update(NavMsg::Scrolled(scroll_offset()), threshold));

    let handle = window_event_listener(ev::scroll, move |_| {
        let offset = scroll_offset();
        if nav.with_untracked(|state| state.scrolled) != is_scrolled(offset, threshold) {
            nav.update(|state| state.update(NavMsg::Scrolled(offset), threshold));
        }
    });

    on_cleanup(move || {
        log::debug!("Removing navigation scroll listener");
        handle.remove();
    });
}
