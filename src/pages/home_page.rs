use leptos::*;

use crate::core::content::{BRAND_LOGOS, SUCCESS_STORIES};
use crate::core::{LandingMsg, LandingState};
use crate::pages::hero::HeroSection;
use crate::pages::success_stories::SuccessStories;
use crate::pages::trending_section::TrendingSection;
use crate::pages::trusted_brands::TrustedBrands;
use crate::pages::why_section::WhySection;

/// Page body between the navigation bar and the footer
#[component]
pub fn HomePage(
    #[prop(into)] state: Signal<LandingState>,
    #[prop(into)] on_msg: Callback<LandingMsg>,
) -> impl IntoView {
    // the active audience picks one table per section
    let user_type = Signal::derive(move || state.with(|current| current.user_type));
    let copy = Signal::derive(move || state.with(|current| current.copy()));
    let features = Signal::derive(move || state.with(|current| current.features()));
    let trending = Signal::derive(move || state.with(|current| current.trending()));

    view! {
        <>
            <HeroSection user_type=user_type copy=copy on_msg=on_msg/>
            <TrustedBrands brand_logos=&BRAND_LOGOS[..]/>
            <WhySection features=features copy=copy/>
            <TrendingSection items=trending copy=copy/>
            <SuccessStories stories=&SUCCESS_STORIES[..]/>
        </>
    }
}
