use leptos::*;

use crate::components::FeatureCard;
use crate::core::content::FeatureItem;
use crate::core::copy::AudienceCopy;

#[component]
pub fn WhySection(
    #[prop(into)] features: Signal<&'static [FeatureItem]>,
    #[prop(into)] copy: Signal<&'static AudienceCopy>,
) -> impl IntoView {
    view! {
        <section class="py-16 md:py-28 bg-white">
            <div class="container mx-auto px-5 md:px-8">
                <div class="text-center mb-10 md:mb-16">
                    <h2 class="text-2xl md:text-4xl font-extrabold mb-3 md:mb-4">"Why SponsorKiya?"</h2>
                    <p class="text-sm md:text-base text-gray-500 max-w-2xl mx-auto">
                        {move || copy.get().why_subtitle}
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 md:gap-8">
                    {move || features.get().iter().map(|feature| view! {
                        <FeatureCard
                            icon=feature.icon
                            title=feature.title
                            description=feature.description
                        />
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
