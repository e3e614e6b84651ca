use leptos::*;

use crate::components::TrendingCard;
use crate::core::content::TrendingItem;
use crate::core::copy::AudienceCopy;

#[component]
pub fn TrendingSection(
    #[prop(into)] items: Signal<&'static [TrendingItem]>,
    #[prop(into)] copy: Signal<&'static AudienceCopy>,
) -> impl IntoView {
    view! {
        <section class="py-16 md:py-20 bg-gray-50">
            <div class="container mx-auto px-5 md:px-8">
                <div class="flex flex-col md:flex-row justify-between items-end mb-8 md:mb-12 gap-4">
                    <div class="text-center md:text-left w-full md:w-auto">
                        <h2 class="text-2xl md:text-3xl font-extrabold mb-2">{move || copy.get().trending_title}</h2>
                        <p class="text-sm md:text-base text-gray-500">{move || copy.get().trending_subtitle}</p>
                    </div>
                    // carousel arrows have no behaviour
                    <div class="gap-2 hidden md:flex">
                        <button class="w-10 h-10 rounded-full border border-gray-300 flex items-center justify-center bg-white hover:bg-gray-100 transition">
                            <i class="fa-solid fa-arrow-left"></i>
                        </button>
                        <button class="w-10 h-10 rounded-full border border-gray-900 bg-black text-white flex items-center justify-center hover:bg-gray-800 transition">
                            <i class="fa-solid fa-arrow-right"></i>
                        </button>
                    </div>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-3 md:gap-6">
                    {move || items.get().iter().map(|item| view! {
                        <TrendingCard
                            name=item.name
                            category=item.category
                            logo=item.logo
                            gradient=item.gradient
                        />
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
