use leptos::*;

use crate::core::content::BrandLogo;

#[component]
pub fn TrustedBrands(brand_logos: &'static [BrandLogo]) -> impl IntoView {
    view! {
        <section class="py-8 md:py-10 border-y border-gray-100 bg-gray-50/50">
            <div class="container mx-auto px-4 text-center">
                <p class="text-xs md:text-sm font-bold text-gray-400 uppercase tracking-widest mb-6 md:mb-8">
                    "Trusted by 500+ Top Brands"
                </p>
                <div class="flex flex-wrap justify-center items-center gap-6 md:gap-16 opacity-70 grayscale hover:grayscale-0 transition-all duration-500">
                    {brand_logos.iter().map(|brand| view! {
                        <div class="flex items-center gap-2 text-xl md:text-2xl font-bold text-gray-800">
                            <i class=format!("{} text-2xl md:text-3xl", brand.icon)></i>
                            " "
                            <span class="hidden sm:inline">{brand.name}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
