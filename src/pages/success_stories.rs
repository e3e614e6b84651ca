use leptos::*;

use crate::components::SectionHeader;
use crate::core::content::SuccessStory;

#[component]
pub fn SuccessStories(stories: &'static [SuccessStory]) -> impl IntoView {
    view! {
        <section class="py-16 md:py-20 bg-white">
            <div class="container mx-auto px-5 md:px-8">
                <SectionHeader title="Success Stories"/>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 md:gap-8">
                    {stories.iter().map(|story| view! {
                        <div class="relative rounded-3xl overflow-hidden h-64 md:h-80 group cursor-pointer shadow-lg">
                            <img
                                src=story.image_url
                                alt=story.image_alt
                                class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-black/20 to-transparent flex flex-col justify-end p-6 md:p-8 text-white">
                                <span class=format!(
                                    "{} text-[10px] md:text-xs font-bold px-2 py-1 rounded w-fit mb-2 md:mb-3",
                                    story.badge_class
                                )>
                                    "Case Study"
                                </span>
                                <h3 class="text-xl md:text-2xl font-bold mb-1 md:mb-2">{story.title}</h3>
                                <p class="text-gray-300 text-xs md:text-sm">{story.summary}</p>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
