use leptos::*;

use crate::components::Button;
use crate::core::copy::AudienceCopy;
use crate::core::{LandingMsg, UserType};

pub fn toggle_class(active: bool) -> &'static str {
    if active {
        "px-4 md:px-6 py-2 md:py-2.5 rounded-full text-xs md:text-sm font-bold transition-all bg-black text-electric shadow-md"
    } else {
        "px-4 md:px-6 py-2 md:py-2.5 rounded-full text-xs md:text-sm font-bold transition-all text-gray-500 hover:text-gray-900"
    }
}

#[component]
pub fn HeroSection(
    #[prop(into)] user_type: Signal<UserType>,
    #[prop(into)] copy: Signal<&'static AudienceCopy>,
    /// Receives the audience toggle clicks
    #[prop(into)] on_msg: Callback<LandingMsg>,
) -> impl IntoView {
    view! {
        <section class="relative pt-28 pb-12 md:pt-48 md:pb-24 px-5 overflow-hidden">
            // background decoration
            <div class="absolute top-0 right-0 w-2/3 h-full bg-gradient-to-l from-gray-50 to-transparent -z-10 hidden md:block"></div>
            <div class="absolute top-20 right-20 w-64 h-64 bg-electric rounded-full filter blur-[100px] opacity-20 -z-10"></div>

            <div class="container mx-auto max-w-6xl relative z-10">
                <div class="flex flex-col md:items-center text-center md:text-center items-start text-left">
                    <h1
                        class="text-4xl md:text-6xl lg:text-7xl font-extrabold tracking-tight text-gray-900 leading-[1.1] mb-6"
                        aria-label=move || copy.get().headline()
                    >
                        {move || {
                            let copy = copy.get();
                            view! {
                                <>
                                    {copy.hero_lead}
                                    " "
                                    <span class="text-electric">{copy.hero_highlight}</span>
                                    " "
                                    <br class="hidden md:block"/>
                                    {copy.hero_middle}
                                    " "
                                    <br class="md:hidden"/>
                                    <span class="relative inline-block">
                                        {copy.hero_underlined}
                                        <svg
                                            class="absolute w-full h-3 -bottom-1 left-0 text-electric -z-10"
                                            viewBox="0 0 100 10"
                                            preserveAspectRatio="none"
                                        >
                                            <path d="M0 5 Q 50 10 100 5" stroke="currentColor" stroke-width="8" fill="none"/>
                                        </svg>
                                    </span>
                                </>
                            }
                        }}
                    </h1>

                    <p class="text-base md:text-xl text-gray-600 mb-8 max-w-2xl mx-auto leading-relaxed">
                        {move || copy.get().hero_subtitle}
                    </p>

                    // audience toggle
                    <div class="bg-gray-100 p-1.5 rounded-full inline-flex mb-8 self-center">
                        {UserType::ALL.into_iter().map(|option| view! {
                            <button
                                on:click=move |_| on_msg.call(LandingMsg::SetUserType(option))
                                class=move || toggle_class(user_type.get() == option)
                            >
                                {option.toggle_label()}
                            </button>
                        }).collect_view()}
                    </div>

                    // search bar, decorative only
                    <div class="w-full max-w-2xl mx-auto relative group px-1 md:px-0">
                        <div class="absolute -inset-1 bg-gradient-to-r from-blue-600 to-purple-600 rounded-2xl blur opacity-25 group-hover:opacity-50 transition duration-1000 group-hover:duration-200"></div>
                        <div class="relative bg-white rounded-2xl shadow-xl p-2 flex items-center border border-gray-100">
                            <div class="pl-3 md:pl-4 pr-2 md:pr-3 text-gray-400">
                                <i class=move || format!("fa-solid fa-bolt text-xl {}", copy.get().search_icon_class)></i>
                            </div>
                            <input
                                type="text"
                                placeholder=move || copy.get().search_placeholder
                                class="flex-grow py-2 md:py-3 px-1 md:px-2 outline-none text-gray-700 font-medium placeholder-gray-400 bg-transparent text-sm md:text-base w-full min-w-0"
                            />
                            <Button class="hidden md:flex !py-2.5 !px-8">
                                "Search "
                                <i class="fa-solid fa-arrow-right"></i>
                            </Button>
                            <button class="md:hidden bg-black text-white p-2.5 rounded-xl shrink-0">
                                <i class="fa-solid fa-arrow-right"></i>
                            </button>
                        </div>
                        <p class="text-[10px] md:text-xs text-gray-400 mt-3 text-center md:text-left ml-2 flex items-center justify-center md:justify-start gap-1">
                            <i class="fa-solid fa-star text-yellow-500"></i>
                            "AI suggestions powered by Gemini"
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_class() {
        assert!(toggle_class(true).contains("bg-black text-electric"));
        assert!(!toggle_class(false).contains("bg-black"));
    }
}
