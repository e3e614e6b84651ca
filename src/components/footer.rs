use leptos::*;

use crate::components::wordmark::Wordmark;
use crate::core::constants::{ACCENT_COLOR, INPUT_BORDER_COLOR};
use crate::core::content::{footer_brands, BrandLogo, FOOTER_QUICK_LINKS, FOOTER_SOCIAL_LINKS};
use crate::core::site_config::site_config;

/// Focus history of the newsletter input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFocus {
    #[default]
    Untouched,
    Focused,
    Blurred,
}

impl InputFocus {
    pub fn border_color(&self) -> &'static str {
        match self {
            InputFocus::Untouched => "transparent",
            InputFocus::Focused => ACCENT_COLOR,
            InputFocus::Blurred => INPUT_BORDER_COLOR,
        }
    }
}

#[component]
fn NewsletterSignup() -> impl IntoView {
    let (focus, set_focus) = create_signal(InputFocus::default());

    view! {
        <div class="flex flex-col sm:flex-row gap-3 md:gap-4">
            <input
                type="email"
                placeholder="Type your email..."
                class="bg-gray-900 border border-gray-800 rounded-full px-6 py-3 text-white focus:outline-none flex-grow transition-colors"
                style=move || format!("border-color: {}", focus.get().border_color())
                on:focus=move |_| set_focus.set(InputFocus::Focused)
                on:blur=move |_| set_focus.set(InputFocus::Blurred)
            />
            <button class="bg-white text-black px-6 py-3 rounded-full font-bold hover:bg-electric transition-colors">
                "Subscribe"
            </button>
        </div>
    }
}

#[component]
pub fn PageFooter(brand_logos: &'static [BrandLogo]) -> impl IntoView {
    let site_name = site_config().site_name;
    let copyright = format!("© 2024 {}. All rights reserved.", site_name);

    view! {
        <footer class="bg-black text-white pt-16 pb-8 md:pt-20 md:pb-10">
            <div class="container mx-auto px-5 md:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 md:gap-12 mb-12 md:mb-16">
                    <div class="md:col-span-1">
                        <span class="text-2xl font-black tracking-tighter block mb-4 md:mb-6">
                            <Wordmark name=site_name muted_class="text-gray-500"/>
                        </span>
                        <p class="text-gray-400 text-sm leading-relaxed max-w-sm">
                            "Empowering the next generation of creators and organizers by democratizing access to corporate sponsorship."
                        </p>
                    </div>

                    <div>
                        <h4 class="font-bold mb-4 md:mb-6 text-electric text-lg">"Quick Links"</h4>
                        <ul class="space-y-3 md:space-y-4 text-sm text-gray-400">
                            {FOOTER_QUICK_LINKS.iter().map(|link| view! {
                                <li class="hover:text-white cursor-pointer transition-colors">{*link}</li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div class="md:col-span-2">
                        <h4 class="font-bold mb-4 md:mb-6 text-electric text-lg">"Newsletter Signup"</h4>
                        <NewsletterSignup/>
                        <div class="flex gap-6 mt-8 opacity-50 grayscale hover:grayscale-0 transition-all flex-wrap">
                            {footer_brands(brand_logos).iter().map(|brand| view! {
                                <i
                                    class=format!("{} text-xl hover:text-white transition-colors cursor-pointer", brand.icon)
                                    title=brand.name
                                ></i>
                            }).collect_view()}
                        </div>
                    </div>
                </div>

                <div class="border-t border-gray-900 pt-8 flex flex-col md:flex-row justify-between items-center text-xs text-gray-500 gap-4">
                    <p class="text-center md:text-left">{copyright}</p>
                    <div class="flex gap-6">
                        {FOOTER_SOCIAL_LINKS.iter().map(|name| view! {
                            <span class="hover:text-white cursor-pointer transition-colors">{*name}</span>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_focus_colors() {
        assert_eq!(InputFocus::default().border_color(), "transparent");
        assert_eq!(InputFocus::Focused.border_color(), "#FFD600");
        assert_eq!(InputFocus::Blurred.border_color(), "#1f2937");
    }
}
