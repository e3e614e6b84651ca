use leptos::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::wordmark::Wordmark;
use crate::core::content::nav_links;
use crate::core::nav_state::{auth_controls, AuthControls, NavMsg, NavState};
use crate::core::site_config::site_config;
use crate::core::{LandingMsg, UserType};
use crate::hooks::use_nav_scroll;

#[component]
pub fn NavBar(
    #[prop(into)] is_logged_in: Signal<bool>,
    #[prop(into)] user_type: Signal<UserType>,
    /// Login and logout requests for the root
    #[prop(into)] on_msg: Callback<LandingMsg>,
) -> impl IntoView {
    let config = site_config();
    let threshold = config.scroll_threshold;
    let site_name = config.site_name;
    let profile = store_value(config.profile);

    let nav = create_rw_signal(NavState::default());
    use_nav_scroll(nav, threshold);

    let send = move |msg: NavMsg| nav.update(|state| state.update(msg, threshold));
    let controls = move || profile.with_value(|p| auth_controls(is_logged_in.get(), user_type.get(), p));
    let links = move || nav_links(user_type.get());

    // mobile menu buttons close the menu once the root has the request
    let auth_action = move |msg: LandingMsg| {
        on_msg.call(msg);
        send(NavMsg::AuthActionCompleted);
    };

    view! {
        <>
        <nav class=move || format!(
            "fixed top-0 w-full z-50 transition-all duration-300 {}",
            nav.with(|state| state.container_class())
        )>
            <div class="container mx-auto px-5 md:px-8 flex items-center justify-between">
                <div class="flex items-center gap-2">
                    <span class="text-2xl font-black tracking-tighter">
                        <Wordmark name=site_name muted_class="text-gray-400" dot_class="text-electric text-3xl"/>
                    </span>
                </div>

                // desktop links
                <div class="hidden md:flex items-center gap-8">
                    {move || links().into_iter().map(|link| view! {
                        <a href=link.href class="text-sm font-medium text-gray-600 hover:text-black transition-colors">
                            {link.name}
                        </a>
                    }).collect_view()}
                </div>

                // desktop auth controls
                <div class="hidden md:flex items-center gap-4">
                    {move || match controls() {
                        AuthControls::Member { display_name, avatar_url, role_label, .. } => view! {
                            <div class="flex items-center gap-4 animate-fade-in-down">
                                <div class="flex flex-col items-end mr-2">
                                    <span class="text-xs font-bold">{display_name}</span>
                                    <span class="text-[10px] text-gray-500 uppercase tracking-wider">{role_label}</span>
                                </div>
                                <div class="w-10 h-10 rounded-full bg-gray-200 flex items-center justify-center overflow-hidden border border-gray-300 cursor-pointer hover:ring-2 hover:ring-offset-2 hover:ring-black transition-all">
                                    <img src=avatar_url alt="User"/>
                                </div>
                                <button
                                    on:click=move |_| on_msg.call(LandingMsg::Logout)
                                    class="bg-gray-100 hover:bg-gray-200 p-2 rounded-full text-gray-600 transition-colors"
                                    title="Logout"
                                >
                                    <i class="fa-solid fa-right-from-bracket"></i>
                                </button>
                            </div>
                        }.into_view(),
                        AuthControls::Guest => view! {
                            <div class="flex items-center gap-4">
                                <button
                                    on:click=move |_| on_msg.call(LandingMsg::Login)
                                    class="text-sm font-bold text-gray-900 hover:underline"
                                >
                                    "Login"
                                </button>
                                <button
                                    on:click=move |_| on_msg.call(LandingMsg::Login)
                                    class="bg-black text-white px-5 py-2 rounded-full text-sm font-bold hover:bg-gray-800 transition-colors"
                                >
                                    "Sign up"
                                </button>
                            </div>
                        }.into_view(),
                    }}
                </div>

                // mobile avatar chip and menu toggle
                <div class="flex items-center gap-3 md:hidden">
                    {move || match controls() {
                        AuthControls::Member { short_name, avatar_url, .. } => view! {
                            <div class="flex items-center gap-2 bg-gray-100 rounded-full px-2 py-1 pr-3 animate-fade-in-down">
                                <div class="w-6 h-6 rounded-full bg-gray-300 overflow-hidden border border-white">
                                    <img src=avatar_url alt="User"/>
                                </div>
                                <span class="text-xs font-bold">{short_name}</span>
                            </div>
                        }.into_view(),
                        AuthControls::Guest => ().into_view(),
                    }}
                    <button
                        on:click=move |_| send(NavMsg::ToggleMenu)
                        class="p-2 text-gray-800 hover:bg-gray-100 rounded-full transition-colors"
                    >
                        <i class=move || {
                            if nav.with(|state| state.mobile_menu_open) {
                                "fa-solid fa-xmark text-2xl"
                            } else {
                                "fa-solid fa-bars text-2xl"
                            }
                        }></i>
                    </button>
                </div>
            </div>
        </nav>

        // mobile menu dropdown
        <Show when=move || nav.with(|state| state.mobile_menu_open)>
            <div class="fixed inset-0 top-[65px] bg-white z-40 p-6 md:hidden flex flex-col gap-6 animate-fade-in-down border-t border-gray-100 h-[calc(100vh-65px)] overflow-y-auto">
                {move || links().into_iter().map(|link| view! {
                    <a
                        href=link.href
                        on:click=move |_| send(NavMsg::LinkClicked)
                        class="text-2xl font-bold text-gray-900 border-b pb-4 border-gray-100 hover:text-electric transition-colors"
                    >
                        {link.name}
                    </a>
                }).collect_view()}
                <div class="mt-auto flex flex-col gap-4 pb-8">
                    {move || if is_logged_in.get() {
                        view! {
                            <Button
                                variant=ButtonVariant::Outline
                                class="w-full justify-center text-red-600 border-red-200 hover:bg-red-50"
                                on_click=Callback::new(move |_: ()| auth_action(LandingMsg::Logout))
                            >
                                <i class="fa-solid fa-right-from-bracket mr-2"></i>
                                " Logout"
                            </Button>
                        }.into_view()
                    } else {
                        view! {
                            <>
                            <Button
                                variant=ButtonVariant::Outline
                                class="w-full justify-center"
                                on_click=Callback::new(move |_: ()| auth_action(LandingMsg::Login))
                            >
                                "Login"
                            </Button>
                            <Button
                                class="w-full justify-center text-black"
                                on_click=Callback::new(move |_: ()| auth_action(LandingMsg::Login))
                            >
                                "Sign Up"
                            </Button>
                            </>
                        }.into_view()
                    }}
                </div>
            </div>
        </Show>
        </>
    }
}
