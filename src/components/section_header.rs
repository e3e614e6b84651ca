use leptos::*;

#[component]
pub fn SectionHeader(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <h2 class="text-2xl md:text-3xl font-extrabold mb-8 text-gray-900 font-sans text-center md:text-left">
            {title}
        </h2>
    }
}
