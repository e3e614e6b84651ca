use leptos::*;

/// One selling point in the "Why SponsorKiya?" grid
#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-start p-6 rounded-2xl bg-white border border-gray-100 shadow-sm hover:shadow-md transition-shadow h-full">
            <div class="p-3 bg-blue-50 text-blue-600 rounded-xl mb-4">
                <i class=format!("{} text-2xl", icon)></i>
            </div>
            <h3 class="text-lg font-bold mb-2">{title}</h3>
            <p class="text-gray-500 text-sm leading-relaxed">{description}</p>
        </div>
    }
}
