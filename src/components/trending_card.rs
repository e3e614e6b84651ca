use leptos::*;

#[component]
pub fn TrendingCard(
    name: &'static str,
    category: &'static str,
    logo: &'static str,
    gradient: &'static str,
) -> impl IntoView {
    view! {
        <div class="relative overflow-hidden rounded-3xl p-5 md:p-6 aspect-square flex flex-col justify-between text-white shadow-lg cursor-pointer transform hover:scale-105 transition-transform duration-300 group">
            // gradient background
            <div class=format!("absolute inset-0 bg-gradient-to-br {} opacity-90 z-0", gradient)></div>

            // abstract shapes
            <div class="absolute top-0 right-0 w-32 h-32 bg-white opacity-10 rounded-full -mr-10 -mt-10 blur-xl"></div>
            <div class="absolute bottom-0 left-0 w-24 h-24 bg-black opacity-10 rounded-full -ml-5 -mb-5 blur-lg"></div>

            <div class="relative z-10 bg-white/20 backdrop-blur-md w-10 h-10 md:w-12 md:h-12 rounded-xl flex items-center justify-center border border-white/30 shadow-inner">
                <i class=format!("{} text-lg md:text-xl", logo)></i>
            </div>

            <div class="relative z-10 mt-4">
                <p class="text-[10px] md:text-xs font-medium uppercase tracking-wider opacity-80 mb-1">{category}</p>
                <h3 class="text-lg md:text-2xl font-bold leading-tight">{name}</h3>
            </div>

            <div class="absolute bottom-4 right-4 opacity-0 group-hover:opacity-100 transition-opacity z-10 hidden md:block">
                <div class="bg-white text-black p-2 rounded-full">
                    <i class="fa-solid fa-arrow-right text-sm"></i>
                </div>
            </div>
        </div>
    }
}
