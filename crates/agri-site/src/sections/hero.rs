//! Hero section

use crate::components::{BackgroundBanners, StatCard};
use crate::state::{use_config, use_current_route, use_nav_effects};
use agri_core::content::home::HERO_STATS;
use agri_core::navigation::resolve_scroll;
use agri_core::Anchor;
use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    let config = use_config();
    let run = use_nav_effects();
    let current = use_current_route();
    let hero_image = config.banner_images.first().cloned();

    view! {
        <section
            id=Anchor::Home.id()
            class="relative overflow-hidden bg-gradient-to-br from-green-50 to-white dark:from-gray-900 dark:to-gray-800 transition-colors duration-300"
        >
            <BackgroundBanners/>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 lg:py-32 relative z-10">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    // Left Content
                    <div class="space-y-8">
                        <h1 class="text-4xl sm:text-5xl lg:text-6xl font-extrabold text-gray-900 dark:text-white leading-tight">
                            "Revolutionizing Indian "
                            <span class="text-green-700 dark:text-green-500">"Agriculture"</span>
                            " With "
                            <span class="text-green-700 dark:text-green-500">"Drone Technology"</span>
                        </h1>
                        <p class="text-xl text-gray-600 dark:text-gray-300">
                            "KropKraft Innovations provides cutting-edge drone spraying, sales, training, and complete farm automation solutions optimized for Indian farming conditions."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4">
                            <button
                                type="button"
                                class="px-8 py-4 bg-green-700 dark:bg-green-600 text-white rounded-xl hover:bg-green-800 dark:hover:bg-green-700 transition-all shadow-lg"
                                on:click=move |_| run.call(resolve_scroll(Anchor::Contact.into(), current.get_untracked()))
                            >
                                "Request a Free Demo →"
                            </button>
                            <button
                                type="button"
                                class="px-8 py-4 bg-white dark:bg-gray-800 text-gray-900 dark:text-white border border-gray-300 dark:border-gray-700 rounded-xl hover:bg-gray-50 dark:hover:bg-gray-700 transition-all"
                            >
                                "▶ Watch Demo"
                            </button>
                        </div>

                        // Stats
                        <div class="grid grid-cols-3 gap-6 pt-8 border-t border-gray-200 dark:border-gray-700">
                            {HERO_STATS.iter().map(|stat| view! { <StatCard stat=*stat/> }).collect_view()}
                        </div>
                    </div>

                    // Right Visual
                    <div class="relative">
                        <div class="relative rounded-2xl overflow-hidden shadow-2xl">
                            {hero_image.map(|src| view! {
                                <img src=src alt="Agricultural Drone in Action" class="w-full h-full object-cover"/>
                            })}
                            <div class="absolute inset-0 bg-gradient-to-t from-black/20 to-transparent"></div>
                        </div>
                        <div class="absolute -bottom-6 -left-6 bg-white dark:bg-gray-800 rounded-xl shadow-xl p-6 max-w-xs border border-gray-100 dark:border-gray-700">
                            <div class="flex items-start space-x-4">
                                <div class="bg-green-100 dark:bg-green-900/30 p-3 rounded-lg text-xl">"✅"</div>
                                <div>
                                    <div class="text-gray-900 dark:text-white mb-1">"DGCA Approved"</div>
                                    <div class="text-sm text-gray-600 dark:text-gray-400">"Certified Training & Operations"</div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
