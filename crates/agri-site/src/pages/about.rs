//! About page

use super::use_page_ready;
use crate::state::use_config;
use agri_core::content::about::{GALLERY_REPEAT, STATS, VALUES};
use agri_core::Route;
use leptos::*;
use leptos_router::A;

#[component]
pub fn AboutPage() -> impl IntoView {
    use_page_ready(Route::About);

    let config = use_config();
    let gallery = config
        .banner_images
        .iter()
        .cycle()
        .take(config.banner_images.len() * GALLERY_REPEAT)
        .enumerate()
        .map(|(i, src)| {
            view! {
                <div class="relative aspect-[4/3] overflow-hidden">
                    <div
                        class="w-full h-full bg-gray-200 dark:bg-gray-800 bg-center bg-cover"
                        style=format!("background-image: url('{src}')")
                    ></div>
                    <div class="absolute inset-0 bg-gradient-to-t from-black/20 to-transparent"></div>
                    <div class="absolute bottom-2 left-2 text-xs text-white/90 bg-black/40 px-2 py-1 rounded-full backdrop-blur">
                        {format!("Drone {}", i + 1)}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-green-50 to-white dark:from-gray-900 dark:to-gray-950 text-gray-900 dark:text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12 lg:py-16 space-y-12">
                <A href="/" class="inline-flex items-center gap-2 text-green-700 dark:text-green-400 hover:text-green-800 dark:hover:text-green-300 transition-colors">
                    "← Back to Home"
                </A>

                <div class="grid lg:grid-cols-2 gap-10 items-center">
                    <div class="space-y-6">
                        <span class="inline-flex px-3 py-1 rounded-full bg-green-100 dark:bg-green-900/40 text-green-700 dark:text-green-300 text-sm font-medium">
                            "About Krishak 2I"
                        </span>
                        <h1 class="text-4xl lg:text-5xl font-extrabold leading-tight">
                            "Building premium agri-drone experiences for Indian farms"
                        </h1>
                        <p class="text-lg text-gray-600 dark:text-gray-300">
                            "Krishak 2I blends robust engineering with farmer-first design. From autonomous spraying to nationwide service, we craft every touchpoint to deliver reliability, safety, and measurable ROI."
                        </p>
                        <div class="grid sm:grid-cols-3 gap-4">
                            {STATS.iter().map(|stat| view! {
                                <div class="rounded-xl border border-green-200 dark:border-green-800 bg-white dark:bg-gray-900 p-4 shadow-sm">
                                    <div class="text-2xl text-green-700 dark:text-green-400 font-semibold">{stat.value}</div>
                                    <div class="text-sm text-gray-600 dark:text-gray-400">{stat.label}</div>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>

                    // Gallery
                    <div class="rounded-3xl overflow-hidden border border-gray-200 dark:border-gray-800 shadow-2xl bg-white/70 dark:bg-gray-900/70 backdrop-blur">
                        <div class="grid grid-cols-3 gap-1">{gallery}</div>
                    </div>
                </div>

                <div class="grid lg:grid-cols-3 gap-6">
                    {VALUES.iter().map(|card| view! {
                        <div class="p-6 rounded-2xl border border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 shadow-sm hover:shadow-lg transition-all">
                            <div class="inline-flex p-3 rounded-xl bg-green-100 dark:bg-green-900/40 text-2xl mb-4">{card.icon}</div>
                            <h3 class="text-xl font-semibold mb-2">{card.title}</h3>
                            <p class="text-gray-600 dark:text-gray-300">{card.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
