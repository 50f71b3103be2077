//! Services page

use super::use_page_ready;
use crate::sections::{ServiceSupport, Training};
use agri_core::content::services::OFFERINGS;
use agri_core::Route;
use leptos::*;

#[component]
pub fn ServicesPage() -> impl IntoView {
    use_page_ready(Route::Services);

    view! {
        <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-14 space-y-16">
                // Offerings
                <section>
                    <div class="rounded-3xl bg-gradient-to-br from-green-50/80 via-white to-green-100/70 dark:from-gray-800 dark:via-gray-900 dark:to-gray-800 border border-green-100 dark:border-gray-700 p-8 sm:p-12">
                        <div class="space-y-4">
                            <span class="inline-flex px-3 py-1 rounded-full bg-green-100 dark:bg-green-900/30 text-green-700 dark:text-green-400 text-sm font-semibold">
                                "Our Services"
                            </span>
                            <h1 class="text-4xl sm:text-5xl font-extrabold leading-tight">"Solutions built for Indian agriculture"</h1>
                            <p class="text-lg text-gray-600 dark:text-gray-300 max-w-4xl">
                                "From precision spraying to full-spectrum farm support, these offerings are designed to keep agricultural operations efficient, safe, and sustainable across every season."
                            </p>
                        </div>
                        <div class="mt-12 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-8">
                            {OFFERINGS.iter().map(|offering| view! {
                                <div class="h-full bg-gradient-to-br from-green-50 via-white to-green-100/70 dark:from-green-900/20 dark:via-gray-900 dark:to-green-900/20 border border-green-200 dark:border-green-900/40 rounded-3xl shadow-sm hover:shadow-lg transition-all duration-300 p-6 sm:p-8 flex flex-col">
                                    <h3 class="text-xl sm:text-2xl font-semibold text-gray-900 dark:text-white mb-4">{offering.title}</h3>
                                    <p class="text-gray-700 dark:text-gray-300 leading-relaxed whitespace-pre-line">{offering.description}</p>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                </section>

                <section class="space-y-4">
                    <span class="inline-flex px-3 py-1 rounded-full bg-green-100 dark:bg-green-900/30 text-green-700 dark:text-green-400 text-sm font-semibold">
                        "Services"
                    </span>
                    <h2 class="text-3xl font-extrabold">"Training & Support"</h2>
                    <p class="text-lg text-gray-600 dark:text-gray-300 max-w-3xl">
                        "Everything you need to deploy, train, and maintain agri-drone operations with confidence and long-term reliability."
                    </p>
                </section>

                <div class="space-y-12">
                    <Training/>
                    <ServiceSupport/>
                </div>
            </div>
        </div>
    }
}
