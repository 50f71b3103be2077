//! Safety technology

use agri_core::content::home::{SAFETY_BADGES, SAFETY_FEATURES};
use leptos::*;

#[component]
pub fn SafetyTechnology() -> impl IntoView {
    view! {
        <section class="py-20 lg:py-32 bg-gray-900 transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-white mb-4">"Built for Safety, Engineered for Reliability"</h2>
                    <p class="text-xl text-gray-300">
                        "Multiple layers of safety features and cutting-edge technology ensure worry-free operations in any condition."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SAFETY_FEATURES.iter().map(|feature| view! {
                        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 hover:border-green-600 transition-all">
                            <div class="text-3xl mb-3">{feature.icon}</div>
                            <h3 class="text-white mb-2">{feature.title}</h3>
                            <p class="text-gray-400 text-sm">{feature.description}</p>
                        </div>
                    }).collect_view()}
                </div>

                <div class="mt-16 bg-gradient-to-r from-green-700 to-green-600 dark:from-green-800 dark:to-green-700 rounded-2xl p-8 lg:p-12 text-center">
                    <h3 class="text-3xl text-white mb-4">"Industry-Leading Safety Standards"</h3>
                    <p class="text-green-100 text-lg max-w-3xl mx-auto mb-8">
                        "Our drones meet and exceed all regulatory requirements, featuring redundant safety systems and real-time monitoring for complete peace of mind."
                    </p>
                    <div class="flex flex-wrap justify-center gap-6 text-white">
                        {SAFETY_BADGES.iter().map(|badge| view! {
                            <div class="flex items-center space-x-2">
                                <span>"✓"</span>
                                <span>{*badge}</span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
