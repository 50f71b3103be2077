//! Benefits and drone vs manual comparison

use crate::components::{FeatureCard, SectionHeader};
use agri_core::content::home::{BENEFITS, COMPARISON};
use agri_core::Anchor;
use leptos::*;

#[component]
pub fn Benefits() -> impl IntoView {
    view! {
        <section id=Anchor::Benefits.id() class="py-20 lg:py-32 bg-gray-50 dark:bg-gray-800 transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    badge="Measurable Impact"
                    title="Benefits to Farmers & Cost Savings"
                    subtitle="Real results that transform your farming operations and bottom line."
                />

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6 mb-20">
                    {BENEFITS.iter().map(|benefit| view! { <FeatureCard feature=*benefit/> }).collect_view()}
                </div>

                // Comparison table
                <div class="bg-white dark:bg-gray-900 rounded-2xl shadow-xl overflow-hidden border border-gray-200 dark:border-gray-700">
                    <div class="bg-gradient-to-r from-green-700 to-green-600 px-8 py-6">
                        <h3 class="text-2xl text-white">"Drone Spraying vs Manual Spraying"</h3>
                    </div>
                    <div class="overflow-x-auto">
                        <table class="w-full">
                            <thead>
                                <tr class="border-b border-gray-200 dark:border-gray-700">
                                    <th class="px-8 py-4 text-left text-gray-900 dark:text-white">"Aspect"</th>
                                    <th class="px-8 py-4 text-left text-green-700 dark:text-green-400">"Drone Spraying"</th>
                                    <th class="px-8 py-4 text-left text-gray-600 dark:text-gray-400">"Manual Spraying"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {COMPARISON.iter().map(|row| view! {
                                    <tr class="border-b border-gray-100 dark:border-gray-800 hover:bg-gray-50 dark:hover:bg-gray-800">
                                        <td class="px-8 py-4 text-gray-900 dark:text-white">{row.aspect}</td>
                                        <td class="px-8 py-4 text-green-700 dark:text-green-400">"✓ "{row.drone}</td>
                                        <td class="px-8 py-4 text-gray-600 dark:text-gray-400">{row.manual}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                    <div class="px-8 py-6 bg-gray-50 dark:bg-gray-800">
                        <p class="text-center text-gray-700 dark:text-gray-300">
                            "The choice is clear: "
                            <span class="text-green-700 dark:text-green-400">"Drone technology delivers superior results at lower costs"</span>
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
