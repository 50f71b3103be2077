//! Why agricultural drones

use crate::components::{FeatureCard, SectionHeader};
use agri_core::content::home::{BY_THE_NUMBERS, IMPACT_AREAS, WHY_DRONES};
use agri_core::Anchor;
use leptos::*;

#[component]
pub fn WhyAgriDrones() -> impl IntoView {
    view! {
        <section id=Anchor::WhyAgriDrones.id() class="py-20 lg:py-32 bg-gray-50 dark:bg-gray-800 transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    badge="Why Choose Drone Technology"
                    title="Why Agricultural Drones?"
                    subtitle="Modern challenges require modern solutions. Agricultural drones transform farming with precision, efficiency, and safety."
                />

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 mb-16">
                    {WHY_DRONES.iter().map(|reason| view! { <FeatureCard feature=*reason/> }).collect_view()}
                </div>

                <div class="grid lg:grid-cols-2 gap-8">
                    <div class="bg-white dark:bg-gray-900 rounded-2xl p-8 border border-gray-200 dark:border-gray-700">
                        <h3 class="text-gray-900 dark:text-white mb-6">"Key Impact Areas"</h3>
                        <div class="grid grid-cols-2 gap-4">
                            {IMPACT_AREAS.iter().map(|area| view! {
                                <div class="flex items-center space-x-3">
                                    <div class=format!("w-3 h-3 rounded-full {}", area.color)></div>
                                    <span class="text-gray-700 dark:text-gray-300">{area.label}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="bg-gradient-to-br from-green-700 to-green-600 dark:from-green-800 dark:to-green-700 rounded-2xl p-8 text-white">
                        <h3 class="text-2xl mb-6">"By The Numbers"</h3>
                        <div class="space-y-4">
                            {BY_THE_NUMBERS.iter().map(|stat| view! {
                                <div class="flex justify-between items-center pb-4 border-b border-green-600 dark:border-green-700 last:border-0">
                                    <span class="text-green-100">{stat.label}</span>
                                    <span class="text-2xl">{stat.value}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
