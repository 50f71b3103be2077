//! Applications and crop compatibility

use crate::components::{FeatureHighlight, SectionHeader};
use agri_core::content::home::{APPLICATIONS, CROPS};
use agri_core::Anchor;
use leptos::*;

#[component]
pub fn Applications() -> impl IntoView {
    view! {
        <section id=Anchor::Applications.id() class="py-20 lg:py-32 bg-white dark:bg-gray-900 transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    badge="Versatile Applications"
                    title="Applications & Multi-Crop Usability"
                    subtitle="One drone, endless possibilities. From pesticides to nutrients, across all major Indian crops."
                />

                <div class="grid lg:grid-cols-2 gap-12 items-center mb-20">
                    <div>
                        <h3 class="text-2xl text-gray-900 dark:text-white mb-8">"Spraying Applications"</h3>
                        <div class="space-y-6">
                            {APPLICATIONS.iter().map(|app| view! { <FeatureHighlight feature=*app/> }).collect_view()}
                        </div>
                    </div>

                    // Safety highlight
                    <div class="bg-gradient-to-br from-green-700 to-green-600 dark:from-green-800 dark:to-green-700 rounded-2xl p-8 text-white">
                        <div class="text-5xl mb-4">"🛡️"</div>
                        <h3 class="text-2xl text-white mb-3">"Zero Human Contact with Chemicals"</h3>
                        <p class="text-green-100">
                            "Autonomous spraying keeps operators away from pesticide drift, protecting farmer health while delivering precise coverage."
                        </p>
                    </div>
                </div>

                <h3 class="text-2xl text-gray-900 dark:text-white mb-8 text-center">"Compatible Crops"</h3>
                <div class="grid grid-cols-2 sm:grid-cols-4 lg:grid-cols-7 gap-4">
                    {CROPS.iter().map(|crop| view! {
                        <div class="bg-green-50 dark:bg-gray-800 rounded-xl p-4 text-center border border-green-100 dark:border-gray-700 hover:shadow-md transition-all">
                            <div class="text-4xl mb-2">{crop.icon}</div>
                            <div class="text-gray-900 dark:text-white">{crop.name}</div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
