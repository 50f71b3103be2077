//! Krishak 2I flagship product

use crate::components::{FeatureCard, FeatureHighlight, SectionHeader};
use crate::state::use_config;
use agri_core::content::home::{KRISHAK_FEATURES, KRISHAK_HIGHLIGHTS, KRISHAK_TAGS};
use agri_core::content::PRODUCT;
use agri_core::Anchor;
use leptos::*;

#[component]
pub fn Krishak2I() -> impl IntoView {
    let config = use_config();
    let product_image = config.banner_images.get(2).or(config.banner_images.first()).cloned();

    view! {
        <section id=Anchor::Krishak2IDrone.id() class="py-20 lg:py-32 bg-white dark:bg-gray-900 transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    badge="Our Flagship Product"
                    title="Krishak 2I (10L) Agri Drone"
                    subtitle="Engineered for excellence, built for Indian agriculture. The Krishak 2I combines cutting-edge technology with practical farming needs."
                />

                <div class="grid lg:grid-cols-2 gap-12 items-center mb-16">
                    <div class="relative rounded-2xl overflow-hidden shadow-2xl bg-gradient-to-br from-green-700 to-green-900">
                        {product_image.map(|src| view! {
                            <img src=src alt=PRODUCT class="w-full h-80 object-cover opacity-60"/>
                        })}
                        <div class="absolute inset-0 p-8 flex flex-col justify-end text-white">
                            <h3 class="text-3xl lg:text-4xl">"Advanced Agricultural Drone Technology"</h3>
                            <div class="flex flex-wrap gap-2 mt-4">
                                {KRISHAK_TAGS.iter().map(|tag| view! {
                                    <span class="px-3 py-1 bg-white/20 backdrop-blur-sm rounded-full text-sm">{*tag}</span>
                                }).collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class="space-y-6">
                        {KRISHAK_FEATURES.iter().map(|feature| view! { <FeatureHighlight feature=*feature/> }).collect_view()}
                    </div>
                </div>

                <h3 class="text-2xl text-gray-900 dark:text-white mb-8 text-center">"Key Highlights"</h3>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {KRISHAK_HIGHLIGHTS.iter().map(|highlight| view! { <FeatureCard feature=*highlight/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
