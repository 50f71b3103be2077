//! Service and support coverage

use crate::components::{FeatureCard, SectionHeader, StatCard};
use crate::state::{use_current_route, use_nav_effects};
use agri_core::content::services::{REGIONS, SUPPORT_SERVICES, SUPPORT_STATS};
use agri_core::navigation::resolve_scroll;
use agri_core::Anchor;
use leptos::*;

#[component]
pub fn ServiceSupport() -> impl IntoView {
    let run = use_nav_effects();
    let current = use_current_route();
    let to_contact = move |_: ev::MouseEvent| run.call(resolve_scroll(Anchor::Contact.into(), current.get_untracked()));

    view! {
        <section class="py-20 lg:py-32 bg-gray-50 dark:bg-gray-800 transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    badge="Nationwide Support"
                    title="Service & Support – PAN-India Coverage"
                    subtitle="Wherever you are in India, our dedicated support team is ready to assist you with expert service and genuine parts."
                />

                // Coverage
                <div class="mb-16 bg-gradient-to-br from-green-100 to-blue-100 dark:from-gray-900 dark:to-gray-700 rounded-2xl p-12 text-center border border-gray-200 dark:border-gray-600">
                    <div class="text-6xl mb-6">"📍"</div>
                    <h3 class="text-3xl text-gray-900 dark:text-white mb-4">"PAN-India Operations"</h3>
                    <p class="text-gray-600 dark:text-gray-300 mb-8 max-w-2xl mx-auto">
                        "Our extensive network ensures you receive prompt support and service regardless of your location"
                    </p>
                    <div class="flex flex-wrap justify-center gap-3">
                        {REGIONS.iter().map(|region| view! {
                            <div class="px-6 py-3 bg-white dark:bg-gray-800 rounded-full shadow-md border border-green-200 dark:border-green-700">
                                <div class="flex items-center space-x-2">
                                    <div class="w-2 h-2 bg-green-600 dark:bg-green-400 rounded-full"></div>
                                    <span class="text-gray-900 dark:text-white">{*region}</span>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 mb-16">
                    {SUPPORT_SERVICES.iter().map(|service| view! { <FeatureCard feature=*service/> }).collect_view()}
                </div>

                // CTA Cards
                <div class="grid lg:grid-cols-2 gap-6">
                    <div class="bg-gradient-to-br from-green-700 to-green-600 dark:from-green-800 dark:to-green-700 rounded-2xl p-8 text-white">
                        <h3 class="text-2xl mb-4">"Schedule a Free Demo"</h3>
                        <p class="text-green-100 mb-6">
                            "See the Krishak 2I in action on your farm. Our experts will demonstrate all features and answer your questions."
                        </p>
                        <button type="button" class="px-6 py-3 bg-white text-green-700 rounded-lg hover:bg-green-50 transition-colors shadow-md" on:click=to_contact>
                            "Book Free Demo"
                        </button>
                    </div>
                    <div class="bg-gradient-to-br from-blue-700 to-blue-600 dark:from-blue-800 dark:to-blue-700 rounded-2xl p-8 text-white">
                        <h3 class="text-2xl mb-4">"Get Support Now"</h3>
                        <p class="text-blue-100 mb-6">
                            "Our support team is available 24/7 to help with any questions or technical issues you may have."
                        </p>
                        <button type="button" class="px-6 py-3 bg-white text-blue-700 rounded-lg hover:bg-blue-50 transition-colors shadow-md" on:click=to_contact>
                            "Contact Support"
                        </button>
                    </div>
                </div>

                <div class="mt-12 grid grid-cols-2 lg:grid-cols-4 gap-6">
                    {SUPPORT_STATS.iter().map(|stat| view! { <StatCard stat=*stat/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
