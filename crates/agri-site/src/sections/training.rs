//! Training and certification

use crate::components::{SectionHeader, StepCard};
use crate::state::{use_current_route, use_nav_effects};
use agri_core::content::services::{TRAINING_IMAGE, TRAINING_STEPS};
use agri_core::navigation::resolve_scroll;
use agri_core::Anchor;
use leptos::*;

#[component]
pub fn Training() -> impl IntoView {
    let run = use_nav_effects();
    let current = use_current_route();

    view! {
        <section id=Anchor::TrainingAndSupport.id() class="py-20 lg:py-32 bg-white dark:bg-gray-900 transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    badge="Professional Training"
                    title="Training & Certification"
                    subtitle="Comprehensive training programs to ensure you're fully equipped to operate agricultural drones safely and effectively."
                />

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {TRAINING_STEPS.iter().map(|step| view! { <StepCard step=*step/> }).collect_view()}
                </div>

                <div class="mt-16 grid lg:grid-cols-2 gap-8 items-center">
                    <div class="rounded-2xl overflow-hidden shadow-xl">
                        <img src=TRAINING_IMAGE alt="Drone Training Session" class="w-full h-80 object-cover"/>
                    </div>
                    <div class="space-y-6">
                        <h3 class="text-2xl text-gray-900 dark:text-white">"Start Your Journey Today"</h3>
                        <p class="text-gray-600 dark:text-gray-400">
                            "Join hundreds of certified drone pilots who have transformed their agricultural operations through our comprehensive training programs. Get certified, get equipped, and get flying."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4">
                            <button
                                type="button"
                                class="px-6 py-3 bg-green-700 dark:bg-green-600 text-white rounded-lg hover:bg-green-800 dark:hover:bg-green-700 transition-colors shadow-md"
                                on:click=move |_| run.call(resolve_scroll(Anchor::Contact.into(), current.get_untracked()))
                            >
                                "Enroll in Training"
                            </button>
                            <button
                                type="button"
                                class="px-6 py-3 border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white rounded-lg hover:bg-gray-50 dark:hover:bg-gray-800 transition-colors"
                            >
                                "View Schedule"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
