//! Contact page

use super::use_page_ready;
use crate::components::form::submit_form;
use crate::components::{InputField, SelectField};
use agri_core::content::contact::{INQUIRY_CONFIRMATION, MAP_EMBED, PAGE_DETAILS, SERVICE_CATEGORIES};
use agri_core::forms::schemas;
use agri_core::{FormState, Route};
use leptos::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    use_page_ready(Route::Contact);

    let schema = schemas::inquiry();
    let form = create_rw_signal(FormState::new(&schema));

    // Validation is ours alone, the browser's own checks stay off
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit_form(form, &schema, INQUIRY_CONFIRMATION);
    };

    view! {
        <div class="min-h-screen bg-gradient-to-b from-white to-green-50 dark:from-gray-900 dark:to-gray-950 text-gray-900 dark:text-white">
            // Header
            <header class="bg-gradient-to-r from-green-700 to-green-600 text-white py-20">
                <div class="max-w-6xl mx-auto px-4 text-center">
                    <h1 class="text-4xl sm:text-5xl font-extrabold mb-4">"Contact Us"</h1>
                    <p class="text-lg text-green-100 max-w-3xl mx-auto">
                        "Engage with KropKraft Innovations for partnerships, services, training programs, and official collaborations."
                    </p>
                </div>
            </header>

            <div class="max-w-6xl mx-auto px-4 py-16 space-y-14">
                // Info Cards
                <div class="grid md:grid-cols-3 gap-6">
                    {PAGE_DETAILS.iter().map(|item| view! {
                        <div class="bg-white dark:bg-gray-800 rounded-2xl border border-gray-200 dark:border-gray-700 p-6 shadow-sm hover:shadow-lg transition-all">
                            <h3 class="text-lg font-semibold text-gray-900 dark:text-white mb-3">{item.title}</h3>
                            <div class="space-y-1 text-gray-600 dark:text-gray-400">
                                {item.lines.iter().map(|line| view! { <div>{*line}</div> }).collect_view()}
                            </div>
                        </div>
                    }).collect_view()}
                </div>

                // Form + Map
                <div class="grid lg:grid-cols-2 gap-8 items-stretch">
                    <div class="bg-gradient-to-br from-green-700 to-green-600 rounded-2xl p-1 shadow-lg">
                        <div class="bg-white dark:bg-gray-900 rounded-2xl h-full p-8">
                            <h2 class="text-2xl font-bold mb-6">"Send us a message"</h2>
                            <form on:submit=on_submit novalidate=true class="space-y-5">
                                <InputField form=form name="business" label="Business Name *"/>
                                <InputField form=form name="email" label="Email *" kind="email"/>
                                <div class="grid sm:grid-cols-2 gap-4">
                                    <InputField form=form name="name" label="Full Name *"/>
                                    <InputField form=form name="phone" label="Phone Number *" kind="tel"/>
                                </div>
                                <SelectField
                                    form=form
                                    name="service"
                                    label="Service Category"
                                    placeholder="Select a service category"
                                    options=SERVICE_CATEGORIES
                                />
                                <button
                                    type="submit"
                                    class="w-full bg-green-700 text-white rounded-lg py-3 font-semibold hover:bg-green-800 transition-colors shadow-md"
                                >
                                    "Submit Request"
                                </button>
                            </form>
                        </div>
                    </div>

                    // Map
                    <div class="bg-white rounded-2xl shadow-md border border-gray-200 overflow-hidden">
                        <iframe
                            title="KropKraft Location"
                            src=MAP_EMBED
                            class="w-full h-full min-h-[420px] border-0"
                            loading="lazy"
                            allowfullscreen=true
                        ></iframe>
                    </div>
                </div>
            </div>
        </div>
    }
}
