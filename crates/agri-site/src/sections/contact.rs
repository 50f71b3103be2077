//! Contact section with the demo scheduling modal

use crate::components::form::submit_scheduled_form;
use crate::components::{ContactChannelCard, InputField, SectionHeader, SelectField, TextAreaField};
use crate::state::use_nav;
use agri_core::content::contact::{CHANNELS, CROP_OPTIONS, DEMO_CONFIRMATION, FARMER_IMAGE};
use agri_core::forms::schedule::local_min_datetime;
use agri_core::forms::schemas::{self, PREFERRED_DATE_TIME};
use agri_core::{Anchor, FormState, NavEvent, NavPanel};
use leptos::*;

const SUBMIT: &str = "w-full px-6 py-4 bg-green-700 dark:bg-green-600 text-white rounded-lg hover:bg-green-800 dark:hover:bg-green-700 transition-all shadow-lg";

#[component]
pub fn Contact() -> impl IntoView {
    let nav = use_nav();

    let demo_schema = schemas::demo_request();
    let message_schema = schemas::message();
    let demo_form = create_rw_signal(FormState::new(&demo_schema));
    let message_form = create_rw_signal(FormState::new(&message_schema));

    // Refreshed in the browser so the lower bound is the visitor's local time
    let min_datetime = create_rw_signal(local_min_datetime());
    create_effect(move |_| {
        if nav.panel.with(NavPanel::is_modal_open) {
            min_datetime.set(local_min_datetime());
        }
    });

    // Every way of closing the modal discards what was typed into it
    create_effect(move |was_open: Option<bool>| {
        let open = nav.panel.with(NavPanel::is_modal_open);
        if was_open == Some(true) && !open {
            demo_form.update(FormState::reset);
        }
        open
    });

    let on_demo_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submit_scheduled_form(demo_form, &demo_schema, DEMO_CONFIRMATION) {
            nav.dispatch(NavEvent::CloseModal);
        }
    };

    let on_message_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit_scheduled_form(message_form, &message_schema, DEMO_CONFIRMATION);
    };

    view! {
        <section id=Anchor::Contact.id() class="py-20 lg:py-32 bg-white dark:bg-gray-900 transition-colors duration-300 relative">
            // Demo modal
            <Show when=move || nav.panel.get().is_modal_open()>
                <div
                    class="fixed inset-0 z-50 bg-black/60 backdrop-blur-sm flex items-center justify-center px-4"
                    on:click:undelegated=move |ev| {
                        if ev.target() == ev.current_target() {
                            nav.dispatch(NavEvent::CloseModal);
                        }
                    }
                >
                    <div
                        class="w-full max-w-2xl bg-white dark:bg-gray-900 rounded-2xl shadow-2xl border border-gray-200 dark:border-gray-700 p-6 relative max-h-[90vh] overflow-y-auto"
                        role="dialog"
                        aria-modal="true"
                        on:mousedown:undelegated=|ev| ev.stop_propagation()
                    >
                        <button
                            type="button"
                            class="absolute top-3 right-3 text-2xl text-gray-500 hover:text-gray-800 dark:text-gray-400 dark:hover:text-white"
                            aria-label="Close modal"
                            on:click=move |_| nav.dispatch(NavEvent::CloseModal)
                        >
                            "×"
                        </button>
                        <div class="mb-6">
                            <div class="inline-flex items-center px-3 py-1 rounded-full bg-green-100 dark:bg-green-900/30 text-green-700 dark:text-green-400 text-sm">
                                "Request / Schedule Your Demo"
                            </div>
                            <h3 class="text-2xl font-semibold mt-3 text-gray-900 dark:text-white">"Book a session"</h3>
                            <p class="text-gray-600 dark:text-gray-400">"Tell us when and where to meet you."</p>
                        </div>
                        <form on:submit=on_demo_submit.clone() class="space-y-4">
                            <div class="grid sm:grid-cols-2 gap-4">
                                <InputField form=demo_form name="name" id_prefix="demo-" label="Name *" required=true/>
                                <InputField form=demo_form name="phone" id_prefix="demo-" label="Contact *" required=true/>
                            </div>
                            <div class="grid sm:grid-cols-2 gap-4">
                                <InputField form=demo_form name="email" id_prefix="demo-" label="Email *" kind="email" required=true/>
                                <InputField
                                    form=demo_form
                                    name=PREFERRED_DATE_TIME
                                    id_prefix="demo-"
                                    label="Preferred Date & Time *"
                                    kind="datetime-local"
                                    icon="📅"
                                    min=min_datetime
                                    required=true
                                />
                            </div>
                            <InputField form=demo_form name="location" id_prefix="demo-" label="Location *" placeholder="City, State" required=true/>
                            <InputField form=demo_form name="purpose" id_prefix="demo-" label="Purpose *" placeholder="Demo, purchase, training..." required=true/>
                            <button type="submit" class=SUBMIT>"Schedule Demo ➤"</button>
                        </form>
                    </div>
                </div>
            </Show>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    badge="Get in Touch"
                    title="Contact Us"
                    subtitle="Ready to transform your farming operations? Reach out to us for a free demo or any inquiries."
                />
                <div class="text-center -mt-10 mb-16">
                    <button
                        type="button"
                        class="px-6 py-3 bg-green-700 dark:bg-green-600 text-white rounded-lg hover:bg-green-800 dark:hover:bg-green-700 transition-all shadow-lg"
                        on:click=move |_| nav.dispatch(NavEvent::OpenModal)
                    >
                        "Request / Schedule Your Demo"
                    </button>
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    // Contact Information
                    <div class="space-y-8">
                        <div>
                            <h3 class="text-2xl text-gray-900 dark:text-white mb-6">"Get in Touch"</h3>
                            <p class="text-gray-600 dark:text-gray-400 mb-8">
                                "Our team is here to help you make the right choice for your agricultural needs. Contact us through any of the channels below."
                            </p>
                        </div>
                        <div class="space-y-4">
                            {CHANNELS.iter().map(|channel| view! { <ContactChannelCard channel=*channel/> }).collect_view()}
                        </div>
                        <div class="rounded-2xl overflow-hidden shadow-xl hidden lg:block">
                            <img src=FARMER_IMAGE alt="Indian Farmer" class="w-full h-64 object-cover"/>
                        </div>
                    </div>

                    // Contact Form
                    <div class="bg-gray-50 dark:bg-gray-800 rounded-2xl p-8 border border-gray-200 dark:border-gray-700">
                        <h3 class="text-2xl text-gray-900 dark:text-white mb-6">"Send us a Message"</h3>
                        <form on:submit=on_message_submit class="space-y-6">
                            <InputField form=message_form name="name" label="Name *" placeholder="Your full name" required=true/>
                            <div class="grid sm:grid-cols-2 gap-4">
                                <InputField form=message_form name="phone" label="Phone *" placeholder="+91 XXXXX XXXXX" required=true/>
                                <InputField form=message_form name="email" label="Email *" kind="email" placeholder="your@email.com" required=true/>
                            </div>
                            <InputField form=message_form name="location" label="Location *" placeholder="City, State" required=true/>
                            <div class="grid sm:grid-cols-2 gap-4">
                                <InputField
                                    form=message_form
                                    name=PREFERRED_DATE_TIME
                                    label="Preferred Time *"
                                    kind="datetime-local"
                                    icon="📅"
                                    min=min_datetime
                                    required=true
                                />
                                <InputField
                                    form=message_form
                                    name="purpose"
                                    label="Purpose *"
                                    placeholder="Demo, purchase, training..."
                                    icon="📝"
                                    required=true
                                />
                            </div>
                            <SelectField
                                form=message_form
                                name="cropType"
                                label="Crop Type *"
                                placeholder="Select your crop type"
                                options=CROP_OPTIONS
                                required=true
                            />
                            <TextAreaField
                                form=message_form
                                name="message"
                                label="Message"
                                placeholder="Tell us about your requirements..."
                            />
                            <button type="submit" class=SUBMIT>"Send Message ➤"</button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
