//! Form fields bound to a [`FormState`] signal
//!
//! Each field writes its value into the shared state on input and shows the
//! field's error, if any, right under the control.

use crate::dom;
use agri_core::forms::{schedule, Submission};
use agri_core::{FormSchema, FormState, SiteResult};
use leptos::*;

const CONTROL: &str = "w-full px-4 py-3 bg-white dark:bg-gray-900 border rounded-lg \
focus:ring-2 focus:ring-green-500 text-gray-900 dark:text-white";

fn control_class(form: RwSignal<FormState>, name: &'static str) -> impl Fn() -> String {
    move || {
        let border = if form.with(|f| f.error(name).is_some()) {
            "border-red-500"
        } else {
            "border-gray-300 dark:border-gray-600"
        };
        format!("{CONTROL} {border}")
    }
}

#[component]
fn FieldError(form: RwSignal<FormState>, name: &'static str) -> impl IntoView {
    move || {
        form.with(|f| f.error(name).map(str::to_string)).map(|message| {
            view! { <p class="text-sm text-red-600 mt-1">{message}</p> }
        })
    }
}

#[component]
pub fn InputField(
    form: RwSignal<FormState>,
    /// Field name, also used as the element id
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] min: Option<Signal<String>>,
    /// Prefix for the id when the same field appears twice on a page
    #[prop(optional)]
    id_prefix: &'static str,
) -> impl IntoView {
    let id = format!("{id_prefix}{name}");

    view! {
        <div>
            <label for=id.clone() class="block text-gray-700 dark:text-gray-300 mb-2">{label}</label>
            <div class="relative">
                {icon.map(|icon| view! {
                    <span class="absolute right-3 top-1/2 -translate-y-1/2 pointer-events-none">{icon}</span>
                })}
                <input
                    type=kind
                    id=id
                    name=name
                    required=required
                    min=move || min.map(|m| m.get())
                    placeholder=placeholder
                    class=control_class(form, name)
                    prop:value=move || form.with(|f| f.value(name).to_string())
                    on:input=move |ev| form.update(|f| f.set(name, event_target_value(&ev)))
                />
            </div>
            <FieldError form=form name=name/>
        </div>
    }
}

#[component]
pub fn SelectField(
    form: RwSignal<FormState>,
    name: &'static str,
    label: &'static str,
    /// Empty-valued first option
    placeholder: &'static str,
    options: &'static [&'static str],
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label for=name class="block text-gray-700 dark:text-gray-300 mb-2">{label}</label>
            <select
                id=name
                name=name
                required=required
                class=control_class(form, name)
                prop:value=move || form.with(|f| f.value(name).to_string())
                on:change=move |ev| form.update(|f| f.set(name, event_target_value(&ev)))
            >
                <option value="">{placeholder}</option>
                {options.iter().map(|option| view! {
                    <option value=*option>{*option}</option>
                }).collect_view()}
            </select>
            <FieldError form=form name=name/>
        </div>
    }
}

#[component]
pub fn TextAreaField(
    form: RwSignal<FormState>,
    name: &'static str,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    view! {
        <div>
            <label for=name class="block text-gray-700 dark:text-gray-300 mb-2">{label}</label>
            <textarea
                id=name
                name=name
                rows=rows
                placeholder=placeholder
                class=control_class(form, name)
                prop:value=move || form.with(|f| f.value(name).to_string())
                on:input=move |ev| form.update(|f| f.set(name, event_target_value(&ev)))
            ></textarea>
            <FieldError form=form name=name/>
        </div>
    }
}

/// Validate and, on success, confirm to the user. Returns whether the form
/// was accepted; a rejected form keeps its values and shows its errors.
pub fn submit_form(form: RwSignal<FormState>, schema: &FormSchema, confirmation: &str) -> bool {
    confirm(form.try_update(|f| f.submit(schema)), confirmation)
}

/// [`submit_form`] for forms with the scheduling field, which is also checked
/// against the visitor's local time
pub fn submit_scheduled_form(
    form: RwSignal<FormState>,
    schema: &FormSchema,
    confirmation: &str,
) -> bool {
    let now = schedule::local_now();
    confirm(form.try_update(|f| f.submit_scheduled(schema, now)), confirmation)
}

fn confirm(outcome: Option<SiteResult<Submission>>, confirmation: &str) -> bool {
    match outcome {
        Some(Ok(submission)) => {
            tracing::debug!(form = submission.form, "confirming submission");
            dom::alert(confirmation);
            true
        }
        Some(Err(e)) => {
            tracing::debug!("{}", e);
            false
        }
        None => false,
    }
}
