//! Site footer

use crate::state::{use_config, use_current_route, use_nav_effects};
use agri_core::content::footer::{self, current_copyright_line};
use agri_core::navigation::resolve_scroll;
use agri_core::Anchor;
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_config();
    let run = use_nav_effects();
    let current = use_current_route();

    // Labels without a matching anchor do nothing when clicked
    let quick_link = move |label: &'static str| {
        if let Some(anchor) = Anchor::from_label(label) {
            run.call(resolve_scroll(anchor.into(), current.get_untracked()));
        } else {
            tracing::debug!(label, "quick link has no anchor");
        }
    };

    view! {
        <footer class="bg-gray-900 text-gray-400 py-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-2 lg:grid-cols-5 gap-10">
                    <div class="lg:col-span-2">
                        <img src=config.logo.clone() alt="KropKraft Innovations" class="h-14 w-auto mb-4 bg-white rounded-lg p-1"/>
                        <p class="mb-6 leading-relaxed">{footer::TAGLINE}</p>
                        <div class="space-y-2 text-sm">
                            {footer::CONTACT.iter().map(|channel| {
                                let value = match channel.link {
                                    Some(href) => view! { <a href=href class="hover:text-white">{channel.value}</a> }.into_view(),
                                    None => channel.value.into_view(),
                                };
                                view! {
                                    <div class="flex items-center gap-2">
                                        <span>{channel.icon}</span>
                                        {value}
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </div>

                    <div>
                        <h4 class="text-white font-semibold mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {footer::QUICK_LINKS.iter().map(|label| view! {
                                <li>
                                    <button type="button" class="hover:text-white transition-colors" on:click=move |_| quick_link(*label)>
                                        {*label}
                                    </button>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-white font-semibold mb-4">"Services"</h4>
                        <ul class="space-y-2">
                            {footer::SERVICES.iter().map(|service| view! { <li>{*service}</li> }).collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-white font-semibold mb-4">"Resources"</h4>
                        <ul class="space-y-2">
                            {footer::RESOURCES.iter().map(|resource| view! {
                                <li><a href="#" class="hover:text-white transition-colors">{*resource}</a></li>
                            }).collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="border-t border-gray-800 mt-12 pt-8 flex flex-col md:flex-row justify-between items-center gap-4">
                    <div class="flex gap-3">
                        {footer::SOCIAL.iter().map(|social| view! {
                            <a
                                href=social.link
                                aria-label=social.label
                                class="w-9 h-9 rounded-full bg-gray-800 hover:bg-green-700 text-white flex items-center justify-center text-sm transition-colors"
                            >
                                {social.icon}
                            </a>
                        }).collect_view()}
                    </div>
                    <p class="text-sm">{current_copyright_line()}</p>
                    <div class="flex flex-wrap gap-4 text-sm">
                        {footer::LEGAL.iter().map(|item| view! {
                            <a href="#" class="hover:text-white transition-colors">{*item}</a>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
