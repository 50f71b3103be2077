//! Site navigation bar

use crate::dom;
use crate::state::{use_config, use_current_route, use_nav, use_nav_effects, use_theme};
use agri_core::navigation::{crosses_into_desktop, main_menu, resolve, resolve_scroll, Dropdown, DropdownItem, MenuItem};
use agri_core::{Anchor, NavEvent, ScrollTarget};
use leptos::*;
use wasm_bindgen::JsCast;

const LINK: &str = "text-gray-700 dark:text-gray-300 hover:text-green-700 dark:hover:text-green-400 transition-colors";
const CTA: &str = "px-5 py-2.5 bg-green-700 dark:bg-green-600 text-white rounded-lg hover:bg-green-800 dark:hover:bg-green-700 transition-all shadow-md";

#[component]
pub fn Navigation() -> impl IntoView {
    let nav = use_nav();
    let theme = use_theme();
    let config = use_config();
    let run = use_nav_effects();
    let current = use_current_route();
    let nav_ref = create_node_ref::<html::Nav>();

    // Outside click and Escape close every panel; crossing into the desktop
    // layout closes the mobile ones
    let mousedown = window_event_listener(ev::mousedown, move |event| {
        let inside = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .zip(nav_ref.get_untracked())
            .map(|(node, root)| root.contains(Some(&node)))
            .unwrap_or(false);
        if !inside {
            nav.dispatch(NavEvent::OutsideClick);
        }
    });
    let keyup = window_event_listener(ev::keyup, move |event| {
        if event.key() == "Escape" {
            nav.dispatch(NavEvent::Escape);
        }
    });
    let breakpoint = config.desktop_breakpoint();
    let last_width = store_value(dom::viewport_width());
    let resize = window_event_listener(ev::resize, move |_| {
        let Some(width) = dom::viewport_width() else {
            return;
        };
        let previous = last_width.get_value();
        last_width.set_value(Some(width));
        if crosses_into_desktop(previous, width, breakpoint) {
            nav.dispatch(NavEvent::Resize { width });
        }
    });

    create_effect(move |_| dom::set_scroll_lock(nav.panel.get().locks_scroll()));

    on_cleanup(move || {
        mousedown.remove();
        keyup.remove();
        resize.remove();
        dom::set_scroll_lock(false);
    });

    let request_demo = move |_: ev::MouseEvent| run.call(resolve_scroll(Anchor::Contact.into(), current.get_untracked()));
    let go_home = move |_: ev::MouseEvent| run.call(resolve_scroll(ScrollTarget::Top, current.get_untracked()));
    let logo = config.logo.clone();
    let brochures = config.brochures.clone();

    view! {
        <nav
            node_ref=nav_ref
            class="sticky top-0 z-50 bg-white/95 dark:bg-gray-900/95 backdrop-blur-sm border-b border-gray-200 dark:border-gray-800 transition-colors duration-300"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-20">
                    // Logo
                    <button type="button" class="flex items-center" aria-label="Go home" on:click=go_home>
                        <img src=logo alt="KropKraft Innovations" class="h-16 w-auto"/>
                    </button>

                    // Desktop Nav
                    <div class="hidden lg:flex items-center gap-8 xl:gap-10 text-lg">
                        {main_menu().into_iter().map(|item| view! { <DesktopEntry item=item/> }).collect_view()}
                    </div>

                    <div class="flex items-center gap-3">
                        <BrochureMenu brochures=brochures/>

                        <button
                            type="button"
                            class="p-2 rounded-lg bg-gray-100 dark:bg-gray-800 hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                            aria-label="Toggle theme"
                            on:click=move |_| theme.toggle.call(())
                        >
                            {move || if theme.theme.get().is_dark() { "☀️" } else { "🌙" }}
                        </button>

                        <button type="button" class=format!("hidden lg:inline-flex {CTA}") on:click=request_demo>
                            "Request a Free Demo"
                        </button>

                        // Mobile menu button
                        <button
                            type="button"
                            class="lg:hidden p-2 rounded-md text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800"
                            aria-label="Toggle menu"
                            on:click=move |_| nav.dispatch(NavEvent::ToggleMenu)
                        >
                            <Show
                                when=move || nav.panel.get().is_menu_open()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || nav.panel.get().is_menu_open()>
                <div class="lg:hidden border-t border-gray-200 dark:border-gray-800 max-h-[calc(100vh-5rem)] overflow-y-auto">
                    <div class="px-4 py-4 space-y-2">
                        {main_menu().into_iter().map(|item| view! { <MobileEntry item=item/> }).collect_view()}
                        <div class="pt-4 border-t border-gray-200 dark:border-gray-800">
                            <button type="button" class=format!("block w-full text-center {CTA}") on:click=request_demo>
                                "Request a Free Demo"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn DesktopEntry(item: MenuItem) -> impl IntoView {
    let nav = use_nav();
    let run = use_nav_effects();
    let current = use_current_route();
    let label = item.label();

    let Some(key) = item.dropdown_key() else {
        return view! {
            <button type="button" class=LINK on:click=move |_| run.call(resolve(&item, current.get_untracked()))>
                {label}
            </button>
        }
        .into_view();
    };
    let items = item.dropdown_items().to_vec();

    view! {
        <div
            class="relative"
            on:mouseenter=move |_| nav.dispatch(NavEvent::Hover(Some(key)))
            on:mouseleave=move |_| nav.dispatch(NavEvent::Hover(None))
        >
            <button
                type="button"
                class=format!("{LINK} flex items-center gap-1")
                on:click=move |_| nav.dispatch(NavEvent::ToggleDropdown(key))
            >
                {label}
                <span class="text-sm">"▾"</span>
            </button>
            <Show when=move || nav.panel.get().is_dropdown_open(key)>
                <div class="absolute left-0 top-full pt-2 w-48">
                    <div class="bg-white dark:bg-gray-800 rounded-lg shadow-xl border border-gray-200 dark:border-gray-700 py-2">
                        {items.iter().map(|entry| view! { <DropdownLink entry=*entry/> }).collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
    .into_view()
}

#[component]
fn MobileEntry(item: MenuItem) -> impl IntoView {
    let nav = use_nav();
    let run = use_nav_effects();
    let current = use_current_route();
    let label = item.label();

    let Some(key) = item.dropdown_key() else {
        return view! {
            <button
                type="button"
                class=format!("block w-full text-left py-2 {LINK}")
                on:click=move |_| run.call(resolve(&item, current.get_untracked()))
            >
                {label}
            </button>
        }
        .into_view();
    };
    let items = item.dropdown_items().to_vec();

    view! {
        <div>
            <button
                type="button"
                class=format!("flex w-full items-center justify-between py-2 {LINK}")
                on:click=move |_| nav.dispatch(NavEvent::ToggleDropdown(key))
            >
                {label}
                <span class="text-sm">{move || if nav.panel.get().is_dropdown_open(key) { "▴" } else { "▾" }}</span>
            </button>
            <Show when=move || nav.panel.get().is_dropdown_open(key)>
                <div class="pl-4 space-y-1">
                    {items.iter().map(|entry| view! { <DropdownLink entry=*entry/> }).collect_view()}
                </div>
            </Show>
        </div>
    }
    .into_view()
}

#[component]
fn DropdownLink(entry: DropdownItem) -> impl IntoView {
    let run = use_nav_effects();
    let current = use_current_route();

    view! {
        <button
            type="button"
            class="block w-full text-left px-4 py-2 text-gray-700 dark:text-gray-300 hover:bg-green-50 dark:hover:bg-gray-700 hover:text-green-700 dark:hover:text-green-400"
            on:click=move |_| run.call(resolve_scroll(entry.target.into(), current.get_untracked()))
        >
            {entry.label}
        </button>
    }
}

#[component]
fn BrochureMenu(brochures: Vec<agri_core::Brochure>) -> impl IntoView {
    let nav = use_nav();

    view! {
        <div class="relative">
            <button
                type="button"
                class="px-4 py-2.5 border border-green-700 dark:border-green-500 text-green-700 dark:text-green-400 rounded-lg hover:bg-green-50 dark:hover:bg-gray-800 transition-colors flex items-center gap-1"
                on:click=move |_| nav.dispatch(NavEvent::ToggleDropdown(Dropdown::Brochure))
            >
                "Download Brochure"
                <span class="text-sm">"▾"</span>
            </button>
            <Show when=move || nav.panel.get().is_dropdown_open(Dropdown::Brochure)>
                <div class="absolute right-0 top-full mt-2 w-60 bg-white dark:bg-gray-800 rounded-lg shadow-xl border border-gray-200 dark:border-gray-700 py-2">
                    {brochures.iter().map(|brochure| view! {
                        <a
                            href=brochure.path.clone()
                            download=""
                            class="block px-4 py-2 text-gray-700 dark:text-gray-300 hover:bg-green-50 dark:hover:bg-gray-700"
                            on:click=move |_| nav.dispatch(NavEvent::Select)
                        >
                            "📄 "{brochure.label.clone()}
                        </a>
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
