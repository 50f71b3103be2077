//! Routed pages

mod about;
mod contact;
mod home;
mod services;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use services::ServicesPage;

use crate::dom;
use crate::state::use_scroll;
use agri_core::Route;
use leptos::*;

/// Tell the scroll coordinator this page's anchors are in the DOM. Runs once
/// after mount, on the next animation frame, and performs any scroll that
/// was parked for this page.
pub fn use_page_ready(route: Route) {
    let scroll = use_scroll();

    create_effect(move |_| {
        request_animation_frame(move || {
            if let Some(target) = scroll.page_ready(route) {
                dom::scroll_to(target);
            }
        });
    });
}
