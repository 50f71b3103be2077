//! Browser glue
//!
//! Everything here touches `window`/`document` and does nothing when the
//! crate is not built for the browser, so components can call it from shared
//! code paths.

use agri_core::ScrollTarget;
use leptos::{document, window};
use tracing::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

const IN_BROWSER: bool = cfg!(feature = "hydrate");

/// Smooth-scroll to a target. A target missing from the page is skipped.
pub fn scroll_to(target: ScrollTarget) {
    if !IN_BROWSER {
        return;
    }

    let Some(id) = target.element_id() else {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
        return;
    };

    match document().get_element_by_id(id) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => debug!(id, "scroll target not on page"),
    }
}

/// Suspend or restore document scrolling
pub fn set_scroll_lock(locked: bool) {
    if !IN_BROWSER {
        return;
    }

    let Some(body) = document().body() else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(err) = body.style().set_property("overflow", value) {
        debug!(?err, "failed to set body overflow");
    }
}

pub fn viewport_width() -> Option<f64> {
    if !IN_BROWSER {
        return None;
    }
    window().inner_width().ok().and_then(|w| w.as_f64())
}

/// Blocking confirmation dialog
pub fn alert(message: &str) {
    if !IN_BROWSER {
        debug!(message, "alert skipped outside the browser");
        return;
    }
    if let Err(err) = window().alert_with_message(message) {
        debug!(?err, "alert failed");
    }
}
