//! Cross-page scroll coordination
//!
//! A scroll that needs another page is parked here. The destination page
//! calls [`PendingScroll::page_ready`] once its anchors are mounted and gets
//! the target back; there is no timer guessing when mounting is done.

use super::ScrollTarget;
use crate::routes::Route;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingScroll {
    pending: Option<(Route, ScrollTarget)>,
}

impl PendingScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park a scroll for `route`, replacing any earlier request
    pub fn park(&mut self, route: Route, target: ScrollTarget) {
        if let Some((old_route, old_target)) = self.pending.replace((route, target)) {
            debug!(?old_route, ?old_target, "replacing pending scroll");
        }
    }

    /// Called by a page once it is mounted. Returns the parked target if it
    /// was meant for this page.
    pub fn page_ready(&mut self, route: Route) -> Option<ScrollTarget> {
        match self.pending {
            Some((parked, target)) if parked == route => {
                self.pending = None;
                Some(target)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Anchor;

    #[test]
    fn test_ready_page_receives_target_once() {
        let mut pending = PendingScroll::new();
        pending.park(Route::Home, Anchor::Benefits.into());

        assert_eq!(
            pending.page_ready(Route::Home),
            Some(ScrollTarget::Anchor(Anchor::Benefits))
        );
        assert_eq!(pending.page_ready(Route::Home), None);
        assert_eq!(pending, PendingScroll::new());
    }

    #[test]
    fn test_other_page_does_not_consume() {
        let mut pending = PendingScroll::new();
        pending.park(Route::Services, Anchor::TrainingAndSupport.into());

        assert_eq!(pending.page_ready(Route::Home), None);
        assert_eq!(
            pending.page_ready(Route::Services),
            Some(ScrollTarget::Anchor(Anchor::TrainingAndSupport))
        );
    }

    #[test]
    fn test_newer_request_wins() {
        let mut pending = PendingScroll::new();
        pending.park(Route::Home, Anchor::Benefits.into());
        pending.park(Route::Home, ScrollTarget::Top);
        assert_eq!(pending.page_ready(Route::Home), Some(ScrollTarget::Top));
    }
}
