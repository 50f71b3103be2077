//! Menu action resolution

use super::{Dropdown, MenuAction, MenuItem, ScrollTarget};
use crate::routes::Route;

/// Effect the UI must carry out for a menu interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    /// Smooth-scroll on the current page
    Scroll(ScrollTarget),
    /// Change page, then scroll once the destination reports ready
    NavigateThenScroll { route: Route, target: ScrollTarget },
    Navigate(Route),
    ToggleDropdown(Dropdown),
}

impl NavEffect {
    /// Everything except a dropdown toggle is a selection and closes all panels
    pub fn closes_panels(&self) -> bool {
        !matches!(self, NavEffect::ToggleDropdown(_))
    }
}

/// Resolve a top-level menu entry. `current` is `None` when the location
/// does not match any known route.
pub fn resolve(item: &MenuItem, current: Option<Route>) -> NavEffect {
    match item {
        MenuItem::Action { action, .. } => resolve_action(action, current),
        MenuItem::Dropdown { label, .. } => NavEffect::ToggleDropdown(Dropdown::Menu(*label)),
    }
}

pub fn resolve_action(action: &MenuAction, current: Option<Route>) -> NavEffect {
    match action {
        MenuAction::ScrollTo(target) => resolve_scroll(*target, current),
        MenuAction::Navigate(route) => NavEffect::Navigate(*route),
    }
}

pub fn resolve_scroll(target: ScrollTarget, current: Option<Route>) -> NavEffect {
    let page = target.page();
    if current == Some(page) {
        NavEffect::Scroll(target)
    } else {
        NavEffect::NavigateThenScroll {
            route: page,
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::main_menu;
    use crate::routes::Anchor;

    fn item(label: &str) -> MenuItem {
        main_menu()
            .into_iter()
            .find(|item| item.label() == label)
            .unwrap()
    }

    #[test]
    fn test_home_scrolls_in_place_on_home() {
        assert_eq!(
            resolve(&item("Home"), Some(Route::Home)),
            NavEffect::Scroll(ScrollTarget::Top)
        );
    }

    #[test]
    fn test_home_navigates_first_elsewhere() {
        assert_eq!(
            resolve(&item("Home"), Some(Route::Services)),
            NavEffect::NavigateThenScroll {
                route: Route::Home,
                target: ScrollTarget::Top
            }
        );
    }

    #[test]
    fn test_route_change_items() {
        assert_eq!(
            resolve(&item("About Us"), Some(Route::Home)),
            NavEffect::Navigate(Route::About)
        );
        assert_eq!(
            resolve(&item("Contact Us"), None),
            NavEffect::Navigate(Route::Contact)
        );
    }

    #[test]
    fn test_dropdown_item_toggles() {
        let effect = resolve(&item("Drones"), Some(Route::Home));
        assert_eq!(effect, NavEffect::ToggleDropdown(Dropdown::Menu("Drones")));
        assert!(!effect.closes_panels());
    }

    #[test]
    fn test_dropdown_sub_items_scroll() {
        let drones = item("Drones");
        let benefits = drones.dropdown_items()[0];
        let action = MenuAction::ScrollTo(benefits.target.into());

        assert_eq!(
            resolve_action(&action, Some(Route::Home)),
            NavEffect::Scroll(ScrollTarget::Anchor(Anchor::Benefits))
        );
        let effect = resolve_action(&action, Some(Route::About));
        assert_eq!(
            effect,
            NavEffect::NavigateThenScroll {
                route: Route::Home,
                target: ScrollTarget::Anchor(Anchor::Benefits)
            }
        );
        assert!(effect.closes_panels());
    }

    #[test]
    fn test_unknown_location_navigates_before_scrolling() {
        assert_eq!(
            resolve_scroll(Anchor::Contact.into(), None),
            NavEffect::NavigateThenScroll {
                route: Route::Home,
                target: ScrollTarget::Anchor(Anchor::Contact)
            }
        );
    }

    #[test]
    fn test_services_anchor_scrolls_on_services() {
        assert_eq!(
            resolve_scroll(Anchor::TrainingAndSupport.into(), Some(Route::Services)),
            NavEffect::Scroll(ScrollTarget::Anchor(Anchor::TrainingAndSupport))
        );
    }
}
