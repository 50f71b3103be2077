//! Site navigation: menu model, panel state machine and action resolution

pub mod panel;
pub mod resolver;
pub mod scroll;

pub use panel::{crosses_into_desktop, Dropdown, NavEvent, NavPanel};
pub use resolver::{resolve, resolve_action, resolve_scroll, NavEffect};
pub use scroll::PendingScroll;

use crate::routes::{Anchor, Route};

/// Where a smooth scroll should land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollTarget {
    /// Top of the home page
    Top,
    Anchor(Anchor),
}

impl ScrollTarget {
    /// Page that has to be mounted before the scroll can happen
    pub fn page(&self) -> Route {
        match self {
            ScrollTarget::Top => Route::Home,
            ScrollTarget::Anchor(anchor) => anchor.page(),
        }
    }

    pub fn element_id(&self) -> Option<&'static str> {
        match self {
            ScrollTarget::Top => None,
            ScrollTarget::Anchor(anchor) => Some(anchor.id()),
        }
    }
}

impl From<Anchor> for ScrollTarget {
    fn from(anchor: Anchor) -> Self {
        ScrollTarget::Anchor(anchor)
    }
}

/// What a plain menu entry does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ScrollTo(ScrollTarget),
    Navigate(Route),
}

/// Entry inside a dropdown panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownItem {
    pub label: &'static str,
    pub target: Anchor,
}

/// Top-level menu entry: either an action or a dropdown, never both
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Action {
        label: &'static str,
        action: MenuAction,
    },
    Dropdown {
        label: &'static str,
        items: Vec<DropdownItem>,
    },
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Action { label, .. } | MenuItem::Dropdown { label, .. } => *label,
        }
    }

    /// Panel key for dropdown entries
    pub fn dropdown_key(&self) -> Option<Dropdown> {
        match self {
            MenuItem::Dropdown { label, .. } => Some(Dropdown::Menu(*label)),
            MenuItem::Action { .. } => None,
        }
    }

    pub fn dropdown_items(&self) -> &[DropdownItem] {
        match self {
            MenuItem::Dropdown { items, .. } => items.as_slice(),
            MenuItem::Action { .. } => &[],
        }
    }
}

/// Header menu, in display order
pub fn main_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::Action {
            label: "Home",
            action: MenuAction::ScrollTo(ScrollTarget::Top),
        },
        MenuItem::Action {
            label: "About Us",
            action: MenuAction::Navigate(Route::About),
        },
        MenuItem::Dropdown {
            label: "Drones",
            items: vec![
                DropdownItem {
                    label: "Benefits",
                    target: Anchor::Benefits,
                },
                DropdownItem {
                    label: "Uses",
                    target: Anchor::Applications,
                },
            ],
        },
        MenuItem::Action {
            label: "Services",
            action: MenuAction::Navigate(Route::Services),
        },
        MenuItem::Action {
            label: "Contact Us",
            action: MenuAction::Navigate(Route::Contact),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_shape() {
        let menu = main_menu();
        let labels: Vec<_> = menu.iter().map(MenuItem::label).collect();
        assert_eq!(labels, ["Home", "About Us", "Drones", "Services", "Contact Us"]);

        let dropdowns: Vec<_> = menu.iter().filter_map(MenuItem::dropdown_key).collect();
        assert_eq!(dropdowns, [Dropdown::Menu("Drones")]);
    }

    #[test]
    fn test_dropdown_items_target_home_anchors() {
        let menu = main_menu();
        let drones = menu.iter().find(|item| item.label() == "Drones").unwrap();
        let targets: Vec<_> = drones.dropdown_items().iter().map(|i| i.target).collect();
        assert_eq!(targets, [Anchor::Benefits, Anchor::Applications]);
        assert!(targets.iter().all(|a| a.page() == Route::Home));
    }

    #[test]
    fn test_scroll_target_page() {
        assert_eq!(ScrollTarget::Top.page(), Route::Home);
        assert_eq!(ScrollTarget::Top.element_id(), None);
        let target = ScrollTarget::from(Anchor::TrainingAndSupport);
        assert_eq!(target.page(), Route::Services);
        assert_eq!(target.element_id(), Some("training-and-support"));
    }
}
