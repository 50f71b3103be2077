//! Navigation panel state machine
//!
//! The header's transient UI (mobile menu, dropdowns, the demo modal) lives in
//! a single [`NavPanel`] value. Every "close" path goes through one transition
//! to [`NavPanel::Closed`], so no panel can be left open by a partial reset.
//! Crossing into the desktop layout only closes the mobile-side panels; the
//! demo modal stays up with whatever was typed into it.

use tracing::debug;

/// Identifies a dropdown panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dropdown {
    /// Menu dropdown, keyed by its label
    Menu(&'static str),
    /// Brochure download panel
    Brochure,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavPanel {
    #[default]
    Closed,
    /// Desktop dropdown open without the mobile menu
    Dropdown(Dropdown),
    MenuOpen {
        dropdown: Option<Dropdown>,
    },
    ModalOpen,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    ToggleMenu,
    ToggleDropdown(Dropdown),
    /// Desktop pointer entering (`Some`) or leaving (`None`) a dropdown
    Hover(Option<Dropdown>),
    OutsideClick,
    Escape,
    /// A menu entry was chosen
    Select,
    Resize { width: f64 },
    OpenModal,
    CloseModal,
}

impl NavPanel {
    /// Compute the next state. `breakpoint` is the desktop width in pixels.
    pub fn apply(self, event: NavEvent, breakpoint: f64) -> NavPanel {
        let next = match (self, event) {
            (_, NavEvent::OutsideClick | NavEvent::Escape | NavEvent::Select) => NavPanel::Closed,
            (NavPanel::ModalOpen, NavEvent::Resize { .. }) => NavPanel::ModalOpen,
            (_, NavEvent::Resize { width }) if width >= breakpoint => NavPanel::Closed,
            (state, NavEvent::Resize { .. }) => state,

            (_, NavEvent::OpenModal) => NavPanel::ModalOpen,
            (NavPanel::ModalOpen, NavEvent::CloseModal) => NavPanel::Closed,
            (state, NavEvent::CloseModal) => state,
            (NavPanel::ModalOpen, _) => NavPanel::ModalOpen,

            (NavPanel::MenuOpen { .. }, NavEvent::ToggleMenu) => NavPanel::Closed,
            (_, NavEvent::ToggleMenu) => NavPanel::MenuOpen { dropdown: None },

            (NavPanel::MenuOpen { dropdown }, NavEvent::ToggleDropdown(key)) => NavPanel::MenuOpen {
                dropdown: if dropdown == Some(key) { None } else { Some(key) },
            },
            (NavPanel::Dropdown(open), NavEvent::ToggleDropdown(key)) if open == key => {
                NavPanel::Closed
            }
            (_, NavEvent::ToggleDropdown(key)) => NavPanel::Dropdown(key),

            (state @ NavPanel::MenuOpen { .. }, NavEvent::Hover(_)) => state,
            (_, NavEvent::Hover(Some(key))) => NavPanel::Dropdown(key),
            (NavPanel::Dropdown(_), NavEvent::Hover(None)) => NavPanel::Closed,
            (state, NavEvent::Hover(None)) => state,
        };

        if next != self {
            debug!(from = ?self, to = ?next, ?event, "nav panel transition");
        }
        next
    }

    pub fn is_menu_open(&self) -> bool {
        matches!(self, NavPanel::MenuOpen { .. })
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self, NavPanel::ModalOpen)
    }

    pub fn open_dropdown(&self) -> Option<Dropdown> {
        match self {
            NavPanel::Dropdown(key) => Some(*key),
            NavPanel::MenuOpen { dropdown } => *dropdown,
            NavPanel::Closed | NavPanel::ModalOpen => None,
        }
    }

    pub fn is_dropdown_open(&self, key: Dropdown) -> bool {
        self.open_dropdown() == Some(key)
    }

    /// Document scrolling is suspended while the mobile menu is open
    pub fn locks_scroll(&self) -> bool {
        self.is_menu_open()
    }
}

/// Whether a viewport change from `previous` to `width` moves into the
/// desktop layout. Resizes that stay on one side of the breakpoint are not
/// reported to the panel.
pub fn crosses_into_desktop(previous: Option<f64>, width: f64, breakpoint: f64) -> bool {
    width >= breakpoint && previous.map_or(true, |previous| previous < breakpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BP: f64 = 1024.0;
    const DRONES: Dropdown = Dropdown::Menu("Drones");

    fn run(events: &[NavEvent]) -> NavPanel {
        events
            .iter()
            .fold(NavPanel::Closed, |state, event| state.apply(*event, BP))
    }

    #[test]
    fn test_menu_toggle() {
        assert!(run(&[NavEvent::ToggleMenu]).is_menu_open());
        assert_eq!(run(&[NavEvent::ToggleMenu, NavEvent::ToggleMenu]), NavPanel::Closed);
    }

    #[test]
    fn test_double_toggle_closes_dropdown() {
        let state = run(&[NavEvent::ToggleDropdown(DRONES), NavEvent::ToggleDropdown(DRONES)]);
        assert_eq!(state, NavPanel::Closed);

        let state = run(&[
            NavEvent::ToggleMenu,
            NavEvent::ToggleDropdown(DRONES),
            NavEvent::ToggleDropdown(DRONES),
        ]);
        assert_eq!(state, NavPanel::MenuOpen { dropdown: None });
    }

    #[test]
    fn test_dropdowns_are_exclusive() {
        let state = run(&[
            NavEvent::ToggleMenu,
            NavEvent::ToggleDropdown(DRONES),
            NavEvent::ToggleDropdown(Dropdown::Brochure),
        ]);
        assert_eq!(state.open_dropdown(), Some(Dropdown::Brochure));
        assert!(!state.is_dropdown_open(DRONES));

        let state = run(&[NavEvent::ToggleDropdown(DRONES), NavEvent::ToggleDropdown(Dropdown::Brochure)]);
        assert_eq!(state, NavPanel::Dropdown(Dropdown::Brochure));
    }

    #[test]
    fn test_escape_closes_menu_and_releases_scroll() {
        let open = run(&[NavEvent::ToggleMenu]);
        assert!(open.locks_scroll());

        let closed = open.apply(NavEvent::Escape, BP);
        assert_eq!(closed, NavPanel::Closed);
        assert!(!closed.locks_scroll());
    }

    #[test]
    fn test_close_all_events_from_every_state() {
        let states = [
            NavPanel::Closed,
            NavPanel::Dropdown(DRONES),
            NavPanel::MenuOpen { dropdown: None },
            NavPanel::MenuOpen { dropdown: Some(Dropdown::Brochure) },
            NavPanel::ModalOpen,
        ];
        let events = [NavEvent::OutsideClick, NavEvent::Escape, NavEvent::Select];
        for state in states {
            for event in events {
                assert_eq!(state.apply(event, BP), NavPanel::Closed, "{state:?} + {event:?}");
            }
        }
    }

    #[test]
    fn test_desktop_resize_closes_mobile_panels() {
        let states = [
            NavPanel::Dropdown(DRONES),
            NavPanel::MenuOpen { dropdown: None },
            NavPanel::MenuOpen { dropdown: Some(Dropdown::Brochure) },
        ];
        for state in states {
            assert_eq!(state.apply(NavEvent::Resize { width: 1280.0 }, BP), NavPanel::Closed, "{state:?}");
        }
    }

    #[test]
    fn test_desktop_resize_keeps_modal_open() {
        let modal = run(&[NavEvent::OpenModal, NavEvent::Resize { width: 1300.0 }]);
        assert_eq!(modal, NavPanel::ModalOpen);
        assert_eq!(modal.apply(NavEvent::Resize { width: 390.0 }, BP), NavPanel::ModalOpen);
        assert_eq!(modal.apply(NavEvent::Escape, BP), NavPanel::Closed);
    }

    #[test]
    fn test_crosses_into_desktop() {
        assert!(crosses_into_desktop(Some(800.0), 1024.0, BP));
        assert!(crosses_into_desktop(None, 1280.0, BP));
        assert!(!crosses_into_desktop(Some(1280.0), 1440.0, BP));
        assert!(!crosses_into_desktop(Some(1280.0), 800.0, BP));
        assert!(!crosses_into_desktop(Some(390.0), 800.0, BP));
    }

    #[test]
    fn test_resize_below_breakpoint_keeps_state() {
        let open = NavPanel::MenuOpen { dropdown: Some(DRONES) };
        assert_eq!(open.apply(NavEvent::Resize { width: 390.0 }, BP), open);
        assert_eq!(open.apply(NavEvent::Resize { width: 1024.0 }, BP), NavPanel::Closed);
    }

    #[test]
    fn test_modal_transitions() {
        let modal = run(&[NavEvent::ToggleMenu, NavEvent::OpenModal]);
        assert_eq!(modal, NavPanel::ModalOpen);
        assert!(!modal.locks_scroll());
        assert_eq!(modal.apply(NavEvent::ToggleMenu, BP), NavPanel::ModalOpen);
        assert_eq!(modal.apply(NavEvent::ToggleDropdown(DRONES), BP), NavPanel::ModalOpen);
        assert_eq!(modal.apply(NavEvent::CloseModal, BP), NavPanel::Closed);

        let menu = NavPanel::MenuOpen { dropdown: None };
        assert_eq!(menu.apply(NavEvent::CloseModal, BP), menu);
    }

    #[test]
    fn test_hover() {
        let state = run(&[NavEvent::Hover(Some(DRONES))]);
        assert_eq!(state, NavPanel::Dropdown(DRONES));
        assert_eq!(state.apply(NavEvent::Hover(None), BP), NavPanel::Closed);

        let menu = NavPanel::MenuOpen { dropdown: None };
        assert_eq!(menu.apply(NavEvent::Hover(Some(DRONES)), BP), menu);
        assert_eq!(NavPanel::ModalOpen.apply(NavEvent::Hover(Some(DRONES)), BP), NavPanel::ModalOpen);
    }

    #[test]
    fn test_menu_toggle_from_desktop_dropdown() {
        let state = run(&[NavEvent::ToggleDropdown(DRONES), NavEvent::ToggleMenu]);
        assert_eq!(state, NavPanel::MenuOpen { dropdown: None });
    }
}
