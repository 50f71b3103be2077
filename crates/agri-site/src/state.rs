//! Shared UI state handed down through context

use crate::dom;
use agri_core::{NavEffect, NavEvent, NavPanel, PendingScroll, Route, ScrollTarget, SiteConfig, Theme};
use leptos::*;
use leptos_router::{use_location, use_navigate, NavigateOptions};

/// Current theme plus the only way to change it
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    pub toggle: Callback<()>,
}

/// Header panels (menu, dropdowns, demo modal)
#[derive(Clone, Copy)]
pub struct NavContext {
    pub panel: ReadSignal<NavPanel>,
    set_panel: WriteSignal<NavPanel>,
    breakpoint: f64,
}

impl NavContext {
    pub fn dispatch(&self, event: NavEvent) {
        let current = self.panel.get_untracked();
        let next = current.apply(event, self.breakpoint);
        if next != current {
            self.set_panel.set(next);
        }
    }
}

/// Scroll request waiting for its page to mount
#[derive(Clone, Copy)]
pub struct ScrollContext {
    pending: StoredValue<PendingScroll>,
}

impl ScrollContext {
    pub fn park(&self, route: Route, target: ScrollTarget) {
        self.pending.update_value(|p| p.park(route, target));
    }

    pub fn page_ready(&self, route: Route) -> Option<ScrollTarget> {
        self.pending.try_update_value(|p| p.page_ready(route)).flatten()
    }
}

/// Install every context the components expect. Called once by the shell.
pub fn provide_site_state(config: SiteConfig) {
    let (theme, set_theme) = create_signal(Theme::default());
    let toggle = Callback::new(move |_: ()| set_theme.update(|t| *t = t.toggled()));
    provide_context(ThemeContext { theme, toggle });

    let (panel, set_panel) = create_signal(NavPanel::default());
    provide_context(NavContext {
        panel,
        set_panel,
        breakpoint: config.desktop_breakpoint(),
    });

    provide_context(ScrollContext {
        pending: store_value(PendingScroll::new()),
    });

    provide_context(config);
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

pub fn use_nav() -> NavContext {
    expect_context::<NavContext>()
}

pub fn use_scroll() -> ScrollContext {
    expect_context::<ScrollContext>()
}

pub fn use_config() -> SiteConfig {
    expect_context::<SiteConfig>()
}

/// The route matching the location, `None` for unknown paths
pub fn use_current_route() -> Memo<Option<Route>> {
    let location = use_location();
    create_memo(move |_| location.pathname.with(|path| Route::from_path(path).ok()))
}

/// Carry out a resolved navigation effect. Must be called under the router.
pub fn use_nav_effects() -> Callback<NavEffect> {
    let nav = use_nav();
    let scroll = use_scroll();
    let navigate = use_navigate();

    Callback::new(move |effect: NavEffect| {
        if effect.closes_panels() {
            nav.dispatch(NavEvent::Select);
        }

        match effect {
            NavEffect::Scroll(target) => dom::scroll_to(target),
            NavEffect::NavigateThenScroll { route, target } => {
                scroll.park(route, target);
                navigate(route.path(), NavigateOptions::default());
            }
            NavEffect::Navigate(route) => navigate(route.path(), NavigateOptions::default()),
            NavEffect::ToggleDropdown(key) => nav.dispatch(NavEvent::ToggleDropdown(key)),
        }
    })
}
