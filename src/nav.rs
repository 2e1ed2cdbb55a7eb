use std::rc::Rc;

use yew::Reducible;

/// A navbar entry pointing at an in-page section (`href="#about"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }

    pub fn target_id(&self) -> &str {
        self.href.strip_prefix('#').unwrap_or(self.href)
    }
}

/// A measured page section: its id and its offset from the document top.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
}

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// The section whose nav link should light up: the last one, in document
/// order, whose `top - lookahead` has been scrolled past. Later sections
/// win ties.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - lookahead)
        .map(|section| section.id.as_str())
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
    pub active: Option<String>,
}

pub enum NavAction {
    ToggleMenu,
    CloseMenu,
    /// One debounced scroll tick, already measured.
    Scroll {
        scroll_y: f64,
        threshold: f64,
        active: Option<String>,
    },
}

impl NavState {
    pub fn is_active(&self, link: &NavLink) -> bool {
        self.active.as_deref() == Some(link.target_id())
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NavAction::ToggleMenu => next.menu_open = !next.menu_open,
            NavAction::CloseMenu => {
                if !next.menu_open {
                    return self;
                }
                next.menu_open = false;
            }
            NavAction::Scroll {
                scroll_y,
                threshold,
                active,
            } => {
                next.scrolled = is_scrolled(scroll_y, threshold);
                next.active = active;
            }
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINKS: [NavLink; 3] = [
        NavLink::new("Home", "#home"),
        NavLink::new("About", "#about"),
        NavLink::new("Work", "#portfolio"),
    ];

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: "home".into(), top: 0.0 },
            SectionBounds { id: "about".into(), top: 800.0 },
            SectionBounds { id: "portfolio".into(), top: 1600.0 },
        ]
    }

    fn scroll_to(state: Rc<NavState>, scroll_y: f64) -> Rc<NavState> {
        let active = active_section(&sections(), scroll_y, 100.0).map(str::to_owned);
        state.reduce(NavAction::Scroll {
            scroll_y,
            threshold: 50.0,
            active,
        })
    }

    fn active_links(state: &NavState) -> Vec<&'static str> {
        LINKS
            .iter()
            .filter(|link| state.is_active(link))
            .map(|link| link.label)
            .collect()
    }

    #[test]
    fn menu_toggles_and_closes_idempotently() {
        let state = Rc::new(NavState::default());
        let state = state.reduce(NavAction::ToggleMenu);
        assert!(state.menu_open);
        let state = state.reduce(NavAction::CloseMenu);
        assert!(!state.menu_open);
        let again = state.clone().reduce(NavAction::CloseMenu);
        assert!(Rc::ptr_eq(&state, &again));
        let state = again.reduce(NavAction::ToggleMenu).reduce(NavAction::ToggleMenu);
        assert!(!state.menu_open);
    }

    #[test]
    fn scrolled_flag_follows_threshold() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));

        let state = scroll_to(Rc::new(NavState::default()), 300.0);
        assert!(state.scrolled);
        let state = scroll_to(state, 10.0);
        assert!(!state.scrolled);
    }

    #[test]
    fn lookahead_switches_section_early() {
        let sections = sections();
        assert_eq!(active_section(&sections, 0.0, 100.0), Some("home"));
        assert_eq!(active_section(&sections, 699.0, 100.0), Some("home"));
        assert_eq!(active_section(&sections, 700.0, 100.0), Some("about"));
        assert_eq!(active_section(&sections, 5000.0, 100.0), Some("portfolio"));
    }

    #[test]
    fn nothing_is_active_above_the_first_section() {
        let sections = vec![SectionBounds { id: "about".into(), top: 900.0 }];
        assert_eq!(active_section(&sections, 0.0, 100.0), None);
        assert_eq!(active_section(&[], 500.0, 100.0), None);
    }

    #[test]
    fn later_section_wins_a_tie() {
        let sections = vec![
            SectionBounds { id: "first".into(), top: 400.0 },
            SectionBounds { id: "second".into(), top: 400.0 },
        ];
        assert_eq!(active_section(&sections, 300.0, 100.0), Some("second"));
    }

    #[test]
    fn exactly_one_link_is_active_across_adjacent_sections() {
        let state = scroll_to(Rc::new(NavState::default()), 650.0);
        assert_eq!(active_links(&state), vec!["Home"]);

        let state = scroll_to(state, 720.0);
        assert_eq!(active_links(&state), vec!["About"]);

        let state = scroll_to(state, 650.0);
        assert_eq!(active_links(&state), vec!["Home"]);
    }

    #[test]
    fn link_target_strips_the_hash() {
        assert_eq!(LINKS[1].target_id(), "about");
        assert_eq!(NavLink::new("x", "plain").target_id(), "plain");
    }
}
