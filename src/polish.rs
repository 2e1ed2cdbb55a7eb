/// Fragment id of an in-page link, `None` for a bare `#` or a non-fragment href.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that lands a section just below the fixed navbar.
pub fn anchor_scroll_top(target_offset_top: f64, header_offset: f64) -> f64 {
    target_offset_top - header_offset
}

/// An image whose real `src` waits in `data-src` until it first scrolls into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazySource {
    src: String,
    loaded: bool,
}

impl LazySource {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            loaded: false,
        }
    }

    pub fn deferred_src(&self) -> &str {
        &self.src
    }

    /// The `src` attribute to render: empty until loaded.
    pub fn current_src(&self) -> Option<&str> {
        self.loaded.then_some(self.src.as_str())
    }

    /// Returns true on the one intersection that loads the image; the caller
    /// should stop observing it then.
    pub fn intersect(&mut self, is_intersecting: bool) -> bool {
        if self.loaded || !is_intersecting {
            return false;
        }
        self.loaded = true;
        true
    }
}

/// Whether focus outlines are shown. Tab turns them on, any mouse press off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusMode {
    #[default]
    Pointer,
    Keyboard,
}

impl FocusMode {
    pub const BODY_CLASS: &'static str = "keyboard-nav";

    pub fn on_key(self, key: &str) -> Self {
        if key == "Tab" {
            FocusMode::Keyboard
        } else {
            self
        }
    }

    pub fn on_mouse_down(self) -> Self {
        FocusMode::Pointer
    }
}

pub const FOCUS_STYLE: &str = r#"
    .keyboard-nav *:focus {
        outline: 2px solid var(--accent-blue) !important;
        outline-offset: 2px !important;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_targets() {
        assert_eq!(anchor_target_id("#contact"), Some("contact"));
        assert_eq!(anchor_target_id("#"), None);
        assert_eq!(anchor_target_id("/about"), None);
        assert_eq!(anchor_scroll_top(900.0, 80.0), 820.0);
        assert_eq!(anchor_scroll_top(40.0, 80.0), -40.0);
    }

    #[test]
    fn lazy_source_swaps_once() {
        let mut image = LazySource::new("/img/shop.webp");
        assert_eq!(image.current_src(), None);
        assert_eq!(image.deferred_src(), "/img/shop.webp");

        assert!(!image.intersect(false));
        assert_eq!(image.current_src(), None);

        assert!(image.intersect(true));
        assert_eq!(image.current_src(), Some("/img/shop.webp"));

        assert!(!image.intersect(true));
        assert!(!image.intersect(false));
        assert_eq!(image.current_src(), Some("/img/shop.webp"));
    }

    #[test]
    fn tab_enables_outlines_until_mouse_press() {
        let mode = FocusMode::default();
        assert_eq!(mode.on_key("a"), FocusMode::Pointer);
        let mode = mode.on_key("Tab");
        assert_eq!(mode, FocusMode::Keyboard);
        assert_eq!(mode.on_key("Enter"), FocusMode::Keyboard);
        assert_eq!(mode.on_mouse_down(), FocusMode::Pointer);
    }
}
