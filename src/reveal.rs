/// Entrance animation flavour. They only differ in CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealVariant {
    #[default]
    Up,
    Left,
    Right,
}

impl RevealVariant {
    pub fn class(self) -> &'static str {
        match self {
            RevealVariant::Up => "reveal",
            RevealVariant::Left => "reveal-left",
            RevealVariant::Right => "reveal-right",
        }
    }
}

/// Inline style staggering cards in a grid by a tenth of a second each.
pub fn stagger_style(index: usize) -> String {
    format!("transition-delay: {}s", index as f64 / 10.0)
}

/// One-way switch for a single revealed element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    active: bool,
}

impl RevealLatch {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feeds the element's current viewport-relative top edge. Returns true
    /// only on the call that activates it.
    pub fn observe(&mut self, top: f64, viewport_height: f64, margin: f64) -> bool {
        if self.active {
            return false;
        }
        if top < viewport_height - margin {
            self.active = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_classes() {
        assert_eq!(RevealVariant::default().class(), "reveal");
        assert_eq!(RevealVariant::Left.class(), "reveal-left");
        assert_eq!(RevealVariant::Right.class(), "reveal-right");
    }

    #[test]
    fn stagger_grows_by_a_tenth() {
        assert_eq!(stagger_style(0), "transition-delay: 0s");
        assert_eq!(stagger_style(1), "transition-delay: 0.1s");
        assert_eq!(stagger_style(3), "transition-delay: 0.3s");
    }

    #[test]
    fn element_below_the_margin_stays_hidden() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(750.0, 800.0, 100.0));
        assert!(!latch.observe(700.0, 800.0, 100.0));
        assert!(!latch.is_active());
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(1200.0, 800.0, 100.0));

        // scrolled down: element rises into view
        assert!(latch.observe(699.0, 800.0, 100.0));
        assert!(latch.is_active());

        // scrolled back up: element drops below the fold again
        assert!(!latch.observe(1200.0, 800.0, 100.0));
        assert!(latch.is_active());
    }
}
