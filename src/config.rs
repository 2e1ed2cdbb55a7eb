use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Pixel thresholds and timer durations used by the page behaviors.
///
/// Provided to components through a `ContextProvider`; the `Default` values
/// are the ones the published site runs with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageConfig {
    /// Scroll offset past which the navbar gets its `scrolled` look.
    pub navbar_scroll_threshold: f64,
    /// How far ahead of a section's top the nav highlight switches to it.
    pub section_lookahead: f64,
    /// Distance from the viewport bottom an element must cross to reveal.
    pub reveal_margin: f64,
    pub typing_start_delay_ms: u32,
    pub typing_step_ms: u32,
    /// Fake network latency for the contact form.
    pub submit_latency_ms: u32,
    pub success_banner_ms: u32,
    /// Height of the fixed navbar, subtracted from anchor scroll targets.
    pub anchor_offset: f64,
    pub scroll_debounce_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            navbar_scroll_threshold: 50.0,
            section_lookahead: 100.0,
            reveal_margin: 100.0,
            typing_start_delay_ms: 1_000,
            typing_step_ms: 50,
            submit_latency_ms: 2_000,
            success_banner_ms: 5_000,
            anchor_offset: 80.0,
            scroll_debounce_ms: 10,
        }
    }
}
