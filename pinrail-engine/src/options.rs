use std::time::Duration;

/// Configuration knobs that influence positioning decisions.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Viewport widths at or below this value disable positioning entirely.
    pub breakpoint_width: f64,

    /// Fixed offset from the viewport top used by the locked-top state,
    /// typically the height of a fixed page header.
    pub header_offset: f64,

    /// Quiet period required after the last resize signal before geometry
    /// is re-measured and the state re-derived.
    pub resize_debounce: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            breakpoint_width: 1200.0,
            header_offset: 0.0,
            resize_debounce: Duration::from_millis(250),
        }
    }
}
