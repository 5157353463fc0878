//! Measurement of viewport and sidebar geometry.
//!
//! The [`ViewportMetrics`] snapshot is recomputed through [`measure`] before
//! any transition decision and after every (debounced) resize or
//! content-size change. [`ScrollSample`]s are ephemeral, derived once per
//! animation frame from consecutive scroll readings.

use crate::env::Environment;

/// Direction of the most recent scroll movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Down,
    Up,
}

/// One per-frame scroll reading together with its derived direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    /// Document scroll position at sampling time.
    pub scroll_y: f64,

    /// Sign of the delta against the previous sample.
    pub direction: ScrollDirection,
}

impl ScrollSample {
    /// Derive a sample from two consecutive scroll readings.
    ///
    /// A zero delta produces no sample: the previous direction stays in
    /// effect and no transition is evaluated for that frame.
    pub fn between(previous: f64, current: f64) -> Option<Self> {
        if current > previous {
            Some(Self {
                scroll_y: current,
                direction: ScrollDirection::Down,
            })
        } else if current < previous {
            Some(Self {
                scroll_y: current,
                direction: ScrollDirection::Up,
            })
        } else {
            None
        }
    }
}

/// Snapshot of the geometry every transition decision needs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportMetrics {
    /// Inner width of the viewport.
    pub viewport_width: f64,

    /// Inner height of the viewport.
    pub viewport_height: f64,

    /// Rendered height of the sidebar element.
    pub sidebar_height: f64,

    /// Document-space offset of the sidebar's top edge in natural flow.
    pub sidebar_flow_top: f64,
}

impl ViewportMetrics {
    /// Whether the sidebar fits entirely within the viewport height.
    #[inline]
    pub fn fits_viewport(&self) -> bool {
        self.sidebar_height <= self.viewport_height
    }

    /// A zero or negative height means layout has not produced a usable
    /// measurement yet; transitions are deferred until one exists.
    #[inline]
    pub fn is_measured(&self) -> bool {
        self.sidebar_height > 0.0
    }

    /// Viewport-space position of the sidebar's top edge in natural flow.
    #[inline]
    pub fn top_edge(&self, scroll_y: f64) -> f64 {
        self.sidebar_flow_top - scroll_y
    }

    /// Viewport-space position of the sidebar's bottom edge in natural flow.
    #[inline]
    pub fn bottom_edge(&self, scroll_y: f64) -> f64 {
        self.top_edge(scroll_y) + self.sidebar_height
    }
}

/// Read a fresh geometry snapshot from the environment.
///
/// Returns `None` when the sidebar target is absent. Reading has no side
/// effects on the environment.
pub fn measure(env: &dyn Environment) -> Option<ViewportMetrics> {
    let sidebar_height = env.sidebar_height()?;

    Some(ViewportMetrics {
        viewport_width: env.viewport_width(),
        viewport_height: env.viewport_height(),
        sidebar_height,
        sidebar_flow_top: env.sidebar_flow_top(),
    })
}
