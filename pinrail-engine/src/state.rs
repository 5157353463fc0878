//! Transition rules for the sidebar positioning state machine.
//!
//! The machine is driven by two inputs: fresh geometry measurements (which
//! reset the state from scratch, since a breakpoint crossing invalidates
//! whatever was active) and per-frame scroll samples (which cycle the
//! machine between the scrolling and locked states). Each function here is
//! pure: given the current state and an input it returns the next state,
//! keeping the rules table-driven and easy to audit against the five
//! states.

use crate::geometry::{ScrollDirection, ScrollSample, ViewportMetrics};
use crate::options::EngineConfig;

/// Positioning mode of a sidebar instance.
///
/// Exactly one is active at a time; the engine mutates it only through the
/// transition functions in this module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarState {
    /// Narrow viewport, default flow layout, no positioning applied.
    Disabled,

    /// Sidebar fits the viewport; native sticky handles it.
    StickyTop,

    /// Sidebar scrolls with the document in natural flow.
    Scrolling,

    /// Pinned so the sidebar's bottom edge rides the viewport bottom.
    LockedBottom,

    /// Pinned below the header offset at the viewport top.
    LockedTop,
}

impl SidebarState {
    /// State tag class bound to the target for external styling hooks.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Disabled => "sidebar--disabled",
            Self::StickyTop => "sidebar--sticky-top",
            Self::Scrolling => "sidebar--scrolling",
            Self::LockedBottom => "sidebar--locked-bottom",
            Self::LockedTop => "sidebar--locked-top",
        }
    }

    /// Whether this state pins the sidebar with fixed positioning.
    #[inline]
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::LockedBottom | Self::LockedTop)
    }
}

/// Derive the state for freshly measured geometry, ignoring scroll history.
///
/// Applied at initialization and after every debounced resize, where the
/// current state may no longer be valid for the new viewport width.
pub(crate) fn reset_state(
    metrics: &ViewportMetrics,
    config: &EngineConfig,
) -> SidebarState {
    use SidebarState::*;

    if metrics.viewport_width <= config.breakpoint_width {
        Disabled
    } else if metrics.fits_viewport() {
        StickyTop
    } else {
        Scrolling
    }
}

/// Evaluate one scroll sample against the current state.
///
/// Only the scrolling/locked cycle reacts to scroll; `Disabled` and
/// `StickyTop` are exited exclusively through [`reset_state`].
pub(crate) fn on_scroll_sample(
    state: SidebarState,
    metrics: &ViewportMetrics,
    sample: &ScrollSample,
    config: &EngineConfig,
) -> SidebarState {
    use ScrollDirection::*;
    use SidebarState::*;

    match (state, sample.direction) {
        (Scrolling, Down)
            if metrics.bottom_edge(sample.scroll_y)
                <= metrics.viewport_height =>
        {
            LockedBottom
        },
        (Scrolling, Up)
            if metrics.top_edge(sample.scroll_y) >= config.header_offset =>
        {
            LockedTop
        },
        (LockedBottom, Up) => Scrolling,
        (LockedTop, Down) => Scrolling,
        (state, _) => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(
        viewport_width: f64,
        viewport_height: f64,
        sidebar_height: f64,
    ) -> ViewportMetrics {
        ViewportMetrics {
            viewport_width,
            viewport_height,
            sidebar_height,
            sidebar_flow_top: 100.0,
        }
    }

    fn sample(scroll_y: f64, direction: ScrollDirection) -> ScrollSample {
        ScrollSample {
            scroll_y,
            direction,
        }
    }

    #[test]
    fn narrow_viewport_resets_to_disabled() {
        let config = EngineConfig::default();
        let state = reset_state(&metrics(375.0, 700.0, 600.0), &config);
        assert_eq!(state, SidebarState::Disabled);
    }

    #[test]
    fn fitting_sidebar_resets_to_sticky_top() {
        let config = EngineConfig::default();
        let state = reset_state(&metrics(1400.0, 900.0, 600.0), &config);
        assert_eq!(state, SidebarState::StickyTop);
    }

    #[test]
    fn tall_sidebar_resets_to_scrolling() {
        let config = EngineConfig::default();
        let state = reset_state(&metrics(1400.0, 900.0, 1500.0), &config);
        assert_eq!(state, SidebarState::Scrolling);
    }

    #[test]
    fn width_exactly_at_breakpoint_is_disabled() {
        let config = EngineConfig::default();
        let state = reset_state(&metrics(1200.0, 900.0, 1500.0), &config);
        assert_eq!(state, SidebarState::Disabled);
    }

    #[test]
    fn scrolling_locks_bottom_when_bottom_edge_enters_viewport() {
        let config = EngineConfig::default();
        let m = metrics(1400.0, 900.0, 1500.0);

        // flow_top 100 + height 1500 => bottom reaches 900 at scroll_y 700.
        let staying = on_scroll_sample(
            SidebarState::Scrolling,
            &m,
            &sample(600.0, ScrollDirection::Down),
            &config,
        );
        assert_eq!(staying, SidebarState::Scrolling);

        let locked = on_scroll_sample(
            SidebarState::Scrolling,
            &m,
            &sample(700.0, ScrollDirection::Down),
            &config,
        );
        assert_eq!(locked, SidebarState::LockedBottom);
    }

    #[test]
    fn scrolling_locks_top_when_top_edge_clears_header_offset() {
        let config = EngineConfig {
            header_offset: 80.0,
            ..EngineConfig::default()
        };
        let m = metrics(1400.0, 900.0, 1500.0);

        // top edge = 100 - scroll_y; at scroll_y 20 it sits at the header.
        let staying = on_scroll_sample(
            SidebarState::Scrolling,
            &m,
            &sample(30.0, ScrollDirection::Up),
            &config,
        );
        assert_eq!(staying, SidebarState::Scrolling);

        let locked = on_scroll_sample(
            SidebarState::Scrolling,
            &m,
            &sample(20.0, ScrollDirection::Up),
            &config,
        );
        assert_eq!(locked, SidebarState::LockedTop);
    }

    #[test]
    fn locked_bottom_unlocks_on_any_scroll_up() {
        let config = EngineConfig::default();
        let m = metrics(1400.0, 900.0, 1500.0);

        let state = on_scroll_sample(
            SidebarState::LockedBottom,
            &m,
            &sample(699.0, ScrollDirection::Up),
            &config,
        );
        assert_eq!(state, SidebarState::Scrolling);
    }

    #[test]
    fn locked_top_unlocks_on_any_scroll_down() {
        let config = EngineConfig::default();
        let m = metrics(1400.0, 900.0, 1500.0);

        let state = on_scroll_sample(
            SidebarState::LockedTop,
            &m,
            &sample(50.0, ScrollDirection::Down),
            &config,
        );
        assert_eq!(state, SidebarState::Scrolling);
    }

    #[test]
    fn disabled_and_sticky_ignore_scroll() {
        let config = EngineConfig::default();
        let m = metrics(1400.0, 900.0, 600.0);

        for state in [SidebarState::Disabled, SidebarState::StickyTop] {
            for direction in [ScrollDirection::Down, ScrollDirection::Up] {
                let next = on_scroll_sample(
                    state,
                    &m,
                    &sample(500.0, direction),
                    &config,
                );
                assert_eq!(next, state);
            }
        }
    }
}
