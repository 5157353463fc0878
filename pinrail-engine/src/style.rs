//! Translation of states into inline style side effects.
//!
//! [`apply`] is a pure function of the state and current metrics. Every
//! patch carries the full set of properties the previous state wrote, so a
//! host that processes `clear` before the new values can never leave a
//! stale `position: fixed` behind when the machine returns to a
//! flow-positioned state.

use bitflags::bitflags;

use crate::geometry::ViewportMetrics;
use crate::state::SidebarState;

bitflags! {
    /// Inline style properties the applier may have written to the target.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct InlineProps: u8 {
        const NONE     = 0;
        const POSITION = 1;
        const TOP      = 1 << 1;
    }
}

/// Style side effects of one state transition.
///
/// Hosts must remove every property in `clear` first, then write
/// `fixed_top` (as `position: fixed; top: <value>px`) when present, and
/// finally replace the state tag class with `tag`.
#[derive(Clone, Debug, PartialEq)]
pub struct StylePatch {
    /// Inline properties written by the previous state, to be removed
    /// before anything else.
    pub clear: InlineProps,

    /// Fixed-position top offset in pixels, when the state pins the
    /// sidebar.
    pub fixed_top: Option<f64>,

    /// State tag class for external styling hooks; exactly one is bound
    /// at any time.
    pub tag: &'static str,
}

impl StylePatch {
    /// Inline properties this patch writes to the target.
    #[inline]
    pub fn writes(&self) -> InlineProps {
        if self.fixed_top.is_some() {
            InlineProps::POSITION | InlineProps::TOP
        } else {
            InlineProps::NONE
        }
    }
}

/// Build the style patch for entering `state`.
///
/// `previous` is the property set currently written to the target;
/// `Disabled`, `StickyTop` and `Scrolling` defer to stylesheet/flow
/// positioning and write nothing of their own.
pub fn apply(
    state: SidebarState,
    metrics: &ViewportMetrics,
    previous: InlineProps,
    header_offset: f64,
) -> StylePatch {
    let fixed_top = match state {
        SidebarState::LockedBottom => {
            Some(metrics.viewport_height - metrics.sidebar_height)
        },
        SidebarState::LockedTop => Some(header_offset),
        SidebarState::Disabled
        | SidebarState::StickyTop
        | SidebarState::Scrolling => None,
    };

    StylePatch {
        clear: previous,
        fixed_top,
        tag: state.tag(),
    }
}
