//! Adaptive sidebar positioning engine.
//!
//! Implements the scroll-position bookkeeping behind a "smart sticky"
//! sidebar: a sidebar shorter than the viewport sticks natively, a taller
//! one scrolls with the document and pins itself once its bottom (or top)
//! edge comes into view, unlocking again when the scroll direction turns.
//!
//! The crate is host-agnostic. All geometry reads go through the
//! [`Environment`] trait and all side effects come back as [`EngineEvent`]s,
//! so the machine runs the same against a real viewport or a scripted fake.
//! Hosts:
//! 1. Implement [`Environment`] over their viewport and sidebar target.
//! 2. Mount a [`SidebarEngine`] with an [`EngineConfig`].
//! 3. Forward scroll/resize signals (`on_scroll` / `on_resize`), run
//!    coalesced evaluations (`on_frame`), drive the debounce clock
//!    (`tick`), and drain [`EngineEvent`]s with `next_event()`.
//! 4. Call `destroy()` to tear down.

mod engine;
mod env;
mod geometry;
mod options;
mod sched;
mod state;
mod style;

pub use engine::{EngineEvent, SidebarEngine};
pub use env::Environment;
pub use geometry::{ScrollDirection, ScrollSample, ViewportMetrics, measure};
pub use options::EngineConfig;
pub use sched::{DebounceHandler, FrameGate, Timeout};
pub use state::SidebarState;
pub use style::{InlineProps, StylePatch, apply};
