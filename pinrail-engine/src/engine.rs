//! Host-driven engine connecting measurement, transitions and styling.
//!
//! The engine owns no timers and installs no listeners. The host forwards
//! its scroll/resize signals with [`SidebarEngine::on_scroll`] and
//! [`SidebarEngine::on_resize`], fires coalesced frame evaluations with
//! [`SidebarEngine::on_frame`], drives the debounce clock with
//! [`SidebarEngine::tick`], and drains resulting [`EngineEvent`]s with
//! [`SidebarEngine::next_event`].

use std::collections::VecDeque;
use std::mem;
use std::time::Instant;

use log::{debug, warn};

use crate::env::Environment;
use crate::geometry::{ScrollSample, ViewportMetrics, measure};
use crate::options::EngineConfig;
use crate::sched::{DebounceHandler, FrameGate, Timeout};
use crate::state::{self, SidebarState};
use crate::style::{self, InlineProps, StylePatch};

/// Outputs produced by the engine, drained by the host in order.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineEvent {
    /// The machine moved to a new state.
    StateChanged {
        from: SidebarState,
        to: SidebarState,
    },

    /// Style side effects the host must apply to its target.
    Style(StylePatch),
}

/// Positioning engine for a single sidebar instance.
///
/// Construct one per sidebar via [`SidebarEngine::mount`]; multiple
/// engines on one page stay fully independent.
pub struct SidebarEngine {
    env: Box<dyn Environment>,
    config: EngineConfig,
    state: SidebarState,
    metrics: ViewportMetrics,
    last_scroll_y: f64,
    applied: InlineProps,
    frame: FrameGate,
    debounce: DebounceHandler,
    events: VecDeque<EngineEvent>,
    destroyed: bool,
}

impl SidebarEngine {
    /// Construct an engine for the environment's sidebar target.
    ///
    /// Returns `None` when the target is absent; this is logged once and
    /// is a permanent no-op rather than a retryable error. When the
    /// target exists but layout has not produced a positive height yet,
    /// the engine starts in [`SidebarState::Disabled`] and establishes
    /// its base state on the first frame that measures successfully.
    pub fn mount(
        env: Box<dyn Environment>,
        config: EngineConfig,
    ) -> Option<Self> {
        let Some(metrics) = measure(env.as_ref()) else {
            warn!("sidebar target not found; positioning stays disabled");
            return None;
        };

        let last_scroll_y = env.scroll_y();
        let mut engine = Self {
            env,
            config,
            state: SidebarState::Disabled,
            metrics,
            last_scroll_y,
            applied: InlineProps::NONE,
            frame: FrameGate::default(),
            debounce: DebounceHandler::default(),
            events: VecDeque::new(),
            destroyed: false,
        };

        if engine.metrics.is_measured() {
            engine.state = state::reset_state(&engine.metrics, &engine.config);
        }
        debug!("mounted sidebar engine in state {:?}", engine.state);
        engine.emit_style();

        Some(engine)
    }

    /// Current state of the machine.
    #[inline]
    pub fn state(&self) -> SidebarState {
        self.state
    }

    /// Most recent geometry snapshot.
    #[inline]
    pub fn metrics(&self) -> &ViewportMetrics {
        &self.metrics
    }

    /// Inline properties currently written to the target.
    #[inline]
    pub fn applied_props(&self) -> InlineProps {
        self.applied
    }

    /// Whether a coalesced frame evaluation is pending.
    #[inline]
    pub fn frame_pending(&self) -> bool {
        self.frame.pending()
    }

    /// Whether a debounced re-measurement is pending.
    #[inline]
    pub fn resize_pending(&self) -> bool {
        self.debounce.pending_timeout()
    }

    /// Whether [`SidebarEngine::destroy`] has been called.
    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Pop the next pending output, oldest first.
    pub fn next_event(&mut self) -> Option<EngineEvent> {
        self.events.pop_front()
    }

    /// Record a scroll signal.
    ///
    /// Returns `true` when a frame evaluation was newly scheduled and the
    /// host should arrange an animation-frame callback; bursts while one
    /// is pending coalesce and return `false`.
    pub fn on_scroll(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        self.frame.request()
    }

    /// Run the coalesced frame evaluation, if one is pending.
    ///
    /// Takes one scroll sample and evaluates a single transition. Frames
    /// before the first positive height measurement re-measure instead,
    /// deferring transitions until geometry exists.
    pub fn on_frame(&mut self) {
        if self.destroyed || !self.frame.take() {
            return;
        }

        if !self.metrics.is_measured() {
            if let Some(metrics) = measure(self.env.as_ref()) {
                self.metrics = metrics;
            }
            if !self.metrics.is_measured() {
                return;
            }
            self.last_scroll_y = self.env.scroll_y();
            let next = state::reset_state(&self.metrics, &self.config);
            self.transition_to(next);
            return;
        }

        let scroll_y = self.env.scroll_y();
        let Some(sample) = ScrollSample::between(self.last_scroll_y, scroll_y)
        else {
            return;
        };
        self.last_scroll_y = scroll_y;

        let next = state::on_scroll_sample(
            self.state,
            &self.metrics,
            &sample,
            &self.config,
        );
        self.transition_to(next);
    }

    /// Record a viewport resize signal, restarting the debounce window.
    pub fn on_resize(&mut self, now: Instant) {
        if self.destroyed {
            return;
        }
        self.debounce.set_timeout(now, self.config.resize_debounce);
    }

    /// Record a content-driven size change of the target itself.
    ///
    /// Ignored when the environment cannot observe content size; such
    /// hosts fall back to viewport resizes alone.
    pub fn on_content_resize(&mut self, now: Instant) {
        if self.destroyed || !self.env.observes_content_size() {
            return;
        }
        self.debounce.set_timeout(now, self.config.resize_debounce);
    }

    /// Fire the debounce if its quiet period has elapsed.
    ///
    /// An expired debounce re-measures and re-derives the state from
    /// scratch, since a breakpoint crossing invalidates the current one.
    pub fn tick(&mut self, now: Instant) {
        if self.destroyed {
            return;
        }
        let Some(deadline) = self.debounce.deadline() else {
            return;
        };
        if now < deadline {
            return;
        }
        self.debounce.clear_timeout();

        let Some(metrics) = measure(self.env.as_ref()) else {
            debug!("sidebar target unavailable during re-measure, skipping");
            return;
        };
        self.metrics = metrics;
        self.last_scroll_y = self.env.scroll_y();

        if !self.metrics.is_measured() {
            return;
        }
        let next = state::reset_state(&self.metrics, &self.config);
        self.transition_to(next);
    }

    /// Tear the engine down.
    ///
    /// Drops the pending frame request and debounce deadline, emits one
    /// final patch clearing anything still written to the target, and
    /// turns every later call into a no-op.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.frame.clear();
        self.debounce.clear_timeout();

        if !self.applied.is_empty() {
            let patch = StylePatch {
                clear: mem::take(&mut self.applied),
                fixed_top: None,
                tag: self.state.tag(),
            };
            self.events.push_back(EngineEvent::Style(patch));
        }
        debug!("sidebar engine destroyed");
    }

    fn transition_to(&mut self, next: SidebarState) {
        if next == self.state {
            return;
        }
        let from = mem::replace(&mut self.state, next);
        debug!("sidebar state {from:?} -> {next:?}");
        self.events.push_back(EngineEvent::StateChanged { from, to: next });
        self.emit_style();
    }

    fn emit_style(&mut self) {
        let patch = style::apply(
            self.state,
            &self.metrics,
            self.applied,
            self.config.header_offset,
        );
        self.applied = patch.writes();
        self.events.push_back(EngineEvent::Style(patch));
    }
}
