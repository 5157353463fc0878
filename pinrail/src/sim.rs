//! Simulated environment and trace playback.
//!
//! Playback drives the engine exactly the way a browser host would: every
//! scroll step requests a frame and the frame runs at the end of the step,
//! wait steps advance a simulated clock, and the debounce is ticked after
//! every step so quiet periods expire deterministically.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use log::info;
use pinrail_engine::{
    EngineEvent, Environment, SidebarEngine, SidebarState,
};

use crate::trace::{Step, Trace};

struct SimState {
    viewport_width: f64,
    viewport_height: f64,
    scroll_y: f64,
    sidebar_height: Option<f64>,
    sidebar_flow_top: f64,
    observed: bool,
}

/// Shared-handle environment over the scripted page geometry.
#[derive(Clone)]
pub struct SimEnv(Rc<RefCell<SimState>>);

impl SimEnv {
    fn new(trace: &Trace) -> Self {
        Self(Rc::new(RefCell::new(SimState {
            viewport_width: trace.viewport.width,
            viewport_height: trace.viewport.height,
            scroll_y: 0.0,
            sidebar_height: trace.sidebar.height,
            sidebar_flow_top: trace.sidebar.flow_top,
            observed: trace.sidebar.observed,
        })))
    }

    fn set_scroll_y(&self, scroll_y: f64) {
        self.0.borrow_mut().scroll_y = scroll_y;
    }

    fn set_viewport(&self, width: f64, height: f64) {
        let mut state = self.0.borrow_mut();
        state.viewport_width = width;
        state.viewport_height = height;
    }

    fn set_sidebar_height(&self, height: f64) {
        self.0.borrow_mut().sidebar_height = Some(height);
    }
}

impl Environment for SimEnv {
    fn viewport_width(&self) -> f64 {
        self.0.borrow().viewport_width
    }

    fn viewport_height(&self) -> f64 {
        self.0.borrow().viewport_height
    }

    fn scroll_y(&self) -> f64 {
        self.0.borrow().scroll_y
    }

    fn sidebar_height(&self) -> Option<f64> {
        self.0.borrow().sidebar_height
    }

    fn sidebar_flow_top(&self) -> f64 {
        self.0.borrow().sidebar_flow_top
    }

    fn observes_content_size(&self) -> bool {
        self.0.borrow().observed
    }
}

/// Summary of one playback run.
#[derive(Debug)]
pub struct Report {
    pub transitions: usize,
    pub patches: usize,
    pub final_state: SidebarState,
}

/// Replay the trace through a freshly mounted engine.
///
/// Returns `None` when the trace scripts a page without the sidebar
/// target, mirroring the engine's inert mount.
pub fn run(trace: &Trace) -> Option<Report> {
    let env = SimEnv::new(trace);
    let mut engine =
        SidebarEngine::mount(Box::new(env.clone()), trace.config())?;

    let mut report = Report {
        transitions: 0,
        patches: 0,
        final_state: engine.state(),
    };
    let mut now = Instant::now();
    drain(&mut engine, &mut report);

    for step in &trace.steps {
        match step {
            Step::Scroll { y } => {
                env.set_scroll_y(*y);
                engine.on_scroll();
                engine.on_frame();
            },
            Step::Wait { ms } => {
                now += Duration::from_millis(*ms);
            },
            Step::Resize { width, height } => {
                env.set_viewport(*width, *height);
                engine.on_resize(now);
            },
            Step::Content { height } => {
                env.set_sidebar_height(*height);
                engine.on_content_resize(now);
            },
        }
        engine.tick(now);
        drain(&mut engine, &mut report);
    }

    engine.destroy();
    drain(&mut engine, &mut report);
    report.final_state = engine.state();

    Some(report)
}

fn drain(engine: &mut SidebarEngine, report: &mut Report) {
    while let Some(event) = engine.next_event() {
        match event {
            EngineEvent::StateChanged { from, to } => {
                report.transitions += 1;
                info!("state {from:?} -> {to:?}");
            },
            EngineEvent::Style(patch) => {
                report.patches += 1;
                match patch.fixed_top {
                    Some(top) => info!(
                        "style clear={:?} position=fixed top={top}px tag={}",
                        patch.clear, patch.tag
                    ),
                    None => info!(
                        "style clear={:?} (flow) tag={}",
                        patch.clear, patch.tag
                    ),
                }
            },
        }
    }
}
