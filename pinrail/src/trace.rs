//! Scripted scroll/resize traces.
//!
//! A trace file describes the initial page geometry, the engine
//! configuration and a sequence of steps to replay. Steps use externally
//! tagged JSON, e.g. `{"scroll": {"y": 700}}` or `{"wait": {"ms": 300}}`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use pinrail_engine::EngineConfig;
use serde::Deserialize;

use crate::error::Result;

const DEMO_TRACE: &str = include_str!("../traces/demo.json");

fn default_breakpoint() -> f64 {
    1200.0
}

fn default_debounce_ms() -> u64 {
    250
}

/// A complete playback script.
#[derive(Debug, Deserialize)]
pub struct Trace {
    #[serde(default = "default_breakpoint")]
    pub breakpoint_width: f64,

    #[serde(default)]
    pub header_offset: f64,

    #[serde(default = "default_debounce_ms")]
    pub resize_debounce_ms: u64,

    pub viewport: Viewport,
    pub sidebar: Sidebar,
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Deserialize)]
pub struct Sidebar {
    /// Rendered height; omit it to script a page without the target.
    pub height: Option<f64>,

    /// Document-space offset of the sidebar top in natural flow.
    #[serde(default)]
    pub flow_top: f64,

    /// Whether the simulated host observes content-driven size changes.
    #[serde(default)]
    pub observed: bool,
}

/// One playback step.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Move the document scroll position and fire a scroll signal.
    Scroll { y: f64 },

    /// Advance the simulated clock without any input.
    Wait { ms: u64 },

    /// Change the viewport size and fire a resize signal.
    Resize { width: f64, height: f64 },

    /// Change the sidebar's own rendered height.
    Content { height: f64 },
}

impl Trace {
    /// Load a trace from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// The built-in demonstration trace.
    pub fn demo() -> Result<Self> {
        Ok(serde_json::from_str(DEMO_TRACE)?)
    }

    /// Engine configuration described by this trace.
    pub fn config(&self) -> EngineConfig {
        EngineConfig {
            breakpoint_width: self.breakpoint_width,
            header_offset: self.header_offset,
            resize_debounce: Duration::from_millis(self.resize_debounce_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_trace_parses() {
        let trace = Trace::demo().unwrap();
        assert!(!trace.steps.is_empty());
        assert!(trace.sidebar.height.is_some());
    }

    #[test]
    fn steps_use_external_tags() {
        let raw = r#"{
            "viewport": { "width": 1400, "height": 900 },
            "sidebar": { "height": 1500, "flow_top": 120 },
            "steps": [
                { "scroll": { "y": 700 } },
                { "wait": { "ms": 300 } },
                { "resize": { "width": 800, "height": 600 } },
                { "content": { "height": 1800 } }
            ]
        }"#;

        let trace: Trace = serde_json::from_str(raw).unwrap();
        assert_eq!(trace.breakpoint_width, 1200.0);
        assert_eq!(trace.resize_debounce_ms, 250);
        assert!(matches!(trace.steps[0], Step::Scroll { y } if y == 700.0));
        assert!(matches!(trace.steps[1], Step::Wait { ms: 300 }));
        assert!(matches!(
            trace.steps[2],
            Step::Resize {
                width,
                ..
            } if width == 800.0
        ));
        assert!(
            matches!(trace.steps[3], Step::Content { height } if height == 1800.0)
        );
    }

    #[test]
    fn missing_sidebar_height_is_allowed() {
        let raw = r#"{
            "viewport": { "width": 1400, "height": 900 },
            "sidebar": {},
            "steps": []
        }"#;

        let trace: Trace = serde_json::from_str(raw).unwrap();
        assert_eq!(trace.sidebar.height, None);
    }
}
