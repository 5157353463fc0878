/// Capability interface the engine uses to read live geometry.
///
/// Implementations wrap whatever the host positions against: a browser
/// viewport and DOM element, or a scripted fake replaying scroll/resize
/// sequences in tests. Reads must be side-effect free.
pub trait Environment {
    /// Inner width of the viewport.
    fn viewport_width(&self) -> f64;

    /// Inner height of the viewport.
    fn viewport_height(&self) -> f64;

    /// Current document scroll position.
    fn scroll_y(&self) -> f64;

    /// Rendered height of the sidebar target, or `None` when the target
    /// is absent.
    fn sidebar_height(&self) -> Option<f64>;

    /// Document-space offset of the sidebar's top edge in natural flow.
    fn sidebar_flow_top(&self) -> f64;

    /// Whether the host can observe content-driven size changes of the
    /// target itself. Hosts without such a facility degrade silently to
    /// resize-driven re-measurement only.
    fn observes_content_size(&self) -> bool {
        false
    }
}
