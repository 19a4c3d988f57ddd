//! Properties container: a collapsible, drag-resizable side panel
//!
//! The container never owns the layout. Every interaction computes a new
//! layout and proposes it through the `on_layout_changed` callback; nothing
//! changes on screen until the parent passes the updated layout back into
//! [`PropertiesContainer::render`].
//!
//! The only state kept here is drag scratch state: the width of the last
//! render and the width captured when a drag started.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::view::geometry::{PanelGeometry, Rect};

use super::drag::{DragDelta, DragSession, Point};
use super::layout::{Layout, LayoutChange, PanelPolicy};
use super::throttle::Throttle;

/// Receives layout proposals from the container
pub type LayoutCallback = Box<dyn FnMut(LayoutChange)>;

/// Class always present on the root element
pub const ROOT_CLASS: &str = "PropertiesContainer";

/// Class added to the root element while the panel is open
pub const OPEN_CLASS: &str = "open";

/// Label shown on the toggle tab
pub const TOGGLE_LABEL: &str = "Properties Panel";

/// Ordered class names for the root element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a class; empty names are skipped, repeats are kept in order
    pub fn push(&mut self, name: impl Into<String>) {
        let name = name.into();
        let name = name.trim();
        if !name.is_empty() {
            self.0.push(name.to_string());
        }
    }

    pub fn push_if(&mut self, condition: bool, name: impl Into<String>) {
        if condition {
            self.push(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// Shared handle to the container's inner content area.
///
/// The parent keeps a clone and reads the rectangle after each render to
/// mount its own content there.
#[derive(Debug, Clone, Default)]
pub struct ContentRef(Rc<Cell<Option<Rect>>>);

impl ContentRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content area from the most recent render
    pub fn current(&self) -> Option<Rect> {
        self.0.get()
    }

    fn set(&self, rect: Rect) {
        self.0.set(Some(rect));
    }
}

/// Result of rendering the container for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerView {
    pub classes: ClassList,
    pub open: bool,
    /// Rendered width (zero while closed)
    pub width: f32,
    pub label: &'static str,
    pub root: Rect,
    pub toggle: Rect,
    /// Present only while open
    pub resize_handle: Option<Rect>,
    pub content: Rect,
}

pub struct PropertiesContainer {
    policy: PanelPolicy,
    class_name: Option<String>,
    forwarded_ref: Option<ContentRef>,
    on_layout_changed: Option<LayoutCallback>,

    /// Width of the last render
    current_width: f32,
    /// Width captured when the current drag started
    original_width: f32,
    drag: Option<DragSession>,
    resize_throttle: Throttle<DragDelta>,
}

impl fmt::Debug for PropertiesContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertiesContainer")
            .field("policy", &self.policy)
            .field("class_name", &self.class_name)
            .field("has_forwarded_ref", &self.forwarded_ref.is_some())
            .field("has_callback", &self.on_layout_changed.is_some())
            .field("current_width", &self.current_width)
            .field("original_width", &self.original_width)
            .field("drag", &self.drag)
            .finish()
    }
}

impl Default for PropertiesContainer {
    fn default() -> Self {
        Self::new(PanelPolicy::default())
    }
}

impl PropertiesContainer {
    pub fn new(policy: PanelPolicy) -> Self {
        Self {
            policy,
            class_name: None,
            forwarded_ref: None,
            on_layout_changed: None,
            current_width: 0.0,
            original_width: 0.0,
            drag: None,
            resize_throttle: Throttle::from_millis(policy.resize_throttle_ms),
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_forwarded_ref(mut self, content: ContentRef) -> Self {
        self.forwarded_ref = Some(content);
        self
    }

    pub fn on_layout_changed(mut self, callback: impl FnMut(LayoutChange) + 'static) -> Self {
        self.on_layout_changed = Some(Box::new(callback));
        self
    }

    pub fn set_on_layout_changed(&mut self, callback: Option<LayoutCallback>) {
        self.on_layout_changed = callback;
    }

    pub fn policy(&self) -> &PanelPolicy {
        &self.policy
    }

    pub fn set_policy(&mut self, policy: PanelPolicy) {
        self.policy = policy;
        self.resize_throttle
            .set_interval(Duration::from_millis(policy.resize_throttle_ms));
    }

    pub fn current_width(&self) -> f32 {
        self.current_width
    }

    pub fn original_width(&self) -> f32 {
        self.original_width
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// When a throttled resize becomes due, if one is waiting
    pub fn resize_deadline(&self) -> Option<Instant> {
        self.resize_throttle.deadline()
    }

    /// Render the container for `layout` inside `bounds`.
    ///
    /// Records the rendered width as the reference for the next drag and
    /// publishes the content area to the forwarded ref.
    pub fn render(&mut self, layout: &Layout, bounds: Rect) -> ContainerView {
        let panel = layout.resolved_panel(&self.policy);

        let open = panel.is_rendered_open();
        let width = panel.rendered_width();
        self.current_width = width;

        let geometry = PanelGeometry::compute(bounds, width, open);

        let mut classes = ClassList::new();
        classes.push(ROOT_CLASS);
        if let Some(class_name) = &self.class_name {
            classes.push(class_name.as_str());
        }
        classes.push_if(open, OPEN_CLASS);

        if let Some(content) = &self.forwarded_ref {
            content.set(geometry.content);
        }

        ContainerView {
            classes,
            open,
            width,
            label: TOGGLE_LABEL,
            root: geometry.root,
            toggle: geometry.toggle,
            resize_handle: geometry.resize_handle,
            content: geometry.content,
        }
    }

    /// Propose the layout with the open flag inverted
    pub fn handle_toggle(&mut self, layout: &Layout) {
        let panel = layout.resolved_panel(&self.policy);

        self.change_layout(LayoutChange {
            properties_panel: panel.toggled(),
        });
    }

    /// Begin a resize drag at `pointer`
    pub fn handle_resize_start(&mut self, pointer: Point) {
        self.original_width = self.current_width;
        self.resize_throttle.cancel();
        self.drag = Some(DragSession::start(pointer));

        tracing::debug!(
            original_width = self.original_width,
            x = pointer.x,
            "properties panel resize started"
        );
    }

    /// Pointer moved during a drag. Rate limited by the resize throttle.
    pub fn handle_drag_move(&mut self, pointer: Point, now: Instant) {
        let Some(session) = self.drag else {
            return;
        };

        if let Some(delta) = self.resize_throttle.submit(session.delta(pointer), now) {
            self.handle_resize(delta);
        }
    }

    /// Deliver a throttled resize whose window has elapsed.
    ///
    /// Returns true if a resize was processed.
    pub fn poll_resize(&mut self, now: Instant) -> bool {
        match self.resize_throttle.poll(now) {
            Some(delta) => {
                self.handle_resize(delta);
                true
            }
            None => false,
        }
    }

    /// End the drag session. The last proposed layout stands.
    pub fn handle_drag_end(&mut self) {
        if self.drag.take().is_some() {
            tracing::debug!("properties panel resize ended");
        }
    }

    /// Apply a drag delta relative to the width captured at drag start
    pub fn handle_resize(&mut self, delta: DragDelta) {
        if delta.is_zero_x() {
            tracing::trace!("ignoring zero-delta resize");
            return;
        }

        let new_width = self.original_width - delta.x;

        self.change_layout(LayoutChange {
            properties_panel: self.policy.resize_to(new_width),
        });
    }

    fn change_layout(&mut self, change: LayoutChange) {
        let Some(callback) = self.on_layout_changed.as_mut() else {
            tracing::trace!("no layout listener, dropping {:?}", change);
            return;
        };

        tracing::debug!(
            open = change.properties_panel.open,
            width = change.properties_panel.width,
            "proposing properties panel layout"
        );
        callback(change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::layout::PanelLayout;
    use std::cell::RefCell;

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 700.0)
    }

    fn recording() -> (PropertiesContainer, Rc<RefCell<Vec<LayoutChange>>>) {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        let policy = PanelPolicy {
            resize_throttle_ms: 0,
            ..PanelPolicy::default()
        };
        let container =
            PropertiesContainer::new(policy).on_layout_changed(move |c| sink.borrow_mut().push(c));
        (container, changes)
    }

    #[test]
    fn test_class_list_skips_empty_names() {
        let mut classes = ClassList::new();
        classes.push(ROOT_CLASS);
        classes.push("");
        classes.push("  ");
        classes.push_if(false, OPEN_CLASS);
        classes.push("sidebar");
        assert_eq!(classes.to_string(), "PropertiesContainer sidebar");
        assert_eq!(classes.len(), 2);
    }

    #[test]
    fn test_class_list_keeps_repeated_names() {
        let mut classes = ClassList::new();
        classes.push(ROOT_CLASS);
        classes.push(OPEN_CLASS);
        classes.push_if(true, OPEN_CLASS);
        assert_eq!(classes.to_string(), "PropertiesContainer open open");
        assert_eq!(classes.len(), 3);
    }

    #[test]
    fn test_custom_open_class_on_closed_panel() {
        let (container, _) = recording();
        let mut container = container.with_class_name(OPEN_CLASS);

        let view = container.render(&Layout::with_panel(PanelLayout::new(false, 200.0)), bounds());
        assert_eq!(view.classes.to_string(), "PropertiesContainer open");
        assert!(!view.open);

        let view = container.render(&Layout::with_panel(PanelLayout::new(true, 200.0)), bounds());
        assert_eq!(view.classes.to_string(), "PropertiesContainer open open");
    }

    #[test]
    fn test_rendered_width_matches_layout() {
        let (mut container, _) = recording();

        for panel in [
            PanelLayout::new(true, 310.0),
            PanelLayout::new(false, 310.0),
            PanelLayout::new(false, 0.0),
            PanelLayout::new(true, 0.0),
        ] {
            let view = container.render(&Layout::with_panel(panel), bounds());
            assert_eq!(view.width, panel.rendered_width());
            assert_eq!(view.open, panel.is_rendered_open());
            assert_eq!(container.current_width(), panel.rendered_width());
        }
    }

    #[test]
    fn test_missing_panel_uses_policy_default_width() {
        let (mut container, changes) = recording();
        let policy = PanelPolicy {
            default_width: 320.0,
            ..*container.policy()
        };
        container.set_policy(policy);

        container.handle_toggle(&Layout::default());
        assert_eq!(
            changes.borrow().as_slice(),
            &[LayoutChange::properties_panel(true, 320.0)]
        );
    }

    #[test]
    fn test_render_records_current_width() {
        let (mut container, _) = recording();

        container.render(&Layout::with_panel(PanelLayout::new(true, 310.0)), bounds());
        assert_eq!(container.current_width(), 310.0);

        container.render(&Layout::with_panel(PanelLayout::new(false, 310.0)), bounds());
        assert_eq!(container.current_width(), 0.0);
    }

    #[test]
    fn test_render_classes() {
        let (container, _) = recording();
        let mut container = container.with_class_name("bpmn");

        let view = container.render(&Layout::with_panel(PanelLayout::new(true, 200.0)), bounds());
        assert_eq!(view.classes.to_string(), "PropertiesContainer bpmn open");
        assert!(view.resize_handle.is_some());
        assert_eq!(view.label, "Properties Panel");

        let view = container.render(&Layout::default(), bounds());
        assert_eq!(view.classes.to_string(), "PropertiesContainer bpmn");
        assert!(view.resize_handle.is_none());
    }

    #[test]
    fn test_forwarded_ref_receives_content_area() {
        let content = ContentRef::new();
        let (container, _) = recording();
        let mut container = container.with_forwarded_ref(content.clone());

        assert_eq!(content.current(), None);
        let view = container.render(&Layout::with_panel(PanelLayout::new(true, 200.0)), bounds());
        assert_eq!(content.current(), Some(view.content));
        assert_eq!(view.content.width, 200.0);
    }

    #[test]
    fn test_drag_move_without_session_is_ignored() {
        let (mut container, changes) = recording();
        container.handle_drag_move(Point::new(10.0, 10.0), Instant::now());
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn test_resize_start_cancels_stale_resize() {
        let mut container = PropertiesContainer::new(PanelPolicy::default());
        let start = Instant::now();

        container.render(&Layout::with_panel(PanelLayout::new(true, 250.0)), bounds());
        container.handle_resize_start(Point::new(750.0, 300.0));
        container.handle_drag_move(Point::new(700.0, 300.0), start);
        assert!(container.resize_deadline().is_some());

        container.handle_drag_end();
        container.handle_resize_start(Point::new(750.0, 300.0));
        assert_eq!(container.resize_deadline(), None);
    }

    #[test]
    fn test_set_policy_updates_threshold() {
        let (mut container, changes) = recording();
        container.set_policy(PanelPolicy {
            default_width: 300.0,
            collapse_threshold: 100.0,
            resize_throttle_ms: 0,
        });

        container.render(&Layout::with_panel(PanelLayout::new(true, 250.0)), bounds());
        container.handle_resize_start(Point::new(750.0, 0.0));
        container.handle_drag_move(Point::new(900.0, 0.0), Instant::now());

        assert_eq!(
            changes.borrow().as_slice(),
            &[LayoutChange::properties_panel(false, 300.0)]
        );
    }
}
