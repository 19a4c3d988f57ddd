//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use propanel::config::ShellConfig;
use propanel::model::AppModel;
use propanel::panel::{Layout, LayoutChange, PanelLayout, PanelPolicy, PropertiesContainer};
use propanel::view::geometry::Rect;

/// Bounds used for container renders in tests
pub fn test_bounds() -> Rect {
    Rect::new(0.0, 0.0, 1000.0, 700.0)
}

/// Policy with the default sizes and no throttling
pub fn unthrottled_policy() -> PanelPolicy {
    PanelPolicy {
        resize_throttle_ms: 0,
        ..PanelPolicy::default()
    }
}

/// Container whose proposals are recorded into the returned log
pub fn recording_container(
    policy: PanelPolicy,
) -> (PropertiesContainer, Rc<RefCell<Vec<LayoutChange>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let container = PropertiesContainer::new(policy).on_layout_changed(move |change| {
        sink.borrow_mut().push(change);
    });
    (container, log)
}

/// Layout with only the properties panel set
pub fn panel(open: bool, width: f32) -> Layout {
    Layout::with_panel(PanelLayout::new(open, width))
}

/// Shell model without throttling, at 1000x700 with scale factor 1
pub fn test_model(layout: Layout) -> AppModel {
    let mut config = ShellConfig::default();
    config.panel.resize_throttle_ms = 0;
    config.layout = layout;
    AppModel::new(config, 1000, 700)
}
