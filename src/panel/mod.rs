//! Properties panel - collapsible, drag-resizable side panel
//!
//! ## Architecture
//!
//! - `PanelLayout` / `Layout`: open/width state, owned by the parent shell
//! - `LayoutChange`: a layout proposal sent back to the parent
//! - `PanelPolicy`: default width, collapse threshold and resize throttle
//! - `PropertiesContainer`: renders the panel and turns toggle clicks and
//!   drags into layout proposals
//! - `Throttle`: coalesces rapid resize events
//! - `DragSession` / `PointerGesture`: pointer tracking for drags
//!
//! ## Integration
//!
//! - Hit-testing via `HitTarget::PanelToggle` / `HitTarget::PanelResize` in `view/hit_test.rs`
//! - Pointer dispatch via `Msg::Panel` in `runtime/app.rs`
//! - Proposals come back to the model as `AppMsg::LayoutChanged`

mod container;
mod drag;
mod layout;
mod throttle;

pub use container::{
    ClassList, ContainerView, ContentRef, LayoutCallback, PropertiesContainer, OPEN_CLASS,
    ROOT_CLASS, TOGGLE_LABEL,
};
pub use drag::{DragDelta, DragSession, GestureEvent, Point, PointerGesture};
pub use layout::{
    Layout, LayoutChange, PanelLayout, PanelPolicy, COLLAPSE_THRESHOLD, DEFAULT_PANEL_WIDTH,
    DEFAULT_RESIZE_THROTTLE_MS,
};
pub use throttle::Throttle;
