//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::time::Instant;

use crate::panel::LayoutChange;

/// Pointer interactions with the properties container
#[derive(Debug, Clone)]
pub enum PanelMsg {
    /// Toggle tab clicked
    Toggle,
    /// Drag started on the toggle tab or resize handle (logical coordinates)
    StartResize { x: f32, y: f32 },
    /// Pointer moved during a resize drag
    UpdateResize { x: f32, y: f32, at: Instant },
    /// Pointer released after a resize drag
    EndResize,
}

/// Shell-level messages (window, layout ownership, timers)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Window resized (physical pixels)
    Resize(u32, u32),
    /// Display scale factor changed
    ScaleFactorChanged(f64),
    /// The container proposed a new layout; the shell accepts it
    LayoutChanged(LayoutChange),
    /// Deliver timed work that is due (throttled resizes)
    Tick(Instant),
    /// A background config save finished
    SaveCompleted {
        revision: u64,
        result: Result<(), String>,
    },
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Properties container messages
    Panel(PanelMsg),
    /// Shell messages
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a resize message
    pub fn resize(width: u32, height: u32) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }

    pub fn toggle_panel() -> Self {
        Msg::Panel(PanelMsg::Toggle)
    }

    pub fn tick(at: Instant) -> Self {
        Msg::App(AppMsg::Tick(at))
    }
}
