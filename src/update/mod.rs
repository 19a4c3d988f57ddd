//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod panel;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use panel::update_panel;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Panel(m) => panel::update_panel(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Accept every layout the container proposed since the last update.
///
/// Each proposal goes through `AppMsg::LayoutChanged`, the same path an
/// external layout change would take.
pub(crate) fn accept_proposals(model: &mut AppModel) -> Option<Cmd> {
    use crate::messages::AppMsg;

    let mut result = None;
    for change in model.take_proposals() {
        result = app::update_app(model, AppMsg::LayoutChanged(change)).or(result);
    }
    result
}

/// Save the accepted layout once no drag is in progress.
///
/// Only one save runs at a time; a layout accepted while a save is running
/// is picked up when that save completes.
pub(crate) fn persist_when_idle(model: &mut AppModel) -> Option<Cmd> {
    if !model.is_layout_dirty()
        || model.container.is_dragging()
        || model.save_in_flight.is_some()
    {
        return None;
    }

    let revision = model.layout_revision;
    model.save_in_flight = Some(revision);
    Some(Cmd::SaveConfig {
        config: model.config.clone(),
        revision,
    })
}

/// Traced update wrapper (debug builds only)
///
/// Filters out noisy periodic messages (ticks, drag moves) from logging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::{AppMsg, PanelMsg};

    let is_noisy = matches!(
        &msg,
        Msg::App(AppMsg::Tick(_)) | Msg::Panel(PanelMsg::UpdateResize { .. })
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    update_inner(model, msg)
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Panel::Toggle`
/// - `App::Resize(1920, 1080)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Panel(m) => format!("Panel::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
