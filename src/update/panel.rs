//! Properties panel update handlers
//!
//! Routes pointer interactions to the container, then accepts whatever
//! layout it proposed.

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::AppModel;
use crate::panel::Point;

/// Update function for panel messages
pub fn update_panel(model: &mut AppModel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::Toggle => {
            model.container.handle_toggle(&model.layout);
        }

        PanelMsg::StartResize { x, y } => {
            model.container.handle_resize_start(Point::new(x, y));
        }

        PanelMsg::UpdateResize { x, y, at } => {
            model.container.handle_drag_move(Point::new(x, y), at);
        }

        PanelMsg::EndResize => {
            model.container.handle_drag_end();
        }
    }

    let accepted = super::accept_proposals(model);
    Cmd::merge(accepted, super::persist_when_idle(model))
}
