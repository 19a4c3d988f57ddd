//! App message handlers (window events, layout ownership, timers)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;
use crate::tracing::LayoutSnapshot;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.window_size = (width, height);
            model.render_panel();
            Some(Cmd::Redraw)
        }

        AppMsg::ScaleFactorChanged(scale_factor) => {
            model.scale_factor = scale_factor;
            model.render_panel();
            Some(Cmd::Redraw)
        }

        AppMsg::LayoutChanged(change) => {
            let policy = *model.container.policy();
            let before = LayoutSnapshot::from_panel(&model.layout.resolved_panel(&policy));

            model.layout.apply(change);
            model.config.layout = model.layout;
            model.layout_revision += 1;

            // Echo the accepted layout back into the container
            model.render_panel();

            let after = LayoutSnapshot::from_panel(&model.layout.resolved_panel(&policy));
            if let Some(diff) = before.diff(&after) {
                tracing::debug!(target: "layout", %diff, "layout accepted");
            }

            Some(Cmd::Redraw)
        }

        AppMsg::Tick(now) => {
            if !model.container.poll_resize(now) {
                return None;
            }
            let accepted = super::accept_proposals(model);
            Cmd::merge(accepted, super::persist_when_idle(model))
        }

        AppMsg::SaveCompleted { revision, result } => {
            if model.save_in_flight == Some(revision) {
                model.save_in_flight = None;
            }
            match result {
                Ok(()) => model.mark_saved(revision),
                Err(e) => {
                    // Layout stays dirty; the exit save retries
                    tracing::warn!("Failed to save layout revision {}: {}", revision, e);
                    return None;
                }
            }
            // Pick up layouts accepted while the save was running
            super::persist_when_idle(model)
        }
    }
}
