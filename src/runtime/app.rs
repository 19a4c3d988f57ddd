use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Instant;

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{CursorIcon, Window};

use propanel::commands::Cmd;
use propanel::config::ShellConfig;
use propanel::messages::{AppMsg, Msg, PanelMsg};
use propanel::model::AppModel;
use propanel::panel::{GestureEvent, Point, PointerGesture};
use propanel::update::update;
use propanel::view::hit_test::{hit_test_panel, HitTarget};
use propanel::view::Renderer;

pub struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    /// Last pointer position in logical pixels
    mouse_position: Option<Point>,
    /// Press on the toggle tab or resize handle, until release
    gesture: Option<PointerGesture<HitTarget>>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    /// Background config save, joined before exit
    save_thread: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(window_width: u32, window_height: u32, config: ShellConfig) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model: AppModel::new(config, window_width, window_height),
            renderer: None,
            window: None,
            context: None,
            mouse_position: None,
            gesture: None,
            msg_tx,
            msg_rx,
            save_thread: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("propanel")
            .with_inner_size(LogicalSize::new(1000, 700));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create softbuffer context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context)?;

        let size = window.inner_size();
        update(
            &mut self.model,
            Msg::App(AppMsg::ScaleFactorChanged(window.scale_factor())),
        );
        update(&mut self.model, Msg::resize(size.width, size.height));

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn to_logical(&self, x: f64, y: f64) -> Point {
        let scale = self.model.scale_factor.max(f64::EPSILON);
        Point::new((x / scale) as f32, (y / scale) as f32)
    }

    fn update_cursor_icon(&mut self, target: HitTarget) {
        let Some(window) = &self.window else { return };

        let dragging = self.gesture.map_or(false, |g| g.is_dragging());
        let icon = match target {
            _ if dragging => CursorIcon::ColResize,
            HitTarget::PanelResize => CursorIcon::ColResize,
            HitTarget::PanelToggle => CursorIcon::Pointer,
            HitTarget::PanelContent | HitTarget::Workspace => CursorIcon::Default,
        };
        window.set_cursor(icon);
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => update(&mut self.model, Msg::resize(size.width, size.height)),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => update(
                &mut self.model,
                Msg::App(AppMsg::ScaleFactorChanged(*scale_factor)),
            ),
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {}", e);
                }
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pos = self.to_logical(position.x, position.y);
                self.mouse_position = Some(pos);

                let view = self.model.render_panel();
                self.update_cursor_icon(hit_test_panel(&view, pos.x, pos.y));

                let gesture = self.gesture.as_mut()?;
                match gesture.moved(pos) {
                    GestureEvent::DragStarted { origin, position } => {
                        let started = update(
                            &mut self.model,
                            Msg::Panel(PanelMsg::StartResize {
                                x: origin.x,
                                y: origin.y,
                            }),
                        );
                        let moved = update(
                            &mut self.model,
                            Msg::Panel(PanelMsg::UpdateResize {
                                x: position.x,
                                y: position.y,
                                at: Instant::now(),
                            }),
                        );
                        Cmd::merge(started, moved)
                    }
                    GestureEvent::DragMoved { position } => update(
                        &mut self.model,
                        Msg::Panel(PanelMsg::UpdateResize {
                            x: position.x,
                            y: position.y,
                            at: Instant::now(),
                        }),
                    ),
                    _ => None,
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let pos = self.mouse_position?;
                let view = self.model.render_panel();
                let target = hit_test_panel(&view, pos.x, pos.y);
                if target.starts_resize() {
                    self.gesture = Some(PointerGesture::press(target, pos));
                }
                None
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                let gesture = self.gesture.take()?;
                match gesture.release() {
                    GestureEvent::Clicked(HitTarget::PanelToggle) => {
                        update(&mut self.model, Msg::toggle_panel())
                    }
                    GestureEvent::DragEnded => {
                        update(&mut self.model, Msg::Panel(PanelMsg::EndResize))
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&mut self.model)?;
        }
        Ok(())
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::SaveConfig { config, revision } => {
                let tx = self.msg_tx.clone();
                let handle = std::thread::spawn(move || {
                    let result = config.save();
                    let _ = tx.send(Msg::App(AppMsg::SaveCompleted { revision, result }));
                });
                // At most one save is in flight, so any previous thread is done
                if let Some(previous) = self.save_thread.replace(handle) {
                    let _ = previous.join();
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Apply results sent back by background work
    fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                if cmd.needs_redraw() {
                    needs_redraw = true;
                }
                self.process_cmd(cmd);
            }
        }
        needs_redraw
    }

    /// Wait for a running save, then write whatever is still unsaved
    fn save_on_exit(&mut self) {
        if let Some(handle) = self.save_thread.take() {
            if handle.join().is_err() {
                tracing::warn!("Layout save thread panicked");
            }
        }
        while let Ok(msg) = self.msg_rx.try_recv() {
            // Follow-up saves are written below instead
            let _ = update(&mut self.model, msg);
        }

        if !self.model.is_layout_dirty() {
            return;
        }
        let revision = self.model.layout_revision;
        match self.model.config.save() {
            Ok(()) => self.model.mark_saved(revision),
            Err(e) => tracing::warn!("Failed to save layout on exit: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let should_exit = matches!(event, WindowEvent::CloseRequested);
        let should_redraw = if let Some(window) = &self.window {
            if window_id == window.id() && !should_exit {
                if let Some(cmd) = self.handle_event(&event) {
                    let needs_redraw = cmd.needs_redraw();
                    self.process_cmd(cmd);
                    needs_redraw
                } else {
                    false
                }
            } else {
                false
            }
        } else {
            false
        };

        if should_exit {
            self.save_on_exit();
            event_loop.exit();
        } else if should_redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.process_async_messages() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }

        if let Some(cmd) = update(&mut self.model, Msg::tick(Instant::now())) {
            let needs_redraw = cmd.needs_redraw();
            self.process_cmd(cmd);
            if needs_redraw {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
        }

        // Sleep until a throttled resize is due
        match self.model.container.resize_deadline() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}
