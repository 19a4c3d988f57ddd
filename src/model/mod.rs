//! Application model - the complete state of the panel shell
//!
//! The shell is the layout owner. It holds the authoritative `Layout`, hands
//! it to the properties container on every render, and accepts the
//! container's proposals through a channel wired into the container's
//! change callback.

use std::sync::mpsc::{self, Receiver};

use crate::config::ShellConfig;
use crate::panel::{ContainerView, ContentRef, Layout, LayoutChange, PropertiesContainer};
use crate::view::geometry::Rect;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Authoritative layout, owned by the shell
    pub layout: Layout,
    /// The properties container (view/controller for the side panel)
    pub container: PropertiesContainer,
    /// Content area of the container, refreshed on every render
    pub content: ContentRef,
    /// Persisted shell configuration
    pub config: ShellConfig,
    /// Window dimensions (physical pixels)
    pub window_size: (u32, u32),
    /// Display scale factor (physical / logical)
    pub scale_factor: f64,
    /// Bumped every time the shell accepts a layout
    pub layout_revision: u64,
    /// Latest revision known to be on disk
    pub saved_revision: u64,
    /// Revision being written by a background save
    pub save_in_flight: Option<u64>,
    proposals: Receiver<LayoutChange>,
}

impl AppModel {
    /// Create a new model with the given physical window size
    pub fn new(config: ShellConfig, window_width: u32, window_height: u32) -> Self {
        let (tx, proposals) = mpsc::channel();
        let content = ContentRef::new();

        let mut container = PropertiesContainer::new(config.panel.policy())
            .with_forwarded_ref(content.clone())
            .on_layout_changed(move |change| {
                // Receiver lives as long as the model owning this container
                let _ = tx.send(change);
            });
        if let Some(class_name) = &config.panel.class_name {
            container = container.with_class_name(class_name.clone());
        }

        let mut model = Self {
            layout: config.layout,
            container,
            content,
            config,
            window_size: (window_width, window_height),
            scale_factor: 1.0,
            layout_revision: 0,
            saved_revision: 0,
            save_in_flight: None,
            proposals,
        };
        model.render_panel();
        model
    }

    /// Window bounds in logical pixels
    pub fn bounds(&self) -> Rect {
        let scale = self.scale_factor.max(f64::EPSILON);
        Rect::new(
            0.0,
            0.0,
            (self.window_size.0 as f64 / scale) as f32,
            (self.window_size.1 as f64 / scale) as f32,
        )
    }

    /// Render the container against the current layout
    pub fn render_panel(&mut self) -> ContainerView {
        let bounds = self.bounds();
        self.container.render(&self.layout, bounds)
    }

    /// Whether an accepted layout has not reached disk yet.
    ///
    /// Stays true while a background save is still running.
    pub fn is_layout_dirty(&self) -> bool {
        self.layout_revision != self.saved_revision
    }

    /// Record that the config holding `revision` was written
    pub fn mark_saved(&mut self, revision: u64) {
        self.saved_revision = self.saved_revision.max(revision);
    }

    /// Drain layout proposals made by the container since the last call
    pub fn take_proposals(&mut self) -> Vec<LayoutChange> {
        self.proposals.try_iter().collect()
    }
}
