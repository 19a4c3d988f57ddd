//! propanel - Elm-style layout shell with a resizable properties panel
//!
//! This crate provides the properties container (a collapsible,
//! drag-resizable side panel) and the shell that owns its layout,
//! following the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod panel;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ShellConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use panel::{Layout, LayoutChange, PanelLayout, PropertiesContainer};
