//! Runtime module - winit/platform integration
//!
//! This module contains platform-specific code for running the shell:
//! - `app` - ApplicationHandler, window management and pointer dispatch

pub mod app;

pub use app::App;
