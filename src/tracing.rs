//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging layout
//! proposals and drag interactions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug,message=debug` - scoped filtering
//! - `RUST_LOG=propanel::panel=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/propanel/logs/propanel.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::panel::PanelLayout;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/propanel/logs/propanel.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "propanel.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the panel state for diffing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSnapshot {
    pub open: bool,
    pub width: f32,
    pub rendered_width: f32,
}

impl LayoutSnapshot {
    pub fn from_panel(panel: &PanelLayout) -> Self {
        Self {
            open: panel.open,
            width: panel.width,
            rendered_width: panel.rendered_width(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.open != other.open {
            changes.push(format!("open: {} → {}", self.open, other.open));
        }
        if self.width != other.width {
            changes.push(format!("width: {} → {}", self.width, other.width));
        }
        if self.rendered_width != other.rendered_width {
            changes.push(format!(
                "rendered: {} → {}",
                self.rendered_width, other.rendered_width
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_diff() {
        let before = LayoutSnapshot::from_panel(&PanelLayout::new(false, 250.0));
        let after = LayoutSnapshot::from_panel(&PanelLayout::new(true, 250.0));

        assert_eq!(before.diff(&before), None);
        assert_eq!(
            before.diff(&after).as_deref(),
            Some("open: false → true; rendered: 0 → 250")
        );
    }
}
