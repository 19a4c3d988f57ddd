//! Command-line argument parsing for the panel shell
//!
//! Supports:
//! - Forcing the panel open and choosing its width
//! - Overriding the resize throttle interval
//! - Discarding the persisted layout

use clap::Parser;

use crate::config::ShellConfig;
use crate::panel::{Layout, PanelLayout};

/// A layout shell with a resizable properties panel
#[derive(Parser, Debug)]
#[command(
    name = "propanel",
    version,
    about = "A layout shell with a resizable properties panel"
)]
pub struct CliArgs {
    /// Start with the properties panel open
    #[arg(long)]
    pub open: bool,

    /// Initial panel width in logical pixels
    #[arg(long, value_name = "PX")]
    pub width: Option<f32>,

    /// Minimum spacing between resize updates, in milliseconds
    #[arg(long, value_name = "MS")]
    pub throttle_ms: Option<u64>,

    /// Ignore the persisted layout and start from the default
    #[arg(long)]
    pub reset_layout: bool,

    /// Extra class name for the panel's root element
    #[arg(long = "class", value_name = "NAME")]
    pub class_name: Option<String>,
}

/// Overrides derived from CLI arguments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartupConfig {
    pub open: bool,
    pub width: Option<f32>,
    pub throttle_ms: Option<u64>,
    pub reset_layout: bool,
    pub class_name: Option<String>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if let Some(width) = self.width {
            if !width.is_finite() || width < 0.0 {
                return Err(format!("Invalid panel width: {}", width));
            }
        }

        Ok(StartupConfig {
            open: self.open,
            width: self.width,
            throttle_ms: self.throttle_ms,
            reset_layout: self.reset_layout,
            class_name: self.class_name,
        })
    }
}

impl StartupConfig {
    /// Apply the overrides on top of a loaded configuration
    pub fn apply(&self, config: &mut ShellConfig) {
        if let Some(ms) = self.throttle_ms {
            config.panel.resize_throttle_ms = ms;
        }
        if let Some(class_name) = &self.class_name {
            config.panel.class_name = Some(class_name.clone());
        }

        if self.reset_layout {
            config.layout = Layout::default();
        }

        if self.open || self.width.is_some() {
            let mut panel = config
                .layout
                .properties_panel
                .unwrap_or(PanelLayout::new(false, config.panel.default_width));
            if self.open {
                panel.open = true;
            }
            if let Some(width) = self.width {
                panel.width = width;
            }
            config.layout.properties_panel = Some(panel);
        }
    }
}
