//! Shell configuration persistence
//!
//! Stores panel policy and the last layout in `~/.config/propanel/config.yaml`:
//!
//! ```yaml
//! panel:
//!   default_width: 250.0
//!   collapse_threshold: 25.0
//!   resize_throttle_ms: 16
//! layout:
//!   propertiesPanel:
//!     open: true
//!     width: 310.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::panel::{
    Layout, PanelPolicy, COLLAPSE_THRESHOLD, DEFAULT_PANEL_WIDTH, DEFAULT_RESIZE_THROTTLE_MS,
};

/// Panel sizing policy as written in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default = "default_width")]
    pub default_width: f32,

    #[serde(default = "default_collapse_threshold")]
    pub collapse_threshold: f32,

    #[serde(default = "default_resize_throttle_ms")]
    pub resize_throttle_ms: u64,

    /// Extra class merged onto the container's root element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

fn default_width() -> f32 {
    DEFAULT_PANEL_WIDTH
}

fn default_collapse_threshold() -> f32 {
    COLLAPSE_THRESHOLD
}

fn default_resize_throttle_ms() -> u64 {
    DEFAULT_RESIZE_THROTTLE_MS
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            default_width: default_width(),
            collapse_threshold: default_collapse_threshold(),
            resize_throttle_ms: default_resize_throttle_ms(),
            class_name: None,
        }
    }
}

impl PanelConfig {
    pub fn policy(&self) -> PanelPolicy {
        PanelPolicy {
            default_width: self.default_width,
            collapse_threshold: self.collapse_threshold,
            resize_throttle_ms: self.resize_throttle_ms,
        }
    }

    /// Replace values that would break drag sizing
    fn sanitize(&mut self) {
        if !self.default_width.is_finite() || self.default_width <= 0.0 {
            tracing::warn!(
                "Invalid default_width {}, using {}",
                self.default_width,
                DEFAULT_PANEL_WIDTH
            );
            self.default_width = DEFAULT_PANEL_WIDTH;
        }
        if !self.collapse_threshold.is_finite() || self.collapse_threshold < 0.0 {
            tracing::warn!(
                "Invalid collapse_threshold {}, using {}",
                self.collapse_threshold,
                COLLAPSE_THRESHOLD
            );
            self.collapse_threshold = COLLAPSE_THRESHOLD;
        }
    }
}

/// Shell configuration that persists across sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub panel: PanelConfig,

    /// Layout as last accepted by the shell
    #[serde(default)]
    pub layout: Layout,
}

impl ShellConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<ShellConfig>(&content) {
                Ok(mut config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitize();
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file, replacing it atomically
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        // Replace atomically through a sibling temp file
        let tmp_path = path.with_extension("yaml.tmp");
        std::fs::write(&tmp_path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", tmp_path.display(), e))?;
        std::fs::rename(&tmp_path, path)
            .map_err(|e| format!("Failed to replace config at {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    fn sanitize(&mut self) {
        self.panel.sanitize();
        let fallback = self.panel.default_width;
        self.layout.properties_panel = self
            .layout
            .properties_panel
            .map(|panel| panel.sanitized(fallback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::PanelLayout;

    #[test]
    fn test_default_policy_matches_constants() {
        let policy = PanelConfig::default().policy();
        assert_eq!(policy, PanelPolicy::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: ShellConfig = serde_yaml::from_str("panel:\n  collapse_threshold: 40.0\n").unwrap();
        assert_eq!(config.panel.collapse_threshold, 40.0);
        assert_eq!(config.panel.default_width, 250.0);
        assert_eq!(config.panel.resize_throttle_ms, 16);
        assert_eq!(config.layout.properties_panel, None);
    }

    #[test]
    fn test_sanitize_fixes_negative_values() {
        let mut config = ShellConfig {
            panel: PanelConfig {
                default_width: -1.0,
                collapse_threshold: f32::NAN,
                ..PanelConfig::default()
            },
            layout: Layout::with_panel(PanelLayout::new(true, -80.0)),
        };
        config.sanitize();
        assert_eq!(config.panel.default_width, 250.0);
        assert_eq!(config.panel.collapse_threshold, 25.0);
        assert_eq!(
            config.layout.properties_panel,
            Some(PanelLayout::new(true, 250.0))
        );
    }
}
