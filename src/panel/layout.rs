//! Panel layout state
//!
//! The layout is owned by the parent shell. The container only reads it during
//! render and proposes replacements through a `LayoutChange`.

use serde::{Deserialize, Serialize};

/// Width a panel gets when no width has been chosen yet, in logical pixels
pub const DEFAULT_PANEL_WIDTH: f32 = 250.0;

/// Drag widths at or below this value collapse the panel
pub const COLLAPSE_THRESHOLD: f32 = 25.0;

/// Default resize throttle interval (roughly one animation frame)
pub const DEFAULT_RESIZE_THROTTLE_MS: u64 = 16;

/// Open/width descriptor for the properties panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelLayout {
    /// Whether the panel is expanded
    #[serde(default)]
    pub open: bool,

    /// Stored width in logical pixels, kept while the panel is closed
    #[serde(default = "default_width")]
    pub width: f32,
}

fn default_width() -> f32 {
    DEFAULT_PANEL_WIDTH
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            open: false,
            width: DEFAULT_PANEL_WIDTH,
        }
    }
}

impl PanelLayout {
    pub fn new(open: bool, width: f32) -> Self {
        Self { open, width }
    }

    /// Whether the panel renders as open.
    ///
    /// A stored width of exactly zero counts as open.
    pub fn is_rendered_open(&self) -> bool {
        self.open || self.width == 0.0
    }

    /// Width the panel occupies on screen (zero while closed)
    pub fn rendered_width(&self) -> f32 {
        if self.is_rendered_open() {
            self.width
        } else {
            0.0
        }
    }

    /// Same layout with the open flag inverted and the width kept
    pub fn toggled(&self) -> Self {
        Self {
            open: !self.open,
            width: self.width,
        }
    }

    /// Replace widths that cannot be rendered (negative, NaN, infinite)
    pub fn sanitized(self, fallback_width: f32) -> Self {
        if self.width.is_finite() && self.width >= 0.0 {
            self
        } else {
            Self {
                open: self.open,
                width: fallback_width,
            }
        }
    }
}

/// Layout state supplied by the parent shell
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(
        rename = "propertiesPanel",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub properties_panel: Option<PanelLayout>,
}

impl Layout {
    pub fn with_panel(panel: PanelLayout) -> Self {
        Self {
            properties_panel: Some(panel),
        }
    }

    /// Properties panel layout, or the policy's default when the parent has none
    pub fn resolved_panel(&self, policy: &PanelPolicy) -> PanelLayout {
        self.properties_panel
            .unwrap_or_else(|| policy.default_layout())
    }

    /// Merge a proposed change into this layout
    pub fn apply(&mut self, change: LayoutChange) {
        self.properties_panel = Some(change.properties_panel);
    }
}

/// Partial layout proposed to the parent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutChange {
    #[serde(rename = "propertiesPanel")]
    pub properties_panel: PanelLayout,
}

impl LayoutChange {
    pub fn properties_panel(open: bool, width: f32) -> Self {
        Self {
            properties_panel: PanelLayout::new(open, width),
        }
    }
}

/// Sizing policy for drag interactions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPolicy {
    /// Width restored when a drag collapses the panel
    pub default_width: f32,
    /// Widths at or below this collapse the panel during a drag
    pub collapse_threshold: f32,
    /// Minimum spacing between resize notifications, in milliseconds
    pub resize_throttle_ms: u64,
}

impl Default for PanelPolicy {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_PANEL_WIDTH,
            collapse_threshold: COLLAPSE_THRESHOLD,
            resize_throttle_ms: DEFAULT_RESIZE_THROTTLE_MS,
        }
    }
}

impl PanelPolicy {
    /// Layout resulting from dragging the panel edge to `new_width`
    pub fn resize_to(&self, new_width: f32) -> PanelLayout {
        let open = new_width > self.collapse_threshold;
        let width = if open { new_width } else { self.default_width };
        PanelLayout { open, width }
    }

    /// Default layout under this policy
    pub fn default_layout(&self) -> PanelLayout {
        PanelLayout {
            open: false,
            width: self.default_width,
        }
    }
}
