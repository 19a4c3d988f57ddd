//! Geometry helpers for the panel shell
//!
//! All values are logical pixels. The properties container hugs the right
//! edge of its bounds; the toggle tab sticks out to the left of it and the
//! resize handle straddles its left border.

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Scale every component (logical → physical pixels)
    pub fn scaled(&self, factor: f32) -> Rect {
        Rect {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// Width of the vertical toggle tab
pub const TOGGLE_WIDTH: f32 = 22.0;

/// Height of the vertical toggle tab
pub const TOGGLE_HEIGHT: f32 = 140.0;

/// Offset of the toggle tab from the top of the container
pub const TOGGLE_TOP: f32 = 40.0;

/// Width of the grab area for resizing
pub const RESIZE_HANDLE_WIDTH: f32 = 8.0;

/// Rectangles making up the properties container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    /// Root element, `width` wide, flush with the right edge
    pub root: Rect,
    /// Toggle tab, left of the root
    pub toggle: Rect,
    /// Grab area on the root's left border (only while open)
    pub resize_handle: Option<Rect>,
    /// Area handed to the mounted panel content
    pub content: Rect,
}

impl PanelGeometry {
    pub fn compute(bounds: Rect, width: f32, open: bool) -> Self {
        let width = width.clamp(0.0, bounds.width.max(0.0));
        let root = Rect::new(bounds.right() - width, bounds.y, width, bounds.height);

        let toggle = Rect::new(
            root.x - TOGGLE_WIDTH,
            bounds.y + TOGGLE_TOP,
            TOGGLE_WIDTH,
            TOGGLE_HEIGHT.min((bounds.height - TOGGLE_TOP).max(0.0)),
        );

        let resize_handle = open.then(|| {
            Rect::new(
                root.x - RESIZE_HANDLE_WIDTH / 2.0,
                bounds.y,
                RESIZE_HANDLE_WIDTH,
                bounds.height,
            )
        });

        Self {
            root,
            toggle,
            resize_handle,
            content: root,
        }
    }

    /// Space left of the container for the rest of the shell
    pub fn workspace(&self, bounds: Rect) -> Rect {
        Rect::new(
            bounds.x,
            bounds.y,
            (self.root.x - bounds.x).max(0.0),
            bounds.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(10.0, 10.0));
        assert!(rect.contains(29.9, 29.9));
        assert!(!rect.contains(30.0, 15.0));
        assert!(!rect.contains(5.0, 15.0));
    }

    #[test]
    fn test_open_panel_geometry() {
        let bounds = Rect::new(0.0, 0.0, 800.0, 600.0);
        let geometry = PanelGeometry::compute(bounds, 250.0, true);

        assert_eq!(geometry.root, Rect::new(550.0, 0.0, 250.0, 600.0));
        assert_eq!(geometry.toggle.right(), 550.0);
        assert_eq!(
            geometry.resize_handle,
            Some(Rect::new(546.0, 0.0, 8.0, 600.0))
        );
        assert_eq!(geometry.workspace(bounds).width, 550.0);
    }

    #[test]
    fn test_closed_panel_geometry() {
        let bounds = Rect::new(0.0, 0.0, 800.0, 600.0);
        let geometry = PanelGeometry::compute(bounds, 0.0, false);

        assert_eq!(geometry.root.width, 0.0);
        assert_eq!(geometry.root.x, 800.0);
        assert_eq!(geometry.toggle.x, 800.0 - TOGGLE_WIDTH);
        assert_eq!(geometry.resize_handle, None);
    }

    #[test]
    fn test_width_clamped_to_bounds() {
        let bounds = Rect::new(0.0, 0.0, 300.0, 200.0);
        let geometry = PanelGeometry::compute(bounds, 900.0, true);
        assert_eq!(geometry.root.x, 0.0);
        assert_eq!(geometry.root.width, 300.0);
    }
}
