//! View module - softbuffer rendering for the panel shell
//!
//! - `geometry` - rectangles and the container's layout geometry
//! - `hit_test` - pointer target resolution
//! - `frame` - pixel drawing primitives

pub mod frame;
pub mod geometry;

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Result;
use softbuffer::Surface;
use winit::window::Window;

use crate::model::AppModel;
use crate::panel::ContainerView;

use self::frame::Frame;
use self::geometry::Rect;

/// Colors used by the shell (0xAARRGGBB)
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub workspace: u32,
    pub panel: u32,
    pub border: u32,
    pub toggle: u32,
    pub toggle_open: u32,
    pub resize_handle: u32,
    pub content_row: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            workspace: 0xFF1E1F22,
            panel: 0xFF2B2D30,
            border: 0xFF3C3F41,
            toggle: 0xFF43454A,
            toggle_open: 0xFF3574F0,
            resize_handle: 0x403574F0,
            content_row: 0xFF35373B,
        }
    }
}

/// Height of a placeholder property row in the content area
const CONTENT_ROW_HEIGHT: f32 = 24.0;

/// Inset of placeholder rows from the content edges
const CONTENT_PADDING: f32 = 12.0;

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
    palette: Palette,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let (width, height) = {
            let size = window.inner_size();
            (size.width, size.height)
        };

        let surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        let mut renderer = Self {
            surface,
            width,
            height,
            palette: Palette::default(),
        };
        renderer.resize(width, height)?;
        Ok(renderer)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Resize the surface to new physical dimensions
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width;
        self.height = height;

        let one = NonZeroU32::MIN;
        self.surface
            .resize(
                NonZeroU32::new(width).unwrap_or(one),
                NonZeroU32::new(height).unwrap_or(one),
            )
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))
    }

    /// Render one frame and return the container view it was drawn from
    pub fn render(&mut self, model: &mut AppModel) -> Result<ContainerView> {
        if (self.width, self.height) != model.window_size {
            let (width, height) = model.window_size;
            self.resize(width, height)?;
        }

        let view = model.render_panel();
        let content = model.content.current();
        let scale = model.scale_factor as f32;
        let palette = self.palette;
        let (width, height) = (self.width as usize, self.height as usize);

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;

        {
            let mut frame = Frame::new(&mut buffer, width, height);
            draw_shell(&mut frame, &view, content, scale, &palette);
        }

        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present frame: {}", e))?;

        Ok(view)
    }
}

/// Draw the workspace and the properties container into a frame
pub fn draw_shell(
    frame: &mut Frame,
    view: &ContainerView,
    content: Option<Rect>,
    scale: f32,
    palette: &Palette,
) {
    frame.clear(palette.workspace);

    let root = view.root.scaled(scale);
    frame.fill_rect(root, palette.panel);
    if view.open {
        frame.vline(root.x, root.y, root.height, scale.max(1.0), palette.border);
    }

    if let Some(content) = content {
        draw_content_rows(frame, content.scaled(scale), scale, palette);
    }

    if let Some(handle) = view.resize_handle {
        frame.blend_rect(handle.scaled(scale), palette.resize_handle);
    }

    let toggle = view.toggle.scaled(scale);
    let toggle_color = if view.open {
        palette.toggle_open
    } else {
        palette.toggle
    };
    frame.fill_rect(toggle, toggle_color);
    frame.stroke_rect(toggle, palette.border);
}

/// Placeholder rows standing in for mounted panel content
fn draw_content_rows(frame: &mut Frame, content: Rect, scale: f32, palette: &Palette) {
    let padding = CONTENT_PADDING * scale;
    let row_height = CONTENT_ROW_HEIGHT * scale;
    let row_width = content.width - padding * 2.0;
    if row_width <= 0.0 {
        return;
    }

    let mut y = content.y + padding;
    while y + row_height <= content.bottom() - padding {
        frame.fill_rect(
            Rect::new(content.x + padding, y, row_width, row_height - 6.0 * scale),
            palette.content_row,
        );
        y += row_height;
    }
}
