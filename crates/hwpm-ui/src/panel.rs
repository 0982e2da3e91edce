//! Panel widget: bordered container with an optional title in the top edge.

use hwpm_types::backend::Color;
use hwpm_types::error::Result;

use crate::context::DrawContext;
use crate::layout::Rect;
use crate::widget::Widget;

/// A container with background, optional border, and optional title.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    /// Optional background color.
    pub background: Option<Color>,
    /// Optional border (thickness, color).
    pub border: Option<(u16, Color)>,
    /// Title drawn over the top border.
    pub title: Option<String>,
    /// Title color.
    pub title_color: Option<Color>,
}

impl Panel {
    /// Create a panel with theme defaults.
    pub fn themed(ctx: &DrawContext<'_>) -> Self {
        Self {
            background: Some(ctx.theme.surface),
            border: Some((1, ctx.theme.border)),
            title: None,
            title_color: Some(ctx.theme.text_secondary),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_border(mut self, color: Color) -> Self {
        self.border = Some((1, color));
        self
    }

    /// Area left for content: one glyph in from each side, one line down
    /// from the top and bottom.
    pub fn content_rect(ctx: &DrawContext<'_>, outer: Rect) -> Rect {
        outer.inset(ctx.char_width(), ctx.line_height())
    }

    /// Draw the panel into `rect`.
    pub fn draw_in(&self, ctx: &mut DrawContext<'_>, rect: Rect) -> Result<()> {
        self.draw(ctx, rect.x, rect.y, rect.w, rect.h)
    }
}

impl Widget for Panel {
    fn measure(&self, _ctx: &DrawContext<'_>, available_w: u32, available_h: u32) -> (u32, u32) {
        (available_w, available_h)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        if let Some(bg) = self.background {
            ctx.backend.fill_rect(x, y, w, h, bg)?;
        }
        if let Some((bw, bc)) = self.border {
            ctx.backend.stroke_rect(x, y, w, h, bw, bc)?;
        }
        if let Some(title) = &self.title {
            let cw = ctx.char_width();
            // " TITLE " starting two cells in, never past the right corner.
            let padded = format!(" {title} ");
            let max_w = w.saturating_sub(cw * 3);
            let color = self.title_color.unwrap_or(ctx.theme.text_secondary);
            ctx.label_fit(&padded, x + (cw * 2) as i32, y, max_w, color)?;
        }
        Ok(())
    }
}
