//! Theme-aware drawing context.
//!
//! All hwpm-ui widgets render through `DrawContext`, which wraps a
//! `&mut dyn SdiBackend` and provides access to the active theme.

use hwpm_types::backend::{Color, SdiBackend};
use hwpm_types::error::Result;

use crate::layout::Rect;
use crate::theme::Theme;

/// Drawing context wrapping a backend and theme.
pub struct DrawContext<'a> {
    pub backend: &'a mut dyn SdiBackend,
    pub theme: &'a Theme,
}

impl<'a> DrawContext<'a> {
    pub fn new(backend: &'a mut dyn SdiBackend, theme: &'a Theme) -> Self {
        Self { backend, theme }
    }

    // -- Convenience drawing methods --

    /// Draw a themed label with default font size and primary text color.
    pub fn label(&mut self, text: &str, x: i32, y: i32) -> Result<()> {
        self.backend
            .draw_text(text, x, y, self.theme.font_size_md, self.theme.text_primary)
    }

    /// Draw a label in a specific color at the default font size.
    pub fn label_colored(&mut self, text: &str, x: i32, y: i32, color: Color) -> Result<()> {
        self.backend
            .draw_text(text, x, y, self.theme.font_size_md, color)
    }

    /// Draw a label truncated to `max_w` pixels.
    pub fn label_fit(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        max_w: u32,
        color: Color,
    ) -> Result<()> {
        let fitted = self.fit_text(text, max_w);
        if fitted.is_empty() {
            return Ok(());
        }
        self.label_colored(fitted, x, y, color)
    }

    /// Draw a label horizontally centered within `area`, on row `y`.
    pub fn label_centered(&mut self, text: &str, area: Rect, y: i32, color: Color) -> Result<()> {
        let fitted = self.fit_text(text, area.w);
        let tw = self.measure_text(fitted);
        let x = area.x + ((area.w.saturating_sub(tw)) / 2) as i32;
        self.label_colored(fitted, x, y, color)
    }

    /// Draw a horizontal divider line.
    pub fn divider_h(&mut self, x: i32, y: i32, w: u32) -> Result<()> {
        self.backend
            .draw_line(x, y, x + w as i32, y, 1, self.theme.border)
    }

    /// Measure text width using theme default font size.
    pub fn measure_text(&self, text: &str) -> u32 {
        self.backend.measure_text(text, self.theme.font_size_md)
    }

    /// Height of one line of text at the default font size.
    pub fn line_height(&self) -> u32 {
        self.backend
            .measure_text_height(self.theme.font_size_md)
            .max(1)
    }

    /// Width of one character cell at the default font size.
    pub fn char_width(&self) -> u32 {
        self.measure_text("M").max(1)
    }

    /// Longest prefix of `text` (on char boundaries) that fits in `max_w`.
    pub fn fit_text<'t>(&self, text: &'t str, max_w: u32) -> &'t str {
        if self.measure_text(text) <= max_w {
            return text;
        }
        let mut end = 0;
        for (i, c) in text.char_indices() {
            let next = i + c.len_utf8();
            if self.measure_text(&text[..next]) > max_w {
                break;
            }
            end = next;
        }
        &text[..end]
    }

    /// Restrict drawing to `rect`.
    pub fn clip(&mut self, rect: Rect) -> Result<()> {
        self.backend.set_clip_rect(rect.x, rect.y, rect.w, rect.h)
    }

    /// Remove any clip set by [`clip`](Self::clip).
    pub fn unclip(&mut self) -> Result<()> {
        self.backend.reset_clip_rect()
    }
}
