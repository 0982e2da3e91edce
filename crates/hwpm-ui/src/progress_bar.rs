//! ProgressBar widget.

use hwpm_types::error::Result;

use crate::context::DrawContext;
use crate::widget::Widget;

/// A horizontal progress indicator.
pub struct ProgressBar {
    /// Progress value (0.0 to 1.0).
    pub value: f32,
    /// Whether to show percentage label to the right of the bar.
    pub show_label: bool,
}

impl ProgressBar {
    /// Create a new progress bar (value clamped to 0.0-1.0).
    pub fn new(value: f32) -> Self {
        Self {
            value: if value.is_nan() {
                0.0
            } else {
                value.clamp(0.0, 1.0)
            },
            show_label: false,
        }
    }

    /// Progress as `done` out of `total` steps. A zero total counts as done.
    pub fn steps(done: usize, total: usize) -> Self {
        if total == 0 {
            return Self::new(1.0);
        }
        Self::new(done as f32 / total as f32)
    }

    pub fn with_label(mut self) -> Self {
        self.show_label = true;
        self
    }

    /// Whole-number percentage.
    pub fn percent(&self) -> u32 {
        (self.value * 100.0).round() as u32
    }
}

impl Widget for ProgressBar {
    fn measure(&self, ctx: &DrawContext<'_>, available_w: u32, _available_h: u32) -> (u32, u32) {
        (available_w, ctx.line_height())
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        let label = format!("{:>3}%", self.percent());
        let label_w = if self.show_label {
            ctx.measure_text(&label) + ctx.char_width()
        } else {
            0
        };
        let track_w = w.saturating_sub(label_w);
        if track_w > 0 {
            ctx.backend
                .fill_rect(x, y, track_w, h, ctx.theme.accent_subtle)?;
            let fill_w = (track_w as f32 * self.value) as u32;
            if fill_w > 0 {
                ctx.backend.fill_rect(x, y, fill_w, h, ctx.theme.accent)?;
            }
        }
        if self.show_label {
            let lx = x + (track_w + ctx.char_width()) as i32;
            ctx.label_colored(&label, lx, y, ctx.theme.text_accent)?;
        }
        Ok(())
    }
}
