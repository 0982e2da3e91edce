//! Backend trait definitions.
//!
//! Every output target implements `SdiBackend`. The core framework dispatches
//! all drawing through this trait boundary -- it never touches a terminal,
//! window, or framebuffer directly.
//!
//! Core methods are required. The few extended primitives (`stroke_rect`,
//! `draw_line`, `measure_text_height`) have default implementations built
//! on `fill_rect`, so a minimal backend only implements the core set.

use crate::error::Result;

/// A color in RGBA format (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Return the same color with a different alpha value.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Perceived brightness (ITU-R BT.601 weights), 0-255.
    pub fn luminance(self) -> u8 {
        let l = 299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32;
        (l / 1000) as u8
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
}

/// Rendering backend trait.
///
/// # Core Methods (required)
///
/// `init`, `clear`, `fill_rect`, `draw_text`, `swap_buffers`,
/// `set_clip_rect`, `reset_clip_rect`, `measure_text`, and `shutdown`.
///
/// # Extended Primitives (optional, with defaults)
///
/// Backends may override these for native rendering. The defaults
/// approximate using `fill_rect`.
pub trait SdiBackend {
    // -----------------------------------------------------------------------
    // Core methods (required -- no default implementations)
    // -----------------------------------------------------------------------

    /// Initialize the rendering subsystem.
    fn init(&mut self, width: u32, height: u32) -> Result<()>;

    /// Clear the screen to a solid color.
    fn clear(&mut self, color: Color) -> Result<()>;

    /// Draw a filled rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()>;

    /// Draw text at the given position. The backend chooses its available font.
    /// `font_size` is a hint in pixels; backends may approximate.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: u16, color: Color)
    -> Result<()>;

    /// Present the current frame to the display.
    fn swap_buffers(&mut self) -> Result<()>;

    /// Set the clipping rectangle. Drawing outside it is discarded.
    fn set_clip_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()>;

    /// Reset clipping to the full screen.
    fn reset_clip_rect(&mut self) -> Result<()>;

    /// Measure the width of a text string at the given font size, in pixels.
    fn measure_text(&self, text: &str, font_size: u16) -> u32;

    /// Shut down the rendering subsystem and release resources.
    fn shutdown(&mut self) -> Result<()>;

    // -----------------------------------------------------------------------
    // Extended primitives
    // -----------------------------------------------------------------------

    /// Draw the outline of a rectangle.
    ///
    /// `stroke_width` is drawn inward from the given bounds.
    fn stroke_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        stroke_width: u16,
        color: Color,
    ) -> Result<()> {
        let sw = stroke_width as u32;
        self.fill_rect(x, y, w, sw, color)?;
        self.fill_rect(x, y + h as i32 - sw as i32, w, sw, color)?;
        self.fill_rect(x, y + sw as i32, sw, h.saturating_sub(sw * 2), color)?;
        self.fill_rect(
            x + w as i32 - sw as i32,
            y + sw as i32,
            sw,
            h.saturating_sub(sw * 2),
            color,
        )?;
        Ok(())
    }

    /// Draw a line between two points.
    ///
    /// Only axis-aligned lines have a default rendering; backends must
    /// override for diagonal support.
    fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: u16,
        color: Color,
    ) -> Result<()> {
        if y1 == y2 {
            let lx = x1.min(x2);
            let w = (x1 - x2).unsigned_abs();
            self.fill_rect(lx, y1, w.max(1), width as u32, color)?;
        } else if x1 == x2 {
            let ly = y1.min(y2);
            let h = (y1 - y2).unsigned_abs();
            self.fill_rect(x1, ly, width as u32, h.max(1), color)?;
        }
        Ok(())
    }

    /// Height of one line of text at the given font size, in pixels.
    fn measure_text_height(&self, font_size: u16) -> u32 {
        font_size as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        let c = Color::rgb(1, 2, 3);
        assert_eq!(c.a, 255);
        assert_eq!(c.with_alpha(10).a, 10);
    }

    #[test]
    fn luminance_extremes() {
        assert_eq!(Color::BLACK.luminance(), 0);
        assert_eq!(Color::WHITE.luminance(), 255);
    }

    #[test]
    fn luminance_weights_green_highest() {
        let r = Color::rgb(200, 0, 0).luminance();
        let g = Color::rgb(0, 200, 0).luminance();
        let b = Color::rgb(0, 0, 200).luminance();
        assert!(g > r);
        assert!(r > b);
    }

    /// Records fill_rect calls to check the default primitives.
    struct Recorder {
        fills: Vec<(i32, i32, u32, u32)>,
    }

    impl SdiBackend for Recorder {
        fn init(&mut self, _w: u32, _h: u32) -> Result<()> {
            Ok(())
        }
        fn clear(&mut self, _color: Color) -> Result<()> {
            Ok(())
        }
        fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, _color: Color) -> Result<()> {
            self.fills.push((x, y, w, h));
            Ok(())
        }
        fn draw_text(&mut self, _t: &str, _x: i32, _y: i32, _s: u16, _c: Color) -> Result<()> {
            Ok(())
        }
        fn swap_buffers(&mut self) -> Result<()> {
            Ok(())
        }
        fn set_clip_rect(&mut self, _x: i32, _y: i32, _w: u32, _h: u32) -> Result<()> {
            Ok(())
        }
        fn reset_clip_rect(&mut self) -> Result<()> {
            Ok(())
        }
        fn measure_text(&self, text: &str, _font_size: u16) -> u32 {
            text.len() as u32 * 8
        }
        fn shutdown(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn default_stroke_rect_draws_four_edges() {
        let mut r = Recorder { fills: Vec::new() };
        r.stroke_rect(0, 0, 10, 6, 1, Color::WHITE).unwrap();
        assert_eq!(
            r.fills,
            vec![(0, 0, 10, 1), (0, 5, 10, 1), (0, 1, 1, 4), (9, 1, 1, 4)]
        );
    }

    #[test]
    fn default_horizontal_line_is_a_fill() {
        let mut r = Recorder { fills: Vec::new() };
        r.draw_line(10, 4, 2, 4, 1, Color::WHITE).unwrap();
        assert_eq!(r.fills, vec![(2, 4, 8, 1)]);
    }

    #[test]
    fn default_diagonal_line_is_skipped() {
        let mut r = Recorder { fills: Vec::new() };
        r.draw_line(0, 0, 5, 5, 1, Color::WHITE).unwrap();
        assert!(r.fills.is_empty());
    }
}
