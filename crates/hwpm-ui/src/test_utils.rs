//! Shared test utilities for hwpm-ui widget tests.
//!
//! Provides a [`MockBackend`] that records all draw calls for assertion.
//! Other crates enable the `test-utils` feature to reuse it.

use hwpm_types::backend::{Color, SdiBackend};
use hwpm_types::error::Result;

use crate::layout::Rect;

/// Glyph cell width the mock reports for every character.
pub const MOCK_GLYPH: u32 = 8;

/// A recorded draw call from the mock backend.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    FillRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    },
    StrokeRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    },
    DrawText {
        text: String,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    },
}

/// A mock backend that records all draw calls for test assertions.
#[derive(Debug, Default)]
pub struct MockBackend {
    pub calls: Vec<DrawCall>,
    pub clip: Option<Rect>,
    pub clip_history: Vec<Rect>,
    pub frames: usize,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of `FillRect` calls.
    pub fn fill_rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRect { .. }))
            .count()
    }

    /// Count of `StrokeRect` calls.
    pub fn stroke_rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::StrokeRect { .. }))
            .count()
    }

    /// Count of `DrawText` calls.
    pub fn draw_text_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::DrawText { .. }))
            .count()
    }

    /// All drawn strings, in call order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Return text draw calls as `(text, x, y, font_size)` tuples,
    /// sorted by Y then X position for easy geometric analysis.
    pub fn text_positions(&self) -> Vec<(&str, i32, i32, u16)> {
        let mut positions: Vec<_> = self
            .calls
            .iter()
            .filter_map(|c| {
                if let DrawCall::DrawText {
                    text,
                    x,
                    y,
                    font_size,
                    ..
                } = c
                {
                    Some((text.as_str(), *x, *y, *font_size))
                } else {
                    None
                }
            })
            .collect();
        positions.sort_by(|a, b| a.2.cmp(&b.2).then(a.1.cmp(&b.1)));
        positions
    }

    /// Check if any `DrawText` call contains the given substring.
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    /// Color of the first `DrawText` call containing `needle`.
    pub fn text_color(&self, needle: &str) -> Option<Color> {
        self.calls.iter().find_map(|c| match c {
            DrawCall::DrawText { text, color, .. } if text.contains(needle) => Some(*color),
            _ => None,
        })
    }
}

impl SdiBackend for MockBackend {
    fn init(&mut self, _width: u32, _height: u32) -> Result<()> {
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.calls.push(DrawCall::Clear(color));
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.calls.push(DrawCall::FillRect { x, y, w, h, color });
        Ok(())
    }

    fn stroke_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        _stroke_width: u16,
        color: Color,
    ) -> Result<()> {
        self.calls.push(DrawCall::StrokeRect { x, y, w, h, color });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        self.calls.push(DrawCall::DrawText {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
        Ok(())
    }

    fn swap_buffers(&mut self) -> Result<()> {
        self.frames += 1;
        Ok(())
    }

    fn set_clip_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        let rect = Rect::new(x, y, w, h);
        self.clip = Some(rect);
        self.clip_history.push(rect);
        Ok(())
    }

    fn reset_clip_rect(&mut self) -> Result<()> {
        self.clip = None;
        Ok(())
    }

    fn measure_text(&self, text: &str, _font_size: u16) -> u32 {
        text.chars().count() as u32 * MOCK_GLYPH
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}
