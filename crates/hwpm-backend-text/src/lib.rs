//! Character-cell software renderer.
//!
//! Implements `SdiBackend` by rasterizing into a grid of character cells,
//! one cell per `glyph_width x glyph_height` pixels. Filled rectangles are
//! shaded by luminance, outlines become `+ - |` boxes, and text is written
//! one grapheme cluster per cell (two for wide glyphs). `swap_buffers` moves
//! the cursor home, clears the terminal and writes the rows, skipping frames
//! that did not change.

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType, SetTitle};
use hwpm_types::backend::{Color, SdiBackend};
use hwpm_types::config::HwpmConfig;
use hwpm_types::error::{HwpmError, Result};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Luminance below this renders as blank.
const SHADE_BLANK: u8 = 40;
/// Luminance below this (and not blank) renders as `.`.
const SHADE_DIM: u8 = 110;

/// Half-open cell rectangle: columns `c0..c1`, rows `r0..r1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellRect {
    c0: i32,
    r0: i32,
    c1: i32,
    r1: i32,
}

impl CellRect {
    fn contains(&self, col: i32, row: i32) -> bool {
        col >= self.c0 && col < self.c1 && row >= self.r0 && row < self.r1
    }
}

/// Cells taken by one grapheme cluster. Zero-width clusters stack onto the
/// previous cell, except at the start of a string where they get their own.
fn cluster_cells(cluster: &str, leading: bool) -> u32 {
    match UnicodeWidthStr::width(cluster) as u32 {
        0 if leading => 1,
        w => w,
    }
}

/// Number of cells `text` occupies.
pub fn cell_width(text: &str) -> u32 {
    text.graphemes(true)
        .enumerate()
        .map(|(i, g)| cluster_cells(g, i == 0))
        .sum()
}

fn shade(color: Color) -> char {
    match color.luminance() {
        l if l < SHADE_BLANK => ' ',
        l if l < SHADE_DIM => '.',
        _ => '#',
    }
}

/// Character-cell renderer writing frames to `W`.
pub struct TextBackend<W: Write> {
    out: W,
    glyph_w: u32,
    glyph_h: u32,
    cols: u32,
    rows: u32,
    /// One grapheme cluster per cell. An empty string marks the right half
    /// of a wide glyph.
    cells: Vec<String>,
    /// Terminal title set on `init`.
    title: Option<String>,
    clip: Option<CellRect>,
    last_frame: Option<String>,
    frames_written: usize,
}

impl<W: Write> TextBackend<W> {
    /// Create a backend for a `width x height` pixel screen.
    pub fn new(out: W, width: u32, height: u32, glyph_w: u32, glyph_h: u32) -> Result<Self> {
        if glyph_w == 0 || glyph_h == 0 {
            return Err(HwpmError::Backend("glyph size must be non-zero".into()));
        }
        let mut backend = Self {
            out,
            glyph_w,
            glyph_h,
            cols: 0,
            rows: 0,
            cells: Vec::new(),
            title: None,
            clip: None,
            last_frame: None,
            frames_written: 0,
        };
        backend.resize(width, height);
        Ok(backend)
    }

    /// Create a backend sized from the configuration.
    pub fn from_config(out: W, config: &HwpmConfig) -> Result<Self> {
        let mut backend = Self::new(
            out,
            config.screen_width,
            config.screen_height,
            config.glyph_width,
            config.glyph_height,
        )?;
        if !config.window_title.is_empty() {
            backend.title = Some(config.window_title.clone());
        }
        Ok(backend)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.cols = width / self.glyph_w;
        self.rows = height / self.glyph_h;
        self.cells = vec![" ".to_string(); (self.cols * self.rows) as usize];
        self.clip = None;
        log::debug!("text backend grid {}x{}", self.cols, self.rows);
    }

    /// Grid size in cells.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.cols, self.rows)
    }

    /// The wrapped writer.
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Frames actually written by `swap_buffers`.
    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    /// Current grid contents, one string per row.
    pub fn rows(&self) -> Vec<String> {
        (0..self.rows).map(|r| self.row_string(r)).collect()
    }

    pub fn row(&self, index: usize) -> Option<String> {
        (index < self.rows as usize).then(|| self.row_string(index as u32))
    }

    /// Whether any row contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.rows().iter().any(|r| r.contains(needle))
    }

    fn row_string(&self, row: u32) -> String {
        let start = (row * self.cols) as usize;
        self.cells[start..start + self.cols as usize].concat()
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        if let Some(clip) = self.clip
            && !clip.contains(col, row)
        {
            return None;
        }
        Some((row as u32 * self.cols + col as u32) as usize)
    }

    fn put(&mut self, col: i32, row: i32, ch: char) {
        if let Some(i) = self.index(col, row) {
            self.detach(i);
            self.cells[i].clear();
            self.cells[i].push(ch);
        }
    }

    /// Blank whatever is left of a wide glyph that overlaps cell `i`.
    fn detach(&mut self, i: usize) {
        let cols = self.cols as usize;
        let row_start = i - i % cols;
        let row_end = row_start + cols;
        if self.cells[i].is_empty() {
            let mut j = i;
            while j > row_start && self.cells[j - 1].is_empty() {
                j -= 1;
            }
            for k in j.saturating_sub(1).max(row_start)..i {
                self.cells[k] = " ".to_string();
            }
        }
        let mut k = i + 1;
        while k < row_end && self.cells[k].is_empty() {
            self.cells[k] = " ".to_string();
            k += 1;
        }
    }

    /// Write `cluster` across `span` cells starting at (`col`, `row`). A
    /// cluster that does not fit whole leaves a blank. Returns the lead cell.
    fn place(&mut self, col: i32, row: i32, cluster: &str, span: u32) -> Option<usize> {
        let lead = self.index(col, row)?;
        let tail: Option<Vec<usize>> = (1..span as i32)
            .map(|d| self.index(col + d, row))
            .collect();
        self.detach(lead);
        match tail {
            Some(tail) => {
                for &i in &tail {
                    self.detach(i);
                }
                self.cells[lead] = cluster.to_string();
                for i in tail {
                    self.cells[i].clear();
                }
            },
            None => self.cells[lead] = " ".to_string(),
        }
        Some(lead)
    }

    /// Cells touched by a pixel rectangle, or `None` if it is empty.
    fn cell_rect(&self, x: i32, y: i32, w: u32, h: u32) -> Option<CellRect> {
        if w == 0 || h == 0 {
            return None;
        }
        let gw = self.glyph_w as i32;
        let gh = self.glyph_h as i32;
        Some(CellRect {
            c0: x.div_euclid(gw),
            r0: y.div_euclid(gh),
            c1: (x + w as i32 - 1).div_euclid(gw) + 1,
            r1: (y + h as i32 - 1).div_euclid(gh) + 1,
        })
    }

    fn frame(&self) -> String {
        self.rows().join("\n")
    }
}

impl<W: Write> SdiBackend for TextBackend<W> {
    fn init(&mut self, width: u32, height: u32) -> Result<()> {
        self.resize(width, height);
        if let Some(title) = &self.title {
            queue!(self.out, SetTitle(title))?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn clear(&mut self, _color: Color) -> Result<()> {
        for cell in &mut self.cells {
            cell.clear();
            cell.push(' ');
        }
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        if color.a == 0 {
            return Ok(());
        }
        let Some(r) = self.cell_rect(x, y, w, h) else {
            return Ok(());
        };
        let ch = shade(color);
        for row in r.r0..r.r1 {
            for col in r.c0..r.c1 {
                self.put(col, row, ch);
            }
        }
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
        if color.a == 0 {
            return Ok(());
        }
        let Some(r) = self.cell_rect(x, y, w, h) else {
            return Ok(());
        };
        let (right, bottom) = (r.c1 - 1, r.r1 - 1);
        for col in r.c0..=right {
            self.put(col, r.r0, '-');
            self.put(col, bottom, '-');
        }
        for row in r.r0..=bottom {
            self.put(r.c0, row, '|');
            self.put(right, row, '|');
        }
        for (col, row) in [(r.c0, r.r0), (right, r.r0), (r.c0, bottom), (right, bottom)] {
            self.put(col, row, '+');
        }
        Ok(())
    }

    fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        _width: u16,
        color: Color,
    ) -> Result<()> {
        if color.a == 0 {
            return Ok(());
        }
        let gw = self.glyph_w as i32;
        let gh = self.glyph_h as i32;
        if y1 == y2 {
            let row = y1.div_euclid(gh);
            let (a, b) = (x1.min(x2), x1.max(x2));
            for col in a.div_euclid(gw)..(b - 1).max(a).div_euclid(gw) + 1 {
                self.put(col, row, '-');
            }
        } else if x1 == x2 {
            let col = x1.div_euclid(gw);
            let (a, b) = (y1.min(y2), y1.max(y2));
            for row in a.div_euclid(gh)..(b - 1).max(a).div_euclid(gh) + 1 {
                self.put(col, row, '|');
            }
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        _font_size: u16,
        color: Color,
    ) -> Result<()> {
        if color.a == 0 {
            return Ok(());
        }
        let row = y.div_euclid(self.glyph_h as i32);
        let mut col = x.div_euclid(self.glyph_w as i32);
        let mut last: Option<usize> = None;
        for (n, cluster) in text.graphemes(true).enumerate() {
            let span = cluster_cells(cluster, n == 0);
            if span == 0 {
                if let Some(i) = last {
                    self.cells[i].push_str(cluster);
                }
                continue;
            }
            last = self.place(col, row, cluster, span);
            col += span as i32;
        }
        Ok(())
    }

    fn swap_buffers(&mut self) -> Result<()> {
        let frame = self.frame();
        if self.last_frame.as_deref() == Some(frame.as_str()) {
            return Ok(());
        }
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        writeln!(self.out, "{frame}")?;
        self.out.flush()?;
        self.last_frame = Some(frame);
        self.frames_written += 1;
        Ok(())
    }

    fn set_clip_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        self.clip = Some(self.cell_rect(x, y, w, h).unwrap_or(CellRect {
            c0: 0,
            r0: 0,
            c1: 0,
            r1: 0,
        }));
        Ok(())
    }

    fn reset_clip_rect(&mut self) -> Result<()> {
        self.clip = None;
        Ok(())
    }

    fn measure_text(&self, text: &str, _font_size: u16) -> u32 {
        cell_width(text) * self.glyph_w
    }

    fn measure_text_height(&self, _font_size: u16) -> u32 {
        self.glyph_h
    }

    fn shutdown(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
