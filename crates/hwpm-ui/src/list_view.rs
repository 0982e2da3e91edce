//! ListView widget: a line list that can pin its newest items in view.

use hwpm_types::backend::Color;
use hwpm_types::error::Result;

use crate::context::DrawContext;
use crate::widget::Widget;

/// One line of a [`ListView`].
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub text: String,
    /// Indentation level, two cells per level.
    pub indent: u8,
    /// Override color; the theme's primary text color otherwise.
    pub color: Option<Color>,
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            indent: 0,
            color: None,
        }
    }

    pub fn indented(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    pub fn colored(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// A list of single-line items. Items past the bottom are not drawn; with
/// `follow_tail` the list instead shows the last items that fit.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    pub items: Vec<ListItem>,
    pub follow_tail: bool,
}

impl ListView {
    pub fn new(items: Vec<ListItem>) -> Self {
        Self {
            items,
            follow_tail: false,
        }
    }

    pub fn following_tail(mut self) -> Self {
        self.follow_tail = true;
        self
    }

    /// Index range of the items visible in `rows` lines.
    pub fn visible_range(&self, rows: usize) -> std::ops::Range<usize> {
        let n = self.items.len();
        if self.follow_tail && n > rows {
            n - rows..n
        } else {
            0..n.min(rows)
        }
    }
}

impl Widget for ListView {
    fn measure(&self, ctx: &DrawContext<'_>, available_w: u32, available_h: u32) -> (u32, u32) {
        let h = self.items.len() as u32 * ctx.line_height();
        (available_w, h.min(available_h))
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        let lh = ctx.line_height();
        let cw = ctx.char_width();
        let rows = (h / lh) as usize;
        for (row, item) in self.items[self.visible_range(rows)].iter().enumerate() {
            let indent = item.indent as u32 * 2 * cw;
            if indent >= w {
                continue;
            }
            let color = item.color.unwrap_or(ctx.theme.text_primary);
            let iy = y + (row as u32 * lh) as i32;
            ctx.label_fit(&item.text, x + indent as i32, iy, w - indent, color)?;
        }
        Ok(())
    }
}
