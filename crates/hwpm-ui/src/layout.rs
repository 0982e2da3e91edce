//! Rectangle math for splitting the screen into panels.

/// An axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom.
    pub fn inset(&self, dx: u32, dy: u32) -> Self {
        Self {
            x: self.x + dx as i32,
            y: self.y + dy as i32,
            w: self.w.saturating_sub(dx * 2),
            h: self.h.saturating_sub(dy * 2),
        }
    }

    /// Split off the top `h` pixels. Returns (top, rest).
    pub fn split_top(&self, h: u32) -> (Self, Self) {
        let h = h.min(self.h);
        (
            Self::new(self.x, self.y, self.w, h),
            Self::new(self.x, self.y + h as i32, self.w, self.h - h),
        )
    }

    /// Split off the bottom `h` pixels. Returns (rest, bottom).
    pub fn split_bottom(&self, h: u32) -> (Self, Self) {
        let h = h.min(self.h);
        let rest = self.h - h;
        (
            Self::new(self.x, self.y, self.w, rest),
            Self::new(self.x, self.y + rest as i32, self.w, h),
        )
    }

    /// Split horizontally into columns proportional to `weights`, separated
    /// by `gap` pixels. The last column absorbs rounding leftovers.
    pub fn columns(&self, weights: &[u32], gap: u32) -> Vec<Self> {
        if weights.is_empty() {
            return Vec::new();
        }
        let total: u32 = weights.iter().sum::<u32>().max(1);
        let gaps = gap * (weights.len() as u32 - 1);
        let usable = self.w.saturating_sub(gaps);
        let mut out = Vec::with_capacity(weights.len());
        let mut x = self.x;
        for (i, weight) in weights.iter().enumerate() {
            let w = if i == weights.len() - 1 {
                (self.right() - x).max(0) as u32
            } else {
                usable * weight / total
            };
            out.push(Self::new(x, self.y, w, self.h));
            x += (w + gap) as i32;
        }
        out
    }

    /// A `w` x `h` rectangle centered inside this one (clamped to fit).
    pub fn centered(&self, w: u32, h: u32) -> Self {
        let w = w.min(self.w);
        let h = h.min(self.h);
        Self::new(
            self.x + ((self.w - w) / 2) as i32,
            self.y + ((self.h - h) / 2) as i32,
            w,
            h,
        )
    }

    /// Snap the size down to whole multiples of a cell.
    pub fn snap(&self, cell_w: u32, cell_h: u32) -> Self {
        let cw = cell_w.max(1);
        let ch = cell_h.max(1);
        Self::new(self.x, self.y, self.w / cw * cw, self.h / ch * ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
    }

    #[test]
    fn inset_shrinks_both_sides() {
        let r = Rect::new(0, 0, 100, 50).inset(8, 4);
        assert_eq!(r, Rect::new(8, 4, 84, 42));
    }

    #[test]
    fn inset_saturates() {
        let r = Rect::new(0, 0, 10, 10).inset(8, 8);
        assert_eq!((r.w, r.h), (0, 0));
    }

    #[test]
    fn split_top_and_bottom() {
        let r = Rect::new(0, 0, 100, 50);
        let (top, rest) = r.split_top(10);
        assert_eq!(top, Rect::new(0, 0, 100, 10));
        assert_eq!(rest, Rect::new(0, 10, 100, 40));
        let (rest, bottom) = r.split_bottom(16);
        assert_eq!(rest, Rect::new(0, 0, 100, 34));
        assert_eq!(bottom, Rect::new(0, 34, 100, 16));
    }

    #[test]
    fn split_clamps_to_height() {
        let (top, rest) = Rect::new(0, 0, 10, 5).split_top(50);
        assert_eq!(top.h, 5);
        assert_eq!(rest.h, 0);
    }

    #[test]
    fn columns_cover_the_width() {
        let r = Rect::new(0, 0, 960, 100);
        let cols = r.columns(&[1, 2, 1], 8);
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[0].x, 0);
        assert_eq!(cols[1].x, cols[0].right() + 8);
        assert_eq!(cols[2].x, cols[1].right() + 8);
        assert_eq!(cols[2].right(), 960);
        assert!(cols[1].w > cols[0].w);
    }

    #[test]
    fn columns_empty_weights() {
        assert!(Rect::new(0, 0, 10, 10).columns(&[], 0).is_empty());
    }

    #[test]
    fn centered_box() {
        let r = Rect::new(0, 0, 100, 50).centered(40, 10);
        assert_eq!(r, Rect::new(30, 20, 40, 10));
    }

    #[test]
    fn centered_clamps_oversize() {
        let r = Rect::new(5, 5, 20, 20).centered(100, 100);
        assert_eq!(r, Rect::new(5, 5, 20, 20));
    }

    #[test]
    fn snap_to_cells() {
        let r = Rect::new(3, 4, 77, 21).snap(8, 8);
        assert_eq!(r, Rect::new(3, 4, 72, 16));
    }
}
