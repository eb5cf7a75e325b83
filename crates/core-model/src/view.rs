//! Edit box geometry and vertical scrolling.
//!
//! Pixel coordinates handed to `point_to_row_x` are relative to the edit
//! box's top-left corner. The text area starts after the gutter and padding
//! on the left and after the padding on top; `scroll_y` is the number of
//! pixels of text scrolled above the visible area.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRounding {
    /// Row containing the point (clicks).
    Truncate,
    /// Row whose midline is nearest (drags).
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
    pub gutter_width: u32,
    pub scroll_y: u32,
}

impl View {
    pub fn new(width: u32, height: u32, padding: u32, gutter_width: u32) -> Self {
        Self {
            width,
            height,
            padding,
            gutter_width,
            scroll_y: 0,
        }
    }

    /// Width available to wrapped text (unclamped; the wrapper applies its minimum).
    pub fn content_width(&self) -> u32 {
        self.width
            .saturating_sub(self.gutter_width)
            .saturating_sub(self.padding * 2)
    }

    pub fn content_height(&self) -> u32 {
        self.height.saturating_sub(self.padding * 2)
    }

    /// Left edge of the text area.
    pub fn content_left(&self) -> u32 {
        self.gutter_width + self.padding
    }

    pub fn content_top(&self) -> u32 {
        self.padding
    }

    pub fn max_scroll(&self, rows: usize, line_height: u32) -> u32 {
        (rows as u32 * line_height).saturating_sub(self.content_height())
    }

    /// Visual row and text-area x for an edit-box point. The row is clamped to `[0, rows)`.
    pub fn point_to_row_x(
        &self,
        px: i32,
        py: i32,
        line_height: u32,
        rows: usize,
        rounding: RowRounding,
    ) -> (usize, i32) {
        let local_x = px - self.content_left() as i32;
        let local_y = i64::from(py) - i64::from(self.content_top()) + i64::from(self.scroll_y);
        let lh = i64::from(line_height.max(1));
        let row = match rounding {
            RowRounding::Truncate => local_y.div_euclid(lh),
            RowRounding::Nearest => (2 * local_y + lh).div_euclid(2 * lh),
        };
        let last = rows.saturating_sub(1) as i64;
        (row.clamp(0, last) as usize, local_x)
    }

    /// Scroll so a row starting at pixel `y` is fully visible. Returns true if `scroll_y` changed.
    pub fn ensure_visible(&mut self, y: u32, line_height: u32, rows: usize) -> bool {
        let before = self.scroll_y;
        let content_h = i64::from(self.content_height());
        let lh = i64::from(line_height);
        let top = i64::from(self.scroll_y);
        let bottom = top + content_h - lh;
        let y = i64::from(y);
        if y < top {
            self.scroll_y = y.max(0) as u32;
        } else if y > bottom {
            let max = i64::from(self.max_scroll(rows, line_height));
            self.scroll_y = (y - content_h + lh).clamp(0, max) as u32;
        }
        self.scroll_y != before
    }

    /// Positive `delta` scrolls up (toward the start), `step` pixels per notch.
    pub fn scroll_wheel(&mut self, delta: i32, step: u32, rows: usize, line_height: u32) -> bool {
        let before = self.scroll_y;
        let max = i64::from(self.max_scroll(rows, line_height));
        let next = i64::from(self.scroll_y) - i64::from(delta) * i64::from(step);
        self.scroll_y = next.clamp(0, max) as u32;
        self.scroll_y != before
    }

    pub fn page_up(&mut self) -> bool {
        let before = self.scroll_y;
        self.scroll_y = self.scroll_y.saturating_sub(self.content_height());
        self.scroll_y != before
    }

    pub fn page_down(&mut self, rows: usize, line_height: u32) -> bool {
        let before = self.scroll_y;
        let max = self.max_scroll(rows, line_height);
        self.scroll_y = (self.scroll_y + self.content_height()).min(max);
        self.scroll_y != before
    }

    /// First row intersecting the visible area.
    pub fn first_visible_row(&self, line_height: u32) -> usize {
        (self.scroll_y / line_height.max(1)) as usize
    }
}
