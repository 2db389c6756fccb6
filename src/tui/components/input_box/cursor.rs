//! Cursor tracking for the InputBox.
//!
//! `CursorState` owns the cursor byte offset and the first visible row. The
//! text itself stays in `InputBox`; every method takes `buffer: &str`
//! explicitly so the dependency is visible at the call site.

use super::text_wrap::{
    CONTENT_OFFSET_X, CONTENT_OFFSET_Y, display_width, inner_width, row_end, row_starts,
};
use ratatui::layout::Rect;

pub(super) struct CursorState {
    /// Byte offset into the buffer (0..=buffer.len()), always on a char boundary
    pub pos: usize,
    /// First wrapped row shown when the text is taller than the box
    pub scroll_offset: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Move one wrapped row up (`direction < 0`) or down, keeping the column
    /// where possible. Returns `false` at the first/last row.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16, outer_width: u16) -> bool {
        let width = inner_width(outer_width);
        if width == 0 || buffer.is_empty() {
            return false;
        }

        let rows = row_starts(buffer, width);
        let current = rows.iter().rposition(|&start| start <= self.pos).unwrap_or(0);

        let target = if direction < 0 {
            match current.checked_sub(1) {
                Some(row) => row,
                None => return false,
            }
        } else if current + 1 < rows.len() {
            current + 1
        } else {
            return false;
        };

        let column = self.pos - rows[current];
        let target_start = rows[target];
        let target_end = row_end(buffer, &rows, target);
        let mut pos = (target_start + column).min(target_end);
        while !buffer.is_char_boundary(pos) {
            pos -= 1;
        }
        self.pos = pos;
        true
    }

    /// Wrapped row (0-based) holding the cursor.
    pub fn row(&self, buffer: &str, outer_width: u16) -> u16 {
        let width = inner_width(outer_width);
        if width == 0 {
            return 0;
        }
        let rows = row_starts(buffer, width);
        rows.iter().rposition(|&start| start <= self.pos).unwrap_or(0) as u16
    }

    /// Keep the cursor row inside the `visible_rows` window.
    pub fn update_scroll_offset(&mut self, buffer: &str, outer_width: u16, visible_rows: u16) {
        let width = inner_width(outer_width);
        let total = if width == 0 { 1 } else { row_starts(buffer, width).len() as u16 };
        if total <= visible_rows {
            self.scroll_offset = 0;
            return;
        }

        let row = self.row(buffer, outer_width);
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + visible_rows {
            self.scroll_offset = row + 1 - visible_rows;
        }
    }

    /// Screen position of the cursor as (column, row).
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + CONTENT_OFFSET_X, area.y + CONTENT_OFFSET_Y);
        }

        let rows = row_starts(buffer, width);
        let row = rows.iter().rposition(|&start| start <= self.pos).unwrap_or(0);
        let column = display_width(&buffer[rows[row]..self.pos]);
        let visible_row = (row as u16).saturating_sub(self.scroll_offset);

        (
            area.x + CONTENT_OFFSET_X + column,
            area.y + CONTENT_OFFSET_Y + visible_row,
        )
    }
}
