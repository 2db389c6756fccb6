//! # Layout Engine
//!
//! Splits the terminal into three stacked regions:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ header (title + focus mode)  │  header_height(focus)
//! ├──────────────────────────────┤  ◀── Geometry::y_offset
//! │                              │
//! │ viewport (message log)       │  Geometry::height
//! │                              │
//! ├──────────────────────────────┤
//! │ footer (editor + help line)  │  footer_height(focus)
//! └──────────────────────────────┘
//! ```
//!
//! Header and footer content depends only on the focus mode, never on the
//! terminal size, so the geometry is a pure function of `(focus, width, height)`.

use crate::core::focus::FocusMode;

/// Top + bottom border around the editor.
pub const EDITOR_BORDER_ROWS: u16 = 2;

pub const DEFAULT_EDITOR_ROWS: u16 = 3;

/// Viewport placement and size, derived from the terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub width: u16,
    pub height: u16,
    pub y_offset: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    editor_rows: u16,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(DEFAULT_EDITOR_ROWS)
    }
}

impl Layout {
    /// `editor_rows` is the number of visible text rows inside the editor box.
    pub fn new(editor_rows: u16) -> Self {
        Self {
            editor_rows: editor_rows.max(1),
        }
    }

    pub fn editor_rows(&self) -> u16 {
        self.editor_rows
    }

    /// Height of the bordered editor box.
    pub fn editor_height(&self) -> u16 {
        self.editor_rows + EDITOR_BORDER_ROWS
    }

    pub fn header_lines(&self, focus: FocusMode) -> Vec<String> {
        vec![format!("gabble · {}", focus.label())]
    }

    pub fn help_lines(&self, focus: FocusMode) -> Vec<&'static str> {
        let hint = match focus {
            FocusMode::Editing => "tab: browse · enter: send · alt+enter: newline · esc: quit",
            FocusMode::Scrolling => "tab: select · ↑/↓ pgup/pgdn home/end: scroll · esc: quit",
            FocusMode::Selecting { .. } => "tab: edit · ↑/↓: choose message · esc: quit",
        };
        vec![hint]
    }

    pub fn header_height(&self, focus: FocusMode) -> u16 {
        self.header_lines(focus).len() as u16
    }

    pub fn footer_height(&self, focus: FocusMode) -> u16 {
        self.editor_height() + self.help_lines(focus).len() as u16
    }

    /// Viewport geometry for a terminal of `width` x `height` cells.
    pub fn geometry(&self, focus: FocusMode, width: u16, height: u16) -> Geometry {
        let header = self.header_height(focus);
        let footer = self.footer_height(focus);
        Geometry {
            width,
            height: height.saturating_sub(header).saturating_sub(footer),
            y_offset: header,
        }
    }
}
