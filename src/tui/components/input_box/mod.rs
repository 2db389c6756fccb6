//! # InputBox Component
//!
//! The chat editor: a bounded, multi-line text buffer with a blinking cursor.
//!
//! ## Responsibilities
//!
//! - Capture text input, up to a fixed number of characters
//! - Handle editing (backspace, delete, cursor movement, paste, line breaks)
//! - Blink the cursor on `Event::Blink` while focused
//! - Show a placeholder while empty and a character counter in the title
//!
//! ## State Management
//!
//! The buffer and focus are internal state. The box width is set by the
//! session's layout through [`TextEditor::set_width`]; the number of visible
//! rows is fixed at construction. Cursor position and internal scrolling are
//! encapsulated in `CursorState`.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::core::action::{Event, Key};
use crate::core::widgets::TextEditor;
use crate::tui::component::Component;

use cursor::CursorState;
use text_wrap::{inner_width, next_char_boundary, prev_char_boundary, take_chars, wrapped_rows};

/// Text input component.
///
/// # State
///
/// - `buffer`: Current text being typed
/// - `cursor`: Cursor position and internal scroll (see `CursorState`)
/// - `focused`: Whether key events are accepted
/// - `cursor_visible`: Blink phase
pub struct InputBox {
    buffer: String,
    cursor: CursorState,
    focused: bool,
    cursor_visible: bool,
    max_chars: usize,
    rows: u16,
    width: u16,
    placeholder: String,
}

impl InputBox {
    pub fn new(max_chars: usize, rows: u16, placeholder: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            cursor: CursorState::new(),
            focused: false,
            cursor_visible: true,
            max_chars,
            rows: rows.max(1),
            width: 0,
            placeholder: placeholder.into(),
        }
    }

    pub fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Cursor byte offset into the buffer.
    pub fn cursor_pos(&self) -> usize {
        self.cursor.pos
    }

    /// Insert at the cursor, dropping whatever would exceed the character limit.
    fn insert(&mut self, text: &str) -> bool {
        let room = self.max_chars.saturating_sub(self.char_count());
        let accepted = take_chars(text, room);
        if accepted.is_empty() {
            return false;
        }
        self.buffer.insert_str(self.cursor.pos, accepted);
        self.cursor.pos += accepted.len();
        true
    }

    fn handle_key(&mut self, key: &Key) {
        match key {
            Key::Char(c) => {
                let mut utf8 = [0u8; 4];
                self.insert(c.encode_utf8(&mut utf8));
            }
            Key::Paste(text) => {
                // Normalize CRLF from some terminals' bracketed paste
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                self.insert(&text);
            }
            Key::NewLine => {
                self.insert("\n");
            }
            Key::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                }
            }
            Key::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                }
            }
            Key::Left => {
                if self.cursor.pos > 0 {
                    self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                }
            }
            Key::Right => {
                if self.cursor.pos < self.buffer.len() {
                    self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                }
            }
            Key::Home => {
                self.cursor.pos = self.buffer[..self.cursor.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
            }
            Key::End => {
                self.cursor.pos = self.buffer[self.cursor.pos..]
                    .find('\n')
                    .map(|i| self.cursor.pos + i)
                    .unwrap_or(self.buffer.len());
            }
            Key::Up => {
                self.cursor.move_vertically(&self.buffer, -1, self.width);
            }
            Key::Down => {
                self.cursor.move_vertically(&self.buffer, 1, self.width);
            }
            Key::CycleFocus
            | Key::Confirm
            | Key::Quit
            | Key::PageUp
            | Key::PageDown => {}
        }
        // Typing restarts the blink cycle
        self.cursor_visible = true;
    }

    fn visible_lines(&self, outer_width: u16) -> Vec<Line<'_>> {
        let width = inner_width(outer_width);
        if width == 0 {
            return Vec::new();
        }
        wrapped_rows(&self.buffer, width)
            .into_iter()
            .skip(self.cursor.scroll_offset as usize)
            .take(self.rows as usize)
            .map(Line::raw)
            .collect()
    }
}

impl TextEditor for InputBox {
    fn value(&self) -> &str {
        &self.buffer
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
        self.cursor_visible = true;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn clear(&mut self) {
        self.buffer.clear();
        self.cursor.reset();
    }

    fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Blink if self.focused => self.cursor_visible = !self.cursor_visible,
            Event::Key(key) if self.focused => self.handle_key(key),
            _ => {}
        }
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.update_scroll_offset(&self.buffer, area.width, self.rows);

        let (text_style, border_style) = if self.focused {
            (
                Style::default().fg(Color::Green),
                Style::default().fg(Color::Green),
            )
        } else {
            (
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
                Style::default().fg(Color::DarkGray),
            )
        };

        let counter = format!(" {}/{} ", self.char_count(), self.max_chars);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1))
            .title(" Message ")
            .title_bottom(Line::from(counter).right_aligned());

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder.as_str()).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(self.visible_lines(area.width)).style(text_style)
        };

        frame.render_widget(paragraph.block(block), area);

        if self.focused && self.cursor_visible {
            let position = self.cursor.screen_pos(&self.buffer, area);
            frame.set_cursor_position(position);
        }
    }
}
