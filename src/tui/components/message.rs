use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::widgets::{Entry, Role};

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless widget that renders one viewport entry as a framed block.
///
/// # Design
///
/// `Message` is a **transient component**: it's created fresh each frame with
/// the entry it draws. Highlighting comes from the entry itself, which the
/// session derives from the current selection.
///
/// # Styling
///
/// - **User** (cyan): messages typed in this session
/// - **Reply** (green): responder output
/// - **Notice** (yellow): session notices such as the welcome text
///
/// Highlighted entries get a `DarkGray` background and a bold, thick border.
///
/// # Height Calculation
///
/// [`calculate_height`](Self::calculate_height) predicts the rendered height
/// with `textwrap`, using options that match `Paragraph`'s wrapping, so the
/// parent can lay out scroll positions without rendering.
#[derive(Clone, Copy)]
pub struct Message<'a> {
    pub entry: &'a Entry,
}

impl<'a> Message<'a> {
    pub fn new(entry: &'a Entry) -> Self {
        Self { entry }
    }

    /// Height required for `entry` in a column `width` cells wide.
    pub fn calculate_height(entry: &Entry, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Degenerate case: too narrow for borders + padding.
            return 1;
        }

        let content = entry.text.trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD + 1;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        (lines.len() as u16).max(1) + VERTICAL_OVERHEAD
    }

    fn base_style(role: Role) -> Style {
        match role {
            Role::User => Style::default().fg(Color::Cyan),
            Role::Reply => Style::default().fg(Color::Green),
            Role::Notice => Style::default().fg(Color::Yellow),
        }
    }
}

impl Widget for Message<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = Self::base_style(self.entry.role);

        let (style, border_style, border_type) = if self.entry.highlighted {
            (
                base.bg(Color::DarkGray),
                base.add_modifier(Modifier::BOLD),
                BorderType::Thick,
            )
        } else {
            (base, base.add_modifier(Modifier::DIM), BorderType::Rounded)
        };

        let block = Block::bordered()
            .border_type(border_type)
            .border_style(border_style)
            .title(format!(" {} ", self.entry.label))
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        Paragraph::new(self.entry.text.trim())
            .block(block)
            .style(style)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
