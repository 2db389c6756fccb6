//! Pure text helpers and box dimensions for the InputBox.
//!
//! Stateless; nothing here knows about `InputBox` or `CursorState`.

use unicode_width::UnicodeWidthStr;

/// Borders (2) + horizontal padding (2) consumed by the bordered block.
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Column offset from the area edge to the first text cell.
pub(super) const CONTENT_OFFSET_X: u16 = 2;
/// Row offset from the area edge to the first text row.
pub(super) const CONTENT_OFFSET_Y: u16 = 1;

/// textwrap options matching how the box lays text out.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Inner text width for a box `outer_width` cells wide. 0 if too narrow.
pub(super) fn inner_width(outer_width: u16) -> u16 {
    outer_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Terminal cell width of `text`.
pub(super) fn display_width(text: &str) -> u16 {
    text.width() as u16
}

/// Byte offset of the character boundary before `pos`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the character boundary after `pos`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Longest prefix of `text` holding at most `max_chars` characters.
pub(super) fn take_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Byte offset where each wrapped row starts.
///
/// Rows come from splitting on `\n` and then wrapping each logical line, so
/// an empty line after a trailing newline still gets its own row.
pub(super) fn row_starts(buffer: &str, width: u16) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut line_start = 0;
    for line in buffer.split('\n') {
        if line.is_empty() {
            starts.push(line_start);
        } else {
            let mut offset = line_start;
            for (i, piece) in textwrap::wrap(line, wrap_options(width)).iter().enumerate() {
                let piece: &str = piece;
                if i > 0 {
                    // Skip the separator spaces textwrap dropped between rows.
                    while buffer[offset..].starts_with(' ') && !buffer[offset..].starts_with(piece) {
                        offset += 1;
                    }
                }
                starts.push(offset);
                offset += piece.len();
            }
        }
        line_start += line.len() + 1;
    }
    starts
}

/// Last cursor position on `row`: its end, before any newline.
pub(super) fn row_end(buffer: &str, rows: &[usize], row: usize) -> usize {
    match rows.get(row + 1) {
        Some(&next) if buffer.as_bytes().get(next.wrapping_sub(1)) == Some(&b'\n') => next - 1,
        Some(&next) => next,
        None => buffer.len(),
    }
}

/// The wrapped rows of `buffer`, without their newlines.
pub(super) fn wrapped_rows(buffer: &str, width: u16) -> Vec<&str> {
    let starts = row_starts(buffer, width);
    (0..starts.len())
        .map(|row| &buffer[starts[row]..row_end(buffer, &starts, row)])
        .collect()
}
