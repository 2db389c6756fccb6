//! # Widget Capabilities
//!
//! The session drives two embedded widgets through these traits instead of
//! concrete types, so any editor or list implementation can be plugged in.
//! The TUI adapter provides the ratatui-backed ones (`InputBox`,
//! `MessageView`); tests use in-memory fakes.
//!
//! The viewport receives its content as a list of [`Entry`] values, already
//! resolved from the message store and the current selection. How an entry
//! is styled and framed is up to the widget.

use crate::core::action::Event;
use crate::core::layout::Geometry;

/// How an entry should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Reply,
    /// Session notices that are not part of the conversation (e.g. the welcome text).
    Notice,
}

/// One block of viewport content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub role: Role,
    /// Author label drawn on the block frame.
    pub label: String,
    pub text: String,
    pub highlighted: bool,
}

/// A bounded text buffer that accepts key events.
pub trait TextEditor {
    /// Current buffer contents, untrimmed.
    fn value(&self) -> &str;

    fn set_focus(&mut self, focused: bool);

    fn is_focused(&self) -> bool;

    fn clear(&mut self);

    /// Set the outer width of the editor box.
    fn set_width(&mut self, width: u16);

    /// Handle a key or blink event. Other events are ignored.
    fn handle_event(&mut self, event: &Event);
}

/// A scrollable list of entries.
pub trait ScrollableList {
    /// Build the list at its initial size. Called on the first resize.
    fn new(geometry: Geometry) -> Self
    where
        Self: Sized;

    fn geometry(&self) -> Geometry;

    fn resize(&mut self, geometry: Geometry);

    fn set_content(&mut self, entries: Vec<Entry>);

    fn scroll_to_bottom(&mut self);

    /// Handle a scrolling key. Other events are ignored.
    fn handle_event(&mut self, event: &Event);
}
