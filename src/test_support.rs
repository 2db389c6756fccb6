//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Event, Key, update};
use crate::core::layout::{Geometry, Layout};
use crate::core::responder::EchoResponder;
use crate::core::session::ChatSession;
use crate::core::widgets::{Entry, ScrollableList, TextEditor};

/// An in-memory editor that records what it was asked to do.
#[derive(Debug, Default)]
pub struct FakeEditor {
    pub buffer: String,
    pub focused: bool,
    pub width: u16,
    pub blinks: usize,
}

impl TextEditor for FakeEditor {
    fn value(&self) -> &str {
        &self.buffer
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(Key::Char(c)) => self.buffer.push(*c),
            Event::Key(Key::NewLine) => self.buffer.push('\n'),
            Event::Key(Key::Paste(text)) => self.buffer.push_str(text),
            Event::Key(Key::Backspace) => {
                self.buffer.pop();
            }
            Event::Blink => self.blinks += 1,
            _ => {}
        }
    }
}

/// A viewport that keeps the last content and every forwarded event.
#[derive(Debug, Default)]
pub struct FakeViewport {
    pub geometry: Geometry,
    pub entries: Vec<Entry>,
    pub at_bottom: bool,
    pub events: Vec<Event>,
}

impl ScrollableList for FakeViewport {
    fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            ..Default::default()
        }
    }

    fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn resize(&mut self, geometry: Geometry) {
        self.geometry = geometry;
    }

    fn set_content(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
    }

    fn scroll_to_bottom(&mut self) {
        self.at_bottom = true;
    }

    fn handle_event(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}

pub type TestSession = ChatSession<FakeEditor, FakeViewport>;

/// A session with fake widgets and the default echo responder. Not yet resized.
pub fn test_session() -> TestSession {
    ChatSession::new(
        FakeEditor::default(),
        Box::new(EchoResponder::default()),
        Layout::default(),
    )
}

/// A session that has already received its first resize.
pub fn ready_session(width: u16, height: u16) -> TestSession {
    let mut session = test_session();
    update(&mut session, Event::Resize { width, height });
    session
}

pub fn press(session: &mut TestSession, key: Key) {
    update(session, Event::Key(key));
}

pub fn type_text(session: &mut TestSession, text: &str) {
    for c in text.chars() {
        press(session, Key::Char(c));
    }
}
