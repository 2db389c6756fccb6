//! # Events and the Update Reducer
//!
//! Everything that can happen to a chat session becomes an `Event`.
//! Terminal resized? That's `Event::Resize`. Tab pressed? That's
//! `Event::Key(Key::CycleFocus)`. Cursor blink timer fired? `Event::Blink`.
//!
//! `update()` takes the session and one event, applies it completely and
//! returns an `Effect` telling the event loop what to do next.
//!
//! ```text
//! Session + Event  →  update()  →  Session' + Effect
//! ```
//!
//! Routing by focus mode:
//!
//! | Event               | Editing        | Scrolling      | Selecting      |
//! |---------------------|----------------|----------------|----------------|
//! | Quit                | quit           | quit           | quit           |
//! | CycleFocus          | → Scrolling    | → Selecting*   | → Editing      |
//! | Confirm             | submit         | viewport       | discarded      |
//! | Up / Down           | editor         | viewport       | move selection |
//! | anything else       | editor         | viewport       | discarded      |
//!
//! *or back to Editing when the log is empty.

use log::{debug, info, trace};

use crate::core::focus::FocusMode;
use crate::core::session::ChatSession;
use crate::core::widgets::{ScrollableList, TextEditor};

/// Logical keys, already decoded from the terminal's raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    CycleFocus,
    /// Plain Enter: submit.
    Confirm,
    /// Enter with the line-break modifier: literal newline in the editor.
    NewLine,
    Up,
    Down,
    Quit,
    Char(char),
    Paste(String),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Resize { width: u16, height: u16 },
    Key(Key),
    /// Cursor blink tick. Cosmetic, editor only.
    Blink,
}

/// What the event loop should do after an event has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update<E, V>(session: &mut ChatSession<E, V>, event: Event) -> Effect
where
    E: TextEditor,
    V: ScrollableList,
{
    match event {
        Event::Key(Key::Quit) => {
            info!("Quit requested in {} mode", session.focus().label());
            return Effect::Quit;
        }
        Event::Resize { width, height } => session.resize(width, height),
        Event::Blink => session.forward_to_editor(&event),
        Event::Key(Key::CycleFocus) => session.cycle_focus(),
        Event::Key(key) => route_key(session, key),
    }

    // Content is always rederived from state, never patched.
    session.refresh_content();
    Effect::None
}

fn route_key<E, V>(session: &mut ChatSession<E, V>, key: Key)
where
    E: TextEditor,
    V: ScrollableList,
{
    match session.focus() {
        FocusMode::Editing => match key {
            Key::Confirm => session.submit(),
            other => session.forward_to_editor(&Event::Key(other)),
        },
        FocusMode::Scrolling => session.forward_to_viewport(&Event::Key(key)),
        FocusMode::Selecting { index } => match key {
            Key::Up => session.select_previous(),
            Key::Down => session.select_next(),
            other => trace!("Discarding {:?} while selecting message {}", other, index),
        },
    }
    debug!("Key handled, focus now {}", session.focus().label());
}
