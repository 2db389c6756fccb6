//! Terminal input: crossterm decoding plus the background producers that feed
//! the event loop.
//!
//! Two independent tasks post onto one ordered queue:
//!
//! ```text
//! spawn_input_reader ──┐
//!   (blocking reads)   ├──▶ UnboundedSender<Incoming> ──▶ run loop (one at a time)
//! spawn_blink ─────────┘
//!   (tokio interval)
//! ```

use std::io;
use std::time::Duration;

use crossterm::event::{self as term, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, warn};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::core::action::{Event, Key};

/// How long a blocking read waits before re-checking whether the loop is gone.
const READER_POLL: Duration = Duration::from_millis(100);

/// Items the run loop drains, in arrival order.
#[derive(Debug)]
pub enum Incoming {
    Event(Event),
    /// The terminal transport failed. The loop stops and reports it.
    Fatal(io::Error),
}

/// Translate a raw crossterm event into a session event.
/// Returns `None` for events the session has no use for.
pub fn translate(event: term::Event) -> Option<Event> {
    match event {
        term::Event::Key(key_event) => translate_key(key_event).map(Event::Key),
        term::Event::Resize(width, height) => Some(Event::Resize { width, height }),
        term::Event::Paste(text) => Some(Event::Key(Key::Paste(text))),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<Key> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);

    let modifiers = key_event.modifiers;
    let key = match key_event.code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Key::Quit,
        KeyCode::Esc => Key::Quit,
        KeyCode::Tab => Key::CycleFocus,
        KeyCode::Enter if modifiers.contains(KeyModifiers::ALT) => Key::NewLine,
        KeyCode::Enter => Key::Confirm,
        // Ctrl+J inserts newline (ASCII LF; Ctrl+Enter sends this in most terminals)
        KeyCode::Char('j') if modifiers.contains(KeyModifiers::CONTROL) => Key::NewLine,
        KeyCode::Char(_) if modifiers.contains(KeyModifiers::CONTROL) => return None,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        _ => return None,
    };
    Some(key)
}

/// Read terminal events on a blocking thread until the receiver is dropped.
///
/// The initial terminal size is posted first so the session can lay out
/// before the user touches anything.
pub fn spawn_input_reader(tx: UnboundedSender<Incoming>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        match crossterm::terminal::size() {
            Ok((width, height)) => {
                if tx.send(Incoming::Event(Event::Resize { width, height })).is_err() {
                    return;
                }
            }
            Err(e) => {
                let _ = tx.send(Incoming::Fatal(e));
                return;
            }
        }

        while !tx.is_closed() {
            let raw = match term::poll(READER_POLL) {
                Ok(false) => continue,
                Ok(true) => term::read(),
                Err(e) => Err(e),
            };
            match raw {
                Ok(raw) => {
                    if let Some(event) = translate(raw)
                        && tx.send(Incoming::Event(event)).is_err()
                    {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Terminal read failed: {}", e);
                    let _ = tx.send(Incoming::Fatal(e));
                    break;
                }
            }
        }
        debug!("Input reader stopped");
    })
}

/// Post `Event::Blink` every `period` until the receiver is dropped.
pub fn spawn_blink(tx: UnboundedSender<Incoming>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // The first tick completes immediately; skip it so the cursor starts visible.
        interval.tick().await;
        loop {
            interval.tick().await;
            if tx.send(Incoming::Event(Event::Blink)).is_err() {
                debug!("Blink ticker stopped");
                return;
            }
        }
    })
}
