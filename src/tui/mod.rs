//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, renders the session and
//! translates crossterm input into `core::action::Event` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//! draw ──▶ wait for next Incoming ──▶ update() ──▶ drain pending ──▶ draw ...
//! ```
//!
//! Producers (terminal reader, blink ticker) run as tokio tasks and post onto
//! one unbounded queue, so events are applied strictly one at a time in
//! arrival order. Every pending event is drained before the next frame.
//!
//! A `SteadyBlock` cursor style is used because the input box blinks the
//! cursor itself on `Event::Blink`; a terminal-side blink would fight it.

pub mod component;
pub mod components;
mod event;
mod ui;

pub use ui::Session;

use log::{debug, info, warn};
use std::io::{self, stdout};

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::core::action::{Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::layout::Layout;
use crate::core::responder::EchoResponder;
use crate::core::session::ChatSession;
use crate::tui::components::InputBox;
use crate::tui::event::{Incoming, spawn_blink, spawn_input_reader};

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Keyboard enhancement lets Alt+Enter arrive distinct from Enter.
        // Terminals without the protocol ignore the request.
        execute!(
            stdout(),
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Build a session wired to the ratatui widgets and an echo responder.
pub fn build_session(config: &ResolvedConfig) -> Session {
    let editor = InputBox::new(
        config.max_chars,
        config.editor_rows,
        config.placeholder.clone(),
    );
    let responder = EchoResponder::new(config.reply_prefix.clone());
    ChatSession::new(editor, Box::new(responder), Layout::new(config.editor_rows))
        .with_welcome(config.welcome.clone())
}

pub async fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut session = build_session(&config);

    let mut terminal = ratatui::init();
    let terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Could not enable terminal modes: {}", e);
            None
        }
    };

    let (tx, mut rx) = mpsc::unbounded_channel();
    let reader = spawn_input_reader(tx.clone());
    let blink = spawn_blink(tx, config.blink_interval);

    let result = event_loop(&mut terminal, &mut session, &mut rx).await;

    blink.abort();
    drop(rx);
    drop(terminal_mode_guard);
    ratatui::restore();

    // The reader notices the closed queue on its next poll.
    if let Err(e) = reader.await {
        warn!("Input reader task failed: {}", e);
    }

    match &result {
        Ok(()) => info!("Session ended with {} messages", session.messages().len()),
        Err(e) => warn!("Session ended with error: {}", e),
    }
    result
}

async fn event_loop<B>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
    rx: &mut UnboundedReceiver<Incoming>,
) -> io::Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal
            .draw(|f| ui::draw_ui(f, session))
            .map_err(io::Error::other)?;

        let Some(first) = rx.recv().await else {
            debug!("Event queue closed");
            return Ok(());
        };

        // Apply the first event plus everything already queued before redrawing.
        let mut next = Some(first);
        while let Some(incoming) = next {
            match incoming {
                Incoming::Fatal(e) => return Err(e),
                Incoming::Event(event) => {
                    if update(session, event) == Effect::Quit {
                        return Ok(());
                    }
                }
            }
            next = rx.try_recv().ok();
        }
    }
}
