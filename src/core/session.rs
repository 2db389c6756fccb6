//! # Chat Session State
//!
//! All state for one chat session, in one place.
//!
//! ```text
//! ChatSession<E, V>
//! ├── messages: MessageStore          // append-only log
//! ├── focus: FocusMode                // Editing | Scrolling | Selecting { index }
//! ├── editor: E                       // TextEditor, always present
//! ├── viewport: Option<V>             // ScrollableList, built on first resize
//! ├── layout: Layout                  // header/footer sizing
//! ├── responder: Box<dyn Responder>   // produces replies
//! └── welcome: String                 // notice shown while the log is empty
//! ```
//!
//! Mutations go through the methods here, which are driven by `update()` in
//! action.rs. Each method keeps the focus invariant intact: exactly one of
//! {editor focused, viewport scrolling, message selected} holds at any time.

use log::{debug, info};

use crate::core::action::Event;
use crate::core::focus::FocusMode;
use crate::core::layout::{Geometry, Layout};
use crate::core::message::{Message, MessageStore, Source};
use crate::core::responder::Responder;
use crate::core::widgets::{Entry, Role, ScrollableList, TextEditor};

pub const DEFAULT_WELCOME: &str =
    "Welcome to the chat room!\nType a message and press Enter to send.";

const USER_LABEL: &str = "you";
const NOTICE_LABEL: &str = "gabble";

pub struct ChatSession<E, V> {
    messages: MessageStore,
    focus: FocusMode,
    editor: E,
    viewport: Option<V>,
    layout: Layout,
    responder: Box<dyn Responder>,
    welcome: String,
}

impl<E: TextEditor, V: ScrollableList> ChatSession<E, V> {
    pub fn new(mut editor: E, responder: Box<dyn Responder>, layout: Layout) -> Self {
        editor.set_focus(true);
        Self {
            messages: MessageStore::new(),
            focus: FocusMode::Editing,
            editor,
            viewport: None,
            layout,
            responder,
            welcome: DEFAULT_WELCOME.to_string(),
        }
    }

    pub fn with_welcome(mut self, welcome: impl Into<String>) -> Self {
        self.welcome = welcome.into();
        self
    }

    pub fn messages(&self) -> &MessageStore {
        &self.messages
    }

    pub fn focus(&self) -> FocusMode {
        self.focus
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.focus.selected_index()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    pub fn viewport(&self) -> Option<&V> {
        self.viewport.as_ref()
    }

    pub fn viewport_mut(&mut self) -> Option<&mut V> {
        self.viewport.as_mut()
    }

    /// True once the first terminal size is known and the viewport exists.
    pub fn is_ready(&self) -> bool {
        self.viewport.is_some()
    }

    pub fn geometry(&self) -> Option<Geometry> {
        self.viewport.as_ref().map(ScrollableList::geometry)
    }

    /// Recompute the layout for a `width` x `height` terminal.
    ///
    /// The first call builds the viewport; later calls only resize it.
    /// Calling this again with the same size leaves everything unchanged.
    pub fn resize(&mut self, width: u16, height: u16) {
        let geometry = self.layout.geometry(self.focus, width, height);
        match self.viewport.as_mut() {
            Some(viewport) => viewport.resize(geometry),
            None => {
                info!(
                    "Viewport ready at {}x{} (y_offset={})",
                    geometry.width, geometry.height, geometry.y_offset
                );
                self.viewport = Some(V::new(geometry));
            }
        }
        self.editor.set_width(width);
        debug!("Resized to {}x{}: viewport {:?}", width, height, geometry);
        self.refresh_content();
    }

    /// Advance the focus ring and apply the widget side effects of the move.
    pub fn cycle_focus(&mut self) {
        let from = self.focus;
        let to = from.cycle(self.messages.len());
        self.focus = to;
        self.editor.set_focus(to.is_editing());
        debug!("Focus {} -> {}", from.label(), to.label());
        self.refresh_content();
    }

    pub fn select_previous(&mut self) {
        self.focus = self.focus.select_previous();
        self.refresh_content();
    }

    pub fn select_next(&mut self) {
        self.focus = self.focus.select_next(self.messages.len());
        self.refresh_content();
    }

    /// Send the editor contents and append the responder's reply.
    ///
    /// Whitespace-only input is ignored and leaves the editor untouched.
    pub fn submit(&mut self) {
        let text = self.editor.value().trim().to_string();
        if text.is_empty() {
            return;
        }

        let reply = self.responder.respond(&text);
        info!("{}", describe_submission(&text, &reply));
        self.messages.push(Message::user(text));
        self.messages.push(Message::reply(reply));

        self.refresh_content();
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.scroll_to_bottom();
        }
        self.editor.clear();
    }

    pub fn forward_to_editor(&mut self, event: &Event) {
        self.editor.handle_event(event);
    }

    pub fn forward_to_viewport(&mut self, event: &Event) {
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.handle_event(event);
        }
    }

    /// Push freshly derived content into the viewport, if it exists.
    pub fn refresh_content(&mut self) {
        let entries = self.entries();
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.set_content(entries);
        }
    }

    /// Viewport content as a pure function of the log and the selection.
    pub fn entries(&self) -> Vec<Entry> {
        if self.messages.is_empty() {
            return vec![Entry {
                role: Role::Notice,
                label: NOTICE_LABEL.to_string(),
                text: self.welcome.clone(),
                highlighted: false,
            }];
        }

        let selected = self.focus.selected_index();
        self.messages
            .iter()
            .enumerate()
            .map(|(i, message)| {
                let (role, label) = match message.source() {
                    Source::User => (Role::User, USER_LABEL),
                    Source::Responder => (Role::Reply, self.responder.name()),
                };
                Entry {
                    role,
                    label: label.to_string(),
                    text: message.content().to_string(),
                    highlighted: selected == Some(i),
                }
            })
            .collect()
    }
}

fn describe_submission(text: &str, reply: &str) -> String {
    format!(
        "Submitted message ({} chars), reply {} chars",
        text.chars().count(),
        reply.chars().count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeEditor, FakeViewport, ready_session, test_session};

    fn focus_flags(session: &ChatSession<FakeEditor, FakeViewport>) -> [bool; 3] {
        [
            session.editor().is_focused(),
            session.focus() == FocusMode::Scrolling,
            session.selected_index().is_some(),
        ]
    }

    #[test]
    fn test_new_session_defaults() {
        let session = test_session();
        assert_eq!(session.focus(), FocusMode::Editing);
        assert!(session.messages().is_empty());
        assert!(session.editor().is_focused());
        assert!(!session.is_ready());
        assert_eq!(session.selected_index(), None);
    }

    #[test]
    fn test_first_resize_builds_viewport() {
        let mut session = test_session();
        session.resize(80, 24);

        assert!(session.is_ready());
        let geometry = session.geometry().unwrap();
        assert_eq!(geometry.width, 80);
        assert_eq!(geometry.y_offset, session.layout().header_height(FocusMode::Editing));
        assert_eq!(session.editor().width, 80);
        // Seeded with the welcome notice
        let viewport = session.viewport().unwrap();
        assert_eq!(viewport.entries.len(), 1);
        assert_eq!(viewport.entries[0].role, Role::Notice);
    }

    #[test]
    fn test_repeated_resize_is_idempotent() {
        let mut session = ready_session(100, 30);
        let geometry = session.geometry();
        let entries = session.viewport().unwrap().entries.clone();

        session.resize(100, 30);

        assert_eq!(session.geometry(), geometry);
        assert_eq!(session.viewport().unwrap().entries, entries);
    }

    #[test]
    fn test_resize_updates_dimensions() {
        let mut session = ready_session(80, 24);
        session.resize(120, 40);
        let geometry = session.geometry().unwrap();
        assert_eq!(geometry.width, 120);
        assert_eq!(geometry, session.layout().geometry(FocusMode::Editing, 120, 40));
    }

    #[test]
    fn test_submit_appends_user_then_reply() {
        let mut session = ready_session(80, 24);
        session.editor_mut().buffer = "  hello  ".to_string();

        session.submit();

        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages.get(0), Some(&Message::user("hello")));
        assert!(!messages.get(1).unwrap().is_user());
        assert_eq!(messages.get(1).unwrap().content(), "You said: hello");
        assert!(session.editor().buffer.is_empty());
        assert!(session.viewport().unwrap().at_bottom);
    }

    #[test]
    fn test_submit_whitespace_is_noop() {
        let mut session = ready_session(80, 24);
        session.editor_mut().buffer = " \n\t ".to_string();

        session.submit();

        assert!(session.messages().is_empty());
        assert_eq!(session.editor().buffer, " \n\t ");
        assert!(!session.viewport().unwrap().at_bottom);
    }

    #[test]
    fn test_submit_before_ready_still_records() {
        let mut session = test_session();
        session.editor_mut().buffer = "early".to_string();
        session.submit();
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn test_cycle_keeps_exactly_one_flag() {
        let mut session = ready_session(80, 24);
        session.editor_mut().buffer = "hi".to_string();
        session.submit();

        for _ in 0..6 {
            let flags = focus_flags(&session);
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "flags: {flags:?}");
            session.cycle_focus();
        }
    }

    #[test]
    fn test_selection_highlights_entry() {
        let mut session = ready_session(80, 24);
        session.editor_mut().buffer = "one".to_string();
        session.submit();

        session.cycle_focus();
        session.cycle_focus();
        assert_eq!(session.selected_index(), Some(0));

        session.select_next();
        let entries = &session.viewport().unwrap().entries;
        let highlighted: Vec<bool> = entries.iter().map(|e| e.highlighted).collect();
        assert_eq!(highlighted, [false, true]);

        session.cycle_focus();
        assert_eq!(session.selected_index(), None);
        assert!(session.viewport().unwrap().entries.iter().all(|e| !e.highlighted));
    }

    #[test]
    fn test_entries_label_authors() {
        let mut session = test_session();
        session.editor_mut().buffer = "x".to_string();
        session.submit();

        let entries = session.entries();
        assert_eq!(entries[0].label, "you");
        assert_eq!(entries[0].role, Role::User);
        assert_eq!(entries[1].label, "echo");
        assert_eq!(entries[1].role, Role::Reply);
    }

    #[test]
    fn test_custom_welcome() {
        let session = test_session().with_welcome("hi there");
        assert_eq!(session.entries()[0].text, "hi there");
    }

    #[test]
    fn test_submission_summary_counts_chars() {
        let summary = describe_submission("héllo wörld", "You said: héllo wörld");
        assert_eq!(summary, "Submitted message (11 chars), reply 21 chars");
    }
}
