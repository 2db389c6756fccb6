use gabble::core::action::{Effect, Event, Key, update};
use gabble::core::config::{CliOverrides, GabbleConfig, resolve_with_env};
use gabble::core::focus::FocusMode;
use gabble::core::widgets::{Role, TextEditor};
use gabble::tui::{Session, build_session};

// ============================================================================
// Helper Functions
// ============================================================================

fn session_with(config: GabbleConfig) -> Session {
    let resolved = resolve_with_env(&config, &CliOverrides::default(), |_| None);
    let mut session = build_session(&resolved);
    update(&mut session, Event::Resize { width: 80, height: 24 });
    session
}

fn session() -> Session {
    session_with(GabbleConfig::default())
}

fn press(session: &mut Session, key: Key) -> Effect {
    update(session, Event::Key(key))
}

fn send(session: &mut Session, text: &str) {
    for c in text.chars() {
        press(session, Key::Char(c));
    }
    press(session, Key::Confirm);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_typing_and_sending_echoes() {
    let mut session = session();
    send(&mut session, "hello");

    let messages: Vec<_> = session.messages().iter().map(|m| m.content()).collect();
    assert_eq!(messages, ["hello", "You said: hello"]);
    assert_eq!(session.editor().value(), "");

    let viewport = session.viewport().unwrap();
    assert_eq!(viewport.entries().len(), 2);
    assert_eq!(viewport.entries()[0].role, Role::User);
    assert_eq!(viewport.entries()[1].role, Role::Reply);
}

#[test]
fn test_multiline_message_keeps_newline() {
    let mut session = session();
    press(&mut session, Key::Char('a'));
    press(&mut session, Key::NewLine);
    press(&mut session, Key::Char('b'));
    press(&mut session, Key::Confirm);

    assert_eq!(session.messages().get(0).unwrap().content(), "a\nb");
}

#[test]
fn test_whitespace_only_is_not_sent() {
    let mut session = session();
    press(&mut session, Key::Paste("   \n  ".into()));
    press(&mut session, Key::Confirm);

    assert!(session.messages().is_empty());
    assert_eq!(session.editor().value(), "   \n  ");
    assert_eq!(session.viewport().unwrap().entries()[0].role, Role::Notice);
}

#[test]
fn test_char_limit_from_config() {
    let mut config = GabbleConfig::default();
    config.editor.max_chars = Some(5);
    let mut session = session_with(config);

    press(&mut session, Key::Paste("abcdefgh".into()));
    assert_eq!(session.editor().value(), "abcde");
    press(&mut session, Key::Char('z'));
    assert_eq!(session.editor().value(), "abcde");
}

#[test]
fn test_focus_cycle_and_selection() {
    let mut session = session();
    send(&mut session, "one");
    send(&mut session, "two");

    press(&mut session, Key::CycleFocus);
    assert_eq!(session.focus(), FocusMode::Scrolling);
    assert!(!session.editor().is_focused());

    press(&mut session, Key::CycleFocus);
    assert_eq!(session.selected_index(), Some(0));
    assert!(session.viewport().unwrap().entries()[0].highlighted);

    press(&mut session, Key::Down);
    press(&mut session, Key::Down);
    assert_eq!(session.selected_index(), Some(2));

    // Typing is discarded while selecting
    press(&mut session, Key::Char('x'));
    assert_eq!(session.editor().value(), "");

    press(&mut session, Key::CycleFocus);
    assert_eq!(session.focus(), FocusMode::Editing);
    assert!(session.editor().is_focused());
    assert!(session.viewport().unwrap().entries().iter().all(|e| !e.highlighted));
}

#[test]
fn test_scrolling_mode_moves_viewport_only() {
    let mut session = session();
    for i in 0..10 {
        send(&mut session, &format!("message number {i}"));
    }
    let bottom = session.viewport().unwrap().scroll_offset();
    assert!(bottom > 0);
    assert!(session.viewport().unwrap().is_stuck_to_bottom());

    press(&mut session, Key::CycleFocus);
    press(&mut session, Key::PageUp);
    let viewport = session.viewport().unwrap();
    assert!(viewport.scroll_offset() < bottom);
    assert!(!viewport.is_stuck_to_bottom());

    press(&mut session, Key::Char('q'));
    assert_eq!(session.editor().value(), "");

    press(&mut session, Key::End);
    assert_eq!(session.viewport().unwrap().scroll_offset(), bottom);
}

#[test]
fn test_sending_scrolls_back_to_bottom() {
    let mut session = session();
    for i in 0..10 {
        send(&mut session, &format!("message number {i}"));
    }
    press(&mut session, Key::CycleFocus);
    press(&mut session, Key::Home);
    assert_eq!(session.viewport().unwrap().scroll_offset(), 0);

    press(&mut session, Key::CycleFocus);
    press(&mut session, Key::CycleFocus);
    assert_eq!(session.focus(), FocusMode::Editing);
    send(&mut session, "latest");

    let viewport = session.viewport().unwrap();
    assert!(viewport.is_stuck_to_bottom());
    assert_eq!(viewport.scroll_offset(), viewport.max_offset());
}

#[test]
fn test_resize_is_idempotent() {
    let mut session = session();
    send(&mut session, "hi");
    let geometry = session.geometry();
    let offset = session.viewport().unwrap().scroll_offset();

    update(&mut session, Event::Resize { width: 80, height: 24 });

    assert_eq!(session.geometry(), geometry);
    assert_eq!(session.viewport().unwrap().scroll_offset(), offset);
}

#[test]
fn test_geometry_reserves_header_and_footer() {
    let session = session();
    let geometry = session.geometry().unwrap();
    let layout = session.layout();
    assert_eq!(geometry.y_offset, layout.header_height(FocusMode::Editing));
    assert_eq!(
        geometry.height,
        24 - layout.header_height(FocusMode::Editing) - layout.footer_height(FocusMode::Editing)
    );
}

#[test]
fn test_quit_from_any_mode() {
    let mut session = session();
    send(&mut session, "bye");
    for _ in 0..3 {
        assert_eq!(press(&mut session, Key::Quit), Effect::Quit);
        press(&mut session, Key::CycleFocus);
    }
}

#[test]
fn test_reply_prefix_from_config() {
    let mut config = GabbleConfig::default();
    config.chat.reply_prefix = Some("echo: ".into());
    let mut session = session_with(config);
    send(&mut session, "ping");
    assert_eq!(session.messages().last().unwrap().content(), "echo: ping");
}
