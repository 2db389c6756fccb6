use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::session::ChatSession;
use crate::tui::component::Component;
use crate::tui::components::{HelpBar, InputBox, MessageView, TitleBar};

pub type Session = ChatSession<InputBox, MessageView>;

/// Draw the session. Every region is placed from the viewport geometry the
/// session computed on its last resize.
pub fn draw_ui(frame: &mut Frame, session: &mut Session) {
    let area = frame.area();
    let Some(geometry) = session.geometry() else {
        draw_initializing(frame, area);
        return;
    };

    let focus = session.focus();
    let layout = *session.layout();
    let header_lines = layout.header_lines(focus);
    let help_lines = layout.help_lines(focus);

    let log_top = area.y.saturating_add(geometry.y_offset);
    let editor_top = log_top.saturating_add(geometry.height);
    let help_top = editor_top.saturating_add(layout.editor_height());

    let header_area = Rect::new(area.x, area.y, area.width, geometry.y_offset).intersection(area);
    let log_area = Rect::new(area.x, log_top, geometry.width, geometry.height).intersection(area);
    let editor_area =
        Rect::new(area.x, editor_top, area.width, layout.editor_height()).intersection(area);
    let help_area =
        Rect::new(area.x, help_top, area.width, help_lines.len() as u16).intersection(area);

    TitleBar::new(header_lines).render(frame, header_area);
    if let Some(viewport) = session.viewport_mut() {
        viewport.render(frame, log_area);
    }
    // A frame drawn before a shrinking resize is applied can clip the footer away
    if !editor_area.is_empty() {
        session.editor_mut().render(frame, editor_area);
    }
    HelpBar::new(help_lines).render(frame, help_area);
}

fn draw_initializing(frame: &mut Frame, area: Rect) {
    let [middle] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let text = Paragraph::new("Initializing...")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, middle);
}
