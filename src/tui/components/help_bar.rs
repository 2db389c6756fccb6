//! # HelpBar Component
//!
//! Key hints under the editor. The hints change with the focus mode; the
//! number of lines does not.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct HelpBar {
    pub lines: Vec<&'static str>,
}

impl HelpBar {
    pub fn new(lines: Vec<&'static str>) -> Self {
        Self { lines }
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(Color::DarkGray);
        let lines: Vec<Line> = self.lines.iter().map(|l| Line::styled(*l, style)).collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_help_bar_renders_hint() {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        let mut help = HelpBar::new(vec!["tab: browse · esc: quit"]);

        terminal.draw(|f| help.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("tab: browse"));
        assert_eq!(terminal.backend().buffer()[(0, 0)].fg, Color::DarkGray);
    }
}
