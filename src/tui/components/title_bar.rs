//! # TitleBar Component
//!
//! Header region above the message log. Shows the app name and the current
//! focus mode, one row per header line.
//!
//! Purely presentational: the lines come from `Layout::header_lines`, which
//! also decides how tall the header is. The bar just draws what it's given.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct TitleBar {
    pub lines: Vec<String>,
}

impl TitleBar {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .lines
            .iter()
            .map(|l| Line::styled(l.as_str(), Style::default().add_modifier(Modifier::BOLD)))
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_title_bar_renders_lines() {
        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut title_bar = TitleBar::new(vec!["gabble · EDITING".to_string()]);

        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("gabble"));
        assert!(text.contains("EDITING"));
    }
}
