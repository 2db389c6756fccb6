use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields) and may hold internal
/// presentation state. They render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so a component can update caches (wrapped line
/// heights, scroll offsets) during the render pass, the same way ratatui's
/// `StatefulWidget` does.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
