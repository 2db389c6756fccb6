//! # MessageView Component
//!
//! Scrollable view of the chat log.
//!
//! ## Responsibilities
//!
//! - Display the session's entries as framed blocks
//! - Keep a height cache so scroll bounds are known without rendering
//! - Stick to the bottom while the user hasn't scrolled away
//! - Bring the highlighted entry into view when the selection moves
//!
//! ## Architecture
//!
//! Unlike the other components, `MessageView` is persistent: the session owns
//! it (through the `ScrollableList` capability) from the first resize onward.
//! All scroll math happens in `set_content`, `resize` and `handle_event`, so
//! rendering only draws what the state already says.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::action::{Event, Key};
use crate::core::layout::Geometry;
use crate::core::widgets::{Entry, ScrollableList};
use crate::tui::component::Component;
use crate::tui::components::message::Message;

pub struct MessageView {
    geometry: Geometry,
    entries: Vec<Entry>,
    /// Scroll offset and view state
    scroll_state: ScrollViewState,
    /// Cached layout measurements
    layout: LayoutCache,
    /// When true, auto-scroll to bottom on new content
    stick_to_bottom: bool,
}

impl MessageView {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    pub fn is_stuck_to_bottom(&self) -> bool {
        self.stick_to_bottom
    }

    pub fn content_height(&self) -> u16 {
        self.layout.total()
    }

    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self) -> u16 {
        self.layout.total().saturating_sub(self.geometry.height)
    }

    /// Width available to entries, leaving one column for the scrollbar.
    fn content_width(&self) -> u16 {
        self.geometry.width.saturating_sub(1)
    }

    fn set_offset(&mut self, y: u16) {
        self.scroll_state.set_offset(Position {
            x: 0,
            y: y.min(self.max_offset()),
        });
    }

    fn page_size(&self) -> u16 {
        self.geometry.height.max(1)
    }

    fn relayout(&mut self) {
        let width = self.content_width();
        self.layout.update(&self.entries, width);

        if self.stick_to_bottom {
            self.set_offset(self.max_offset());
        } else {
            self.clamp_scroll();
        }
        self.reveal_highlighted();
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    fn clamp_scroll(&mut self) {
        let current = self.scroll_offset();
        if current > self.max_offset() {
            self.set_offset(current);
        }
    }

    /// Clamp scroll and re-engage auto-scroll if the user has reached the bottom.
    fn repin_if_at_bottom(&mut self) {
        if self.scroll_offset() >= self.max_offset() {
            self.stick_to_bottom = true;
            self.set_offset(self.max_offset());
        }
    }

    /// Scroll so the highlighted entry is fully visible.
    /// If the entry is taller than the viewport, align its top edge.
    fn reveal_highlighted(&mut self) {
        let Some(idx) = self.entries.iter().position(|e| e.highlighted) else {
            return;
        };
        let Some((item_top, item_bottom)) = self.layout.span(idx) else {
            return;
        };
        let offset_y = self.scroll_offset();
        let viewport_height = self.geometry.height;

        if item_top < offset_y {
            self.set_offset(item_top);
            self.stick_to_bottom = false;
        } else if item_bottom > offset_y + viewport_height {
            let new_y = item_bottom
                .saturating_sub(viewport_height)
                .min(item_top);
            self.set_offset(new_y);
            self.stick_to_bottom = new_y >= self.max_offset();
        }
    }
}

impl ScrollableList for MessageView {
    fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            entries: Vec::new(),
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::default(),
            stick_to_bottom: true, // Start attached to bottom
        }
    }

    fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn resize(&mut self, geometry: Geometry) {
        if geometry == self.geometry {
            return;
        }
        self.geometry = geometry;
        self.relayout();
    }

    fn set_content(&mut self, entries: Vec<Entry>) {
        if entries == self.entries {
            return;
        }
        self.entries = entries;
        self.relayout();
    }

    fn scroll_to_bottom(&mut self) {
        self.stick_to_bottom = true;
        self.set_offset(self.max_offset());
    }

    fn handle_event(&mut self, event: &Event) {
        let Event::Key(key) = event else {
            return;
        };
        let offset = self.scroll_offset();
        match key {
            Key::Up => {
                self.set_offset(offset.saturating_sub(1));
                self.stick_to_bottom = false;
            }
            Key::Down => {
                self.set_offset(offset.saturating_add(1));
                self.repin_if_at_bottom();
            }
            Key::PageUp => {
                self.set_offset(offset.saturating_sub(self.page_size()));
                self.stick_to_bottom = false;
            }
            Key::PageDown => {
                self.set_offset(offset.saturating_add(self.page_size()));
                self.repin_if_at_bottom();
            }
            Key::Home => {
                self.set_offset(0);
                self.stick_to_bottom = false;
            }
            Key::End => self.scroll_to_bottom(),
            _ => {}
        }
    }
}

impl Component for MessageView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = self.content_width();
        let total_height = self.layout.total();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let visible = self
            .layout
            .visible_range(self.scroll_offset(), self.geometry.height);
        let mut y_offset = self.layout.top_of(visible.start);
        for i in visible {
            let height = self.layout.heights[i];
            let rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(Message::new(&self.entries[i]), rect);
            y_offset += height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.scroll_state);
    }
}

/// Cached layout measurements
#[derive(Debug, Default)]
struct LayoutCache {
    heights: Vec<u16>,
    prefix_heights: Vec<u16>,
    /// Entries the heights were measured for.
    measured: Vec<Entry>,
    content_width: u16,
}

impl LayoutCache {
    /// Number of leading heights that are still valid for `entries` at `content_width`.
    fn reusable_count(&self, entries: &[Entry], content_width: u16) -> usize {
        if self.content_width != content_width {
            return 0;
        }
        self.measured
            .iter()
            .zip(entries)
            .take_while(|(old, new)| old.text == new.text && old.label == new.label)
            .count()
    }

    fn update(&mut self, entries: &[Entry], content_width: u16) {
        let reusable = self.reusable_count(entries, content_width);
        self.heights.truncate(reusable);
        for entry in &entries[reusable..] {
            self.heights.push(Message::calculate_height(entry, content_width));
        }
        self.measured = entries.to_vec();
        self.content_width = content_width;
        self.rebuild_prefix_heights();
    }

    fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc = acc.saturating_add(h);
                Some(*acc)
            })
            .collect();
    }

    fn total(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    fn top_of(&self, idx: usize) -> u16 {
        if idx == 0 {
            0
        } else {
            self.prefix_heights.get(idx - 1).copied().unwrap_or_else(|| self.total())
        }
    }

    /// Top and bottom row of entry `idx`, in content coordinates.
    fn span(&self, idx: usize) -> Option<(u16, u16)> {
        let bottom = *self.prefix_heights.get(idx)?;
        Some((self.top_of(idx), bottom))
    }

    fn visible_range(&self, scroll_offset: u16, viewport_height: u16) -> std::ops::Range<usize> {
        let end_row = scroll_offset.saturating_add(viewport_height);
        let start = self
            .prefix_heights
            .partition_point(|&end| end <= scroll_offset);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < end_row)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end.max(start)
    }
}
