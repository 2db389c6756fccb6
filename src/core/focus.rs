//! # Focus State Machine
//!
//! Decides which widget owns keyboard input.
//!
//! ```text
//!            cycle                 cycle (log non-empty)
//!  Editing ────────▶ Scrolling ─────────────────────────▶ Selecting { index: 0 }
//!     ▲                  │                                      │
//!     │                  │ cycle (log empty)                    │
//!     ├──────────────────┘                                      │
//!     └──────────────────────────── cycle ──────────────────────┘
//! ```
//!
//! The selected index lives inside the `Selecting` variant, so there is no
//! way to hold an index while another mode is active.

/// Which widget currently receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusMode {
    /// The input editor has focus. Initial state.
    #[default]
    Editing,
    /// The message viewport scrolls freely.
    Scrolling,
    /// A single message is highlighted and navigated with up/down.
    Selecting { index: usize },
}

impl FocusMode {
    /// Next mode in the ring. `Selecting` is skipped when the log is empty.
    pub fn cycle(self, message_count: usize) -> Self {
        match self {
            FocusMode::Editing => FocusMode::Scrolling,
            FocusMode::Scrolling if message_count > 0 => FocusMode::Selecting { index: 0 },
            FocusMode::Scrolling => FocusMode::Editing,
            FocusMode::Selecting { .. } => FocusMode::Editing,
        }
    }

    /// Move the selection one message up, clamping at the first message.
    pub fn select_previous(self) -> Self {
        match self {
            FocusMode::Selecting { index } => FocusMode::Selecting {
                index: index.saturating_sub(1),
            },
            other => other,
        }
    }

    /// Move the selection one message down, clamping at the last message.
    pub fn select_next(self, message_count: usize) -> Self {
        match self {
            FocusMode::Selecting { index } if index + 1 < message_count => {
                FocusMode::Selecting { index: index + 1 }
            }
            other => other,
        }
    }

    pub fn selected_index(self) -> Option<usize> {
        match self {
            FocusMode::Selecting { index } => Some(index),
            _ => None,
        }
    }

    pub fn is_editing(self) -> bool {
        self == FocusMode::Editing
    }

    pub fn label(self) -> &'static str {
        match self {
            FocusMode::Editing => "EDITING",
            FocusMode::Scrolling => "SCROLLING",
            FocusMode::Selecting { .. } => "SELECTING",
        }
    }
}
