//! # TUI Components
//!
//! UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Created each frame from session data:
//! - `TitleBar`: header lines naming the app and focus mode
//! - `HelpBar`: key hints for the current focus mode
//! - `Message`: a single framed log entry
//!
//! ### Stateful Components
//!
//! Owned by the session and driven through the core widget traits:
//! - `InputBox`: bounded multi-line editor (`TextEditor`)
//! - `MessageView`: scrollable log with layout caching (`ScrollableList`)
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Header)
//! ├── help_bar.rs      (Key hints)
//! ├── message.rs       (Single entry renderer)
//! ├── message_view.rs  (Scrollable entry container)
//! └── input_box/       (Text input with cursor and wrapping)
//! ```

mod help_bar;
mod title_bar;
pub use help_bar::HelpBar;
pub use title_bar::TitleBar;

pub mod input_box;
pub mod message;
pub mod message_view;
pub use input_box::InputBox;
pub use message_view::MessageView;
