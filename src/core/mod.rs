//! # Core Chat Logic
//!
//! The chat session itself. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ChatSession (state)  │
//!                    │  • Event (input)        │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │ TextEditor / ScrollableList
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`session`]: `ChatSession`, all session state in one place
//! - [`action`]: `Event`, `Key`, `Effect` and the `update()` dispatcher
//! - [`focus`]: the Editing/Scrolling/Selecting ring
//! - [`layout`]: header/footer sizing and viewport geometry
//! - [`message`]: messages and the append-only store
//! - [`responder`]: reply generation
//! - [`widgets`]: capability traits for the embedded editor and viewport
//! - [`config`]: settings file and override resolution

pub mod action;
pub mod config;
pub mod focus;
pub mod layout;
pub mod message;
pub mod responder;
pub mod session;
pub mod widgets;
