//! # Responder
//!
//! Turns a submitted message into a reply. Replies are produced
//! synchronously on the event loop, so implementations must not block.

pub const DEFAULT_REPLY_PREFIX: &str = "You said: ";

pub trait Responder {
    /// Returns the name of the responder, shown as the reply's author.
    fn name(&self) -> &str;

    /// Produce the reply text for `message`.
    fn respond(&self, message: &str) -> String;
}

/// Echoes the submitted message back behind a fixed prefix.
#[derive(Debug, Clone)]
pub struct EchoResponder {
    prefix: String,
}

impl EchoResponder {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for EchoResponder {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_PREFIX)
    }
}

impl Responder for EchoResponder {
    fn name(&self) -> &str {
        "echo"
    }

    fn respond(&self, message: &str) -> String {
        format!("{}{}", self.prefix, message)
    }
}
