//! # Messages
//!
//! A `Message` is one line of the conversation. The `MessageStore` keeps them
//! in the order they were sent and only ever grows: there is no API to edit
//! or remove a message once it has been appended.

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    User,
    Responder,
}

/// A single chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    source: Source,
    content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            source: Source::User,
            content: content.into(),
        }
    }

    pub fn reply(content: impl Into<String>) -> Self {
        Self {
            source: Source::Responder,
            content: content.into(),
        }
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_user(&self) -> bool {
        self.source == Source::User
    }
}

/// Append-only conversation log. Insertion order is display order.
#[derive(Debug, Default, Clone)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }
}
