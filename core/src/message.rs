/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Author {
    User,
    Assistant,
}

impl Author {
    /// Short label shown next to the bubble
    pub fn label(self) -> &'static str {
        match self {
            Author::User => "You",
            Author::Assistant => "Assistant",
        }
    }

    pub fn avatar(self) -> &'static str {
        match self {
            Author::User => "👤",
            Author::Assistant => "🤖",
        }
    }
}

/// A single rendered chat turn. Messages are never edited after they are
/// appended to a log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub author: Author,
    pub text: String,
}

impl Message {
    pub fn new(author: Author, text: impl Into<String>) -> Self {
        Self {
            author,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Author::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Author::Assistant, text)
    }

    /// Format the message for plain-text display
    pub fn formatted_content(&self) -> String {
        format!("{} {}: {}", self.author.avatar(), self.author.label(), self.text)
    }
}
