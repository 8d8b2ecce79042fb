//! Append-only chat transcript.
//!
//! The transcript is not structured data: it is the rendered message markup,
//! persisted verbatim as one blob in the `campusChat` slot and reloaded
//! verbatim at startup. Round-tripping is render-format-exact, so no
//! per-message structure survives persistence.

use rusqlite::Connection;

use crate::db;
use crate::error::Result;

/// Slot holding the rendered transcript blob.
pub const CHAT_SLOT: &str = "campusChat";

/// Who a transcript message belongs to; styled via its CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

impl Role {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::User => "userMsg",
            Self::Bot => "botMsg",
        }
    }
}

/// The rendered message log.
#[derive(Debug, Default)]
pub struct ChatTranscript {
    html: String,
}

impl ChatTranscript {
    /// Load the persisted blob verbatim; absent slot means an empty
    /// transcript.
    pub fn restore(conn: &Connection) -> Result<Self> {
        let html = db::read_slot(conn, CHAT_SLOT)?.unwrap_or_default();
        Ok(Self { html })
    }

    /// Render a message, append it, and persist the whole blob.
    pub fn append(&mut self, conn: &Connection, text: &str, role: Role) -> Result<()> {
        let mut html = self.html.clone();
        html.push_str(&format!(
            "<div class=\"message {}\">{}</div>",
            role.css_class(),
            escape_html(text)
        ));
        db::write_slot(conn, CHAT_SLOT, &html)?;
        self.html = html;
        Ok(())
    }

    /// The rendered transcript markup.
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

/// Escape HTML-sensitive characters for safe embedding in the transcript.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}
