//! Wire types for the Mailgun messages API.
//!
//! Shapes follow the two endpoints the Cog reads: the stored-events
//! listing (an "inbox") and the stored message behind each event's
//! storage URL. Mailgun uses kebab-case keys for message bodies
//! (`body-html`, `body-plain`), mirrored here with serde renames.

use serde::{Deserialize, Serialize};

/// Inbox listing returned by the stored-events endpoint.
///
/// On success Mailgun returns an `items` array. On upstream failures
/// (bad key, rate limiting) it returns a `message` string in place of a
/// listing, which steps surface verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inbox {
    /// Stored-message events, newest first.
    #[serde(default)]
    pub items: Vec<InboxItem>,

    /// Error message Mailgun returned in place of a listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One stored-message event in an inbox listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboxItem {
    /// Where the full message can be retrieved.
    pub storage: MessageStorage,
}

/// Storage pointer for a stored message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageStorage {
    /// URL of the stored message.
    pub url: String,

    /// Opaque storage key.
    #[serde(default)]
    pub key: String,
}

/// A stored email message.
///
/// Every field is optional: Mailgun omits keys the message does not
/// carry (a plain-text mail has no `body-html`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Subject line.
    #[serde(default)]
    pub subject: Option<String>,

    /// Sender, as it appeared on the wire (e.g. `"Ann <ann@example.com>"`).
    #[serde(default)]
    pub from: Option<String>,

    /// HTML body.
    #[serde(rename = "body-html", default)]
    pub body_html: Option<String>,

    /// Plain-text body.
    #[serde(rename = "body-plain", default)]
    pub body_plain: Option<String>,
}

impl EmailMessage {
    /// Look up a field by its validated name. `None` when the message
    /// does not carry that field.
    pub fn field(&self, field: EmailField) -> Option<&str> {
        match field {
            EmailField::Subject => self.subject.as_deref(),
            EmailField::From => self.from.as_deref(),
            EmailField::BodyHtml => self.body_html.as_deref(),
            EmailField::BodyPlain => self.body_plain.as_deref(),
        }
    }
}

/// The message fields a validation step may check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmailField {
    Subject,
    BodyHtml,
    BodyPlain,
    From,
}

impl EmailField {
    /// Parse a field name as captured from scenario text.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "subject" => Some(Self::Subject),
            "body-html" => Some(Self::BodyHtml),
            "body-plain" => Some(Self::BodyPlain),
            "from" => Some(Self::From),
            _ => None,
        }
    }

    /// The wire-form field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::BodyHtml => "body-html",
            Self::BodyPlain => "body-plain",
            Self::From => "from",
        }
    }
}
