//! Message content validation domain service.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::domain::entities::MAX_CONTENT_LENGTH;

/// Words that may not appear anywhere in a message, matched case-insensitively.
pub const FORBIDDEN_WORDS: [&str; 2] = ["badword1", "badword2"];

/// Naive date-time layouts accepted for caller-supplied timestamps.
/// Values without an offset are taken as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Who authored a message. Accepted on input only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sender {
    #[default]
    User,
    System,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::System => "system",
        }
    }
}

impl FromStr for Sender {
    type Err = ContentViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "system" => Ok(Self::System),
            _ => Err(ContentViolation::InvalidSender),
        }
    }
}

/// A rule a message failed, in the order rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContentViolation {
    #[error("Missing session_id or content")]
    MissingFields,

    #[error("Content exceeds 512 characters")]
    ContentTooLong,

    #[error("Sender must be 'user' or 'system'")]
    InvalidSender,

    #[error("Message contains forbidden words")]
    ForbiddenContent,

    #[error("Invalid timestamp format")]
    InvalidTimestamp,
}

/// Raw, unvalidated fields of a message to be created.
///
/// `sender` is `None` when the key was missing and `Some(None)` when it was
/// an explicit `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageDraft<'a> {
    pub session_id: Option<&'a str>,
    pub content: Option<&'a str>,
    pub sender: Option<Option<&'a str>>,
    pub timestamp: Option<&'a str>,
}

/// A draft that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft {
    pub session_id: String,
    pub content: String,
    pub sender: Sender,
    /// `None` means "use the creation time".
    pub timestamp: Option<DateTime<Utc>>,
}

/// Figures derived from message content, reported on creation only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentMetadata {
    pub word_count: usize,
    pub character_count: usize,
    pub processed_at: String,
}

impl ContentMetadata {
    pub fn compute(content: &str) -> Self {
        Self {
            word_count: content.split_whitespace().count(),
            character_count: content.chars().count(),
            processed_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// Domain service holding the message content rules.
pub struct MessageValidationService;

impl MessageValidationService {
    /// Validate a new message.
    ///
    /// Rules run in a fixed order and the first failure wins: required
    /// fields, length, sender, forbidden words, timestamp.
    pub fn validate_draft(draft: MessageDraft<'_>) -> Result<ValidatedDraft, ContentViolation> {
        let (session_id, content) = match (non_empty(draft.session_id), non_empty(draft.content)) {
            (Some(session_id), Some(content)) => (session_id, content),
            _ => return Err(ContentViolation::MissingFields),
        };

        Self::check_length(content)?;

        let sender = match draft.sender {
            None => Sender::default(),
            Some(raw) => raw.ok_or(ContentViolation::InvalidSender)?.parse()?,
        };

        if Self::contains_forbidden(content) {
            return Err(ContentViolation::ForbiddenContent);
        }

        let timestamp = match non_empty(draft.timestamp) {
            Some(raw) => Some(Self::parse_timestamp(raw).ok_or(ContentViolation::InvalidTimestamp)?),
            None => None,
        };

        Ok(ValidatedDraft {
            session_id: session_id.to_string(),
            content: content.to_string(),
            sender,
            timestamp,
        })
    }

    /// Validate replacement content for an existing message.
    pub fn validate_edit(content: &str) -> Result<(), ContentViolation> {
        if Self::contains_forbidden(content) {
            return Err(ContentViolation::ForbiddenContent);
        }
        Self::check_length(content)
    }

    /// Case-insensitive substring match against [`FORBIDDEN_WORDS`].
    pub fn contains_forbidden(text: &str) -> bool {
        let lowered = text.to_lowercase();
        FORBIDDEN_WORDS.iter().any(|word| lowered.contains(word))
    }

    /// Parse an ISO-8601 timestamp.
    ///
    /// Accepts RFC 3339 (including a `Z` suffix), naive date-times taken as
    /// UTC, and bare dates taken as midnight UTC.
    pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();

        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        if let Ok(ts) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
            return Some(ts.with_timezone(&Utc));
        }

        NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .map(|naive| naive.and_utc())
    }

    fn check_length(content: &str) -> Result<(), ContentViolation> {
        if content.chars().count() > MAX_CONTENT_LENGTH {
            return Err(ContentViolation::ContentTooLong);
        }
        Ok(())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
