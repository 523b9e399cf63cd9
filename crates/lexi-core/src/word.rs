//! The `Word` domain entity.
//!
//! A `Word` always holds normalized text; construction and renaming are the
//! only ways to set it, and both validate. This is deliberately stricter
//! than the wire-format [`WordRecord`], which carries whatever the client
//! sent.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::CoreError;
use crate::normalize::normalize;
use crate::records::WordRecord;

/// A vocabulary word with identity, normalized text, and learning dates.
#[derive(Debug, Clone, Serialize)]
pub struct Word {
    id: Option<i64>,
    text: String,
    created: DateTime<Utc>,
    learned: Option<DateTime<Utc>>,
}

impl Word {
    /// Create a new, unpersisted word from raw text. `created` is set to now.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyAfterNormalization`] if the text normalizes
    /// to an empty string.
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let text = checked_normalize(raw)?;
        Ok(Self {
            id: None,
            text,
            created: Utc::now(),
            learned: None,
        })
    }

    /// Build a word from a wire record, validating the text.
    ///
    /// Missing `created` defaults to now; `id: 0` is treated as "no id".
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyAfterNormalization`] if the record's text
    /// normalizes to an empty string.
    pub fn from_record(record: &WordRecord) -> Result<Self, CoreError> {
        let text = checked_normalize(&record.word)?;
        Ok(Self {
            id: record.effective_id(),
            text,
            created: record.created.unwrap_or_else(Utc::now),
            learned: record.learned,
        })
    }

    /// Convert back to the wire shape.
    #[must_use]
    pub fn to_record(&self) -> WordRecord {
        WordRecord {
            id: self.id,
            word: self.text.clone(),
            created: Some(self.created),
            learned: self.learned,
        }
    }

    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn created(&self) -> DateTime<Utc> {
        self.created
    }

    #[must_use]
    pub const fn learned(&self) -> Option<DateTime<Utc>> {
        self.learned
    }

    #[must_use]
    pub const fn is_learned(&self) -> bool {
        self.learned.is_some()
    }

    /// Replace the word text, re-validating through normalization.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyAfterNormalization`] if the new text
    /// normalizes to an empty string; the word is left unchanged.
    pub fn rename(&mut self, raw: &str) -> Result<(), CoreError> {
        self.text = checked_normalize(raw)?;
        Ok(())
    }

    /// Set the learned date to now.
    pub fn mark_as_learned(&mut self) {
        self.learned = Some(Utc::now());
    }

    /// Clear the learned date, returning the word to "still learning".
    pub fn reset_learning(&mut self) {
        self.learned = None;
    }

    /// Human-readable elapsed time between `created` and either the learned
    /// date or now.
    #[must_use]
    pub fn learning_period(&self) -> String {
        self.learning_period_at(Utc::now())
    }

    /// [`learning_period`](Self::learning_period) with an explicit "now",
    /// used when the learned date is unset.
    ///
    /// Buckets the absolute whole-day difference: exactly 1 day is
    /// "1 day", under 90 days "N days", under 2 years "N months"
    /// (days/30), otherwise "N years" (days/365).
    #[must_use]
    pub fn learning_period_at(&self, now: DateTime<Utc>) -> String {
        let to = self.learned.unwrap_or(now);
        let days = (to - self.created).num_days().abs();
        if days == 1 {
            return "1 day".to_string();
        }
        if days < 90 {
            return format!("{days} days");
        }
        if days < 730 {
            return format!("{} months", days / 30);
        }
        format!("{} years", days / 365)
    }

    /// Whether this word's text equals the given raw text once normalized.
    #[must_use]
    pub fn matches_text(&self, raw: &str) -> bool {
        self.text == normalize(raw)
    }
}

/// Words compare by normalized text only, never by id.
impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl PartialEq<WordRecord> for Word {
    fn eq(&self, other: &WordRecord) -> bool {
        self.text == normalize(&other.word)
    }
}

fn checked_normalize(raw: &str) -> Result<String, CoreError> {
    let text = normalize(raw);
    if text.is_empty() {
        return Err(CoreError::EmptyAfterNormalization {
            raw: raw.to_string(),
        });
    }
    Ok(text)
}
