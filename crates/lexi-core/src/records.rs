//! Wire-format records and bulk-operation statistics.
//!
//! These are the shapes that cross the HTTP boundary and the database
//! boundary. They carry no behavior beyond bookkeeping; validation lives in
//! [`crate::word::Word`] and in the store's reconciliation logic. Conversion
//! between records and entities is always explicit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A word as it crosses the wire: untrusted, possibly un-normalized text
/// and optional timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub word: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub learned: Option<DateTime<Utc>>,
}

impl WordRecord {
    /// A record with only the word text set.
    #[must_use]
    pub fn of(word: impl Into<String>) -> Self {
        Self {
            id: None,
            word: word.into(),
            created: None,
            learned: None,
        }
    }

    /// The id this record addresses, if any.
    ///
    /// Ids are positive row ids; `0` (and negatives) mean "no id", so a
    /// record like `{id: 0, word: "x"}` creates a fresh row.
    #[must_use]
    pub fn effective_id(&self) -> Option<i64> {
        self.id.filter(|id| *id > 0)
    }
}

/// One classification bucket of a bulk save: a tally plus the affected rows
/// as stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bucket {
    pub count: u32,
    pub words: Vec<WordRecord>,
}

impl Bucket {
    pub fn push(&mut self, record: WordRecord) {
        self.count += 1;
        self.words.push(record);
    }
}

/// Tally of records rejected by normalization. Intentionally a bare count:
/// unnormalizable input is never echoed back to clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Skipped {
    pub count: u32,
}

/// Outcome of a bulk save: every input record lands in exactly one bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveStatistics {
    pub created: Bucket,
    pub updated: Bucket,
    pub duplicates: Bucket,
    pub skipped: Skipped,
}

/// Outcome of a bulk delete. Records without an id are skipped; deleting an
/// id is idempotent and always counts as deleted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteStatistics {
    pub deleted: u32,
    pub skipped: u32,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn effective_id_treats_zero_as_absent() {
        let mut record = WordRecord::of("test");
        assert_eq!(record.effective_id(), None);
        record.id = Some(0);
        assert_eq!(record.effective_id(), None);
        record.id = Some(7);
        assert_eq!(record.effective_id(), Some(7));
    }

    #[test]
    fn record_deserializes_with_missing_fields() {
        let record: WordRecord = serde_json::from_str(r#"{"word":"test"}"#).unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.word, "test");
        assert_eq!(record.created, None);
        assert_eq!(record.learned, None);
    }

    #[test]
    fn statistics_serialize_with_all_buckets() {
        let mut stats = SaveStatistics::default();
        stats.created.push(WordRecord::of("new"));
        stats.skipped.count = 2;

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["created"]["count"], 1);
        assert_eq!(json["created"]["words"][0]["word"], "new");
        assert_eq!(json["updated"]["count"], 0);
        assert_eq!(json["duplicates"]["words"].as_array().unwrap().len(), 0);
        assert_eq!(json["skipped"]["count"], 2);
        assert!(json["skipped"].get("words").is_none());
    }
}
