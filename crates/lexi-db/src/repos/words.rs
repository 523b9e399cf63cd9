//! Word repository — listing, lookups, and bulk save/delete reconciliation.
//!
//! The bulk save classifies every incoming record into exactly one of four
//! buckets (created / updated / duplicates / skipped) and never trips the
//! words.word UNIQUE constraint: duplicates are detected by normalized-text
//! lookup before any write.

use chrono::Utc;
use lexi_core::normalize;
use lexi_core::records::{DeleteStatistics, SaveStatistics, WordRecord};

use crate::LexiDb;
use crate::error::DatabaseError;
use crate::helpers::{datetime_param, get_opt_string, parse_datetime, parse_optional_datetime};

const SELECT_COLS: &str = "id, word, created, learned";

fn row_to_record(row: &libsql::Row) -> Result<WordRecord, DatabaseError> {
    Ok(WordRecord {
        id: Some(row.get(0)?),
        word: row.get(1)?,
        created: Some(parse_datetime(&row.get::<String>(2)?)?),
        learned: parse_optional_datetime(get_opt_string(row, 3)?.as_deref())?,
    })
}

impl LexiDb {
    /// List all words: unlearned before learned, then reverse-chronological
    /// (`learned` desc, `created` desc, `id` desc).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_words(&self) -> Result<Vec<WordRecord>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM words \
                     ORDER BY (learned IS NOT NULL), learned DESC, created DESC, id DESC"
                ),
                (),
            )
            .await?;

        let mut words = Vec::new();
        while let Some(row) = rows.next().await? {
            words.push(row_to_record(&row)?);
        }
        Ok(words)
    }

    /// Look up a word by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_word_by_id(&self, id: i64) -> Result<Option<WordRecord>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM words WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    /// Look up a word by text. The query is normalized the same way stored
    /// text was, so the match is case- and punctuation-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_word_by_text(&self, text: &str) -> Result<Option<WordRecord>, DatabaseError> {
        let word = normalize(text);
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM words WHERE word = ?1"),
                libsql::params![word],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    /// Bulk save with per-record classification.
    ///
    /// Each record is handled independently, in input order:
    /// 1. Text that normalizes to empty is counted as skipped (count only,
    ///    the value is not echoed back).
    /// 2. A record whose id matches an existing row updates that row. The
    ///    stored `created` survives unless the record supplies one;
    ///    `learned` is overwritten with the record's value, including
    ///    clearing it.
    /// 3. Otherwise a duplicate lookup by normalized text decides: a
    ///    duplicate with a new, different `learned` value gets that value
    ///    applied (keeping its `created`); an unchanged duplicate is
    ///    recorded as-is with no write; anything else inserts a new row.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any statement fails.
    pub async fn save_words(&self, records: &[WordRecord]) -> Result<SaveStatistics, DatabaseError> {
        let mut stat = SaveStatistics::default();

        for record in records {
            let text = normalize(&record.word);
            if text.is_empty() {
                stat.skipped.count += 1;
                continue;
            }
            let record = WordRecord {
                word: text,
                ..record.clone()
            };

            if let Some(id) = record.effective_id() {
                if self.get_word_by_id(id).await?.is_some() {
                    stat.updated.push(self.update_word(&record).await?);
                    continue;
                }
            }

            match self.get_word_by_text(&record.word).await? {
                Some(duplicate)
                    if record.learned.is_some() && duplicate.learned != record.learned =>
                {
                    // Same word re-imported with a new learned date: apply it
                    // to the stored row, keeping the original created date.
                    let patched = WordRecord {
                        learned: record.learned,
                        ..duplicate
                    };
                    stat.updated.push(self.update_word(&patched).await?);
                }
                Some(duplicate) => stat.duplicates.push(duplicate),
                None => stat.created.push(self.insert_word(&record).await?),
            }
        }

        tracing::debug!(
            created = stat.created.count,
            updated = stat.updated.count,
            duplicates = stat.duplicates.count,
            skipped = stat.skipped.count,
            "bulk save reconciled"
        );
        Ok(stat)
    }

    async fn insert_word(&self, record: &WordRecord) -> Result<WordRecord, DatabaseError> {
        let created = record.created.unwrap_or_else(Utc::now);
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "INSERT INTO words (word, created, learned) VALUES (?1, ?2, ?3) \
                     RETURNING {SELECT_COLS}"
                ),
                libsql::params![
                    record.word.as_str(),
                    created.to_rfc3339(),
                    datetime_param(record.learned)
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_record(&row)
    }

    async fn update_word(&self, record: &WordRecord) -> Result<WordRecord, DatabaseError> {
        let id = record
            .effective_id()
            .ok_or_else(|| DatabaseError::Query("update requires an id".to_string()))?;
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "UPDATE words SET word = ?1, created = COALESCE(?2, created), learned = ?3 \
                     WHERE id = ?4 RETURNING {SELECT_COLS}"
                ),
                libsql::params![
                    record.word.as_str(),
                    datetime_param(record.created),
                    datetime_param(record.learned),
                    id
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_record(&row)
    }

    /// Bulk delete by id. Records without an id are skipped; deleting an id
    /// that no longer exists still counts as deleted (idempotent-success).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a delete statement fails.
    pub async fn delete_words(
        &self,
        records: &[WordRecord],
    ) -> Result<DeleteStatistics, DatabaseError> {
        let mut stat = DeleteStatistics::default();
        for record in records {
            match record.effective_id() {
                Some(id) => {
                    self.conn()
                        .execute("DELETE FROM words WHERE id = ?1", libsql::params![id])
                        .await?;
                    stat.deleted += 1;
                }
                None => stat.skipped += 1,
            }
        }
        Ok(stat)
    }
}
