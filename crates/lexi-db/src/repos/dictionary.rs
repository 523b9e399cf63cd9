//! Dictionary payload cache repository.
//!
//! One row per (word, source) pair; a later save replaces the earlier
//! payload. Rows are removed by the foreign-key cascade when their word is
//! deleted.

use serde::Serialize;

use crate::LexiDb;
use crate::error::DatabaseError;

/// One cached lookup payload for a word.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub source: String,
    pub info: String,
}

impl LexiDb {
    /// Fetch the cached payload for one (word, source) pair.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_dictionary(
        &self,
        word_id: i64,
        source: &str,
    ) -> Result<Option<String>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT info FROM dictionary WHERE word_id = ?1 AND source = ?2",
                libsql::params![word_id, source],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row.get::<String>(0)?)),
            None => Ok(None),
        }
    }

    /// List all cached payloads for a word, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_dictionaries(
        &self,
        word_id: i64,
    ) -> Result<Vec<DictionaryEntry>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT source, info FROM dictionary WHERE word_id = ?1 ORDER BY id ASC",
                libsql::params![word_id],
            )
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(DictionaryEntry {
                source: row.get(0)?,
                info: row.get(1)?,
            });
        }
        Ok(entries)
    }

    /// Cache a payload for a (word, source) pair, replacing any previous one.
    ///
    /// Saving against a word id that does not exist is silently a no-op:
    /// cache rows must never outlive (or precede) their word.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a statement fails.
    pub async fn save_dictionary(
        &self,
        word_id: i64,
        source: &str,
        info: &str,
    ) -> Result<(), DatabaseError> {
        if self.get_word_by_id(word_id).await?.is_none() {
            tracing::debug!(word_id, source, "dictionary save for missing word ignored");
            return Ok(());
        }
        self.conn()
            .execute(
                "INSERT INTO dictionary (word_id, source, info) VALUES (?1, ?2, ?3) \
                 ON CONFLICT (word_id, source) DO UPDATE SET info = excluded.info",
                libsql::params![word_id, source, info],
            )
            .await?;
        Ok(())
    }
}
