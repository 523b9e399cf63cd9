//! Shared test utilities for lexi-db tests.

#[cfg(test)]
pub(crate) mod helpers {
    use lexi_core::records::WordRecord;

    use crate::LexiDb;

    /// Create an in-memory database for pure store tests.
    pub async fn test_db() -> LexiDb {
        LexiDb::open_local(":memory:").await.unwrap()
    }

    /// In-memory database seeded with the two canonical fixtures: an
    /// unlearned old word and a learned newer one.
    pub async fn seeded_db() -> LexiDb {
        let db = test_db().await;
        db.save_words(&[record_with_dates(
            "unknown-older",
            Some("2000-01-01T00:00:00Z"),
            None,
        )])
        .await
        .unwrap();
        db.save_words(&[record_with_dates(
            "known-newer",
            Some("2020-12-31T23:59:59Z"),
            Some("2021-01-31T23:59:59Z"),
        )])
        .await
        .unwrap();
        db
    }

    /// Build a record with optional RFC 3339 dates.
    pub fn record_with_dates(
        word: &str,
        created: Option<&str>,
        learned: Option<&str>,
    ) -> WordRecord {
        WordRecord {
            id: None,
            word: word.to_string(),
            created: created.map(|s| s.parse().unwrap()),
            learned: learned.map(|s| s.parse().unwrap()),
        }
    }
}
