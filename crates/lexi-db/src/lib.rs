//! # lexi-db
//!
//! libSQL persistence for the Lexi word store.
//!
//! Handles all relational state: the words table with its bulk
//! save/delete reconciliation, and the per-word dictionary payload cache.
//!
//! The database handle is explicitly constructed and passed to whoever
//! needs it (the HTTP layer holds one in its shared state); there is no
//! ambient global connection.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;

mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all Lexi state operations.
///
/// Wraps a libSQL database and connection. Repository methods for words and
/// dictionary payloads are implemented on this type in [`repos`].
pub struct LexiDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl LexiDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Foreign keys are off by default and per-connection in SQLite;
        // the dictionary cascade depends on them.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let lexi_db = Self { db, conn };
        lexi_db.run_migrations().await?;
        Ok(lexi_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
