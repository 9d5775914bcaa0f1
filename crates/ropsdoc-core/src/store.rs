//! SQLite persistence for validated extraction results.
//!
//! Schema:
//! - id_data: identity card results
//! - processed_text: handwritten transcripts with summary and identity

use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::{Connection, params};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::models::identity::{ExtractedIdentity, HandwrittenResult};

const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS id_data (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    cnp TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS processed_text (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    extracted_text TEXT NOT NULL,
    summary TEXT NOT NULL,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    cnp TEXT NOT NULL,
    created_at TEXT NOT NULL
);
";

/// Destination for extraction results.
pub trait RecordStore {
    /// Persist an identity card result, returning its row id.
    fn save_identity(&self, identity: &ExtractedIdentity) -> Result<i64, StoreError>;

    /// Persist a handwritten result, returning its row id.
    fn save_transcript(&self, result: &HandwrittenResult) -> Result<i64, StoreError>;
}

/// SQLite-backed store. A connection is opened for every save.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        debug!("Opening database {}", self.path.display());
        let conn = Connection::open(&self.path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(conn)
    }
}

impl RecordStore for SqliteStore {
    fn save_identity(&self, identity: &ExtractedIdentity) -> Result<i64, StoreError> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO id_data (first_name, last_name, cnp, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                identity.first_name,
                identity.last_name,
                identity.national_id,
                Utc::now().to_rfc3339()
            ],
        )?;

        let id = conn.last_insert_rowid();
        info!("Saved ID data as record {}", id);
        Ok(id)
    }

    fn save_transcript(&self, result: &HandwrittenResult) -> Result<i64, StoreError> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO processed_text (extracted_text, summary, first_name, last_name, cnp, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                result.transcript,
                result.summary,
                result.identity.first_name,
                result.identity.last_name,
                result.identity.national_id,
                Utc::now().to_rfc3339()
            ],
        )?;

        let id = conn.last_insert_rowid();
        info!("Saved processed text as record {}", id);
        Ok(id)
    }
}
