//! Error type for the persistence layer.
//!
//! The scoring engine itself never fails: every function has total domain
//! coverage (unknown stage scores 0, unknown type classifies as "other",
//! missing timestamps take an explicit branch). Only loading and saving the
//! collection can go wrong.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrmError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Failed to create data directory {0}")]
    CreateDir(PathBuf),
}
