//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::model::{OutcomeError, QuestionSetError};
use quiz_core::{QuizError, SnapshotError};

/// Errors emitted while loading question tables.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read question pack {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed question pack: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    QuestionSet(#[from] QuestionSetError),
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("{answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Outcome(#[from] OutcomeError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error("malformed snapshot: {0}")]
    SnapshotJson(#[from] serde_json::Error),
}
