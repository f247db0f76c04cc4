use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{NewSubmission, Submission};

pub mod memory;
pub mod postgres;

pub use memory::MemorySubmissionStore;
pub use postgres::PgSubmissionStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Durable home of tabarruat submissions.
///
/// Implementations assign the id and both timestamps on insert. A single
/// insert is atomic; nothing else is shared between calls.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    fn backend_tag(&self) -> &'static str;

    async fn insert(&self, submission: &NewSubmission) -> Result<Submission, StoreError>;

    /// Reads back a stored row. No route exposes it; it is the read half of
    /// the write-then-retrieve contract every backend must honour.
    async fn find(&self, id: Uuid) -> Result<Option<Submission>, StoreError>;
}
