use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{StoreError, SubmissionStore};
use crate::models::{NewSubmission, Submission};

/// In-process store. Keeps insertion order so tests can inspect what landed.
#[derive(Default)]
pub struct MemorySubmissionStore {
    rows: Mutex<Vec<Submission>>,
    index: Mutex<HashMap<Uuid, usize>>,
    failing: AtomicBool,
}

impl MemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent insert fail with `StoreError::Unavailable`.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn all(&self) -> Vec<Submission> {
        self.rows.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SubmissionStore for MemorySubmissionStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, submission: &NewSubmission) -> Result<Submission, StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "memory store is switched to failing".to_string(),
            ));
        }

        let now = Utc::now();
        let row = Submission {
            id: Uuid::new_v4(),
            requester_name: submission.requester_name.clone(),
            organization: submission.organization.clone(),
            deceased_names: Json(submission.deceased_names.clone()),
            already_contributed: submission.already_contributed,
            created_at: now,
            updated_at: now,
        };

        let mut rows = self.rows.lock().await;
        let mut index = self.index.lock().await;
        index.insert(row.id, rows.len());
        rows.push(row.clone());

        Ok(row)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Submission>, StoreError> {
        let rows = self.rows.lock().await;
        let index = self.index.lock().await;
        Ok(index.get(&id).and_then(|&i| rows.get(i)).cloned())
    }
}
