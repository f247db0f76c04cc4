use std::sync::Arc;

use thiserror::Error;

use super::candidate::SubmissionCandidate;
use super::validation::{validate, Rejection};
use crate::models::{Confirmation, NewSubmission};
use crate::store::{StoreError, SubmissionStore};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("submission failed validation")]
    Invalid(Rejection),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validates tabarruat pledges and writes the accepted ones.
#[derive(Clone)]
pub struct SubmissionService {
    store: Arc<dyn SubmissionStore>,
}

impl SubmissionService {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    /// Validates `candidate` and, when it passes, inserts exactly one row.
    ///
    /// A rejected candidate is handed back untouched inside the error so the
    /// form can be refilled. Store failures are not retried.
    pub async fn submit(&self, candidate: SubmissionCandidate) -> Result<Confirmation, SubmitError> {
        let submission: NewSubmission = match validate(&candidate) {
            Ok(submission) => submission,
            Err(errors) => {
                tracing::info!(
                    fields = ?errors.fields().collect::<Vec<_>>(),
                    "Tabarruat submission rejected"
                );
                return Err(SubmitError::Invalid(Rejection {
                    errors,
                    old: candidate,
                }));
            }
        };

        let row = self.store.insert(&submission).await.map_err(|e| {
            tracing::error!(
                error = %e,
                backend = self.store.backend_tag(),
                "Failed to persist tabarruat"
            );
            e
        })?;

        tracing::info!(
            id = %row.id,
            organization = %row.organization,
            deceased_count = row.deceased_names.0.len(),
            already_contributed = row.already_contributed,
            "Tabarruat recorded"
        );

        Ok(Confirmation::from(&submission))
    }
}
