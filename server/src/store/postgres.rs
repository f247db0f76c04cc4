use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::{StoreError, SubmissionStore};
use crate::models::{NewSubmission, Submission};

#[derive(Clone)]
pub struct PgSubmissionStore {
    pool: PgPool,
}

impl PgSubmissionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    fn backend_tag(&self) -> &'static str {
        "postgres"
    }

    #[tracing::instrument(name = "Insert tabarruat", skip_all)]
    async fn insert(&self, submission: &NewSubmission) -> Result<Submission, StoreError> {
        let row = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO tabarruats
            (id, requester_name, organization, deceased_names, already_contributed)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, requester_name, organization, deceased_names,
                      already_contributed, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&submission.requester_name)
        .bind(&submission.organization)
        .bind(Json(&submission.deceased_names))
        .bind(submission.already_contributed)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    #[tracing::instrument(name = "Fetch tabarruat by id", skip(self))]
    async fn find(&self, id: Uuid) -> Result<Option<Submission>, StoreError> {
        let row = sqlx::query_as::<_, Submission>(
            r#"
            SELECT id, requester_name, organization, deceased_names,
                   already_contributed, created_at, updated_at
            FROM tabarruats
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
