use rocket::async_trait;
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;
use shared::models::{Category, Competitor, CreateCompetitorRequest};
use crate::{error::ApiError, store::CompetitorStore};

pub struct PgCompetitorStore {
    pool: PgPool,
}

impl PgCompetitorStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(e: sqlx::Error) -> ApiError {
    error!("Database error: {}", e);
    ApiError::Unavailable(e.to_string())
}

#[async_trait]
impl CompetitorStore for PgCompetitorStore {
    async fn list(&self) -> Result<Vec<Competitor>, ApiError> {
        sqlx::query_as::<_, Competitor>(
            "SELECT id, name, image_url, flavor_votes, looks_votes
             FROM competitors
             ORDER BY created_at, id"
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)
    }

    async fn insert(&self, request: &CreateCompetitorRequest) -> Result<Competitor, ApiError> {
        sqlx::query_as::<_, Competitor>(
            "INSERT INTO competitors (id, name, image_url)
             VALUES ($1, $2, $3)
             RETURNING id, name, image_url, flavor_votes, looks_votes"
        )
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(&request.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)
    }

    async fn increment(&self, id: Uuid, category: Category) -> Result<Option<Competitor>, ApiError> {
        let sql = match category {
            Category::Flavor => {
                "UPDATE competitors SET flavor_votes = flavor_votes + 1
                 WHERE id = $1
                 RETURNING id, name, image_url, flavor_votes, looks_votes"
            }
            Category::Looks => {
                "UPDATE competitors SET looks_votes = looks_votes + 1
                 WHERE id = $1
                 RETURNING id, name, image_url, flavor_votes, looks_votes"
            }
        };

        sqlx::query_as::<_, Competitor>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)
    }

    async fn remove(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM competitors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(result.rows_affected() > 0)
    }
}
