use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    entities::{
        application::{ApplicationChanges, ApplicationFields, ApplicationRecord},
        owner::OwnerId,
    },
    errors::AppError,
    repositories::application::ApplicationRepository,
};

/// PostgreSQL-backed [`ApplicationRepository`]. Every statement filters on
/// `owner_id`.
#[derive(Clone)]
pub struct SqlxApplicationRepo {
    pub pool: PgPool,
}

impl SqlxApplicationRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxApplicationRepo { pool }
    }
}

#[async_trait]
impl ApplicationRepository for SqlxApplicationRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn list(&self, owner_id: &OwnerId) -> Result<Vec<ApplicationRecord>, AppError> {
        let applications = sqlx::query_as::<_, ApplicationRecord>(
            r#"
            SELECT id, owner_id, company, role, status, date_applied, created_at, updated_at
            FROM job_applications
            WHERE owner_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(owner_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(applications)
    }

    async fn get(&self, id: &Uuid, owner_id: &OwnerId) -> Result<Option<ApplicationRecord>, AppError> {
        let application = sqlx::query_as::<_, ApplicationRecord>(
            r#"
            SELECT id, owner_id, company, role, status, date_applied, created_at, updated_at
            FROM job_applications
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(application)
    }

    async fn create(&self, owner_id: &OwnerId, fields: &ApplicationFields) -> Result<ApplicationRecord, AppError> {
        let application = sqlx::query_as::<_, ApplicationRecord>(
            r#"
            INSERT INTO job_applications (owner_id, company, role, status, date_applied)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, owner_id, company, role, status, date_applied, created_at, updated_at
            "#,
        )
        .bind(owner_id.as_str())
        .bind(&fields.company)
        .bind(&fields.role)
        .bind(fields.status)
        .bind(fields.date_applied)
        .fetch_one(&self.pool)
        .await?;

        Ok(application)
    }

    async fn update(
        &self,
        id: &Uuid,
        owner_id: &OwnerId,
        changes: &ApplicationChanges,
    ) -> Result<Option<ApplicationRecord>, AppError> {
        if changes.is_empty() {
            return self.get(id, owner_id).await;
        }

        let application = sqlx::query_as::<_, ApplicationRecord>(
            r#"
            UPDATE job_applications SET
                company = COALESCE($3, company),
                role = COALESCE($4, role),
                status = COALESCE($5, status),
                date_applied = COALESCE($6, date_applied),
                updated_at = NOW()
            WHERE id = $1 AND owner_id = $2
            RETURNING id, owner_id, company, role, status, date_applied, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(owner_id.as_str())
        .bind(changes.company.as_deref())
        .bind(changes.role.as_deref())
        .bind(changes.status)
        .bind(changes.date_applied)
        .fetch_optional(&self.pool)
        .await?;

        Ok(application)
    }

    async fn delete(&self, id: &Uuid, owner_id: &OwnerId) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"DELETE FROM job_applications WHERE id = $1 AND owner_id = $2"#,
        )
        .bind(id)
        .bind(owner_id.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
