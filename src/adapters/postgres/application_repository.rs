//! PostgreSQL implementation of ApplicationRepository.
//!
//! Every query filters by user_id so rows are only ever visible to their
//! owner. An (id, owner) miss and a nonexistent id are both `NotFound`.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::applications::{
    ApplicationPatch, ApplicationRecord, ApplicationStatus, NewApplication,
};
use crate::domain::foundation::{ApplicationId, UserId};
use crate::ports::{
    ApplicationPage, ApplicationRepository, ListFilter, RepositoryError,
};

/// PostgreSQL implementation of ApplicationRepository.
#[derive(Clone)]
pub struct PostgresApplicationRepository {
    pool: PgPool,
}

impl PostgresApplicationRepository {
    /// Creates a new PostgresApplicationRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationRepository for PostgresApplicationRepository {
    async fn list(
        &self,
        owner: &UserId,
        filter: &ListFilter,
    ) -> Result<ApplicationPage, RepositoryError> {
        let status = filter.status.map(|s| s.as_str());

        let total: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM applications
            WHERE user_id = $1
              AND ($2::text IS NULL OR status = $2)
            "#,
        )
        .bind(owner.as_str())
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::store(format!("Failed to count applications: {}", e)))?;

        let rows = sqlx::query(
            r#"
            SELECT id, user_id, company_name, position_name, application_date,
                   status, link, notes, created_at, updated_at
            FROM applications
            WHERE user_id = $1
              AND ($2::text IS NULL OR status = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(owner.as_str())
        .bind(status)
        .bind(filter.limit as i64)
        .bind(filter.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::store(format!("Failed to list applications: {}", e)))?;

        let records = rows
            .into_iter()
            .map(row_to_record)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ApplicationPage {
            records,
            total: total.0 as u64,
        })
    }

    async fn find_by_id(
        &self,
        owner: &UserId,
        id: &ApplicationId,
    ) -> Result<ApplicationRecord, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, company_name, position_name, application_date,
                   status, link, notes, created_at, updated_at
            FROM applications
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::store(format!("Failed to fetch application: {}", e)))?;

        match row {
            Some(row) => row_to_record(row),
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn insert(
        &self,
        owner: &UserId,
        application: &NewApplication,
    ) -> Result<ApplicationRecord, RepositoryError> {
        let id = ApplicationId::new();

        let row = sqlx::query(
            r#"
            INSERT INTO applications (
                id, user_id, company_name, position_name, application_date,
                status, link, notes, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, now(), now())
            RETURNING id, user_id, company_name, position_name, application_date,
                      status, link, notes, created_at, updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner.as_str())
        .bind(&application.company_name)
        .bind(&application.position_name)
        .bind(application.application_date)
        .bind(application.status.as_str())
        .bind(&application.link)
        .bind(&application.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::store(format!("Failed to insert application: {}", e)))?;

        row_to_record(row)
    }

    async fn update(
        &self,
        owner: &UserId,
        id: &ApplicationId,
        patch: &ApplicationPatch,
    ) -> Result<ApplicationRecord, RepositoryError> {
        // COALESCE covers fields that cannot be cleared; link and notes use
        // an explicit provided-flag so a JSON null can clear them.
        let row = sqlx::query(
            r#"
            UPDATE applications SET
                company_name = COALESCE($3, company_name),
                position_name = COALESCE($4, position_name),
                application_date = COALESCE($5, application_date),
                status = COALESCE($6, status),
                link = CASE WHEN $7 THEN $8 ELSE link END,
                notes = CASE WHEN $9 THEN $10 ELSE notes END,
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, company_name, position_name, application_date,
                      status, link, notes, created_at, updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner.as_str())
        .bind(&patch.company_name)
        .bind(&patch.position_name)
        .bind(patch.application_date)
        .bind(patch.status.map(|s| s.as_str()))
        .bind(patch.link.is_some())
        .bind(patch.link.clone().flatten())
        .bind(patch.notes.is_some())
        .bind(patch.notes.clone().flatten())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::store(format!("Failed to update application: {}", e)))?;

        match row {
            Some(row) => row_to_record(row),
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, owner: &UserId, id: &ApplicationId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM applications
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::store(format!("Failed to delete application: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn status_counts(&self, owner: &UserId) -> Result<Vec<(String, i64)>, RepositoryError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT status, COUNT(*)
            FROM applications
            WHERE user_id = $1
            GROUP BY status
            "#,
        )
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::store(format!("Failed to count statuses: {}", e)))?;

        Ok(rows)
    }
}

fn row_to_record(row: PgRow) -> Result<ApplicationRecord, RepositoryError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| RepositoryError::store(format!("Invalid id column: {}", e)))?;
    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| RepositoryError::store(format!("Invalid user_id column: {}", e)))?;
    let owner = UserId::new(user_id)
        .map_err(|e| RepositoryError::store(format!("Invalid stored user id: {}", e)))?;
    let status: String = row
        .try_get("status")
        .map_err(|e| RepositoryError::store(format!("Invalid status column: {}", e)))?;
    let status = status
        .parse::<ApplicationStatus>()
        .map_err(|e| RepositoryError::store(format!("Invalid stored status: {}", e)))?;

    Ok(ApplicationRecord {
        id: ApplicationId::from_uuid(id),
        owner,
        company_name: row
            .try_get("company_name")
            .map_err(|e| RepositoryError::store(format!("Invalid company_name column: {}", e)))?,
        position_name: row
            .try_get("position_name")
            .map_err(|e| RepositoryError::store(format!("Invalid position_name column: {}", e)))?,
        application_date: row
            .try_get("application_date")
            .map_err(|e| {
                RepositoryError::store(format!("Invalid application_date column: {}", e))
            })?,
        status,
        link: row
            .try_get("link")
            .map_err(|e| RepositoryError::store(format!("Invalid link column: {}", e)))?,
        notes: row
            .try_get("notes")
            .map_err(|e| RepositoryError::store(format!("Invalid notes column: {}", e)))?,
        created_at: row
            .try_get("created_at")
            .map_err(|e| RepositoryError::store(format!("Invalid created_at column: {}", e)))?,
        updated_at: row
            .try_get("updated_at")
            .map_err(|e| RepositoryError::store(format!("Invalid updated_at column: {}", e)))?,
    })
}
