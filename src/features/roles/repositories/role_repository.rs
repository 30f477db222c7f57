use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::roles::models::Role;
use crate::shared::repository::CatalogRepository;

const ROLE_COLUMNS: &str = "id, name, is_active, created_at, updated_at, deleted_at";

/// PostgreSQL-backed role collection
pub struct PgRoleRepository {
    pool: PgPool,
}

impl PgRoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository<Role> for PgRoleRepository {
    async fn find_active(&self) -> Result<Vec<Role>> {
        let query = format!(
            "SELECT {} FROM roles WHERE is_active = TRUE AND deleted_at IS NULL ORDER BY name",
            ROLE_COLUMNS
        );
        sqlx::query_as::<_, Role>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "role"))
    }

    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Role>> {
        let query = format!(
            "SELECT {} FROM roles WHERE id = $1 AND is_active = TRUE AND deleted_at IS NULL",
            ROLE_COLUMNS
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "role"))
    }

    async fn find_active_by_name(&self, name: &str) -> Result<Option<Role>> {
        let query = format!(
            "SELECT {} FROM roles WHERE name = $1 AND is_active = TRUE AND deleted_at IS NULL",
            ROLE_COLUMNS
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "role"))
    }

    async fn insert(&self, role: &Role) -> Result<Role> {
        let query = format!(
            r#"
            INSERT INTO roles (id, name, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            ROLE_COLUMNS
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(role.id)
            .bind(&role.name)
            .bind(role.is_active)
            .bind(role.created_at)
            .bind(role.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "role"))
    }

    async fn update(&self, role: &Role) -> Result<Role> {
        let query = format!(
            r#"
            UPDATE roles SET name = $2, updated_at = NOW()
            WHERE id = $1 AND is_active = TRUE AND deleted_at IS NULL
            RETURNING {}
            "#,
            ROLE_COLUMNS
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(role.id)
            .bind(&role.name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "role"))?
            .ok_or_else(|| AppError::NotFound(format!("Role with id {} not found", role.id)))
    }

    async fn soft_remove(&self, id: Uuid, deleted_at: DateTime<Utc>) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE roles
            SET is_active = FALSE, deleted_at = $2, updated_at = $2
            WHERE id = $1 AND is_active = TRUE AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .bind(deleted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_db(e, "role"))?;

        Ok(result.rows_affected() > 0)
    }
}
