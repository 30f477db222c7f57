use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::brands::models::Brand;
use crate::shared::repository::CatalogRepository;

const BRAND_COLUMNS: &str =
    "id, name, description, logo_url, is_active, created_at, updated_at, deleted_at";

/// PostgreSQL-backed brand collection
pub struct PgBrandRepository {
    pool: PgPool,
}

impl PgBrandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository<Brand> for PgBrandRepository {
    async fn find_active(&self) -> Result<Vec<Brand>> {
        let query = format!(
            "SELECT {} FROM brands WHERE is_active = TRUE AND deleted_at IS NULL ORDER BY name",
            BRAND_COLUMNS
        );
        sqlx::query_as::<_, Brand>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "brand"))
    }

    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Brand>> {
        let query = format!(
            "SELECT {} FROM brands WHERE id = $1 AND is_active = TRUE AND deleted_at IS NULL",
            BRAND_COLUMNS
        );
        sqlx::query_as::<_, Brand>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "brand"))
    }

    async fn find_active_by_name(&self, name: &str) -> Result<Option<Brand>> {
        let query = format!(
            "SELECT {} FROM brands WHERE name = $1 AND is_active = TRUE AND deleted_at IS NULL",
            BRAND_COLUMNS
        );
        sqlx::query_as::<_, Brand>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "brand"))
    }

    async fn insert(&self, brand: &Brand) -> Result<Brand> {
        let query = format!(
            r#"
            INSERT INTO brands (id, name, description, logo_url, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            BRAND_COLUMNS
        );
        sqlx::query_as::<_, Brand>(&query)
            .bind(brand.id)
            .bind(&brand.name)
            .bind(&brand.description)
            .bind(&brand.logo_url)
            .bind(brand.is_active)
            .bind(brand.created_at)
            .bind(brand.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "brand"))
    }

    async fn update(&self, brand: &Brand) -> Result<Brand> {
        let query = format!(
            r#"
            UPDATE brands
            SET name = $2, description = $3, logo_url = $4, updated_at = NOW()
            WHERE id = $1 AND is_active = TRUE AND deleted_at IS NULL
            RETURNING {}
            "#,
            BRAND_COLUMNS
        );
        sqlx::query_as::<_, Brand>(&query)
            .bind(brand.id)
            .bind(&brand.name)
            .bind(&brand.description)
            .bind(&brand.logo_url)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "brand"))?
            .ok_or_else(|| AppError::NotFound(format!("Brand with id {} not found", brand.id)))
    }

    async fn soft_remove(&self, id: Uuid, deleted_at: DateTime<Utc>) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE brands
            SET is_active = FALSE, deleted_at = $2, updated_at = $2
            WHERE id = $1 AND is_active = TRUE AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .bind(deleted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_db(e, "brand"))?;

        Ok(result.rows_affected() > 0)
    }
}
