use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::subcategories::models::Subcategory;
use crate::shared::repository::{CatalogRepository, SlugFinder, SlugLookup};

const SUBCATEGORY_COLUMNS: &str = "id, name, slug, description, image_url, category_id, \
     is_active, created_at, updated_at, deleted_at";

/// Lookup of subcategories by parent, used to eager-load category responses
#[async_trait]
pub trait SubcategoryRepository: Send + Sync {
    async fn find_active_by_category_ids(&self, category_ids: &[Uuid]) -> Result<Vec<Subcategory>>;
}

/// PostgreSQL-backed subcategory collection
pub struct PgSubcategoryRepository {
    pool: PgPool,
}

impl PgSubcategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_active(&self, column: &str, value: &str) -> Result<Option<Subcategory>> {
        let query = format!(
            "SELECT {} FROM subcategories WHERE {} = $1 AND is_active = TRUE AND deleted_at IS NULL",
            SUBCATEGORY_COLUMNS, column
        );
        sqlx::query_as::<_, Subcategory>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "subcategory"))
    }
}

#[async_trait]
impl CatalogRepository<Subcategory> for PgSubcategoryRepository {
    async fn find_active(&self) -> Result<Vec<Subcategory>> {
        let query = format!(
            "SELECT {} FROM subcategories WHERE is_active = TRUE AND deleted_at IS NULL ORDER BY name",
            SUBCATEGORY_COLUMNS
        );
        sqlx::query_as::<_, Subcategory>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "subcategory"))
    }

    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Subcategory>> {
        let query = format!(
            "SELECT {} FROM subcategories WHERE id = $1 AND is_active = TRUE AND deleted_at IS NULL",
            SUBCATEGORY_COLUMNS
        );
        sqlx::query_as::<_, Subcategory>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "subcategory"))
    }

    async fn find_active_by_name(&self, name: &str) -> Result<Option<Subcategory>> {
        self.fetch_one_active("name", name).await
    }

    async fn insert(&self, subcategory: &Subcategory) -> Result<Subcategory> {
        let query = format!(
            r#"
            INSERT INTO subcategories
                (id, name, slug, description, image_url, category_id, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            SUBCATEGORY_COLUMNS
        );
        sqlx::query_as::<_, Subcategory>(&query)
            .bind(subcategory.id)
            .bind(&subcategory.name)
            .bind(&subcategory.slug)
            .bind(&subcategory.description)
            .bind(&subcategory.image_url)
            .bind(subcategory.category_id)
            .bind(subcategory.is_active)
            .bind(subcategory.created_at)
            .bind(subcategory.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "subcategory"))
    }

    async fn update(&self, subcategory: &Subcategory) -> Result<Subcategory> {
        let query = format!(
            r#"
            UPDATE subcategories
            SET name = $2, slug = $3, description = $4, image_url = $5, category_id = $6,
                updated_at = NOW()
            WHERE id = $1 AND is_active = TRUE AND deleted_at IS NULL
            RETURNING {}
            "#,
            SUBCATEGORY_COLUMNS
        );
        sqlx::query_as::<_, Subcategory>(&query)
            .bind(subcategory.id)
            .bind(&subcategory.name)
            .bind(&subcategory.slug)
            .bind(&subcategory.description)
            .bind(&subcategory.image_url)
            .bind(subcategory.category_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "subcategory"))?
            .ok_or_else(|| {
                AppError::NotFound(format!("Subcategory with id {} not found", subcategory.id))
            })
    }

    async fn soft_remove(&self, id: Uuid, deleted_at: DateTime<Utc>) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE subcategories
            SET is_active = FALSE, deleted_at = $2, updated_at = $2
            WHERE id = $1 AND is_active = TRUE AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .bind(deleted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_db(e, "subcategory"))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl SlugLookup for PgSubcategoryRepository {
    async fn slug_exists(&self, slug: &str) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM subcategories WHERE slug = $1)")
            .bind(slug)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "subcategory"))
    }
}

#[async_trait]
impl SlugFinder<Subcategory> for PgSubcategoryRepository {
    async fn find_active_by_slug(&self, slug: &str) -> Result<Option<Subcategory>> {
        self.fetch_one_active("slug", slug).await
    }
}

#[async_trait]
impl SubcategoryRepository for PgSubcategoryRepository {
    async fn find_active_by_category_ids(&self, category_ids: &[Uuid]) -> Result<Vec<Subcategory>> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            r#"
            SELECT {} FROM subcategories
            WHERE category_id = ANY($1) AND is_active = TRUE AND deleted_at IS NULL
            ORDER BY name
            "#,
            SUBCATEGORY_COLUMNS
        );
        sqlx::query_as::<_, Subcategory>(&query)
            .bind(category_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "subcategory"))
    }
}
