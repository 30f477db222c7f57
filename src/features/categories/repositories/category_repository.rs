use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::shared::repository::{CatalogRepository, SlugFinder, SlugLookup};

const CATEGORY_COLUMNS: &str =
    "id, name, slug, description, image_url, is_active, created_at, updated_at, deleted_at";

/// PostgreSQL-backed category collection
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_active(&self, column: &str, value: &str) -> Result<Option<Category>> {
        let query = format!(
            "SELECT {} FROM categories WHERE {} = $1 AND is_active = TRUE AND deleted_at IS NULL",
            CATEGORY_COLUMNS, column
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "category"))
    }
}

#[async_trait]
impl CatalogRepository<Category> for PgCategoryRepository {
    async fn find_active(&self) -> Result<Vec<Category>> {
        let query = format!(
            "SELECT {} FROM categories WHERE is_active = TRUE AND deleted_at IS NULL ORDER BY name",
            CATEGORY_COLUMNS
        );
        sqlx::query_as::<_, Category>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "category"))
    }

    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        let query = format!(
            "SELECT {} FROM categories WHERE id = $1 AND is_active = TRUE AND deleted_at IS NULL",
            CATEGORY_COLUMNS
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "category"))
    }

    async fn find_active_by_name(&self, name: &str) -> Result<Option<Category>> {
        self.fetch_one_active("name", name).await
    }

    async fn insert(&self, category: &Category) -> Result<Category> {
        let query = format!(
            r#"
            INSERT INTO categories (id, name, slug, description, image_url, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(category.id)
            .bind(&category.name)
            .bind(&category.slug)
            .bind(&category.description)
            .bind(&category.image_url)
            .bind(category.is_active)
            .bind(category.created_at)
            .bind(category.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "category"))
    }

    async fn update(&self, category: &Category) -> Result<Category> {
        let query = format!(
            r#"
            UPDATE categories
            SET name = $2, slug = $3, description = $4, image_url = $5, updated_at = NOW()
            WHERE id = $1 AND is_active = TRUE AND deleted_at IS NULL
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(category.id)
            .bind(&category.name)
            .bind(&category.slug)
            .bind(&category.description)
            .bind(&category.image_url)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "category"))?
            .ok_or_else(|| {
                AppError::NotFound(format!("Category with id {} not found", category.id))
            })
    }

    async fn soft_remove(&self, id: Uuid, deleted_at: DateTime<Utc>) -> Result<bool> {
        // Subcategories keep referencing the removed category
        let result = sqlx::query(
            r#"
            UPDATE categories
            SET is_active = FALSE, deleted_at = $2, updated_at = $2
            WHERE id = $1 AND is_active = TRUE AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .bind(deleted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_db(e, "category"))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl SlugLookup for PgCategoryRepository {
    async fn slug_exists(&self, slug: &str) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE slug = $1)")
            .bind(slug)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "category"))
    }
}

#[async_trait]
impl SlugFinder<Category> for PgCategoryRepository {
    async fn find_active_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        self.fetch_one_active("slug", slug).await
    }
}
