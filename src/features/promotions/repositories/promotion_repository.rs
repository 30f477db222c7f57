use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::promotions::models::Promotion;
use crate::shared::repository::CatalogRepository;

const PROMOTION_COLUMNS: &str = "id, name, description, discount_type, discount_value, \
     min_purchase_amount, max_discount_amount, usage_limit, used_count, valid_from, valid_until, \
     is_active, created_at, updated_at, deleted_at";

/// PostgreSQL-backed promotion collection
pub struct PgPromotionRepository {
    pool: PgPool,
}

impl PgPromotionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository<Promotion> for PgPromotionRepository {
    async fn find_active(&self) -> Result<Vec<Promotion>> {
        let query = format!(
            "SELECT {} FROM promotions WHERE is_active = TRUE AND deleted_at IS NULL ORDER BY valid_from DESC",
            PROMOTION_COLUMNS
        );
        sqlx::query_as::<_, Promotion>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "promotion"))
    }

    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Promotion>> {
        let query = format!(
            "SELECT {} FROM promotions WHERE id = $1 AND is_active = TRUE AND deleted_at IS NULL",
            PROMOTION_COLUMNS
        );
        sqlx::query_as::<_, Promotion>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "promotion"))
    }

    async fn find_active_by_name(&self, name: &str) -> Result<Option<Promotion>> {
        let query = format!(
            "SELECT {} FROM promotions WHERE name = $1 AND is_active = TRUE AND deleted_at IS NULL",
            PROMOTION_COLUMNS
        );
        sqlx::query_as::<_, Promotion>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "promotion"))
    }

    async fn insert(&self, promotion: &Promotion) -> Result<Promotion> {
        let query = format!(
            r#"
            INSERT INTO promotions (
                id, name, description, discount_type, discount_value, min_purchase_amount,
                max_discount_amount, usage_limit, used_count, valid_from, valid_until,
                is_active, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {}
            "#,
            PROMOTION_COLUMNS
        );
        sqlx::query_as::<_, Promotion>(&query)
            .bind(promotion.id)
            .bind(&promotion.name)
            .bind(&promotion.description)
            .bind(promotion.discount_type)
            .bind(promotion.discount_value)
            .bind(promotion.min_purchase_amount)
            .bind(promotion.max_discount_amount)
            .bind(promotion.usage_limit)
            .bind(promotion.used_count)
            .bind(promotion.valid_from)
            .bind(promotion.valid_until)
            .bind(promotion.is_active)
            .bind(promotion.created_at)
            .bind(promotion.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "promotion"))
    }

    async fn update(&self, promotion: &Promotion) -> Result<Promotion> {
        // used_count is left to order processing
        let query = format!(
            r#"
            UPDATE promotions
            SET name = $2, description = $3, discount_type = $4, discount_value = $5,
                min_purchase_amount = $6, max_discount_amount = $7, usage_limit = $8,
                valid_from = $9, valid_until = $10, updated_at = NOW()
            WHERE id = $1 AND is_active = TRUE AND deleted_at IS NULL
            RETURNING {}
            "#,
            PROMOTION_COLUMNS
        );
        sqlx::query_as::<_, Promotion>(&query)
            .bind(promotion.id)
            .bind(&promotion.name)
            .bind(&promotion.description)
            .bind(promotion.discount_type)
            .bind(promotion.discount_value)
            .bind(promotion.min_purchase_amount)
            .bind(promotion.max_discount_amount)
            .bind(promotion.usage_limit)
            .bind(promotion.valid_from)
            .bind(promotion.valid_until)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "promotion"))?
            .ok_or_else(|| {
                AppError::NotFound(format!("Promotion with id {} not found", promotion.id))
            })
    }

    async fn soft_remove(&self, id: Uuid, deleted_at: DateTime<Utc>) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE promotions
            SET is_active = FALSE, deleted_at = $2, updated_at = $2
            WHERE id = $1 AND is_active = TRUE AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .bind(deleted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_db(e, "promotion"))?;

        Ok(result.rows_affected() > 0)
    }
}
