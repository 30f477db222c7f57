use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::promotions::dtos::{
    CreatePromotionDto, PromotionResponseDto, UpdatePromotionDto,
};
use crate::features::promotions::models::{NewPromotion, Promotion};
use crate::shared::lifecycle::EntityLifecycle;
use crate::shared::repository::CatalogRepository;

/// Service for promotion operations
pub struct PromotionService {
    lifecycle: EntityLifecycle<Promotion>,
}

impl PromotionService {
    pub fn new(repo: Arc<dyn CatalogRepository<Promotion>>) -> Self {
        Self {
            lifecycle: EntityLifecycle::new(repo, "Promotion", "promotions"),
        }
    }

    pub async fn create(&self, dto: CreatePromotionDto) -> Result<PromotionResponseDto> {
        self.lifecycle.ensure_name_available(&dto.name).await?;

        let promotion = Promotion::new(NewPromotion {
            name: dto.name,
            description: dto.description,
            discount_type: dto.discount_type,
            discount_value: dto.discount_value,
            min_purchase_amount: dto.min_purchase_amount,
            max_discount_amount: dto.max_discount_amount,
            usage_limit: dto.usage_limit,
            valid_from: dto.valid_from,
            valid_until: dto.valid_until,
        });
        Self::check_terms(&promotion)?;

        let promotion = self.lifecycle.insert(promotion).await?;
        Ok(promotion.into())
    }

    pub async fn list(&self) -> Result<Vec<PromotionResponseDto>> {
        let promotions = self.lifecycle.list_active().await?;
        Ok(promotions
            .into_iter()
            .map(PromotionResponseDto::from)
            .collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<PromotionResponseDto> {
        Ok(self.lifecycle.get_active(id).await?.into())
    }

    /// Merge-patch update. Absent dates keep the stored window; the merged
    /// terms must still hold.
    pub async fn update(&self, id: Uuid, dto: UpdatePromotionDto) -> Result<PromotionResponseDto> {
        let mut promotion = self.lifecycle.get_active(id).await?;

        if let Some(name) = self
            .lifecycle
            .check_rename(&promotion, dto.name.as_deref())
            .await?
        {
            promotion.name = name;
        }
        if let Some(description) = dto.description {
            promotion.description = Some(description);
        }
        if let Some(discount_type) = dto.discount_type {
            promotion.discount_type = discount_type;
        }
        if let Some(discount_value) = dto.discount_value {
            promotion.discount_value = discount_value;
        }
        if let Some(amount) = dto.min_purchase_amount {
            promotion.min_purchase_amount = Some(amount);
        }
        if let Some(amount) = dto.max_discount_amount {
            promotion.max_discount_amount = Some(amount);
        }
        if let Some(usage_limit) = dto.usage_limit {
            promotion.usage_limit = usage_limit;
        }
        if let Some(valid_from) = dto.valid_from {
            promotion.valid_from = valid_from;
        }
        if let Some(valid_until) = dto.valid_until {
            promotion.valid_until = valid_until;
        }
        Self::check_terms(&promotion)?;

        Ok(self.lifecycle.save(promotion).await?.into())
    }

    pub async fn remove(&self, id: Uuid) -> Result<()> {
        self.lifecycle.soft_remove(id).await?;
        Ok(())
    }

    fn check_terms(promotion: &Promotion) -> Result<()> {
        promotion.check_terms().map_err(|e| {
            let message = e
                .message
                .map(|m| m.to_string())
                .unwrap_or_else(|| e.code.to_string());
            AppError::Validation(message)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::promotions::models::DiscountType;
    use crate::shared::test_helpers::InMemoryRepository;
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;

    fn service() -> (Arc<InMemoryRepository<Promotion>>, PromotionService) {
        let repo = Arc::new(InMemoryRepository::<Promotion>::new());
        (repo.clone(), PromotionService::new(repo))
    }

    fn create_dto(name: &str) -> CreatePromotionDto {
        let valid_from = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        CreatePromotionDto {
            name: name.to_string(),
            description: None,
            discount_type: DiscountType::Percentage,
            discount_value: Decimal::from(20),
            min_purchase_amount: Some(Decimal::new(5000, 2)),
            max_discount_amount: None,
            usage_limit: 0,
            valid_from,
            valid_until: valid_from + Duration::days(30),
        }
    }

    #[tokio::test]
    async fn test_create_starts_unused() {
        let (_, service) = service();
        let promo = service.create(create_dto("Summer Sale")).await.unwrap();

        assert_eq!(promo.used_count, 0);
        assert_eq!(promo.usage_limit, 0);
        assert_eq!(promo.min_purchase_amount, Some(Decimal::new(5000, 2)));
    }

    #[tokio::test]
    async fn test_duplicate_name_is_conflict() {
        let (repo, service) = service();
        service.create(create_dto("Summer Sale")).await.unwrap();

        let err = service.create(create_dto("Summer Sale")).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateName(_)));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_update_without_dates_preserves_window() {
        let (_, service) = service();
        let promo = service.create(create_dto("Summer Sale")).await.unwrap();

        let dto = UpdatePromotionDto {
            discount_value: Some(Decimal::from(25)),
            ..Default::default()
        };
        let updated = service.update(promo.id, dto).await.unwrap();

        assert_eq!(updated.discount_value, Decimal::from(25));
        assert_eq!(updated.valid_from, promo.valid_from);
        assert_eq!(updated.valid_until, promo.valid_until);
    }

    #[tokio::test]
    async fn test_update_rejects_inverted_merged_window() {
        let (_, service) = service();
        let promo = service.create(create_dto("Summer Sale")).await.unwrap();

        let dto = UpdatePromotionDto {
            valid_from: Some(promo.valid_until + Duration::days(1)),
            ..Default::default()
        };
        let err = service.update(promo.id, dto).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(service.get(promo.id).await.unwrap().valid_from, promo.valid_from);
    }

    #[tokio::test]
    async fn test_switching_to_percentage_checks_cap() {
        let (_, service) = service();
        let mut dto = create_dto("Big Discount");
        dto.discount_type = DiscountType::Fixed;
        dto.discount_value = Decimal::from(150);
        let promo = service.create(dto).await.unwrap();

        let dto = UpdatePromotionDto {
            discount_type: Some(DiscountType::Percentage),
            ..Default::default()
        };
        let err = service.update(promo.id, dto).await.unwrap_err();
        assert_eq!(err.status_code().as_u16(), 400);
    }

    #[tokio::test]
    async fn test_soft_delete() {
        let (repo, service) = service();
        let promo = service.create(create_dto("Summer Sale")).await.unwrap();

        service.remove(promo.id).await.unwrap();

        assert!(matches!(service.list().await, Err(AppError::NoContent(_))));
        assert!(matches!(
            service.remove(promo.id).await,
            Err(AppError::NotFound(_))
        ));
        assert_eq!(repo.len(), 1);
    }
}
