use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::ValidationError;

use crate::shared::constants::MAX_PERCENTAGE_DISCOUNT;
use crate::shared::repository::CatalogEntity;

/// Discount type enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "discount_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

/// Database model for promotion
#[derive(Debug, Clone, FromRow)]
pub struct Promotion {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    pub min_purchase_amount: Option<Decimal>,
    pub max_discount_amount: Option<Decimal>,
    pub usage_limit: i32,
    /// Maintained by order processing, never written through this API
    pub used_count: i32,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Data for creating a new promotion
#[derive(Debug, Clone)]
pub struct NewPromotion {
    pub name: String,
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    pub min_purchase_amount: Option<Decimal>,
    pub max_discount_amount: Option<Decimal>,
    pub usage_limit: i32,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
}

impl Promotion {
    pub fn new(data: NewPromotion) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: data.name,
            description: data.description,
            discount_type: data.discount_type,
            discount_value: data.discount_value,
            min_purchase_amount: data.min_purchase_amount,
            max_discount_amount: data.max_discount_amount,
            usage_limit: data.usage_limit,
            used_count: 0,
            valid_from: data.valid_from,
            valid_until: data.valid_until,
            is_active: true,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn check_terms(&self) -> Result<(), ValidationError> {
        check_discount_terms(
            self.discount_type,
            &self.discount_value,
            &self.valid_from,
            &self.valid_until,
        )
    }
}

/// Cross-field rules: a percentage discount is at most 100 and the validity
/// window does not end before it starts.
pub fn check_discount_terms(
    discount_type: DiscountType,
    discount_value: &Decimal,
    valid_from: &DateTime<Utc>,
    valid_until: &DateTime<Utc>,
) -> Result<(), ValidationError> {
    if discount_type == DiscountType::Percentage
        && *discount_value > Decimal::from(MAX_PERCENTAGE_DISCOUNT)
    {
        return Err(ValidationError::new("percentage_range")
            .with_message("Percentage discount must not exceed 100".into()));
    }
    if valid_until < valid_from {
        return Err(ValidationError::new("validity_window")
            .with_message("validUntil must not be before validFrom".into()));
    }
    Ok(())
}

impl CatalogEntity for Promotion {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn mark_deleted(&mut self, at: DateTime<Utc>) {
        self.is_active = false;
        self.deleted_at = Some(at);
        self.updated_at = at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_discount_terms() {
        let from = Utc::now();
        let until = from + Duration::days(7);

        assert!(check_discount_terms(DiscountType::Percentage, &Decimal::from(100), &from, &until).is_ok());
        assert!(check_discount_terms(DiscountType::Percentage, &Decimal::new(10001, 2), &from, &until).is_err());
        // Fixed amounts are not capped
        assert!(check_discount_terms(DiscountType::Fixed, &Decimal::from(250), &from, &until).is_ok());
        // Single-instant window is allowed
        assert!(check_discount_terms(DiscountType::Fixed, &Decimal::ONE, &from, &from).is_ok());
        assert!(check_discount_terms(DiscountType::Fixed, &Decimal::ONE, &until, &from).is_err());
    }

    #[test]
    fn test_discount_type_serde() {
        let t: DiscountType = serde_json::from_str("\"percentage\"").unwrap();
        assert_eq!(t, DiscountType::Percentage);
        assert_eq!(serde_json::to_string(&DiscountType::Fixed).unwrap(), "\"fixed\"");
        assert!(serde_json::from_str::<DiscountType>("\"bogo\"").is_err());
    }
}
