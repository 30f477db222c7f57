use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::promotions::models::{check_discount_terms, DiscountType, Promotion};
use crate::shared::validation::{validate_money, validate_not_blank};

/// Request DTO for creating a promotion
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_terms"))]
pub struct CreatePromotionDto {
    #[validate(
        length(min = 1, max = 150, message = "Name must be 1-150 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    pub description: Option<String>,

    pub discount_type: DiscountType,

    #[validate(custom(function = "validate_money"))]
    #[schema(value_type = f64, example = 15.0)]
    pub discount_value: Decimal,

    #[validate(custom(function = "validate_money"))]
    #[schema(value_type = Option<f64>)]
    pub min_purchase_amount: Option<Decimal>,

    #[validate(custom(function = "validate_money"))]
    #[schema(value_type = Option<f64>)]
    pub max_discount_amount: Option<Decimal>,

    /// Maximum number of uses, 0 for unlimited
    #[validate(range(min = 0, message = "Usage limit must not be negative"))]
    #[serde(default)]
    pub usage_limit: i32,

    pub valid_from: DateTime<Utc>,

    pub valid_until: DateTime<Utc>,
}

fn validate_create_terms(dto: &CreatePromotionDto) -> Result<(), ValidationError> {
    check_discount_terms(
        dto.discount_type,
        &dto.discount_value,
        &dto.valid_from,
        &dto.valid_until,
    )
}

/// Request DTO for updating a promotion. Absent fields keep their stored value;
/// the merged terms are re-checked by the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePromotionDto {
    #[validate(
        length(min = 1, max = 150, message = "Name must be 1-150 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    pub description: Option<String>,

    pub discount_type: Option<DiscountType>,

    #[validate(custom(function = "validate_money"))]
    #[schema(value_type = Option<f64>)]
    pub discount_value: Option<Decimal>,

    #[validate(custom(function = "validate_money"))]
    #[schema(value_type = Option<f64>)]
    pub min_purchase_amount: Option<Decimal>,

    #[validate(custom(function = "validate_money"))]
    #[schema(value_type = Option<f64>)]
    pub max_discount_amount: Option<Decimal>,

    #[validate(range(min = 0, message = "Usage limit must not be negative"))]
    pub usage_limit: Option<i32>,

    pub valid_from: Option<DateTime<Utc>>,

    pub valid_until: Option<DateTime<Utc>>,
}

/// Response DTO for promotion
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromotionResponseDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub discount_type: DiscountType,
    #[schema(value_type = f64)]
    pub discount_value: Decimal,
    #[schema(value_type = Option<f64>)]
    pub min_purchase_amount: Option<Decimal>,
    #[schema(value_type = Option<f64>)]
    pub max_discount_amount: Option<Decimal>,
    pub usage_limit: i32,
    pub used_count: i32,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Promotion> for PromotionResponseDto {
    fn from(p: Promotion) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            discount_type: p.discount_type,
            discount_value: p.discount_value,
            min_purchase_amount: p.min_purchase_amount,
            max_discount_amount: p.max_discount_amount,
            usage_limit: p.usage_limit,
            used_count: p.used_count,
            valid_from: p.valid_from,
            valid_until: p.valid_until,
            is_active: p.is_active,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_body() -> serde_json::Value {
        json!({
            "name": "Summer Sale",
            "discountType": "percentage",
            "discountValue": 15,
            "validFrom": "2026-06-01T00:00:00Z",
            "validUntil": "2026-06-30T23:59:59Z"
        })
    }

    #[test]
    fn test_create_defaults_usage_limit() {
        let dto: CreatePromotionDto = serde_json::from_value(base_body()).unwrap();
        assert_eq!(dto.usage_limit, 0);
        assert_eq!(dto.discount_value, Decimal::from(15));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_rejects_percentage_over_100() {
        let mut body = base_body();
        body["discountValue"] = json!(120);
        let dto: CreatePromotionDto = serde_json::from_value(body).unwrap();
        assert!(dto.validate().is_err());

        // The same amount is fine as a fixed discount
        let mut body = base_body();
        body["discountType"] = json!("fixed");
        body["discountValue"] = json!(120);
        let dto: CreatePromotionDto = serde_json::from_value(body).unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_rejects_inverted_window() {
        let mut body = base_body();
        body["validUntil"] = json!("2026-05-01T00:00:00Z");
        let dto: CreatePromotionDto = serde_json::from_value(body).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_rejects_negative_amounts() {
        let mut body = base_body();
        body["minPurchaseAmount"] = json!(-5);
        let dto: CreatePromotionDto = serde_json::from_value(body).unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("min_purchase_amount"));

        let mut body = base_body();
        body["usageLimit"] = json!(-1);
        let dto: CreatePromotionDto = serde_json::from_value(body).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_rejects_amounts_beyond_column_range() {
        let mut body = base_body();
        body["discountType"] = json!("fixed");
        body["discountValue"] = json!(1_000_000_000u64);
        body["minPurchaseAmount"] = json!(100_000_000u64);
        body["maxDiscountAmount"] = json!(123_456_789_012u64);
        let dto: CreatePromotionDto = serde_json::from_value(body).unwrap();

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("discount_value"));
        assert!(fields.contains_key("min_purchase_amount"));
        assert!(fields.contains_key("max_discount_amount"));

        // Upper bound itself is accepted
        let mut body = base_body();
        body["discountType"] = json!("fixed");
        body["discountValue"] = json!("99999999.99");
        let dto: CreatePromotionDto = serde_json::from_value(body).unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_rejects_sub_cent_amounts() {
        let mut body = base_body();
        body["discountValue"] = json!("10.505");
        body["minPurchaseAmount"] = json!("50.001");
        body["maxDiscountAmount"] = json!("5.0001");
        let dto: CreatePromotionDto = serde_json::from_value(body).unwrap();

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("discount_value"));
        assert!(fields.contains_key("min_purchase_amount"));
        assert!(fields.contains_key("max_discount_amount"));
    }

    #[test]
    fn test_update_checks_money_fields() {
        let dto: UpdatePromotionDto = serde_json::from_value(json!({
            "discountValue": 1_000_000_000u64,
            "minPurchaseAmount": "1.234",
            "maxDiscountAmount": 123_456_789_012u64
        }))
        .unwrap();

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("discount_value"));
        assert!(fields.contains_key("min_purchase_amount"));
        assert!(fields.contains_key("max_discount_amount"));

        let dto: UpdatePromotionDto =
            serde_json::from_value(json!({ "maxDiscountAmount": "20.50" })).unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_unknown_discount_type_fails_to_parse() {
        let mut body = base_body();
        body["discountType"] = json!("bogo");
        assert!(serde_json::from_value::<CreatePromotionDto>(body).is_err());
    }

    #[test]
    fn test_used_count_is_not_accepted_on_update() {
        let dto: UpdatePromotionDto =
            serde_json::from_value(json!({ "usedCount": 99, "usageLimit": 10 })).unwrap();
        assert_eq!(dto.usage_limit, Some(10));
        assert!(dto.validate().is_ok());
    }
}
