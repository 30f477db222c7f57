use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::Category;
use crate::features::subcategories::dtos::SubcategorySummaryDto;
use crate::features::subcategories::models::Subcategory;
use crate::shared::validation::validate_not_blank;

/// Request DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    #[validate(
        length(min = 1, max = 150, message = "Name must be 1-150 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,
}

/// Request DTO for updating a category. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryDto {
    #[validate(
        length(min = 1, max = 150, message = "Name must be 1-150 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,
}

/// Response DTO for category, including its active subcategories
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub subcategories: Vec<SubcategorySummaryDto>,
}

/// Compact category reference embedded in subcategory responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummaryDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

impl From<&Category> for CategorySummaryDto {
    fn from(c: &Category) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            slug: c.slug.clone(),
        }
    }
}

impl CategoryResponseDto {
    pub fn from_parts(category: Category, subcategories: &[Subcategory]) -> Self {
        let subcategories = subcategories
            .iter()
            .filter(|s| s.category_id == category.id)
            .map(SubcategorySummaryDto::from)
            .collect();

        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            description: category.description,
            image_url: category.image_url,
            is_active: category.is_active,
            created_at: category.created_at,
            updated_at: category.updated_at,
            subcategories,
        }
    }

    /// Attach each category's subcategories from a flat list
    pub fn build_all(categories: Vec<Category>, subcategories: &[Subcategory]) -> Vec<Self> {
        categories
            .into_iter()
            .map(|c| Self::from_parts(c, subcategories))
            .collect()
    }
}
