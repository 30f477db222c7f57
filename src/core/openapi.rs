use utoipa::{Modify, OpenApi};

use crate::features::brands::{dtos as brands_dtos, handlers as brands_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::promotions::{
    dtos as promotions_dtos, handlers as promotions_handlers, models as promotions_models,
};
use crate::features::roles::{dtos as roles_dtos, handlers as roles_handlers};
use crate::features::subcategories::{
    dtos as subcategories_dtos, handlers as subcategories_handlers,
};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Brands
        brands_handlers::create_brand,
        brands_handlers::list_brands,
        brands_handlers::get_brand,
        brands_handlers::update_brand,
        brands_handlers::delete_brand,
        // Categories
        categories_handlers::create_category,
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::get_category_by_slug,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Subcategories
        subcategories_handlers::create_subcategory,
        subcategories_handlers::list_subcategories,
        subcategories_handlers::get_subcategory,
        subcategories_handlers::get_subcategory_by_slug,
        subcategories_handlers::update_subcategory,
        subcategories_handlers::delete_subcategory,
        // Promotions
        promotions_handlers::create_promotion,
        promotions_handlers::list_promotions,
        promotions_handlers::get_promotion,
        promotions_handlers::update_promotion,
        promotions_handlers::delete_promotion,
        // Roles
        roles_handlers::create_role,
        roles_handlers::list_roles,
        roles_handlers::get_role,
        roles_handlers::update_role,
        roles_handlers::delete_role,
    ),
    components(
        schemas(
            // Brands
            brands_dtos::CreateBrandDto,
            brands_dtos::UpdateBrandDto,
            brands_dtos::BrandResponseDto,
            ApiResponse<brands_dtos::BrandResponseDto>,
            ApiResponse<Vec<brands_dtos::BrandResponseDto>>,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategorySummaryDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            // Subcategories
            subcategories_dtos::CreateSubcategoryDto,
            subcategories_dtos::UpdateSubcategoryDto,
            subcategories_dtos::SubcategoryResponseDto,
            subcategories_dtos::SubcategorySummaryDto,
            ApiResponse<subcategories_dtos::SubcategoryResponseDto>,
            ApiResponse<Vec<subcategories_dtos::SubcategoryResponseDto>>,
            // Promotions
            promotions_models::DiscountType,
            promotions_dtos::CreatePromotionDto,
            promotions_dtos::UpdatePromotionDto,
            promotions_dtos::PromotionResponseDto,
            ApiResponse<promotions_dtos::PromotionResponseDto>,
            ApiResponse<Vec<promotions_dtos::PromotionResponseDto>>,
            // Roles
            roles_dtos::CreateRoleDto,
            roles_dtos::UpdateRoleDto,
            roles_dtos::RoleResponseDto,
            ApiResponse<roles_dtos::RoleResponseDto>,
            ApiResponse<Vec<roles_dtos::RoleResponseDto>>,
        )
    ),
    tags(
        (name = "brands", description = "Product brands"),
        (name = "categories", description = "Product categories with slug lookup"),
        (name = "subcategories", description = "Subcategories belonging to a category"),
        (name = "promotions", description = "Percentage and fixed-amount promotions"),
        (name = "roles", description = "User roles"),
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Catalog management API",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_slug_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/categories/slug/{slug}"));
        assert!(doc.paths.paths.contains_key("/api/subcategories/slug/{slug}"));
        assert!(doc.paths.paths.contains_key("/api/promotions/{id}"));
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Store".to_string(),
            version: "2.0.0".to_string(),
            description: "Store catalog".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Store");
        assert_eq!(doc.info.description.as_deref(), Some("Store catalog"));
    }
}
