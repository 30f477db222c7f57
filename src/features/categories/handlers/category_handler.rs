use std::sync::Arc;

use axum::extract::State;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ApiResponse;
use crate::shared::validation::SLUG_REGEX;

/// Create a category
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "A category with this name already exists")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<ApiResponse<CategoryResponseDto>> {
    dto.validate()?;

    let category = service.create(dto).await?;
    Ok(ApiResponse::created(category, "Category created successfully"))
}

/// List active categories with their subcategories
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
        (status = 204, description = "No categories found")
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<ApiResponse<Vec<CategoryResponseDto>>> {
    let categories = service.list().await?;
    Ok(ApiResponse::success(Some(categories), None))
}

/// Get an active category by id
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<ApiResponse<CategoryResponseDto>> {
    let category = service.get(id).await?;
    Ok(ApiResponse::success(Some(category), None))
}

/// Get an active category by slug
#[utoipa::path(
    get,
    path = "/api/categories/slug/{slug}",
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Malformed slug"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category_by_slug(
    State(service): State<Arc<CategoryService>>,
    AppPath(slug): AppPath<String>,
) -> Result<ApiResponse<CategoryResponseDto>> {
    if !SLUG_REGEX.is_match(&slug) {
        return Err(AppError::InvalidInput(format!("'{}' is not a valid slug", slug)));
    }

    let category = service.get_by_slug(&slug).await?;
    Ok(ApiResponse::success(Some(category), None))
}

/// Update a category (merge-patch)
#[utoipa::path(
    patch,
    path = "/api/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "A category with this name already exists")
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateCategoryDto>,
) -> Result<ApiResponse<CategoryResponseDto>> {
    dto.validate()?;

    let category = service.update(id, dto).await?;
    Ok(ApiResponse::success(
        Some(category),
        Some("Category updated successfully".to_string()),
    ))
}

/// Delete a category (soft delete, subcategories are kept)
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<ApiResponse<()>> {
    service.remove(id).await?;
    Ok(ApiResponse::success(
        None,
        Some("Category deleted successfully".to_string()),
    ))
}
