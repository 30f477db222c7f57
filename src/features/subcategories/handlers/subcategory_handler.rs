use std::sync::Arc;

use axum::extract::State;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::subcategories::dtos::{
    CreateSubcategoryDto, SubcategoryResponseDto, UpdateSubcategoryDto,
};
use crate::features::subcategories::services::SubcategoryService;
use crate::shared::types::ApiResponse;
use crate::shared::validation::SLUG_REGEX;

/// Create a subcategory
#[utoipa::path(
    post,
    path = "/api/subcategories",
    request_body = CreateSubcategoryDto,
    responses(
        (status = 201, description = "Subcategory created", body = ApiResponse<SubcategoryResponseDto>),
        (status = 400, description = "Validation error or inactive parent category"),
        (status = 409, description = "A subcategory with this name already exists")
    ),
    tag = "subcategories"
)]
pub async fn create_subcategory(
    State(service): State<Arc<SubcategoryService>>,
    AppJson(dto): AppJson<CreateSubcategoryDto>,
) -> Result<ApiResponse<SubcategoryResponseDto>> {
    dto.validate()?;

    let subcategory = service.create(dto).await?;
    Ok(ApiResponse::created(
        subcategory,
        "Subcategory created successfully",
    ))
}

/// List active subcategories
#[utoipa::path(
    get,
    path = "/api/subcategories",
    responses(
        (status = 200, description = "List of subcategories", body = ApiResponse<Vec<SubcategoryResponseDto>>),
        (status = 204, description = "No subcategories found")
    ),
    tag = "subcategories"
)]
pub async fn list_subcategories(
    State(service): State<Arc<SubcategoryService>>,
) -> Result<ApiResponse<Vec<SubcategoryResponseDto>>> {
    let subcategories = service.list().await?;
    Ok(ApiResponse::success(Some(subcategories), None))
}

/// Get an active subcategory by id
#[utoipa::path(
    get,
    path = "/api/subcategories/{id}",
    params(
        ("id" = Uuid, Path, description = "Subcategory ID")
    ),
    responses(
        (status = 200, description = "Subcategory found", body = ApiResponse<SubcategoryResponseDto>),
        (status = 404, description = "Subcategory not found")
    ),
    tag = "subcategories"
)]
pub async fn get_subcategory(
    State(service): State<Arc<SubcategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<ApiResponse<SubcategoryResponseDto>> {
    let subcategory = service.get(id).await?;
    Ok(ApiResponse::success(Some(subcategory), None))
}

/// Get an active subcategory by slug
#[utoipa::path(
    get,
    path = "/api/subcategories/slug/{slug}",
    params(
        ("slug" = String, Path, description = "Subcategory slug")
    ),
    responses(
        (status = 200, description = "Subcategory found", body = ApiResponse<SubcategoryResponseDto>),
        (status = 400, description = "Malformed slug"),
        (status = 404, description = "Subcategory not found")
    ),
    tag = "subcategories"
)]
pub async fn get_subcategory_by_slug(
    State(service): State<Arc<SubcategoryService>>,
    AppPath(slug): AppPath<String>,
) -> Result<ApiResponse<SubcategoryResponseDto>> {
    if !SLUG_REGEX.is_match(&slug) {
        return Err(AppError::InvalidInput(format!("'{}' is not a valid slug", slug)));
    }

    let subcategory = service.get_by_slug(&slug).await?;
    Ok(ApiResponse::success(Some(subcategory), None))
}

/// Update a subcategory (merge-patch)
#[utoipa::path(
    patch,
    path = "/api/subcategories/{id}",
    params(
        ("id" = Uuid, Path, description = "Subcategory ID")
    ),
    request_body = UpdateSubcategoryDto,
    responses(
        (status = 200, description = "Subcategory updated", body = ApiResponse<SubcategoryResponseDto>),
        (status = 400, description = "Validation error or inactive parent category"),
        (status = 404, description = "Subcategory not found"),
        (status = 409, description = "A subcategory with this name already exists")
    ),
    tag = "subcategories"
)]
pub async fn update_subcategory(
    State(service): State<Arc<SubcategoryService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateSubcategoryDto>,
) -> Result<ApiResponse<SubcategoryResponseDto>> {
    dto.validate()?;

    let subcategory = service.update(id, dto).await?;
    Ok(ApiResponse::success(
        Some(subcategory),
        Some("Subcategory updated successfully".to_string()),
    ))
}

/// Delete a subcategory (soft delete)
#[utoipa::path(
    delete,
    path = "/api/subcategories/{id}",
    params(
        ("id" = Uuid, Path, description = "Subcategory ID")
    ),
    responses(
        (status = 200, description = "Subcategory deleted"),
        (status = 404, description = "Subcategory not found")
    ),
    tag = "subcategories"
)]
pub async fn delete_subcategory(
    State(service): State<Arc<SubcategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<ApiResponse<()>> {
    service.remove(id).await?;
    Ok(ApiResponse::success(
        None,
        Some("Subcategory deleted successfully".to_string()),
    ))
}
