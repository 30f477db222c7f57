use std::sync::Arc;

use axum::extract::State;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::brands::dtos::{BrandResponseDto, CreateBrandDto, UpdateBrandDto};
use crate::features::brands::services::BrandService;
use crate::shared::types::ApiResponse;

/// Create a brand
#[utoipa::path(
    post,
    path = "/api/brands",
    request_body = CreateBrandDto,
    responses(
        (status = 201, description = "Brand created", body = ApiResponse<BrandResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "A brand with this name already exists")
    ),
    tag = "brands"
)]
pub async fn create_brand(
    State(service): State<Arc<BrandService>>,
    AppJson(dto): AppJson<CreateBrandDto>,
) -> Result<ApiResponse<BrandResponseDto>> {
    dto.validate()?;

    let brand = service.create(dto).await?;
    Ok(ApiResponse::created(brand, "Brand created successfully"))
}

/// List active brands
#[utoipa::path(
    get,
    path = "/api/brands",
    responses(
        (status = 200, description = "List of brands", body = ApiResponse<Vec<BrandResponseDto>>),
        (status = 204, description = "No brands found")
    ),
    tag = "brands"
)]
pub async fn list_brands(
    State(service): State<Arc<BrandService>>,
) -> Result<ApiResponse<Vec<BrandResponseDto>>> {
    let brands = service.list().await?;
    Ok(ApiResponse::success(Some(brands), None))
}

/// Get an active brand by id
#[utoipa::path(
    get,
    path = "/api/brands/{id}",
    params(
        ("id" = Uuid, Path, description = "Brand ID")
    ),
    responses(
        (status = 200, description = "Brand found", body = ApiResponse<BrandResponseDto>),
        (status = 404, description = "Brand not found")
    ),
    tag = "brands"
)]
pub async fn get_brand(
    State(service): State<Arc<BrandService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<ApiResponse<BrandResponseDto>> {
    let brand = service.get(id).await?;
    Ok(ApiResponse::success(Some(brand), None))
}

/// Update a brand (merge-patch)
#[utoipa::path(
    patch,
    path = "/api/brands/{id}",
    params(
        ("id" = Uuid, Path, description = "Brand ID")
    ),
    request_body = UpdateBrandDto,
    responses(
        (status = 200, description = "Brand updated", body = ApiResponse<BrandResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Brand not found"),
        (status = 409, description = "A brand with this name already exists")
    ),
    tag = "brands"
)]
pub async fn update_brand(
    State(service): State<Arc<BrandService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateBrandDto>,
) -> Result<ApiResponse<BrandResponseDto>> {
    dto.validate()?;

    let brand = service.update(id, dto).await?;
    Ok(ApiResponse::success(
        Some(brand),
        Some("Brand updated successfully".to_string()),
    ))
}

/// Delete a brand (soft delete)
#[utoipa::path(
    delete,
    path = "/api/brands/{id}",
    params(
        ("id" = Uuid, Path, description = "Brand ID")
    ),
    responses(
        (status = 200, description = "Brand deleted"),
        (status = 404, description = "Brand not found")
    ),
    tag = "brands"
)]
pub async fn delete_brand(
    State(service): State<Arc<BrandService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<ApiResponse<()>> {
    service.remove(id).await?;
    Ok(ApiResponse::success(
        None,
        Some("Brand deleted successfully".to_string()),
    ))
}
