use std::sync::Arc;

use axum::extract::State;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::promotions::dtos::{
    CreatePromotionDto, PromotionResponseDto, UpdatePromotionDto,
};
use crate::features::promotions::services::PromotionService;
use crate::shared::types::ApiResponse;

/// Create a promotion
#[utoipa::path(
    post,
    path = "/api/promotions",
    request_body = CreatePromotionDto,
    responses(
        (status = 201, description = "Promotion created", body = ApiResponse<PromotionResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "A promotion with this name already exists")
    ),
    tag = "promotions"
)]
pub async fn create_promotion(
    State(service): State<Arc<PromotionService>>,
    AppJson(dto): AppJson<CreatePromotionDto>,
) -> Result<ApiResponse<PromotionResponseDto>> {
    dto.validate()?;

    let promotion = service.create(dto).await?;
    Ok(ApiResponse::created(promotion, "Promotion created successfully"))
}

/// List active promotions
#[utoipa::path(
    get,
    path = "/api/promotions",
    responses(
        (status = 200, description = "List of promotions", body = ApiResponse<Vec<PromotionResponseDto>>),
        (status = 204, description = "No promotions found")
    ),
    tag = "promotions"
)]
pub async fn list_promotions(
    State(service): State<Arc<PromotionService>>,
) -> Result<ApiResponse<Vec<PromotionResponseDto>>> {
    let promotions = service.list().await?;
    Ok(ApiResponse::success(Some(promotions), None))
}

/// Get an active promotion by id
#[utoipa::path(
    get,
    path = "/api/promotions/{id}",
    params(
        ("id" = Uuid, Path, description = "Promotion ID")
    ),
    responses(
        (status = 200, description = "Promotion found", body = ApiResponse<PromotionResponseDto>),
        (status = 404, description = "Promotion not found")
    ),
    tag = "promotions"
)]
pub async fn get_promotion(
    State(service): State<Arc<PromotionService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<ApiResponse<PromotionResponseDto>> {
    let promotion = service.get(id).await?;
    Ok(ApiResponse::success(Some(promotion), None))
}

/// Update a promotion (merge-patch)
#[utoipa::path(
    patch,
    path = "/api/promotions/{id}",
    params(
        ("id" = Uuid, Path, description = "Promotion ID")
    ),
    request_body = UpdatePromotionDto,
    responses(
        (status = 200, description = "Promotion updated", body = ApiResponse<PromotionResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Promotion not found"),
        (status = 409, description = "A promotion with this name already exists")
    ),
    tag = "promotions"
)]
pub async fn update_promotion(
    State(service): State<Arc<PromotionService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdatePromotionDto>,
) -> Result<ApiResponse<PromotionResponseDto>> {
    dto.validate()?;

    let promotion = service.update(id, dto).await?;
    Ok(ApiResponse::success(
        Some(promotion),
        Some("Promotion updated successfully".to_string()),
    ))
}

/// Delete a promotion (soft delete)
#[utoipa::path(
    delete,
    path = "/api/promotions/{id}",
    params(
        ("id" = Uuid, Path, description = "Promotion ID")
    ),
    responses(
        (status = 200, description = "Promotion deleted"),
        (status = 404, description = "Promotion not found")
    ),
    tag = "promotions"
)]
pub async fn delete_promotion(
    State(service): State<Arc<PromotionService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<ApiResponse<()>> {
    service.remove(id).await?;
    Ok(ApiResponse::success(
        None,
        Some("Promotion deleted successfully".to_string()),
    ))
}
