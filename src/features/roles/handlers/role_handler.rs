use std::sync::Arc;

use axum::extract::State;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::roles::dtos::{CreateRoleDto, RoleResponseDto, UpdateRoleDto};
use crate::features::roles::services::RoleService;
use crate::shared::types::ApiResponse;

/// Create a role
#[utoipa::path(
    post,
    path = "/api/roles",
    request_body = CreateRoleDto,
    responses(
        (status = 201, description = "Role created", body = ApiResponse<RoleResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "A role with this name already exists")
    ),
    tag = "roles"
)]
pub async fn create_role(
    State(service): State<Arc<RoleService>>,
    AppJson(dto): AppJson<CreateRoleDto>,
) -> Result<ApiResponse<RoleResponseDto>> {
    dto.validate()?;

    let role = service.create(dto).await?;
    Ok(ApiResponse::created(role, "Role created successfully"))
}

/// List active roles
#[utoipa::path(
    get,
    path = "/api/roles",
    responses(
        (status = 200, description = "List of roles", body = ApiResponse<Vec<RoleResponseDto>>),
        (status = 204, description = "No roles found")
    ),
    tag = "roles"
)]
pub async fn list_roles(
    State(service): State<Arc<RoleService>>,
) -> Result<ApiResponse<Vec<RoleResponseDto>>> {
    let roles = service.list().await?;
    Ok(ApiResponse::success(Some(roles), None))
}

/// Get an active role by id
#[utoipa::path(
    get,
    path = "/api/roles/{id}",
    params(
        ("id" = Uuid, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role found", body = ApiResponse<RoleResponseDto>),
        (status = 404, description = "Role not found")
    ),
    tag = "roles"
)]
pub async fn get_role(
    State(service): State<Arc<RoleService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<ApiResponse<RoleResponseDto>> {
    let role = service.get(id).await?;
    Ok(ApiResponse::success(Some(role), None))
}

/// Rename a role
#[utoipa::path(
    patch,
    path = "/api/roles/{id}",
    params(
        ("id" = Uuid, Path, description = "Role ID")
    ),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role updated", body = ApiResponse<RoleResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Role not found"),
        (status = 409, description = "A role with this name already exists")
    ),
    tag = "roles"
)]
pub async fn update_role(
    State(service): State<Arc<RoleService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateRoleDto>,
) -> Result<ApiResponse<RoleResponseDto>> {
    dto.validate()?;

    let role = service.update(id, dto).await?;
    Ok(ApiResponse::success(
        Some(role),
        Some("Role updated successfully".to_string()),
    ))
}

/// Delete a role (soft delete)
#[utoipa::path(
    delete,
    path = "/api/roles/{id}",
    params(
        ("id" = Uuid, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role deleted"),
        (status = 404, description = "Role not found")
    ),
    tag = "roles"
)]
pub async fn delete_role(
    State(service): State<Arc<RoleService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<ApiResponse<()>> {
    service.remove(id).await?;
    Ok(ApiResponse::success(
        None,
        Some("Role deleted successfully".to_string()),
    ))
}
