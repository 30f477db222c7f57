use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::Result;
use crate::features::roles::dtos::{CreateRoleDto, RoleResponseDto, UpdateRoleDto};
use crate::features::roles::models::Role;
use crate::shared::lifecycle::EntityLifecycle;
use crate::shared::repository::CatalogRepository;

pub struct RoleService {
    lifecycle: EntityLifecycle<Role>,
}

impl RoleService {
    pub fn new(repo: Arc<dyn CatalogRepository<Role>>) -> Self {
        Self {
            lifecycle: EntityLifecycle::new(repo, "Role", "roles"),
        }
    }

    pub async fn create(&self, dto: CreateRoleDto) -> Result<RoleResponseDto> {
        self.lifecycle.ensure_name_available(&dto.name).await?;
        let role = self.lifecycle.insert(Role::new(dto.name)).await?;
        Ok(role.into())
    }

    pub async fn list(&self) -> Result<Vec<RoleResponseDto>> {
        let roles = self.lifecycle.list_active().await?;
        Ok(roles.into_iter().map(RoleResponseDto::from).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<RoleResponseDto> {
        Ok(self.lifecycle.get_active(id).await?.into())
    }

    pub async fn update(&self, id: Uuid, dto: UpdateRoleDto) -> Result<RoleResponseDto> {
        let mut role = self.lifecycle.get_active(id).await?;

        match self.lifecycle.check_rename(&role, dto.name.as_deref()).await? {
            Some(name) => role.name = name,
            // Nothing to change
            None => return Ok(role.into()),
        }

        Ok(self.lifecycle.save(role).await?.into())
    }

    pub async fn remove(&self, id: Uuid) -> Result<()> {
        self.lifecycle.soft_remove(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::shared::test_helpers::InMemoryRepository;

    fn service() -> (Arc<InMemoryRepository<Role>>, RoleService) {
        let repo = Arc::new(InMemoryRepository::<Role>::new());
        (repo.clone(), RoleService::new(repo))
    }

    fn create_dto(name: &str) -> CreateRoleDto {
        CreateRoleDto {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_rename_role() {
        let (_, service) = service();
        let role = service.create(create_dto("admin")).await.unwrap();

        let updated = service
            .update(
                role.id,
                UpdateRoleDto {
                    name: Some("administrator".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "administrator");
    }

    #[tokio::test]
    async fn test_same_name_update_is_noop() {
        let (_, service) = service();
        let role = service.create(create_dto("admin")).await.unwrap();

        let updated = service
            .update(
                role.id,
                UpdateRoleDto {
                    name: Some("admin".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.updated_at, role.updated_at);
    }

    #[tokio::test]
    async fn test_name_reusable_after_delete() {
        let (repo, service) = service();
        let role = service.create(create_dto("editor")).await.unwrap();
        service.remove(role.id).await.unwrap();

        let again = service.create(create_dto("editor")).await.unwrap();
        assert_ne!(again.id, role.id);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_get_deleted_role_is_not_found() {
        let (_, service) = service();
        let role = service.create(create_dto("viewer")).await.unwrap();
        service.remove(role.id).await.unwrap();

        assert!(matches!(
            service.get(role.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
