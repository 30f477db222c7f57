use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::Result;
use crate::features::brands::dtos::{BrandResponseDto, CreateBrandDto, UpdateBrandDto};
use crate::features::brands::models::Brand;
use crate::shared::lifecycle::EntityLifecycle;
use crate::shared::repository::CatalogRepository;

/// Service for brand operations
pub struct BrandService {
    lifecycle: EntityLifecycle<Brand>,
}

impl BrandService {
    pub fn new(repo: Arc<dyn CatalogRepository<Brand>>) -> Self {
        Self {
            lifecycle: EntityLifecycle::new(repo, "Brand", "brands"),
        }
    }

    pub async fn create(&self, dto: CreateBrandDto) -> Result<BrandResponseDto> {
        self.lifecycle.ensure_name_available(&dto.name).await?;

        let brand = Brand::new(dto.name, dto.description, dto.logo_url);
        let brand = self.lifecycle.insert(brand).await?;
        Ok(brand.into())
    }

    pub async fn list(&self) -> Result<Vec<BrandResponseDto>> {
        let brands = self.lifecycle.list_active().await?;
        Ok(brands.into_iter().map(BrandResponseDto::from).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<BrandResponseDto> {
        Ok(self.lifecycle.get_active(id).await?.into())
    }

    /// Merge-patch update: only supplied fields overwrite stored values.
    pub async fn update(&self, id: Uuid, dto: UpdateBrandDto) -> Result<BrandResponseDto> {
        let mut brand = self.lifecycle.get_active(id).await?;

        if let Some(name) = self.lifecycle.check_rename(&brand, dto.name.as_deref()).await? {
            brand.name = name;
        }
        if let Some(description) = dto.description {
            brand.description = Some(description);
        }
        if let Some(logo_url) = dto.logo_url {
            brand.logo_url = Some(logo_url);
        }

        Ok(self.lifecycle.save(brand).await?.into())
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

    fn service() -> (Arc<InMemoryRepository<Brand>>, BrandService) {
        let repo = Arc::new(InMemoryRepository::<Brand>::new());
        (repo.clone(), BrandService::new(repo))
    }

    fn create_dto(name: &str) -> CreateBrandDto {
        CreateBrandDto {
            name: name.to_string(),
            description: Some("Sportswear".to_string()),
            logo_url: Some("https://cdn.example.com/logo.png".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_brand() {
        let (repo, service) = service();
        let brand = service.create(create_dto("Nike")).await.unwrap();

        assert_eq!(brand.name, "Nike");
        assert!(brand.is_active);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_create_duplicate_name_performs_no_write() {
        let (repo, service) = service();
        service.create(create_dto("Nike")).await.unwrap();

        let err = service.create(create_dto("Nike")).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateName(_)));
        assert_eq!(err.status_code().as_u16(), 409);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_update_only_description_keeps_other_fields() {
        let (_, service) = service();
        let brand = service.create(create_dto("Nike")).await.unwrap();

        let dto = UpdateBrandDto {
            description: Some("Running gear".to_string()),
            ..Default::default()
        };
        let updated = service.update(brand.id, dto).await.unwrap();

        assert_eq!(updated.description.as_deref(), Some("Running gear"));
        assert_eq!(updated.name, "Nike");
        assert_eq!(
            updated.logo_url.as_deref(),
            Some("https://cdn.example.com/logo.png")
        );
    }

    #[tokio::test]
    async fn test_rename_to_taken_name_is_rejected() {
        let (_, service) = service();
        let nike = service.create(create_dto("Nike")).await.unwrap();
        service.create(create_dto("Adidas")).await.unwrap();

        let dto = UpdateBrandDto {
            name: Some("Adidas".to_string()),
            ..Default::default()
        };
        let err = service.update(nike.id, dto).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateName(_)));
        assert_eq!(service.get(nike.id).await.unwrap().name, "Nike");
    }

    #[tokio::test]
    async fn test_soft_delete_hides_brand() {
        let (repo, service) = service();
        let nike = service.create(create_dto("Nike")).await.unwrap();
        service.create(create_dto("Adidas")).await.unwrap();

        service.remove(nike.id).await.unwrap();

        let listed = service.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Adidas");
        assert!(matches!(
            service.get(nike.id).await,
            Err(AppError::NotFound(_))
        ));

        let stored = repo.all().into_iter().find(|b| b.id == nike.id).unwrap();
        assert!(!stored.is_active);
        assert!(stored.deleted_at.is_some());
    }

    #[tokio::test]
    async fn test_update_soft_deleted_brand_is_not_found() {
        let (_, service) = service();
        let nike = service.create(create_dto("Nike")).await.unwrap();
        service.remove(nike.id).await.unwrap();

        let err = service
            .update(nike.id, UpdateBrandDto::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
