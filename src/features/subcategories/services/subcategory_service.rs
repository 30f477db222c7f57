use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::subcategories::dtos::{
    CreateSubcategoryDto, SubcategoryResponseDto, UpdateSubcategoryDto,
};
use crate::features::subcategories::models::Subcategory;
use crate::shared::lifecycle::EntityLifecycle;
use crate::shared::repository::{CatalogRepository, SlugFinder, SlugLookup};
use crate::shared::slug::{generate_unique_slug, regenerate_slug};

/// Service for subcategory operations
pub struct SubcategoryService {
    lifecycle: EntityLifecycle<Subcategory>,
    slugs: Arc<dyn SlugLookup>,
    finder: Arc<dyn SlugFinder<Subcategory>>,
    categories: Arc<dyn CatalogRepository<Category>>,
}

impl SubcategoryService {
    pub fn new<R>(repo: Arc<R>, categories: Arc<dyn CatalogRepository<Category>>) -> Self
    where
        R: CatalogRepository<Subcategory> + SlugLookup + SlugFinder<Subcategory> + 'static,
    {
        Self {
            lifecycle: EntityLifecycle::new(repo.clone(), "Subcategory", "subcategories"),
            slugs: repo.clone(),
            finder: repo,
            categories,
        }
    }

    /// Resolve the parent category, which must exist and be active.
    async fn active_category(&self, category_id: Uuid) -> Result<Category> {
        self.categories
            .find_active_by_id(category_id)
            .await?
            .ok_or_else(|| {
                AppError::InvalidReference(format!(
                    "Category with id {} does not exist or is inactive",
                    category_id
                ))
            })
    }

    pub async fn create(&self, dto: CreateSubcategoryDto) -> Result<SubcategoryResponseDto> {
        self.lifecycle.ensure_name_available(&dto.name).await?;
        let category = self.active_category(dto.category_id).await?;
        let slug = generate_unique_slug(&dto.name, self.slugs.as_ref()).await?;

        let subcategory = Subcategory::new(
            dto.name,
            slug,
            dto.description,
            dto.image_url,
            category.id,
        );
        let subcategory = self.lifecycle.insert(subcategory).await?;
        Ok(SubcategoryResponseDto::from_parts(subcategory, Some(&category)))
    }

    pub async fn list(&self) -> Result<Vec<SubcategoryResponseDto>> {
        let subcategories = self.lifecycle.list_active().await?;
        let categories: HashMap<Uuid, Category> = self
            .categories
            .find_active()
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(subcategories
            .into_iter()
            .map(|s| {
                let parent = categories.get(&s.category_id);
                SubcategoryResponseDto::from_parts(s, parent)
            })
            .collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<SubcategoryResponseDto> {
        let subcategory = self.lifecycle.get_active(id).await?;
        self.with_category(subcategory).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<SubcategoryResponseDto> {
        let subcategory = self
            .finder
            .find_active_by_slug(slug)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Subcategory with slug '{}' not found", slug))
            })?;
        self.with_category(subcategory).await
    }

    /// Merge-patch update. A rename derives a fresh slug; a new `category_id`
    /// must point at an active category.
    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateSubcategoryDto,
    ) -> Result<SubcategoryResponseDto> {
        let mut subcategory = self.lifecycle.get_active(id).await?;

        let rename = self
            .lifecycle
            .check_rename(&subcategory, dto.name.as_deref())
            .await?;

        if let Some(category_id) = dto.category_id {
            if category_id != subcategory.category_id {
                self.active_category(category_id).await?;
                subcategory.category_id = category_id;
            }
        }
        if let Some(name) = rename {
            subcategory.slug =
                regenerate_slug(&subcategory.slug, &name, self.slugs.as_ref()).await?;
            subcategory.name = name;
        }
        if let Some(description) = dto.description {
            subcategory.description = Some(description);
        }
        if let Some(image_url) = dto.image_url {
            subcategory.image_url = Some(image_url);
        }

        let subcategory = self.lifecycle.save(subcategory).await?;
        self.with_category(subcategory).await
    }

    pub async fn remove(&self, id: Uuid) -> Result<()> {
        self.lifecycle.soft_remove(id).await?;
        Ok(())
    }

    async fn with_category(&self, subcategory: Subcategory) -> Result<SubcategoryResponseDto> {
        let parent = self
            .categories
            .find_active_by_id(subcategory.category_id)
            .await?;
        Ok(SubcategoryResponseDto::from_parts(
            subcategory,
            parent.as_ref(),
        ))
    }
}
