use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::models::Category;
use crate::features::subcategories::repositories::SubcategoryRepository;
use crate::shared::lifecycle::EntityLifecycle;
use crate::shared::repository::{CatalogRepository, SlugFinder, SlugLookup};
use crate::shared::slug::{generate_unique_slug, regenerate_slug};

/// Service for category operations
pub struct CategoryService {
    lifecycle: EntityLifecycle<Category>,
    slugs: Arc<dyn SlugLookup>,
    finder: Arc<dyn SlugFinder<Category>>,
    subcategories: Arc<dyn SubcategoryRepository>,
}

impl CategoryService {
    pub fn new<R>(repo: Arc<R>, subcategories: Arc<dyn SubcategoryRepository>) -> Self
    where
        R: CatalogRepository<Category> + SlugLookup + SlugFinder<Category> + 'static,
    {
        Self {
            lifecycle: EntityLifecycle::new(repo.clone(), "Category", "categories"),
            slugs: repo.clone(),
            finder: repo,
            subcategories,
        }
    }

    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        self.lifecycle.ensure_name_available(&dto.name).await?;
        let slug = generate_unique_slug(&dto.name, self.slugs.as_ref()).await?;

        let category = Category::new(dto.name, slug, dto.description, dto.image_url);
        let category = self.lifecycle.insert(category).await?;
        Ok(CategoryResponseDto::from_parts(category, &[]))
    }

    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.lifecycle.list_active().await?;
        let ids: Vec<Uuid> = categories.iter().map(|c| c.id).collect();
        let subcategories = self.subcategories.find_active_by_category_ids(&ids).await?;

        Ok(CategoryResponseDto::build_all(categories, &subcategories))
    }

    pub async fn get(&self, id: Uuid) -> Result<CategoryResponseDto> {
        let category = self.lifecycle.get_active(id).await?;
        self.with_subcategories(category).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<CategoryResponseDto> {
        let category = self
            .finder
            .find_active_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category with slug '{}' not found", slug)))?;
        self.with_subcategories(category).await
    }

    /// Merge-patch update. A rename derives a fresh slug.
    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let mut category = self.lifecycle.get_active(id).await?;

        if let Some(name) = self
            .lifecycle
            .check_rename(&category, dto.name.as_deref())
            .await?
        {
            category.slug = regenerate_slug(&category.slug, &name, self.slugs.as_ref()).await?;
            category.name = name;
        }
        if let Some(description) = dto.description {
            category.description = Some(description);
        }
        if let Some(image_url) = dto.image_url {
            category.image_url = Some(image_url);
        }

        let category = self.lifecycle.save(category).await?;
        self.with_subcategories(category).await
    }

    /// Soft-delete a category. Its subcategories are not cascaded.
    pub async fn remove(&self, id: Uuid) -> Result<()> {
        self.lifecycle.soft_remove(id).await?;
        Ok(())
    }

    async fn with_subcategories(&self, category: Category) -> Result<CategoryResponseDto> {
        let subcategories = self
            .subcategories
            .find_active_by_category_ids(&[category.id])
            .await?;
        Ok(CategoryResponseDto::from_parts(category, &subcategories))
    }
}
