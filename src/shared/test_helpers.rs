//! In-memory stand-ins for the PostgreSQL repositories.
//!
//! Mirrors the store's unique indexes: names are unique among active rows, slugs
//! are unique across all rows.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::subcategories::models::Subcategory;
use crate::features::subcategories::repositories::SubcategoryRepository;
use crate::shared::repository::{CatalogEntity, CatalogRepository, SlugFinder, SlugLookup};

pub struct InMemoryRepository<E> {
    rows: Mutex<Vec<E>>,
}

impl<E: CatalogEntity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }

    /// Number of stored rows, soft-deleted ones included
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn all(&self) -> Vec<E> {
        self.rows.lock().unwrap().clone()
    }

    fn check_constraints(rows: &[E], entity: &E) -> Result<()> {
        let others = rows.iter().filter(|r| r.id() != entity.id());
        for other in others {
            if other.is_active() && other.name() == entity.name() {
                return Err(AppError::DuplicateName(format!(
                    "'{}' violates the unique name index",
                    entity.name()
                )));
            }
            if entity.slug().is_some() && other.slug() == entity.slug() {
                return Err(AppError::DuplicateName(format!(
                    "'{:?}' violates the unique slug index",
                    entity.slug()
                )));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<E: CatalogEntity> CatalogRepository<E> for InMemoryRepository<E> {
    async fn find_active(&self) -> Result<Vec<E>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.is_active())
            .cloned()
            .collect())
    }

    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<E>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.is_active() && r.id() == id)
            .cloned())
    }

    async fn find_active_by_name(&self, name: &str) -> Result<Option<E>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.is_active() && r.name() == name)
            .cloned())
    }

    async fn insert(&self, entity: &E) -> Result<E> {
        let mut rows = self.rows.lock().unwrap();
        Self::check_constraints(&rows, entity)?;
        rows.push(entity.clone());
        Ok(entity.clone())
    }

    async fn update(&self, entity: &E) -> Result<E> {
        let mut rows = self.rows.lock().unwrap();
        Self::check_constraints(&rows, entity)?;
        let row = rows
            .iter_mut()
            .find(|r| r.is_active() && r.id() == entity.id())
            .ok_or_else(|| AppError::NotFound(format!("row {} not found", entity.id())))?;
        *row = entity.clone();
        Ok(entity.clone())
    }

    async fn soft_remove(&self, id: Uuid, deleted_at: DateTime<Utc>) -> Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.is_active() && r.id() == id) {
            Some(row) => {
                row.mark_deleted(deleted_at);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl<E: CatalogEntity> SlugLookup for InMemoryRepository<E> {
    async fn slug_exists(&self, slug: &str) -> Result<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.slug() == Some(slug)))
    }
}

#[async_trait]
impl<E: CatalogEntity> SlugFinder<E> for InMemoryRepository<E> {
    async fn find_active_by_slug(&self, slug: &str) -> Result<Option<E>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.is_active() && r.slug() == Some(slug))
            .cloned())
    }
}

#[async_trait]
impl SubcategoryRepository for InMemoryRepository<Subcategory> {
    async fn find_active_by_category_ids(&self, category_ids: &[Uuid]) -> Result<Vec<Subcategory>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.is_active && category_ids.contains(&s.category_id))
            .cloned()
            .collect())
    }
}
