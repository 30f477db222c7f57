use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::error::Result;

/// Lifecycle state of a catalog row. The only transition is `Active -> SoftDeleted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityState {
    Active,
    SoftDeleted,
}

/// Shape shared by every catalog entity (brands, categories, subcategories,
/// promotions, roles).
pub trait CatalogEntity: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;

    fn name(&self) -> &str;

    fn is_active(&self) -> bool;

    /// Flip to the soft-deleted state, stamping the removal time.
    fn mark_deleted(&mut self, at: DateTime<Utc>);

    /// Derived slug for sluggable entities
    fn slug(&self) -> Option<&str> {
        None
    }

    fn state(&self) -> EntityState {
        if self.is_active() {
            EntityState::Active
        } else {
            EntityState::SoftDeleted
        }
    }
}

/// Persisted collection of one entity type.
///
/// Every `find_*` method only sees active rows; soft-deleted rows are invisible to
/// normal reads.
#[async_trait]
pub trait CatalogRepository<E: CatalogEntity>: Send + Sync {
    async fn find_active(&self) -> Result<Vec<E>>;

    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<E>>;

    async fn find_active_by_name(&self, name: &str) -> Result<Option<E>>;

    async fn insert(&self, entity: &E) -> Result<E>;

    /// Overwrite the stored row of an active entity with `entity`'s fields.
    async fn update(&self, entity: &E) -> Result<E>;

    /// Soft-delete an active row. Returns `false` when no active row matched.
    async fn soft_remove(&self, id: Uuid, deleted_at: DateTime<Utc>) -> Result<bool>;
}

/// Existence check used by the slug resolver.
///
/// Looks at every row, soft-deleted ones included, so a slug is never handed out
/// twice.
#[async_trait]
pub trait SlugLookup: Send + Sync {
    async fn slug_exists(&self, slug: &str) -> Result<bool>;
}

/// Active-only lookup by slug for sluggable entities.
#[async_trait]
pub trait SlugFinder<E>: Send + Sync {
    async fn find_active_by_slug(&self, slug: &str) -> Result<Option<E>>;
}
