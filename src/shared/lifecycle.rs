//! Create / read / rename / soft-delete rules shared by every catalog entity.
//!
//! Name uniqueness is enforced among active rows only: once an entity is
//! soft-deleted its name may be reused. Reads never see soft-deleted rows and there
//! is no way back from `SoftDeleted` to `Active`.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::shared::repository::{CatalogEntity, CatalogRepository, EntityState};

pub struct EntityLifecycle<E: CatalogEntity> {
    repo: Arc<dyn CatalogRepository<E>>,
    singular: &'static str,
    plural: &'static str,
}

impl<E: CatalogEntity> EntityLifecycle<E> {
    pub fn new(
        repo: Arc<dyn CatalogRepository<E>>,
        singular: &'static str,
        plural: &'static str,
    ) -> Self {
        Self {
            repo,
            singular,
            plural,
        }
    }

    /// All active entities; an empty collection is reported as `NoContent`.
    pub async fn list_active(&self) -> Result<Vec<E>> {
        let items = self.repo.find_active().await?;
        if items.is_empty() {
            return Err(AppError::NoContent(format!("No {} found", self.plural)));
        }
        Ok(items)
    }

    pub async fn get_active(&self, id: Uuid) -> Result<E> {
        self.repo
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} with id {} not found", self.singular, id)))
    }

    pub async fn ensure_name_available(&self, name: &str) -> Result<()> {
        if self.repo.find_active_by_name(name).await?.is_some() {
            return Err(AppError::DuplicateName(format!(
                "A {} named '{}' already exists",
                self.singular, name
            )));
        }
        Ok(())
    }

    /// Check a requested rename against `current`.
    ///
    /// Returns the new name only when it differs from the stored one and is free;
    /// an absent or unchanged name yields `None`.
    pub async fn check_rename(&self, current: &E, requested: Option<&str>) -> Result<Option<String>> {
        match requested {
            Some(name) if name != current.name() => {
                self.ensure_name_available(name).await?;
                Ok(Some(name.to_string()))
            }
            _ => Ok(None),
        }
    }

    pub async fn insert(&self, entity: E) -> Result<E> {
        let saved = self.repo.insert(&entity).await?;
        tracing::info!("{} created: id={}, name={}", self.singular, saved.id(), saved.name());
        Ok(saved)
    }

    pub async fn save(&self, entity: E) -> Result<E> {
        let saved = self.repo.update(&entity).await?;
        tracing::info!("{} updated: id={}", self.singular, saved.id());
        Ok(saved)
    }

    /// Soft-delete an active entity. Dependents are left untouched.
    pub async fn soft_remove(&self, id: Uuid) -> Result<E> {
        let mut entity = self.get_active(id).await?;
        debug_assert_eq!(entity.state(), EntityState::Active);

        let deleted_at = Utc::now();
        if !self.repo.soft_remove(id, deleted_at).await? {
            // Lost a race with another remover
            return Err(AppError::NotFound(format!(
                "{} with id {} not found",
                self.singular, id
            )));
        }

        entity.mark_deleted(deleted_at);
        tracing::info!("{} soft-deleted: id={}", self.singular, id);
        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::InMemoryRepository;
    use chrono::DateTime;

    #[derive(Debug, Clone)]
    struct Tag {
        id: Uuid,
        name: String,
        is_active: bool,
        deleted_at: Option<DateTime<Utc>>,
    }

    impl Tag {
        fn new(name: &str) -> Self {
            Self {
                id: Uuid::now_v7(),
                name: name.to_string(),
                is_active: true,
                deleted_at: None,
            }
        }
    }

    impl CatalogEntity for Tag {
        fn id(&self) -> Uuid {
            self.id
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn is_active(&self) -> bool {
            self.is_active
        }

        fn mark_deleted(&mut self, at: DateTime<Utc>) {
            self.is_active = false;
            self.deleted_at = Some(at);
        }
    }

    fn lifecycle() -> (Arc<InMemoryRepository<Tag>>, EntityLifecycle<Tag>) {
        let repo = Arc::new(InMemoryRepository::<Tag>::new());
        let lifecycle = EntityLifecycle::new(repo.clone(), "tag", "tags");
        (repo, lifecycle)
    }

    #[tokio::test]
    async fn test_list_active_empty_is_no_content() {
        let (_, lifecycle) = lifecycle();
        let err = lifecycle.list_active().await.unwrap_err();
        assert!(matches!(err, AppError::NoContent(_)));
    }

    #[tokio::test]
    async fn test_duplicate_active_name_is_rejected() {
        let (_, lifecycle) = lifecycle();
        lifecycle.insert(Tag::new("Sale")).await.unwrap();

        let err = lifecycle.ensure_name_available("Sale").await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateName(_)));
        assert!(lifecycle.ensure_name_available("Clearance").await.is_ok());
    }

    #[tokio::test]
    async fn test_soft_remove_hides_entity() {
        let (repo, lifecycle) = lifecycle();
        let tag = lifecycle.insert(Tag::new("Sale")).await.unwrap();

        let removed = lifecycle.soft_remove(tag.id).await.unwrap();
        assert_eq!(removed.state(), EntityState::SoftDeleted);
        assert!(removed.deleted_at.is_some());

        assert!(matches!(
            lifecycle.get_active(tag.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            lifecycle.list_active().await,
            Err(AppError::NoContent(_))
        ));
        // Still stored, just inactive
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_soft_remove_is_one_way() {
        let (_, lifecycle) = lifecycle();
        let tag = lifecycle.insert(Tag::new("Sale")).await.unwrap();

        lifecycle.soft_remove(tag.id).await.unwrap();
        let err = lifecycle.soft_remove(tag.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_name_is_reusable_after_soft_delete() {
        let (_, lifecycle) = lifecycle();
        let tag = lifecycle.insert(Tag::new("Sale")).await.unwrap();
        lifecycle.soft_remove(tag.id).await.unwrap();

        assert!(lifecycle.ensure_name_available("Sale").await.is_ok());
        lifecycle.insert(Tag::new("Sale")).await.unwrap();
    }

    #[tokio::test]
    async fn test_check_rename() {
        let (_, lifecycle) = lifecycle();
        let sale = lifecycle.insert(Tag::new("Sale")).await.unwrap();
        lifecycle.insert(Tag::new("Clearance")).await.unwrap();

        assert_eq!(lifecycle.check_rename(&sale, None).await.unwrap(), None);
        assert_eq!(lifecycle.check_rename(&sale, Some("Sale")).await.unwrap(), None);
        assert_eq!(
            lifecycle.check_rename(&sale, Some("Outlet")).await.unwrap(),
            Some("Outlet".to_string())
        );
        assert!(matches!(
            lifecycle.check_rename(&sale, Some("Clearance")).await,
            Err(AppError::DuplicateName(_))
        ));
    }
}
