//! In-memory repository: a key-ordered map behind a lock. Used for tests and `STORAGE=memory`.

use super::Repository;
use crate::entity::Entity;
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

struct Table<T> {
    rows: BTreeMap<i64, T>,
    /// `None` once an id of `i64::MAX` has been handed out or saved.
    next_id: Option<i64>,
}

pub struct MemoryRepository<T> {
    table: RwLock<Table<T>>,
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        MemoryRepository {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }
}

impl<T> MemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E>(_: E) -> AppError {
    AppError::Storage("memory table lock poisoned".into())
}

fn exhausted() -> AppError {
    AppError::Storage("memory table id space exhausted".into())
}

#[async_trait]
impl<T: Entity> Repository<T> for MemoryRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, AppError> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, AppError> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn save(&self, entity: T) -> Result<T, AppError> {
        let mut table = self.table.write().map_err(poisoned)?;
        let id = match entity.id() {
            Some(id) => {
                if table.next_id.is_some_and(|next| next <= id) {
                    table.next_id = id.checked_add(1);
                }
                id
            }
            None => {
                let id = table.next_id.ok_or_else(exhausted)?;
                table.next_id = id.checked_add(1);
                id
            }
        };
        let stored = entity.with_id(Some(id));
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, entity: T) -> Result<Option<T>, AppError> {
        let Some(id) = entity.id() else {
            return Ok(None);
        };
        let mut table = self.table.write().map_err(poisoned)?;
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        *row = entity.clone();
        Ok(Some(entity))
    }

    async fn delete(&self, entity: &T) -> Result<(), AppError> {
        if let Some(id) = entity.id() {
            let mut table = self.table.write().map_err(poisoned)?;
            table.rows.remove(&id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::fixtures::ts;
    use crate::entity::{MenuItemReview, UcsbDiningCommonsMenuItem};

    fn menu_item(name: &str) -> UcsbDiningCommonsMenuItem {
        UcsbDiningCommonsMenuItem {
            id: None,
            dining_commons_code: "ortega".into(),
            name: name.into(),
            station: "Entree Specials".into(),
        }
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let repo = MemoryRepository::<UcsbDiningCommonsMenuItem>::new();
        let a = repo.save(menu_item("Baked Pesto Pasta")).await.unwrap();
        let b = repo.save(menu_item("Tofu Banh Mi")).await.unwrap();
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));

        let found = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found, a);
        assert_eq!(found.name, "Baked Pesto Pasta");
    }

    #[tokio::test]
    async fn save_with_id_overwrites_and_advances_counter() {
        let repo = MemoryRepository::<UcsbDiningCommonsMenuItem>::new();
        let first = repo.save(menu_item("Baked Pesto Pasta")).await.unwrap();

        let replaced = repo
            .save(UcsbDiningCommonsMenuItem {
                name: "Chicken Caesar Salad".into(),
                ..first.clone()
            })
            .await
            .unwrap();
        assert_eq!(replaced.id, first.id);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);

        let explicit = repo
            .save(menu_item("Cream of Broccoli Soup").with_id(Some(10)))
            .await
            .unwrap();
        assert_eq!(explicit.id, Some(10));
        let next = repo.save(menu_item("Tofu Banh Mi")).await.unwrap();
        assert_eq!(next.id, Some(11));
    }

    #[tokio::test]
    async fn update_replaces_only_existing_rows() {
        let repo = MemoryRepository::<UcsbDiningCommonsMenuItem>::new();
        let stored = repo.save(menu_item("Baked Pesto Pasta")).await.unwrap();

        let renamed = UcsbDiningCommonsMenuItem {
            name: "Chicken Caesar Salad".into(),
            ..stored.clone()
        };
        let updated = repo.update(renamed.clone()).await.unwrap();
        assert_eq!(updated, Some(renamed.clone()));
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(renamed));

        repo.delete(&stored).await.unwrap();
        let gone = repo
            .update(menu_item("Tofu Banh Mi").with_id(stored.id))
            .await
            .unwrap();
        assert!(gone.is_none());
        assert!(repo.find_all().await.unwrap().is_empty());
        assert!(repo.update(menu_item("no key")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn largest_id_exhausts_counter_without_overwriting() {
        let repo = MemoryRepository::<UcsbDiningCommonsMenuItem>::new();
        repo.save(menu_item("last").with_id(Some(i64::MAX)))
            .await
            .unwrap();

        let err = repo.save(menu_item("next")).await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
        let kept = repo.find_by_id(i64::MAX).await.unwrap().unwrap();
        assert_eq!(kept.name, "last");

        repo.save(menu_item("lower").with_id(Some(5))).await.unwrap();
        assert!(repo.save(menu_item("again")).await.is_err());
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_id() {
        let repo = MemoryRepository::<UcsbDiningCommonsMenuItem>::new();
        repo.save(menu_item("c").with_id(Some(3))).await.unwrap();
        repo.save(menu_item("a").with_id(Some(1))).await.unwrap();
        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = MemoryRepository::<MenuItemReview>::new();
        let review = repo
            .save(MenuItemReview {
                id: None,
                item_id: 27,
                reviewer_email: "cgaucho@ucsb.edu".into(),
                stars: 3,
                date_reviewed: ts("2022-04-20T00:00:00"),
                comments: "bland".into(),
            })
            .await
            .unwrap();

        repo.delete(&review).await.unwrap();
        repo.delete(&review).await.unwrap();
        assert!(repo.find_by_id(review.id.unwrap()).await.unwrap().is_none());
    }
}
