//! Process-local [`UserRepository`] used as a test double.
//!
//! Mirrors the PostgreSQL adapter: ids are handed out from 1 upwards and never
//! reused, listing follows id order, and update/delete of an unknown id is a
//! silent no-op.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId};

use super::{UserPersistenceError, UserRepository};

#[derive(Debug)]
struct Table {
    next_id: i32,
    rows: BTreeMap<UserId, UserDraft>,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

/// In-memory user table guarded by a mutex.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: Mutex<Table>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table>, UserPersistenceError> {
        self.table
            .lock()
            .map_err(|_| UserPersistenceError::connection("in-memory user table lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let table = self.lock()?;
        Ok(table
            .rows
            .iter()
            .map(|(id, draft)| draft.clone().with_id(*id))
            .collect())
    }

    async fn find(&self, id: UserId) -> Result<User, UserPersistenceError> {
        let table = self.lock()?;
        table
            .rows
            .get(&id)
            .map(|draft| draft.clone().with_id(id))
            .ok_or_else(|| UserPersistenceError::not_found(id))
    }

    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut table = self.lock()?;
        let id = UserId::new(table.next_id);
        table.next_id = table
            .next_id
            .checked_add(1)
            .ok_or_else(|| UserPersistenceError::query("user id sequence exhausted"))?;
        table.rows.insert(id, draft.clone());
        Ok(draft.clone().with_id(id))
    }

    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut table = self.lock()?;
        if let Some(row) = table.rows.get_mut(&id) {
            *row = draft.clone();
        }
        Ok(draft.clone().with_id(id))
    }

    async fn delete(&self, id: UserId) -> Result<(), UserPersistenceError> {
        let mut table = self.lock()?;
        table.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repo() -> InMemoryUserRepository {
        InMemoryUserRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn create_assigns_sequential_ids(repo: InMemoryUserRepository) {
        let first = repo
            .create(&UserDraft::new("Ada", "ada@x.com"))
            .await
            .expect("create first");
        let second = repo
            .create(&UserDraft::new("Grace", "grace@x.com"))
            .await
            .expect("create second");
        assert_eq!(first.id(), UserId::new(1));
        assert_eq!(second.id(), UserId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_not_reused_after_delete(repo: InMemoryUserRepository) {
        let first = repo
            .create(&UserDraft::new("Ada", "ada@x.com"))
            .await
            .expect("create");
        repo.delete(first.id()).await.expect("delete");
        let second = repo
            .create(&UserDraft::new("Ada", "ada@x.com"))
            .await
            .expect("create again");
        assert_ne!(first.id(), second.id());
    }

    #[rstest]
    #[tokio::test]
    async fn find_unknown_id_is_not_found(repo: InMemoryUserRepository) {
        let err = repo.find(UserId::new(99)).await.expect_err("missing user");
        assert_eq!(err, UserPersistenceError::not_found(99));
    }

    #[rstest]
    #[tokio::test]
    async fn update_unknown_id_echoes_without_persisting(repo: InMemoryUserRepository) {
        let echoed = repo
            .update(UserId::new(5), &UserDraft::new("Ghost", "ghost@x.com"))
            .await
            .expect("update succeeds");
        assert_eq!(echoed.id(), UserId::new(5));
        assert!(repo.list().await.expect("list").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn list_follows_id_order(repo: InMemoryUserRepository) {
        for name in ["a", "b", "c"] {
            repo.create(&UserDraft::new(name, format!("{name}@x.com")))
                .await
                .expect("create");
        }
        let names: Vec<String> = repo
            .list()
            .await
            .expect("list")
            .iter()
            .map(|user| user.name().to_owned())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
