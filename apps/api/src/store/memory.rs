use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::models::user::User;
use crate::store::{duplicate_email, ResumeStore};

/// In-process store with the same observable behavior as `PgStore`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<i64, User>,
    resumes: BTreeMap<i64, Resume>,
    next_user_id: i64,
    next_resume_id: i64,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful mutations so far.
    pub async fn write_count(&self) -> usize {
        self.inner.read().await.writes
    }
}

#[async_trait]
impl ResumeStore for MemoryStore {
    async fn create_user(&self, username: &str, email: &str) -> Result<User, AppError> {
        let mut inner = self.inner.write().await;
        if inner.users.values().any(|u| u.email == email) {
            return Err(duplicate_email(email));
        }

        inner.next_user_id += 1;
        let user = User {
            id: inner.next_user_id,
            username: username.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        };
        inner.users.insert(user.id, user.clone());
        inner.writes += 1;
        Ok(user)
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.email == email).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.inner.read().await.users.values().cloned().collect())
    }

    async fn create_resume(&self, user_id: i64, original_text: &str) -> Result<Resume, AppError> {
        let mut inner = self.inner.write().await;
        if !inner.users.contains_key(&user_id) {
            return Err(AppError::NotFound(format!("User {user_id} not found")));
        }

        inner.next_resume_id += 1;
        let resume = Resume {
            id: inner.next_resume_id,
            user_id,
            original_text: original_text.to_string(),
            improved_text: None,
            created_at: Utc::now(),
        };
        inner.resumes.insert(resume.id, resume.clone());
        inner.writes += 1;
        Ok(resume)
    }

    async fn find_resume(&self, id: i64) -> Result<Option<Resume>, AppError> {
        Ok(self.inner.read().await.resumes.get(&id).cloned())
    }

    async fn list_resumes_for_user(&self, user_id: i64) -> Result<Vec<Resume>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .resumes
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn set_improved_text(
        &self,
        id: i64,
        improved_text: &str,
    ) -> Result<Option<Resume>, AppError> {
        let mut inner = self.inner.write().await;
        let Some(resume) = inner.resumes.get_mut(&id) else {
            return Ok(None);
        };
        resume.improved_text = Some(improved_text.to_string());
        let updated = resume.clone();
        inner.writes += 1;
        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let store = MemoryStore::new();
        store.create_user("ada", "ada@example.com").await.unwrap();

        let err = store.create_user("other", "ada@example.com").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_resumes_are_filtered_by_owner() {
        let store = MemoryStore::new();
        let ada = store.create_user("ada", "ada@example.com").await.unwrap();
        let bob = store.create_user("bob", "bob@example.com").await.unwrap();
        store.create_resume(ada.id, "A1").await.unwrap();
        store.create_resume(bob.id, "B1").await.unwrap();
        store.create_resume(ada.id, "A2").await.unwrap();

        let texts: Vec<_> = store
            .list_resumes_for_user(ada.id)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.original_text)
            .collect();
        assert_eq!(texts, vec!["A1", "A2"]);
    }

    #[tokio::test]
    async fn test_set_improved_text_on_missing_resume_is_none() {
        let store = MemoryStore::new();
        assert!(store.set_improved_text(42, "x").await.unwrap().is_none());
        assert_eq!(store.write_count().await, 0);
    }
}
