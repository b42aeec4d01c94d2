//! Persistence for users and resumes.
//!
//! `AppState` carries an `Arc<dyn ResumeStore>`: `PgStore` in production,
//! `MemoryStore` in tests. Both enforce email uniqueness and report a
//! duplicate as `AppError::Conflict`.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::models::user::User;

#[cfg(test)]
pub mod memory;
pub mod postgres;

#[cfg(test)]
pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn create_user(&self, username: &str, email: &str) -> Result<User, AppError>;

    async fn find_user(&self, id: i64) -> Result<Option<User>, AppError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    async fn create_resume(&self, user_id: i64, original_text: &str) -> Result<Resume, AppError>;

    async fn find_resume(&self, id: i64) -> Result<Option<Resume>, AppError>;

    async fn list_resumes_for_user(&self, user_id: i64) -> Result<Vec<Resume>, AppError>;

    /// Overwrites `improved_text`. Returns `None` if the resume does not exist.
    async fn set_improved_text(
        &self,
        id: i64,
        improved_text: &str,
    ) -> Result<Option<Resume>, AppError>;
}

pub(crate) fn duplicate_email(email: &str) -> AppError {
    AppError::Conflict(format!("User with email {email} already exists"))
}
