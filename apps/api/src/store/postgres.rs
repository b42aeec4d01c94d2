use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::models::user::User;
use crate::store::{duplicate_email, ResumeStore};

const USER_COLUMNS: &str = "id, username, email, created_at";
const RESUME_COLUMNS: &str = "id, user_id, original_text, improved_text, created_at";

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgStore {
    async fn create_user(&self, username: &str, email: &str) -> Result<User, AppError> {
        let inserted = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (username, email) VALUES ($1, $2) RETURNING {USER_COLUMNS}"
        ))
        .bind(username)
        .bind(email)
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(user) => Ok(user),
            // A concurrent insert can slip past the pre-check; the unique index decides.
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(duplicate_email(email))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    async fn create_resume(&self, user_id: i64, original_text: &str) -> Result<Resume, AppError> {
        let resume = sqlx::query_as::<_, Resume>(&format!(
            "INSERT INTO resumes (user_id, original_text) VALUES ($1, $2) RETURNING {RESUME_COLUMNS}"
        ))
        .bind(user_id)
        .bind(original_text)
        .fetch_one(&self.pool)
        .await?;
        Ok(resume)
    }

    async fn find_resume(&self, id: i64) -> Result<Option<Resume>, AppError> {
        let resume = sqlx::query_as::<_, Resume>(&format!(
            "SELECT {RESUME_COLUMNS} FROM resumes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(resume)
    }

    async fn list_resumes_for_user(&self, user_id: i64) -> Result<Vec<Resume>, AppError> {
        let resumes = sqlx::query_as::<_, Resume>(&format!(
            "SELECT {RESUME_COLUMNS} FROM resumes WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(resumes)
    }

    async fn set_improved_text(
        &self,
        id: i64,
        improved_text: &str,
    ) -> Result<Option<Resume>, AppError> {
        let resume = sqlx::query_as::<_, Resume>(&format!(
            "UPDATE resumes SET improved_text = $1 WHERE id = $2 RETURNING {RESUME_COLUMNS}"
        ))
        .bind(improved_text)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(resume)
    }
}
