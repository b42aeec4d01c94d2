use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::user::User;
use crate::store::{duplicate_email, ResumeStore};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
}

/// Creates a user. Emails are unique; a duplicate leaves the existing user untouched.
pub async fn create_user(
    store: &dyn ResumeStore,
    request: &CreateUserRequest,
) -> Result<User, AppError> {
    let username = request.username.trim();
    let email = request.email.trim();

    if username.is_empty() {
        return Err(AppError::BadRequest("username cannot be empty".to_string()));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::BadRequest(format!("'{email}' is not a valid email")));
    }

    if store.find_user_by_email(email).await?.is_some() {
        return Err(duplicate_email(email));
    }

    let user = store.create_user(username, email).await?;
    info!(user_id = user.id, "User created");
    Ok(user)
}

pub async fn get_user(store: &dyn ResumeStore, user_id: i64) -> Result<User, AppError> {
    store
        .find_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))
}
