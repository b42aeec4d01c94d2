pub mod health;

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::resumes::handlers::{self as resumes, MAX_UPLOAD_BYTES};
use crate::state::AppState;
use crate::users::handlers as users;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index_handler))
        .route("/health", get(health::health_handler))
        // Users
        .route(
            "/users",
            get(users::handle_list_users).post(users::handle_create_user),
        )
        .route(
            "/users/",
            get(users::handle_list_users).post(users::handle_create_user),
        )
        .route("/users/:id", get(users::handle_get_user))
        .route("/users/:id/resumes", get(users::handle_list_user_resumes))
        // Resumes
        .route(
            "/resumes/upload",
            post(resumes::handle_upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/resumes/:id", get(resumes::handle_get_resume))
        .route("/resumes/:id/improve", post(resumes::handle_improve))
        .with_state(state)
}

/// CORS for the configured browser origins, with credentials allowed.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
