use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-api"
    }))
}

/// GET /
/// Service banner listing the public endpoints.
pub async fn index_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "Resume Analyzer API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "healthy",
        "model": state.llm.model(),
        "endpoints": {
            "POST /users/": "Create a new user",
            "GET /users/": "Get all users",
            "GET /users/{user_id}": "Get user by ID",
            "POST /resumes/upload": "Upload resume (PDF or text)",
            "POST /resumes/{resume_id}/improve": "Improve resume with AI",
            "GET /resumes/{resume_id}": "Get resume by ID",
            "GET /users/{user_id}/resumes": "Get all resumes for a user"
        }
    }))
}
