//! Axum route handlers for the Resume API.

use axum::{
    extract::{FromRequest, Multipart, Path, Query, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::resumes::service::{
    find_resume, improve_resume, upload_resume, ImproveRequest, ImproveResponse, ResumeSource,
    UploadedFile,
};
use crate::state::AppState;

/// Upload size cap, applied as the route's body limit.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    pub user_id: Option<i64>,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TextBody {
    text: Option<String>,
}

/// Parts an upload body may carry, whatever its encoding.
#[derive(Debug, Default)]
struct UploadForm {
    user_id: Option<i64>,
    text: Option<String>,
    file: Option<UploadedFile>,
}

/// POST /resumes/upload
///
/// `user_id` and `text` may come from the query string. The body is either
/// multipart (`file`, `text`, `user_id` fields), JSON `{"text": ...}`,
/// a raw `application/pdf` payload, or empty.
pub async fn handle_upload(
    State(state): State<AppState>,
    Query(query): Query<UploadQuery>,
    request: Request,
) -> Result<(StatusCode, Json<Resume>), AppError> {
    let form = read_upload_body(request, &state).await?;

    let user_id = query
        .user_id
        .or(form.user_id)
        .ok_or_else(|| AppError::BadRequest("user_id is required".to_string()))?;
    let text = form.text.or(query.text);

    let source = ResumeSource::from_parts(form.file, text)?;
    let resume = upload_resume(state.store.as_ref(), user_id, source).await?;

    Ok((StatusCode::CREATED, Json(resume)))
}

/// POST /resumes/:id/improve
pub async fn handle_improve(
    State(state): State<AppState>,
    Path(resume_id): Path<i64>,
    Json(request): Json<ImproveRequest>,
) -> Result<Json<ImproveResponse>, AppError> {
    let response = improve_resume(state.store.as_ref(), &state.llm, resume_id, &request).await?;
    Ok(Json(response))
}

/// GET /resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<i64>,
) -> Result<Json<Resume>, AppError> {
    Ok(Json(find_resume(state.store.as_ref(), resume_id).await?))
}

/// Maps an extractor rejection, keeping body-limit overruns apart from
/// malformed input.
fn rejected(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::BadRequest(message)
    }
}

async fn read_upload_body(request: Request, state: &AppState) -> Result<UploadForm, AppError> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, state)
            .await
            .map_err(|e| rejected(e.status(), e.body_text()))?;
        return read_multipart(multipart).await;
    }

    if content_type.starts_with("application/json") {
        let Json(body) = Json::<TextBody>::from_request(request, state)
            .await
            .map_err(|e| rejected(e.status(), e.body_text()))?;
        return Ok(UploadForm {
            text: body.text,
            ..UploadForm::default()
        });
    }

    let body = Bytes::from_request(request, state)
        .await
        .map_err(|e| rejected(e.status(), e.body_text()))?;
    if body.is_empty() {
        return Ok(UploadForm::default());
    }
    if content_type.starts_with("application/pdf") {
        return Ok(UploadForm {
            file: Some(UploadedFile {
                content_type: Some(content_type),
                bytes: body,
            }),
            ..UploadForm::default()
        });
    }

    Err(AppError::BadRequest(format!(
        "Unsupported content type '{content_type}'"
    )))
}

async fn read_multipart(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| rejected(e.status(), e.body_text()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let has_name = field.file_name().is_some_and(|n| !n.is_empty());
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| rejected(e.status(), e.body_text()))?;
                // Browsers submit an empty, unnamed part when no file was chosen.
                if bytes.is_empty() && !has_name {
                    continue;
                }
                form.file = Some(UploadedFile {
                    content_type,
                    bytes,
                });
            }
            Some("text") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| rejected(e.status(), e.body_text()))?;
                form.text = Some(text);
            }
            Some("user_id") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| rejected(e.status(), e.body_text()))?;
                let user_id = raw
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| AppError::BadRequest(format!("'{raw}' is not a valid user_id")))?;
                form.user_id = Some(user_id);
            }
            _ => {}
        }
    }

    Ok(form)
}
