use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::resume::Resume;
use crate::resumes::extract::extract_text_blocking;
use crate::resumes::prompts::{build_improvement_prompt, ImprovementFocus};
use crate::store::ResumeStore;

pub const IMPROVED_MESSAGE: &str = "Resume improved successfully";

const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Default, Deserialize)]
pub struct ImproveRequest {
    pub job_description: Option<String>,
    pub improvement_focus: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ImproveResponse {
    pub resume_id: i64,
    pub improved_text: String,
    pub message: String,
}

/// A file part received with an upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Where the resume text of an upload comes from.
#[derive(Debug, Clone)]
pub enum ResumeSource {
    Pdf(Bytes),
    Text(String),
}

impl ResumeSource {
    /// Exactly one of `file` and a non-blank `text` must be given,
    /// and a file must be declared as `application/pdf`.
    pub fn from_parts(file: Option<UploadedFile>, text: Option<String>) -> Result<Self, AppError> {
        let text = text.filter(|t| !t.trim().is_empty());

        match (file, text) {
            (Some(_), Some(_)) => Err(AppError::BadRequest(
                "Provide either a file or text, not both".to_string(),
            )),
            (None, None) => Err(AppError::BadRequest(
                "Either file or text must be provided".to_string(),
            )),
            (None, Some(text)) => Ok(ResumeSource::Text(text)),
            (Some(file), None) => {
                if !is_pdf_content_type(file.content_type.as_deref()) {
                    return Err(AppError::BadRequest(
                        "Only PDF files are supported".to_string(),
                    ));
                }
                Ok(ResumeSource::Pdf(file.bytes))
            }
        }
    }
}

fn is_pdf_content_type(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(PDF_CONTENT_TYPE))
}

/// Resolves the resume text, checks the owner exists and stores a new resume
/// with no improved text.
pub async fn upload_resume(
    store: &dyn ResumeStore,
    user_id: i64,
    source: ResumeSource,
) -> Result<Resume, AppError> {
    let (text, origin) = match source {
        ResumeSource::Pdf(bytes) => (extract_text_blocking(bytes).await?, "pdf"),
        ResumeSource::Text(text) => (text, "text"),
    };

    if text.trim().is_empty() {
        return Err(AppError::BadRequest(
            "No text could be extracted from the uploaded file".to_string(),
        ));
    }

    if store.find_user(user_id).await?.is_none() {
        return Err(AppError::NotFound(format!("User {user_id} not found")));
    }

    let resume = store.create_resume(user_id, &text).await?;
    info!(
        resume_id = resume.id,
        user_id,
        origin,
        chars = text.chars().count(),
        "Resume uploaded"
    );
    Ok(resume)
}

/// Rewrites a stored resume through the inference service and saves the result.
/// On inference failure nothing is written.
pub async fn improve_resume(
    store: &dyn ResumeStore,
    llm: &LlmClient,
    resume_id: i64,
    request: &ImproveRequest,
) -> Result<ImproveResponse, AppError> {
    let resume = find_resume(store, resume_id).await?;

    let focus = ImprovementFocus::from(request.improvement_focus.as_deref());
    let prompt = build_improvement_prompt(
        &resume.original_text,
        request.job_description.as_deref(),
        focus,
    );
    debug!(resume_id, %focus, prompt_chars = prompt.len(), "Built improvement prompt");

    let improved_text = llm.generate(&prompt).await.map_err(|e| {
        warn!(resume_id, model = llm.model(), "Inference call failed: {e}");
        AppError::from(e)
    })?;

    store
        .set_improved_text(resume_id, &improved_text)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    info!(resume_id, %focus, chars = improved_text.len(), "Resume improved");

    Ok(ImproveResponse {
        resume_id,
        improved_text,
        message: IMPROVED_MESSAGE.to_string(),
    })
}

pub async fn find_resume(store: &dyn ResumeStore, resume_id: i64) -> Result<Resume, AppError> {
    store
        .find_resume(resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))
}

pub async fn list_user_resumes(
    store: &dyn ResumeStore,
    user_id: i64,
) -> Result<Vec<Resume>, AppError> {
    if store.find_user(user_id).await?.is_none() {
        return Err(AppError::NotFound(format!("User {user_id} not found")));
    }
    store.list_resumes_for_user(user_id).await
}
