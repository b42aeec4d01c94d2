//! PDF → plain text.

use thiserror::Error;

const PDF_MAGIC: &[u8] = b"%PDF-";
/// Readers accept the header anywhere in the first KiB.
const HEADER_WINDOW: usize = 1024;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("content is not a PDF document")]
    NotPdf,

    #[error("{0}")]
    Parse(#[from] pdf_extract::OutputError),

    #[error("PDF parser aborted: {0}")]
    Aborted(String),
}

/// Extracts the text layer of every page, newline separated, trimmed.
///
/// A PDF without any text layer (e.g. a scan) yields an empty string.
/// CPU-bound; call through `extract_text_blocking` from async code.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    if !has_pdf_header(bytes) {
        return Err(ExtractionError::NotPdf);
    }

    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)?;
    Ok(pages.join("\n").trim().to_string())
}

fn has_pdf_header(bytes: &[u8]) -> bool {
    bytes
        .windows(PDF_MAGIC.len())
        .take(HEADER_WINDOW)
        .any(|w| w == PDF_MAGIC)
}

/// Runs `extract_text` on the blocking pool. A parser panic is reported as
/// `ExtractionError::Aborted` instead of tearing down the request task.
pub async fn extract_text_blocking(bytes: bytes::Bytes) -> Result<String, ExtractionError> {
    tokio::task::spawn_blocking(move || extract_text(&bytes))
        .await
        .map_err(|e| ExtractionError::Aborted(e.to_string()))?
}
