//! Document text extraction: turns an uploaded resume (PDF or DOCX) into plain text.
//!
//! Parsing is synchronous and CPU-bound. Async callers go through [`extract_text_blocking`],
//! which moves the work onto the blocking pool.

use thiserror::Error;

mod docx;
mod pdf;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unreadable PDF: {0}")]
    Pdf(String),

    #[error("unreadable DOCX: {0}")]
    Docx(String),

    #[error("extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// The document formats a resume may be uploaded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        // Ignore parameters such as "; charset=binary"
        let essence = mime.split(';').next().unwrap_or("").trim();
        match essence.to_ascii_lowercase().as_str() {
            PDF_MIME => Some(DocumentKind::Pdf),
            DOCX_MIME => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let lower = file_name.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            Some(DocumentKind::Pdf)
        } else if lower.ends_with(".docx") {
            Some(DocumentKind::Docx)
        } else {
            None
        }
    }

    /// Resolves an upload's kind from its declared content type. Browsers sometimes send
    /// no type or `application/octet-stream`; only then is the file name consulted.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        match content_type {
            Some(ct) if !ct.is_empty() && !ct.starts_with("application/octet-stream") => {
                Self::from_mime(ct)
            }
            _ => file_name.and_then(Self::from_file_name),
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            DocumentKind::Pdf => PDF_MIME,
            DocumentKind::Docx => DOCX_MIME,
        }
    }
}

/// Extracts plain text from `data` according to `kind`.
///
/// NUL characters are removed: PostgreSQL `TEXT` columns cannot store them.
pub fn extract_text(data: &[u8], kind: DocumentKind) -> Result<String, ExtractionError> {
    let text = match kind {
        DocumentKind::Pdf => pdf::extract(data)?,
        DocumentKind::Docx => docx::extract(data)?,
    };
    Ok(strip_nul(text))
}

fn strip_nul(text: String) -> String {
    if text.contains('\0') {
        text.replace('\0', "")
    } else {
        text
    }
}

/// [`extract_text`] on the blocking thread pool.
pub async fn extract_text_blocking(
    data: bytes::Bytes,
    kind: DocumentKind,
) -> Result<String, ExtractionError> {
    tokio::task::spawn_blocking(move || extract_text(&data, kind)).await?
}
