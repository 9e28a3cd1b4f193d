use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
};
use bytes::Bytes;

use crate::errors::AppError;
use crate::evaluation::pipeline::ResumeUpload;
use crate::extraction::DocumentKind;

pub const JOB_DESCRIPTION_FIELD: &str = "job_description";
pub const RESUME_FIELD: &str = "resume";

/// A file part exactly as the browser sent it.
#[derive(Debug)]
pub struct RawFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Parsed form fields from the evaluation form.
#[derive(Debug, Default)]
pub struct EvaluationForm {
    pub job_description: String,
    pub resume: Option<RawFile>,
}

impl EvaluationForm {
    /// Parse a multipart form upload into structured form fields.
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = EvaluationForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| read_error("Failed to read form field", e))?
        {
            let name = field.name().unwrap_or("").to_string();

            match name.as_str() {
                JOB_DESCRIPTION_FIELD => {
                    form.job_description = field
                        .text()
                        .await
                        .map_err(|e| read_error("Failed to read job description", e))?;
                }
                RESUME_FIELD => {
                    let file_name = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| read_error("Failed to read resume upload", e))?;
                    form.resume = Some(RawFile {
                        file_name,
                        content_type,
                        data,
                    });
                }
                _ => {
                    // Ignore unknown fields
                    let _ = field.bytes().await;
                }
            }
        }

        Ok(form)
    }

    /// Checks the submission before anything runs: a non-empty file that is a PDF or DOCX.
    /// The job description is passed through as typed, even when blank.
    pub fn validate(self) -> Result<(String, ResumeUpload), AppError> {
        // Browsers submit an empty, unnamed part when no file was chosen
        let file = match self.resume {
            Some(file) if !file.data.is_empty() => file,
            _ => {
                return Err(AppError::Validation(
                    "Please upload your resume (PDF or DOCX) before submitting.".to_string(),
                ))
            }
        };

        let kind = DocumentKind::detect(file.content_type.as_deref(), file.file_name.as_deref())
            .ok_or_else(|| {
                AppError::UnsupportedMediaType(format!(
                    "Only PDF or DOCX resumes are accepted (got {}).",
                    file.content_type.as_deref().unwrap_or("unknown type")
                ))
            })?;

        let upload = ResumeUpload {
            file_name: file.file_name.unwrap_or_else(|| "resume".to_string()),
            kind,
            data: file.data,
        };
        Ok((self.job_description, upload))
    }
}

/// A body cut off by the upload limit is 413; anything else is a malformed form.
fn read_error(context: &str, err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(
            "The uploaded resume is too large. Please upload a smaller file.".to_string(),
        )
    } else {
        AppError::Validation(format!("{context}: {err}"))
    }
}
