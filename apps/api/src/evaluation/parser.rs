//! Response Parser: strict decode of the model's raw text into a [`ModelResponseRecord`].
//!
//! The model is asked for a single-line JSON object. Markdown fences and stray prose
//! around the object are tolerated; anything else about the object is not. All four
//! keys must be present, no others, every value a string, and the match value a
//! number in 0 – 100 once the trailing `%` is removed. There is no partial result.

use serde::Deserialize;
use thiserror::Error;

use crate::models::evaluation::ModelResponseRecord;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("model output contains no JSON object")]
    NoObject,

    #[error("model output is not the expected object: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("match percentage {0:?} is not a number")]
    NotNumeric(String),

    #[error("match percentage {0} is outside 0-100")]
    OutOfRange(f64),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVerdict {
    #[serde(rename = "Job Description Match")]
    job_description_match: String,
    #[serde(rename = "Missing Keywords")]
    missing_keywords: String,
    #[serde(rename = "Candidate Summary")]
    candidate_summary: String,
    #[serde(rename = "Experience")]
    experience: String,
}

pub fn parse_model_output(raw: &str) -> Result<ModelResponseRecord, ParseError> {
    let object = locate_object(raw).ok_or(ParseError::NoObject)?;
    let verdict: RawVerdict = serde_json::from_str(object)?;

    Ok(ModelResponseRecord {
        match_percentage: parse_percentage(&verdict.job_description_match)?,
        missing_keywords: verdict.missing_keywords,
        candidate_summary: verdict.candidate_summary,
        experience: verdict.experience,
    })
}

/// `"92%"` → `92.0`. Surrounding whitespace and a single trailing `%` are allowed.
pub fn parse_percentage(value: &str) -> Result<f64, ParseError> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();

    let parsed: f64 = number
        .parse()
        .map_err(|_| ParseError::NotNumeric(value.to_string()))?;
    if !parsed.is_finite() {
        return Err(ParseError::NotNumeric(value.to_string()));
    }
    if !(0.0..=100.0).contains(&parsed) {
        return Err(ParseError::OutOfRange(parsed));
    }
    Ok(parsed)
}

/// The span from the first `{` to the last `}`, after dropping any code fences.
fn locate_object(raw: &str) -> Option<&str> {
    let text = strip_json_fences(raw);
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(stripped) => stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start()),
        None => text,
    }
}
