use std::fmt;

use serde::{Deserialize, Serialize};

/// Scores at or above this are recommended for hiring.
pub const HIREABLE_THRESHOLD: f64 = 80.0;

/// Inputs for a single evaluation. Lives only for the duration of the request.
#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    pub resume_text: String,
    pub job_description: String,
}

/// The model's verdict, decoded from its raw text output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelResponseRecord {
    /// 0 – 100
    pub match_percentage: f64,
    pub missing_keywords: String,
    pub candidate_summary: String,
    pub experience: String,
}

/// The persisted document: the verdict plus the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub job_description: String,
    pub resume_text: String,
    pub match_percentage: f64,
    pub missing_keywords: String,
    pub candidate_summary: String,
    pub experience: String,
}

impl EvaluationResult {
    pub fn new(request: EvaluationRequest, record: ModelResponseRecord) -> Self {
        Self {
            job_description: request.job_description,
            resume_text: request.resume_text,
            match_percentage: record.match_percentage,
            missing_keywords: record.missing_keywords,
            candidate_summary: record.candidate_summary,
            experience: record.experience,
        }
    }

    pub fn recommendation(&self) -> Recommendation {
        Recommendation::from_percentage(self.match_percentage)
    }

    /// The parsed number as a float literal plus `%`: 92 renders as `92.0%`.
    pub fn display_percentage(&self) -> String {
        format!("{:?}%", self.match_percentage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    #[serde(rename = "hireable")]
    Hireable,
    #[serde(rename = "not a match")]
    NotAMatch,
}

impl Recommendation {
    pub fn from_percentage(match_percentage: f64) -> Self {
        if match_percentage >= HIREABLE_THRESHOLD {
            Recommendation::Hireable
        } else {
            Recommendation::NotAMatch
        }
    }

    pub fn is_hireable(self) -> bool {
        self == Recommendation::Hireable
    }

    /// Banner text shown on the result view.
    pub fn headline(self) -> &'static str {
        match self {
            Recommendation::Hireable => "Recommendation: Move forward with hiring.",
            Recommendation::NotAMatch => "Recommendation: Not a Match.",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Hireable => f.write_str("hireable"),
            Recommendation::NotAMatch => f.write_str("not a match"),
        }
    }
}
