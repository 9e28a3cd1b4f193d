// Prompt for the ATS evaluation call.
// The four response keys here must stay in sync with `parser::RawVerdict`.

pub const MATCH_KEY: &str = "Job Description Match";
pub const MISSING_KEYWORDS_KEY: &str = "Missing Keywords";
pub const CANDIDATE_SUMMARY_KEY: &str = "Candidate Summary";
pub const EXPERIENCE_KEY: &str = "Experience";

/// Builds the evaluation prompt.
///
/// Both inputs are substituted verbatim in a single pass, so braces, quotes or
/// placeholder-looking text inside a resume reach the model unchanged.
pub fn build_prompt(resume_text: &str, job_description: &str) -> String {
    format!(
        r#"
As an experienced Applicant Tracking System (ATS) analyst,
with profound knowledge in technology, software engineering, data science,
and big data engineering, your role involves evaluating resumes against job descriptions.
Recognizing the competitive job market, provide top-notch assistance for resume improvement.
Your goal is to analyze the resume against the given job description,
assign a percentage match based on key criteria, and pinpoint missing keywords accurately.
resume:{resume_text}
description:{job_description}
I want the response in one single string having the structure
{{"{MATCH_KEY}":"%","{MISSING_KEYWORDS_KEY}":"","{CANDIDATE_SUMMARY_KEY}":"","{EXPERIENCE_KEY}":""}}
"#
    )
}
