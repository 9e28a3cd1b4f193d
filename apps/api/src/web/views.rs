use askama::Template;

use crate::evaluation::pipeline::EvaluationOutcome;
use crate::extraction::{DOCX_MIME, PDF_MIME};

pub const APP_TITLE: &str = "Intelligent ATS";

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub title: &'static str,
}

#[derive(Template)]
#[template(path = "evaluate.html")]
pub struct EvaluatePage<'a> {
    pub title: &'static str,
    pub job_description: &'a str,
    pub notice: Option<&'a str>,
    pub accept: String,
}

impl<'a> EvaluatePage<'a> {
    pub fn new(job_description: &'a str, notice: Option<&'a str>) -> Self {
        Self {
            title: APP_TITLE,
            job_description,
            notice,
            accept: format!(".pdf,.docx,{PDF_MIME},{DOCX_MIME}"),
        }
    }
}

#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultPage<'a> {
    pub title: &'static str,
    pub id: String,
    pub match_display: String,
    /// 0 – 100, for the progress bar
    pub progress: f64,
    pub missing_keywords: &'a str,
    pub candidate_summary: &'a str,
    pub experience: &'a str,
    pub hireable: bool,
    pub headline: &'static str,
    pub resume_text: &'a str,
    pub job_description: &'a str,
}

impl<'a> ResultPage<'a> {
    pub fn new(outcome: &'a EvaluationOutcome) -> Self {
        let result = &outcome.result;
        Self {
            title: APP_TITLE,
            id: outcome.id.to_string(),
            match_display: result.display_percentage(),
            progress: result.match_percentage.clamp(0.0, 100.0),
            missing_keywords: &result.missing_keywords,
            candidate_summary: &result.candidate_summary,
            experience: &result.experience,
            hireable: outcome.recommendation.is_hireable(),
            headline: outcome.recommendation.headline(),
            resume_text: &result.resume_text,
            job_description: &result.job_description,
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage<'a> {
    pub title: &'static str,
    pub status: u16,
    pub message: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::evaluation::{EvaluationResult, Recommendation};
    use uuid::Uuid;

    fn outcome(match_percentage: f64) -> EvaluationOutcome {
        let result = EvaluationResult {
            job_description: "Senior Go Engineer".to_string(),
            resume_text: "<script>alert(1)</script> Go".to_string(),
            match_percentage,
            missing_keywords: "Kubernetes certification".to_string(),
            candidate_summary: "Experienced backend engineer".to_string(),
            experience: "5 years".to_string(),
        };
        EvaluationOutcome {
            id: Uuid::new_v4(),
            recommendation: result.recommendation(),
            result,
        }
    }

    #[test]
    fn test_result_page_shows_metric_and_recommendation() {
        let outcome = outcome(92.0);
        let html = ResultPage::new(&outcome).render().unwrap();

        assert!(html.contains("92.0%"));
        assert!(html.contains("Move forward with hiring."));
        assert!(html.contains("Kubernetes certification"));
        assert!(html.contains("Experienced backend engineer"));
        assert_eq!(outcome.recommendation, Recommendation::Hireable);
    }

    #[test]
    fn test_result_page_for_weak_match() {
        let html = ResultPage::new(&outcome(79.9)).render().unwrap();

        assert!(html.contains("79.9%"));
        assert!(html.contains("Not a Match."));
        assert!(!html.contains("Move forward with hiring."));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let html = ResultPage::new(&outcome(50.0)).render().unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_evaluate_page_shows_notice_and_keeps_input() {
        let html = EvaluatePage::new("Senior Go Engineer", Some("Please upload your resume"))
            .render()
            .unwrap();

        assert!(html.contains("Please upload your resume"));
        assert!(html.contains("Senior Go Engineer"));
        assert!(html.contains(r#"name="resume""#));
        assert!(html.contains(r#"name="job_description""#));
    }

    #[test]
    fn test_evaluate_page_without_notice() {
        let html = EvaluatePage::new("", None).render().unwrap();
        assert!(!html.contains(r#"class="notice""#));
    }

    #[test]
    fn test_home_page_links_to_evaluation() {
        let html = HomePage { title: APP_TITLE }.render().unwrap();
        assert!(html.contains("Welcome to Intelligent ATS"));
        assert!(html.contains(r#"href="/evaluate""#));
    }
}
