//! The analyzer seam: a pluggable, trait-based resume analyzer.
//!
//! Default: `HeuristicAnalyzer` (pure-Rust, fast, deterministic, fully
//! testable). `AppState` holds an `Arc<dyn ResumeAnalyzer>`, built once at
//! startup; the technical keyword catalog rides along read-only.

use std::collections::HashSet;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use crate::analysis::catalog::TechCatalog;
use crate::analysis::interview;
use crate::analysis::keywords;
use crate::analysis::narrative;
use crate::analysis::report::{AnalysisOutcome, AnalysisReport};
use crate::analysis::scoring::{self, ScoreWeights};
use crate::analysis::text;

/// Reasons the heuristic pipeline can refuse to produce a real analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("resume text contains no usable tokens")]
    EmptyResume,
    #[error("job description contains no usable tokens")]
    EmptyJobDescription,
}

/// The analyzer trait. Implement this to swap backends without touching the
/// endpoint, handler, or caller code.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, resume_text: &str, job_description: &str) -> AnalysisOutcome;
}

/// Heuristic weighted-sum analyzer: keyword overlap plus experience,
/// education, and leadership indicator scores.
pub struct HeuristicAnalyzer {
    catalog: TechCatalog,
    weights: ScoreWeights,
}

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        Self {
            catalog: TechCatalog,
            weights: ScoreWeights::default(),
        }
    }

    fn run(&self, resume_text: &str, job_description: &str) -> Result<AnalysisReport, AnalysisError> {
        let resume_tokens: HashSet<String> = text::token_set(resume_text);
        if resume_tokens.is_empty() {
            return Err(AnalysisError::EmptyResume);
        }
        if text::token_set(job_description).is_empty() {
            return Err(AnalysisError::EmptyJobDescription);
        }

        let resume_keywords = text::extract_keywords(resume_text, &self.catalog);
        let job_keywords = text::extract_keywords(job_description, &self.catalog);

        let keyword_analysis = keywords::analyze_keywords(
            resume_text,
            job_description,
            &resume_keywords,
            &job_keywords,
            &self.catalog,
        );

        let components = scoring::score_components(
            &resume_tokens,
            keyword_analysis.matched_tech,
            keyword_analysis.job_tech_total,
        );
        let fit_score = scoring::combine_fit_score(&components, &self.weights);
        debug!(
            keyword_match_ratio = components.keyword_match_ratio,
            experience_score = components.experience_score,
            education_score = components.education_score,
            leadership_score = components.leadership_score,
            fit_score,
            "computed score components"
        );

        let suggestions = narrative::build_suggestions(fit_score, &keyword_analysis.missing);
        let analysis = narrative::build_breakdown(fit_score, &components);
        let interview_questions = interview::build_questions(job_description, &self.catalog);

        Ok(AnalysisReport {
            fit_score,
            matching_keywords: keyword_analysis.matching,
            missing_keywords: keyword_analysis.missing,
            suggestions,
            analysis,
            interview_questions,
        })
    }
}

impl Default for HeuristicAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResumeAnalyzer for HeuristicAnalyzer {
    async fn analyze(&self, resume_text: &str, job_description: &str) -> AnalysisOutcome {
        match self.run(resume_text, job_description) {
            Ok(report) => AnalysisOutcome::Full(report),
            Err(e) => {
                warn!("analysis degraded: {e}");
                AnalysisOutcome::Degraded {
                    report: AnalysisReport::degraded(),
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::scoring::{DEGRADED_FIT_SCORE, SCORE_CEILING, SCORE_FLOOR};

    const RESUME: &str = "I have 5 years of experience with Python and React, led a team of 4";
    const JOB: &str = "Looking for a senior Python developer with React and AWS experience";

    #[test]
    fn test_partial_overlap_scenario_end_to_end() {
        let analyzer = HeuristicAnalyzer::new();
        let report = analyzer.run(RESUME, JOB).unwrap();

        assert!(report.matching_keywords.contains(&"python".to_string()));
        assert!(report.matching_keywords.contains(&"react".to_string()));
        assert!(report.missing_keywords.contains(&"aws".to_string()));
        assert!(
            report.fit_score > SCORE_FLOOR && report.fit_score < SCORE_CEILING,
            "partial overlap must score strictly inside the band, got {}",
            report.fit_score
        );
        assert!(report
            .interview_questions
            .iter()
            .any(|q| q.contains("mentoring junior team members")));
    }

    #[test]
    fn test_identical_texts_score_near_maximum() {
        let text = "Senior engineer with 10 years of experience. Designed, built, and \
                    delivered cloud systems in Python and AWS. Led and managed teams and \
                    mentored engineers. Bachelor degree in computer science from a \
                    university, AWS certified.";
        let analyzer = HeuristicAnalyzer::new();
        let report = analyzer.run(text, text).unwrap();

        assert!(report.missing_keywords.is_empty());
        assert!(report.matching_keywords.contains(&"python".to_string()));
        assert!(report.matching_keywords.contains(&"aws".to_string()));
        assert!(
            report.fit_score >= 85,
            "full overlap with rich indicators should approach the ceiling, got {}",
            report.fit_score
        );
    }

    #[test]
    fn test_jd_without_tech_terms_never_divides_by_zero() {
        let analyzer = HeuristicAnalyzer::new();
        let report = analyzer
            .run(
                "warehouse operations and logistics planning",
                "seeking an organized logistics planner",
            )
            .unwrap();
        assert!(report.missing_keywords.is_empty());
        assert!((SCORE_FLOOR..=SCORE_CEILING).contains(&report.fit_score));
    }

    #[test]
    fn test_matching_and_missing_disjoint() {
        let analyzer = HeuristicAnalyzer::new();
        let report = analyzer.run(RESUME, JOB).unwrap();
        for keyword in &report.matching_keywords {
            assert!(!report.missing_keywords.contains(keyword));
        }
    }

    #[test]
    fn test_analysis_is_idempotent_including_order() {
        let analyzer = HeuristicAnalyzer::new();
        let first = analyzer.run(RESUME, JOB).unwrap();
        let second = analyzer.run(RESUME, JOB).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_empty_inputs_degrade_instead_of_failing() {
        let analyzer = HeuristicAnalyzer::new();
        let outcome = analyzer.analyze("", "").await;
        assert!(outcome.degraded_reason().is_some());
        let report = outcome.into_report();
        assert_eq!(report.fit_score, DEGRADED_FIT_SCORE);
        assert!(report.matching_keywords.is_empty());
    }

    #[tokio::test]
    async fn test_empty_job_description_degrades() {
        let analyzer = HeuristicAnalyzer::new();
        let outcome = analyzer.analyze(RESUME, "!!! 123").await;
        assert_eq!(
            outcome.degraded_reason(),
            Some("job description contains no usable tokens")
        );
    }

    #[tokio::test]
    async fn test_nonempty_inputs_produce_full_outcome() {
        let analyzer = HeuristicAnalyzer::new();
        let outcome = analyzer.analyze(RESUME, JOB).await;
        assert!(outcome.degraded_reason().is_none());
    }
}
