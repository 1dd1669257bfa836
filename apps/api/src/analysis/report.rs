//! Output data models for an analysis, plus the explicit outcome type that
//! carries the failure reason when the pipeline degrades.

use serde::{Deserialize, Serialize};

use crate::analysis::scoring::DEGRADED_FIT_SCORE;

/// Strengths, weaknesses, and recommendations derived from the score bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisBreakdown {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Full analysis record returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub fit_score: u32,
    pub matching_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
    pub analysis: AnalysisBreakdown,
    pub interview_questions: Vec<String>,
}

impl AnalysisReport {
    /// The fixed degraded-but-valid record returned when the pipeline cannot
    /// produce a real analysis. Still a well-formed report: score in band,
    /// empty keyword lists, generic advice.
    pub fn degraded() -> Self {
        Self {
            fit_score: DEGRADED_FIT_SCORE,
            matching_keywords: vec![],
            missing_keywords: vec![],
            suggestions: vec![
                "Analysis was limited for this input, so a simplified result is provided"
                    .to_string(),
                "Consider tailoring your resume to include more job-specific keywords".to_string(),
                "Highlight relevant experience and achievements".to_string(),
                "Use action verbs to describe your accomplishments".to_string(),
            ],
            analysis: AnalysisBreakdown {
                strengths: vec!["Resume contains relevant keywords".to_string()],
                weaknesses: vec!["Could benefit from more specific alignment".to_string()],
                recommendations: vec!["Tailor resume content to job requirements".to_string()],
            },
            interview_questions: vec![
                "Tell me about your relevant experience for this role.".to_string(),
                "What interests you most about this position?".to_string(),
                "Describe a challenging project you worked on.".to_string(),
                "How do you stay updated with industry trends?".to_string(),
                "What are your career goals?".to_string(),
            ],
        }
    }
}

/// Result of running the analyzer. Degradation is data, not a hidden branch:
/// the reason is kept for logging while the caller still gets a valid report.
#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    Full(AnalysisReport),
    Degraded { report: AnalysisReport, reason: String },
}

impl AnalysisOutcome {
    pub fn report(&self) -> &AnalysisReport {
        match self {
            AnalysisOutcome::Full(report) => report,
            AnalysisOutcome::Degraded { report, .. } => report,
        }
    }

    pub fn into_report(self) -> AnalysisReport {
        match self {
            AnalysisOutcome::Full(report) => report,
            AnalysisOutcome::Degraded { report, .. } => report,
        }
    }

    pub fn degraded_reason(&self) -> Option<&str> {
        match self {
            AnalysisOutcome::Full(_) => None,
            AnalysisOutcome::Degraded { reason, .. } => Some(reason),
        }
    }
}
