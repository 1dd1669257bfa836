//! Narrative generation: fixed score-band templates for suggestions,
//! strengths, weaknesses, and recommendations. Fully deterministic.

use crate::analysis::report::AnalysisBreakdown;
use crate::analysis::scoring::ScoreComponents;

pub const MAX_SUGGESTIONS: usize = 6;
const MAX_STRENGTHS: usize = 4;
const MAX_WEAKNESSES: usize = 4;
const MAX_RECOMMENDATIONS: usize = 5;

/// At most this many missing keywords are interpolated into a suggestion.
const MAX_INTERPOLATED_KEYWORDS: usize = 5;

/// Builds improvement suggestions from the score band and the missing
/// technical keywords.
pub fn build_suggestions(fit_score: u32, missing_keywords: &[String]) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();

    if fit_score < 40 {
        suggestions
            .push("Consider tailoring your resume more closely to the job requirements".to_string());
        suggestions.push("Highlight relevant experience and skills more prominently".to_string());
    } else if fit_score < 70 {
        suggestions.push(
            "Good match! Consider adding more specific examples of your achievements".to_string(),
        );
        suggestions.push("Quantify your accomplishments with numbers and metrics".to_string());
    } else {
        suggestions.push(
            "Excellent match! Your resume aligns well with the job requirements".to_string(),
        );
        suggestions
            .push("Consider adding any additional relevant certifications or projects".to_string());
    }

    if !missing_keywords.is_empty() {
        let top: Vec<&str> = missing_keywords
            .iter()
            .take(MAX_INTERPOLATED_KEYWORDS)
            .map(String::as_str)
            .collect();
        suggestions.push(format!("Consider gaining experience in: {}", top.join(", ")));
    }

    suggestions.push("Use action verbs to describe your accomplishments".to_string());
    suggestions.push("Ensure your resume is ATS-friendly with clear formatting".to_string());

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Builds the strengths/weaknesses/recommendations breakdown from the score
/// band and the indicator components.
pub fn build_breakdown(fit_score: u32, components: &ScoreComponents) -> AnalysisBreakdown {
    let mut strengths: Vec<String> = Vec::new();
    let mut weaknesses: Vec<String> = Vec::new();

    if fit_score >= 80 {
        strengths.push("Strong alignment with job requirements".to_string());
        strengths.push("Relevant technical skills present".to_string());
        strengths.push("Good keyword optimization".to_string());
    } else if fit_score >= 60 {
        strengths.push("Decent match with job requirements".to_string());
        strengths.push("Some relevant experience highlighted".to_string());
    } else {
        strengths.push("Room for significant improvement in alignment".to_string());
    }

    if components.experience_score >= 0.5 {
        strengths.push("Hands-on experience is well evidenced across the resume".to_string());
    }

    if fit_score < 70 {
        weaknesses.push("Limited alignment with job requirements".to_string());
        weaknesses.push("Missing key technical skills or keywords".to_string());
        weaknesses.push("Could benefit from better keyword optimization".to_string());
    }

    if components.leadership_score < 0.3 {
        weaknesses.push("Leadership experience is not clearly highlighted".to_string());
    }

    let mut recommendations = vec![
        "Tailor resume content to match job description keywords".to_string(),
        "Quantify achievements with specific metrics and numbers".to_string(),
        "Use industry-standard terminology and buzzwords".to_string(),
        "Highlight relevant projects and accomplishments".to_string(),
        "Ensure consistent formatting and clear structure".to_string(),
    ];

    strengths.truncate(MAX_STRENGTHS);
    weaknesses.truncate(MAX_WEAKNESSES);
    recommendations.truncate(MAX_RECOMMENDATIONS);

    AnalysisBreakdown {
        strengths,
        weaknesses,
        recommendations,
    }
}
