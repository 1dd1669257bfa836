//! Interview question generation: at most five deterministic questions
//! derived from the job description.

use crate::analysis::catalog::TechCatalog;

pub const MAX_QUESTIONS: usize = 5;

/// Markers checked as substrings of the lowercased job description, so
/// "leadership" also counts as "lead".
const SENIORITY_MARKERS: &[&str] = &["lead", "senior", "manager"];

/// Builds the question list: one technical question for the first catalog
/// term in the job description (declaration order), two behavioral questions,
/// a role-specific question, and a closer.
pub fn build_questions(job_description: &str, catalog: &TechCatalog) -> Vec<String> {
    let jd_lower = job_description.to_lowercase();
    let mut questions: Vec<String> = Vec::new();

    if let Some(skill) = catalog.skills_in(job_description).first() {
        questions.push(format!(
            "Can you describe your experience with {skill}? How have you used it in previous projects?"
        ));
    }

    questions.push(
        "Tell me about a challenging project you worked on. How did you overcome the obstacles?"
            .to_string(),
    );
    questions.push(
        "Describe a time when you had to learn a new technology quickly. How did you approach it?"
            .to_string(),
    );

    if SENIORITY_MARKERS
        .iter()
        .any(|marker| jd_lower.contains(marker))
    {
        questions
            .push("How do you handle mentoring junior team members and code reviews?".to_string());
    } else {
        questions.push(
            "How do you stay updated with the latest industry trends and technologies?".to_string(),
        );
    }

    questions.push(
        "Walk me through your most significant accomplishment in your previous role.".to_string(),
    );

    questions.truncate(MAX_QUESTIONS);
    questions
}
