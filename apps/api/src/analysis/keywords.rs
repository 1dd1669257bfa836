//! Keyword analysis: matching/missing partition and technical-first priority.

use std::collections::HashSet;

use crate::analysis::catalog::TechCatalog;

/// Matching and missing lists are truncated to this length for the response.
pub const MAX_LISTED_KEYWORDS: usize = 20;

/// Outcome of comparing the two keyword universes. `matched_tech` /
/// `job_tech_total` feed the keyword component of the fit score.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordAnalysis {
    pub matching: Vec<String>,
    pub missing: Vec<String>,
    pub matched_tech: usize,
    pub job_tech_total: usize,
}

/// Partitions the job description's keywords against the resume.
///
/// Missing keywords are catalog terms only: the job description's technical
/// terms with no substring coverage in the resume. Matching keywords are the
/// general token overlap unioned with the covered technical terms, sorted
/// technical-first. The two lists are disjoint by construction: a covered
/// term cannot be missing, and a matching term is always covered.
pub fn analyze_keywords(
    resume_text: &str,
    job_description: &str,
    resume_keywords: &[String],
    job_keywords: &[String],
    catalog: &TechCatalog,
) -> KeywordAnalysis {
    let resume_lower = resume_text.to_lowercase();
    let job_tech = catalog.skills_in(job_description);
    let job_tech_total = job_tech.len();

    let (covered, missing): (Vec<&str>, Vec<&str>) = job_tech
        .into_iter()
        .partition(|skill| resume_lower.contains(skill));

    let resume_set: HashSet<&str> = resume_keywords.iter().map(String::as_str).collect();
    let mut matching: Vec<String> = job_keywords
        .iter()
        .filter(|keyword| resume_set.contains(keyword.as_str()))
        .cloned()
        .collect();

    // Multi-word and punctuated catalog terms never appear as tokens; make
    // sure covered ones still show up in the matching list.
    for skill in &covered {
        if !matching.iter().any(|k| k == skill) {
            matching.push((*skill).to_string());
        }
    }

    let mut matching = prioritize(matching, catalog);
    matching.truncate(MAX_LISTED_KEYWORDS);

    let mut missing: Vec<String> = missing.into_iter().map(str::to_string).collect();
    missing.truncate(MAX_LISTED_KEYWORDS);

    KeywordAnalysis {
        matching,
        missing,
        matched_tech: covered.len(),
        job_tech_total,
    }
}

/// Stable partition: technical-catalog terms first, relative order preserved
/// within each half.
pub fn prioritize(keywords: Vec<String>, catalog: &TechCatalog) -> Vec<String> {
    let (tech, other): (Vec<String>, Vec<String>) = keywords
        .into_iter()
        .partition(|keyword| catalog.is_technical(keyword));
    tech.into_iter().chain(other).collect()
}
