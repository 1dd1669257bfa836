//! Heuristic fit scoring: four weighted components combined into an integer
//! score, clamped to the declared floor/ceiling.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::analysis::catalog::{
    EDUCATION_INDICATORS, EXPERIENCE_INDICATORS, LEADERSHIP_INDICATORS,
};

/// Computed scores never leave this band.
pub const SCORE_FLOOR: u32 = 10;
pub const SCORE_CEILING: u32 = 95;

/// Fixed score of the degraded fallback record.
pub const DEGRADED_FIT_SCORE: u32 = 25;

/// Component weights for the fit score. The defaults are the canonical
/// four-factor set; they must sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub keyword: f64,
    pub experience: f64,
    pub education: f64,
    pub leadership: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            keyword: 0.4,
            experience: 0.3,
            education: 0.2,
            leadership: 0.1,
        }
    }
}

/// Intermediate per-factor scores, each in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreComponents {
    pub keyword_match_ratio: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub leadership_score: f64,
}

/// Derives the four components from the resume token set and the technical
/// keyword counts. The ratio denominator is floored at 1 so a job description
/// with no recognized technical terms scores 0 instead of dividing by zero.
pub fn score_components(
    resume_tokens: &HashSet<String>,
    matched_tech: usize,
    job_tech_total: usize,
) -> ScoreComponents {
    let keyword_match_ratio = matched_tech as f64 / job_tech_total.max(1) as f64;
    let experience_score =
        count_present(resume_tokens, EXPERIENCE_INDICATORS) as f64 / EXPERIENCE_INDICATORS.len() as f64;
    let education_score = (count_present(resume_tokens, EDUCATION_INDICATORS) as f64 / 3.0).min(1.0);
    let leadership_score =
        (count_present(resume_tokens, LEADERSHIP_INDICATORS) as f64 / 3.0).min(1.0);

    ScoreComponents {
        keyword_match_ratio,
        experience_score,
        education_score,
        leadership_score,
    }
}

/// Weighted sum × 100, truncated to an integer, clamped to the
/// [`SCORE_FLOOR`]..=[`SCORE_CEILING`] band.
pub fn combine_fit_score(components: &ScoreComponents, weights: &ScoreWeights) -> u32 {
    let weighted = weights.keyword * components.keyword_match_ratio
        + weights.experience * components.experience_score
        + weights.education * components.education_score
        + weights.leadership * components.leadership_score;

    ((weighted * 100.0) as u32).clamp(SCORE_FLOOR, SCORE_CEILING)
}

fn count_present(tokens: &HashSet<String>, indicators: &[&str]) -> usize {
    indicators.iter().filter(|word| tokens.contains(**word)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::text::token_set;

    #[test]
    fn test_ratio_denominator_floored_at_one() {
        let tokens = token_set("plain resume text");
        let components = score_components(&tokens, 0, 0);
        assert_eq!(components.keyword_match_ratio, 0.0);
        assert!(components.keyword_match_ratio.is_finite());
    }

    #[test]
    fn test_full_tech_coverage_gives_ratio_one() {
        let tokens = token_set("anything");
        let components = score_components(&tokens, 3, 3);
        assert_eq!(components.keyword_match_ratio, 1.0);
    }

    #[test]
    fn test_experience_score_is_fraction_of_indicator_list() {
        let tokens = token_set("years of experience, led projects");
        let components = score_components(&tokens, 0, 1);
        // years + experience + led = 3 of 10 indicators
        assert!((components.experience_score - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_education_score_saturates_at_three_hits() {
        let tokens =
            token_set("bachelor degree from a university, certified, masters diploma");
        let components = score_components(&tokens, 0, 1);
        assert_eq!(components.education_score, 1.0);
    }

    #[test]
    fn test_leadership_score_partial() {
        let tokens = token_set("led the platform team");
        let components = score_components(&tokens, 0, 1);
        assert!((components.leadership_score - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_combine_uses_canonical_weights() {
        let components = ScoreComponents {
            keyword_match_ratio: 1.0,
            experience_score: 0.5,
            education_score: 0.5,
            leadership_score: 0.0,
        };
        // 0.4*1.0 + 0.3*0.5 + 0.2*0.5 = 0.65
        let score = combine_fit_score(&components, &ScoreWeights::default());
        assert_eq!(score, 65);
    }

    #[test]
    fn test_combine_clamps_to_floor() {
        let components = ScoreComponents {
            keyword_match_ratio: 0.0,
            experience_score: 0.0,
            education_score: 0.0,
            leadership_score: 0.0,
        };
        assert_eq!(
            combine_fit_score(&components, &ScoreWeights::default()),
            SCORE_FLOOR
        );
    }

    #[test]
    fn test_combine_clamps_to_ceiling() {
        let components = ScoreComponents {
            keyword_match_ratio: 1.0,
            experience_score: 1.0,
            education_score: 1.0,
            leadership_score: 1.0,
        };
        assert_eq!(
            combine_fit_score(&components, &ScoreWeights::default()),
            SCORE_CEILING
        );
    }

    #[test]
    fn test_combine_truncates_fractional_scores() {
        let components = ScoreComponents {
            keyword_match_ratio: 2.0 / 3.0,
            experience_score: 0.0,
            education_score: 0.0,
            leadership_score: 0.0,
        };
        // 0.4 * 2/3 * 100 = 26.66...
        assert_eq!(
            combine_fit_score(&components, &ScoreWeights::default()),
            26
        );
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = ScoreWeights::default();
        assert!((w.keyword + w.experience + w.education + w.leadership - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_degraded_score_inside_band() {
        assert!((SCORE_FLOOR..=SCORE_CEILING).contains(&DEGRADED_FIT_SCORE));
    }
}
