use crate::models::{Property, StudentProfile, ScoringWeights};
use crate::core::{
    budget::{calculate_budget_score, is_within_budget},
    filters::{matches_preferred_area, shared_vibes},
};

/// Individual terms of a match score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub budget: f64,
    pub area: f64,
    pub vibe: f64,
    pub in_budget: bool,
    pub area_match: bool,
    pub shared_vibes: Vec<String>,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.budget + self.area + self.vibe
    }
}

/// Calculate a match score for a property against a student profile
///
/// Scoring formula:
/// score = (
///     budget_term +                 # +4 in range, else -|rent - mid| / 50
///     area_term +                   # +3 if any preferred area matches
///     1.5 * shared_vibe_count       # one step per shared vibe tag
/// )
///
/// The result is unbounded and may be negative.
pub fn calculate_match_score(
    profile: &StudentProfile,
    property: &Property,
    weights: &ScoringWeights,
) -> f64 {
    score_breakdown(profile, property, weights).total()
}

/// Same as [`calculate_match_score`] but keeps each term
pub fn score_breakdown(
    profile: &StudentProfile,
    property: &Property,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    // Budget term
    let budget = calculate_budget_score(
        property.weekly_rent,
        profile.budget_min,
        profile.budget_max,
        weights.in_budget_bonus,
        weights.budget_penalty_divisor,
    );
    let in_budget = is_within_budget(property.weekly_rent, profile.budget_min, profile.budget_max);

    // Area term
    let area_match = matches_preferred_area(profile, property);
    let area = if area_match { weights.area_bonus } else { 0.0 };

    // Vibe term
    let shared = shared_vibes(profile, property);
    let vibe = shared.len() as f64 * weights.vibe_weight;

    ScoreBreakdown {
        budget,
        area,
        vibe,
        in_budget,
        area_match,
        shared_vibes: shared,
    }
}
