use crate::models::{Property, ScoredProperty, ScoringWeights, StudentProfile};
use crate::core::scoring::score_breakdown;

/// Number of properties recommended when nothing else is configured
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Result of the ranking process
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub matches: Vec<ScoredProperty>,
    pub total_candidates: usize,
}

impl MatchResult {
    /// Matched properties without their scores, best first
    pub fn properties(&self) -> Vec<Property> {
        self.matches.iter().map(|m| m.property.clone()).collect()
    }
}

/// Ranks catalog properties for a student profile
///
/// There is no minimum score: the best of a poor set is still returned,
/// so callers always have something to render.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    max_results: usize,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, max_results: usize) -> Self {
        Self { weights, max_results }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Score every candidate and keep the top `max_results`
    ///
    /// # Arguments
    /// * `profile` - The student's preferences
    /// * `candidates` - Properties to rank, in catalog order
    ///
    /// # Returns
    /// MatchResult with matches sorted by score, best first. Equal scores keep
    /// their catalog order.
    pub fn find_matches(&self, profile: &StudentProfile, candidates: &[Property]) -> MatchResult {
        let total_candidates = candidates.len();

        let mut scored: Vec<ScoredProperty> = candidates
            .iter()
            .map(|property| {
                let breakdown = score_breakdown(profile, property, &self.weights);
                tracing::debug!(
                    "Scored {}: budget={:.2} area={:.2} vibe={:.2}",
                    property.code,
                    breakdown.budget,
                    breakdown.area,
                    breakdown.vibe
                );

                ScoredProperty {
                    property: property.clone(),
                    score: breakdown.total(),
                    in_budget: breakdown.in_budget,
                    area_match: breakdown.area_match,
                    shared_vibes: breakdown.shared_vibes,
                }
            })
            .collect();

        // sort_by is stable, ties stay in catalog order
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored.truncate(self.max_results);

        MatchResult {
            matches: scored,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
