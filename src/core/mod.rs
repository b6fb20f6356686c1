// Core algorithm exports
pub mod budget;
pub mod filters;
pub mod generator;
pub mod matcher;
pub mod reply;
pub mod scoring;
pub mod voice;

pub use budget::{calculate_budget_score, is_within_budget};
pub use filters::{matches_preferred_area, shared_vibes};
pub use generator::{Generation, Generator};
pub use matcher::{Matcher, MatchResult, DEFAULT_MAX_RESULTS};
pub use reply::{build_reply, tone_template};
pub use scoring::{calculate_match_score, score_breakdown, ScoreBreakdown};
pub use voice::{build_voice_script, sanitize_for_speech, speech_script};
