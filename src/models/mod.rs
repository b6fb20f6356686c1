// Model exports
pub mod catalog;
pub mod domain;
pub mod requests;
pub mod responses;

pub use catalog::{catalog, find_property, VIBE_PRESETS};
pub use domain::{Platform, Property, ScoredProperty, ScoringWeights, StudentProfile, Tone};
pub use requests::{normalise_list, ProfileError, ProfileForm};
pub use responses::{ErrorResponse, GenerateReplyResponse, HealthResponse, VoiceScriptResponse};
