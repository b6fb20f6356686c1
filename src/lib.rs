//! Housr Match - property matching and outreach replies for the student team
//!
//! This library ranks the compiled-in property catalog against a student's
//! budget, areas and vibe, renders Email/WhatsApp replies in four tones, and
//! prepares voice-note scripts for ElevenLabs text-to-speech.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{build_reply, build_voice_script, sanitize_for_speech, Generator, Matcher};
pub use crate::models::{catalog, Platform, ProfileForm, Property, ScoredProperty, ScoringWeights, StudentProfile, Tone};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let profile = ProfileForm {
            budget_min: Some(150.0),
            budget_max: Some(200.0),
            ..Default::default()
        }
        .into_profile()
        .unwrap();

        let generation = Generator::new(Matcher::default(), catalog()).generate(&profile);
        assert!(generation.reply.starts_with("Subject:"));
    }
}
