use std::time::Duration;
use crate::core::{matcher::Matcher, reply::build_reply, voice::speech_script};
use crate::models::{Property, ScoredProperty, StudentProfile};

/// Output of one generation request
#[derive(Debug, Clone)]
pub struct Generation {
    pub reply: String,
    pub matches: Vec<ScoredProperty>,
    pub total_candidates: usize,
}

impl Generation {
    pub fn properties(&self) -> Vec<Property> {
        self.matches.iter().map(|m| m.property.clone()).collect()
    }
}

/// Runs ranking and reply rendering over a fixed catalog
///
/// Matches are recomputed on every call; nothing is cached between requests.
#[derive(Debug, Clone)]
pub struct Generator {
    matcher: Matcher,
    catalog: &'static [Property],
}

impl Generator {
    pub fn new(matcher: Matcher, catalog: &'static [Property]) -> Self {
        Self { matcher, catalog }
    }

    pub fn catalog(&self) -> &'static [Property] {
        self.catalog
    }

    /// Rank the catalog and render the reply
    pub fn generate(&self, profile: &StudentProfile) -> Generation {
        let result = self.matcher.find_matches(profile, self.catalog);
        let properties = result.properties();
        let reply = build_reply(profile, &properties);

        tracing::info!(
            "Generated {} reply ({}) with {} of {} properties",
            profile.platform,
            profile.tone,
            result.matches.len(),
            result.total_candidates
        );

        Generation {
            reply,
            matches: result.matches,
            total_candidates: result.total_candidates,
        }
    }

    /// [`generate`](Self::generate) after an artificial pause
    ///
    /// The pause only paces the dashboard; the output is identical.
    pub async fn generate_delayed(&self, profile: &StudentProfile, delay: Duration) -> Generation {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.generate(profile)
    }

    /// Text to synthesize for a voice note
    pub fn voice_script(&self, profile: &StudentProfile) -> String {
        let generation = self.generate(profile);
        speech_script(profile, &generation.properties(), &generation.reply)
    }
}
