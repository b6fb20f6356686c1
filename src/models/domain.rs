use serde::{Deserialize, Serialize};
use std::fmt;

/// Writing style of a generated reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Friendly,
    Professional,
    Hype,
    Concise,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Friendly, Tone::Professional, Tone::Hype, Tone::Concise];
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tone::Friendly => "Friendly",
            Tone::Professional => "Professional",
            Tone::Hype => "Hype",
            Tone::Concise => "Concise",
        };
        f.write_str(name)
    }
}

/// Channel the reply will be sent through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Platform {
    #[default]
    Email,
    WhatsApp,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Email, Platform::WhatsApp];
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Email => f.write_str("Email"),
            Platform::WhatsApp => f.write_str("WhatsApp"),
        }
    }
}

/// A student's housing preferences for a single generation request.
///
/// Built once from a [`ProfileForm`](crate::models::ProfileForm) and never
/// mutated afterwards. Area and vibe lists are lowercase and deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(rename = "budgetMin")]
    pub budget_min: f64,
    #[serde(rename = "budgetMax")]
    pub budget_max: f64,
    #[serde(rename = "preferredAreas", default)]
    pub preferred_areas: Vec<String>,
    #[serde(rename = "moveInDate", default)]
    pub move_in_date: Option<String>,
    #[serde(rename = "vibeKeywords", default)]
    pub vibe_keywords: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub platform: Platform,
}

impl StudentProfile {
    /// Name used in greetings, falling back to "there"
    pub fn display_name(&self) -> &str {
        if self.first_name.is_empty() {
            "there"
        } else {
            &self.first_name
        }
    }

    /// Midpoint of the stated weekly budget
    pub fn budget_midpoint(&self) -> f64 {
        (self.budget_min + self.budget_max) / 2.0
    }
}

/// A property from the compiled-in catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub code: String,
    pub title: String,
    pub area: String,
    #[serde(rename = "weeklyRent")]
    pub weekly_rent: f64,
    #[serde(rename = "distanceToCampus")]
    pub distance_to_campus: String,
    #[serde(rename = "roomType")]
    pub room_type: String,
    #[serde(rename = "vibeTags")]
    pub vibe_tags: Vec<String>,
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Scored property result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProperty {
    pub property: Property,
    pub score: f64,
    #[serde(rename = "inBudget")]
    pub in_budget: bool,
    #[serde(rename = "areaMatch")]
    pub area_match: bool,
    #[serde(rename = "sharedVibes")]
    pub shared_vibes: Vec<String>,
}

/// Scoring weights
///
/// The defaults are the hand-tuned constants the outreach team has always
/// used; changing any of them changes every ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub in_budget_bonus: f64,
    pub budget_penalty_divisor: f64,
    pub area_bonus: f64,
    pub vibe_weight: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            in_budget_bonus: 4.0,
            budget_penalty_divisor: 50.0,
            area_bonus: 3.0,
            vibe_weight: 1.5,
        }
    }
}
