use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::models::catalog::VIBE_PRESETS;
use crate::models::domain::{Platform, StudentProfile, Tone};

/// Errors raised while turning a submitted form into a profile
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("Please enter a budget range.")]
    MissingBudget,

    #[error("Unknown vibe preset: {0}")]
    UnknownVibePreset(String),
}

/// Raw student form as submitted by the dashboard.
///
/// Areas and vibes arrive as comma separated text exactly as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileForm {
    #[serde(alias = "first_name", rename = "firstName", default)]
    pub first_name: String,
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub course: String,
    #[serde(alias = "budget_min", rename = "budgetMin", default)]
    pub budget_min: Option<f64>,
    #[serde(alias = "budget_max", rename = "budgetMax", default)]
    pub budget_max: Option<f64>,
    #[serde(default)]
    pub areas: String,
    #[serde(alias = "move_in_date", rename = "moveInDate", default)]
    pub move_in_date: String,
    #[serde(default)]
    pub vibe: String,
    /// Preset chips picked on the dashboard, merged into `vibe`
    #[serde(alias = "vibe_presets", rename = "vibePresets", default)]
    pub vibe_presets: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub platform: Platform,
}

impl ProfileForm {
    /// Add a vibe chip to the free-text vibe field unless it is already there
    ///
    /// Only the chips in [`VIBE_PRESETS`] are accepted.
    pub fn with_vibe_preset(mut self, preset: &str) -> Result<Self, ProfileError> {
        let known = VIBE_PRESETS
            .iter()
            .find(|p| p.eq_ignore_ascii_case(preset.trim()))
            .ok_or_else(|| ProfileError::UnknownVibePreset(preset.to_string()))?;
        let preset = known.to_lowercase();

        let mut current: Vec<String> = self
            .vibe
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if !current.contains(&preset) {
            current.push(preset);
            self.vibe = current.join(", ");
        }
        Ok(self)
    }

    /// Collect the form into an immutable profile.
    ///
    /// Both budget bounds are required; everything else falls back to empty values.
    /// Selected preset chips are folded into the vibe text first.
    pub fn into_profile(mut self) -> Result<StudentProfile, ProfileError> {
        let (budget_min, budget_max) = match (self.budget_min, self.budget_max) {
            (Some(min), Some(max)) => (min, max),
            _ => return Err(ProfileError::MissingBudget),
        };

        for preset in std::mem::take(&mut self.vibe_presets) {
            self = self.with_vibe_preset(&preset)?;
        }

        Ok(StudentProfile {
            first_name: self.first_name.trim().to_string(),
            university: non_empty(&self.university),
            course: non_empty(&self.course),
            budget_min,
            budget_max,
            preferred_areas: normalise_list(&self.areas),
            move_in_date: non_empty(&self.move_in_date),
            vibe_keywords: normalise_list(&self.vibe),
            notes: self.notes.trim().to_string(),
            tone: self.tone,
            platform: self.platform,
        })
    }
}

/// Split comma separated input into trimmed, lowercase, unique entries.
/// First occurrence wins so display order matches what was typed.
pub fn normalise_list(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in raw.split(',') {
        let item = item.trim().to_lowercase();
        if !item.is_empty() && !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProfileForm {
        ProfileForm {
            first_name: "  Sam ".to_string(),
            budget_min: Some(150.0),
            budget_max: Some(200.0),
            areas: "Fallowfield, , City Centre,fallowfield".to_string(),
            vibe: "Social,quiet".to_string(),
            notes: " needs a desk \n".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalise_list() {
        assert_eq!(
            normalise_list(" Fallowfield, CITY centre ,,fallowfield"),
            vec!["fallowfield", "city centre"]
        );
        assert!(normalise_list("").is_empty());
        assert!(normalise_list(" , ,").is_empty());
    }

    #[test]
    fn test_into_profile() {
        let profile = form().into_profile().unwrap();

        assert_eq!(profile.first_name, "Sam");
        assert_eq!(profile.preferred_areas, vec!["fallowfield", "city centre"]);
        assert_eq!(profile.vibe_keywords, vec!["social", "quiet"]);
        assert_eq!(profile.notes, "needs a desk");
        assert_eq!(profile.university, None);
        assert_eq!(profile.tone, Tone::Friendly);
        assert_eq!(profile.platform, Platform::Email);
    }

    #[test]
    fn test_missing_budget_refused() {
        let mut missing_max = form();
        missing_max.budget_max = None;
        assert_eq!(missing_max.into_profile(), Err(ProfileError::MissingBudget));

        let mut missing_min = form();
        missing_min.budget_min = None;
        assert_eq!(missing_min.into_profile(), Err(ProfileError::MissingBudget));
    }

    #[test]
    fn test_zero_budget_accepted() {
        let mut zero = form();
        zero.budget_min = Some(0.0);
        assert!(zero.into_profile().is_ok());
    }

    #[test]
    fn test_vibe_preset() {
        let form = ProfileForm::default()
            .with_vibe_preset("Social")
            .and_then(|f| f.with_vibe_preset("Gym"))
            .and_then(|f| f.with_vibe_preset("social"))
            .unwrap();
        assert_eq!(form.vibe, "social, gym");
    }

    #[test]
    fn test_unknown_vibe_preset_refused() {
        assert_eq!(
            ProfileForm::default().with_vibe_preset("Rooftop").unwrap_err(),
            ProfileError::UnknownVibePreset("Rooftop".to_string())
        );

        let mut chosen = form();
        chosen.vibe_presets = vec!["Gym".to_string(), "Pool".to_string()];
        assert_eq!(
            chosen.into_profile(),
            Err(ProfileError::UnknownVibePreset("Pool".to_string()))
        );
    }

    #[test]
    fn test_vibe_presets_merged_into_profile() {
        let mut chosen = form();
        chosen.vibe_presets = vec!["Gym".to_string(), "SOCIAL".to_string()];
        let profile = chosen.into_profile().unwrap();
        assert_eq!(profile.vibe_keywords, vec!["social", "quiet", "gym"]);
    }

    #[test]
    fn test_deserialize_tone_and_platform() {
        let json = r#"{"firstName":"Ali","budgetMin":150,"budgetMax":200,"tone":"Hype","platform":"WhatsApp"}"#;
        let form: ProfileForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.tone, Tone::Hype);
        assert_eq!(form.platform, Platform::WhatsApp);
        assert_eq!(form.budget_min, Some(150.0));
    }

    #[test]
    fn test_unbounded_inputs_accepted() {
        let mut loose = form();
        loose.first_name = "A".repeat(101);
        loose.budget_min = Some(-10.0);
        loose.budget_max = Some(-5.0);
        loose.notes = "n".repeat(2001);

        let profile = loose.into_profile().unwrap();
        assert_eq!(profile.budget_min, -10.0);
        assert_eq!(profile.first_name.len(), 101);
        assert_eq!(profile.notes.len(), 2001);
    }
}
