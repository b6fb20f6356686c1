use std::collections::HashSet;
use crate::models::{Property, StudentProfile};

/// Check if any preferred area fragment appears in the property's area name
///
/// Substring match, case-insensitive: "fallow" matches "Fallowfield".
/// Blank fragments never match.
#[inline]
pub fn matches_preferred_area(profile: &StudentProfile, property: &Property) -> bool {
    let area = property.area.to_lowercase();
    profile
        .preferred_areas
        .iter()
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty())
        .any(|a| area.contains(&a))
}

/// Vibe keywords shared between the profile and the property's tags
///
/// Exact match, case-insensitive. Each keyword counts once even if the
/// profile repeats it.
#[inline]
pub fn shared_vibes(profile: &StudentProfile, property: &Property) -> Vec<String> {
    let tags: HashSet<String> = property.vibe_tags.iter().map(|t| t.to_lowercase()).collect();

    let mut shared: Vec<String> = Vec::new();
    for keyword in &profile.vibe_keywords {
        let keyword = keyword.to_lowercase();
        if tags.contains(&keyword) && !shared.contains(&keyword) {
            shared.push(keyword);
        }
    }
    shared
}
