//! Reply rendering - turns a profile and its ranked matches into outreach text.
//!
//! Tone and platform are closed enums; every wording choice is an exhaustive
//! `match` so each tone x platform pair has a well-defined template.

use crate::models::{Platform, Property, StudentProfile, Tone};

/// Subject line opening every Email reply with matches
pub const EMAIL_SUBJECT: &str = "Subject: Your Housing Matches 🏡";

/// Subject line opening an Email reply that has nothing to list yet
pub const EMAIL_SEARCHING_SUBJECT: &str = "Subject: Your Housing Search 🏡";

/// Greeting and sign-off calibrated to a tone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneTemplate {
    pub greeting: String,
    pub signoff: &'static str,
}

/// Returns the greeting/sign-off pair for a tone
pub fn tone_template(tone: Tone, name: &str) -> ToneTemplate {
    match tone {
        Tone::Friendly => ToneTemplate {
            greeting: format!("Hi {},", name),
            signoff: "Best,\nThe Housr Team",
        },
        Tone::Hype => ToneTemplate {
            greeting: format!("Hey {}! 👋", name),
            signoff: "Cheers,\nHousr Team 🚀",
        },
        Tone::Professional => ToneTemplate {
            greeting: format!("Dear {},", name),
            signoff: "Kind regards,\nHousr Lettings",
        },
        Tone::Concise => ToneTemplate {
            greeting: format!("{},", name),
            signoff: "Thanks, Housr.",
        },
    }
}

/// Render a weekly amount as pounds, using the raw number as text
pub fn format_pounds(amount: f64) -> String {
    format!("£{}", amount)
}

/// Preferred areas as a readable phrase
pub fn area_phrase(profile: &StudentProfile) -> String {
    if profile.preferred_areas.is_empty() {
        "student areas".to_string()
    } else {
        profile.preferred_areas.join(", ")
    }
}

/// Render a single matched property for the given platform.
/// `position` is 1-based.
pub fn render_property(platform: Platform, position: usize, property: &Property) -> String {
    match platform {
        Platform::WhatsApp => format!(
            "🏠 *{}* ({})\n💰 {}/wk | {}\n🔗 {}",
            property.title,
            property.area,
            format_pounds(property.weekly_rent),
            property.distance_to_campus,
            property.url
        ),
        Platform::Email => format!(
            "{}. **{}** in {}\n   - Rent: {}/week (Bills inc.)\n   - Vibe: {}\n   - Distance: {}\n   - Link: {}",
            position,
            property.title,
            property.area,
            format_pounds(property.weekly_rent),
            property.vibe_tags.join(", "),
            property.distance_to_campus,
            property.url
        ),
    }
}

/// Opening sentence ahead of the property list
pub fn intro(profile: &StudentProfile) -> String {
    let areas = area_phrase(profile);
    let min = format_pounds(profile.budget_min);
    let max = format_pounds(profile.budget_max);

    let base = match profile.tone {
        Tone::Concise => format!("Here are the matches for your budget ({}-{}) in {}:", min, max, areas),
        Tone::Hype => format!(
            "Great news! I've found some amazing spots in {} that fit your budget perfectly. Check these out:",
            areas
        ),
        Tone::Friendly | Tone::Professional => format!(
            "Thanks for chatting with us! Based on your budget of {}-{} and interest in {}, here are some great options:",
            min, max, areas
        ),
    };

    let quote_notes = !profile.notes.is_empty()
        && profile.platform == Platform::Email
        && profile.tone != Tone::Concise;

    if quote_notes {
        format!(
            "Thanks for chatting earlier! Noted your requirements: \"{}\".\n\n{}",
            profile.notes, base
        )
    } else {
        base
    }
}

/// Build the outreach reply for a profile and its matched properties
///
/// Pure and deterministic. With no matches a short "still searching" message
/// is returned instead of a listing.
pub fn build_reply(profile: &StudentProfile, properties: &[Property]) -> String {
    let template = tone_template(profile.tone, profile.display_name());

    if properties.is_empty() {
        return still_searching(profile, &template);
    }

    let matches = properties
        .iter()
        .enumerate()
        .map(|(i, p)| render_property(profile.platform, i + 1, p))
        .collect::<Vec<_>>()
        .join("\n\n");

    match profile.platform {
        Platform::WhatsApp => format!(
            "{} Found matches for you! 👇\n\n{}\n\nWant to view any? 🔑",
            template.greeting, matches
        ),
        Platform::Email => format!(
            "{}\n\n{}\n\n{}\n\n{}\n\nLet me know if you'd like to book a viewing for any of these!\n\n{}",
            EMAIL_SUBJECT,
            template.greeting,
            intro(profile),
            matches,
            template.signoff
        ),
    }
}

fn still_searching(profile: &StudentProfile, template: &ToneTemplate) -> String {
    let body = format!(
        "{}\n\nThanks for reaching out. We're currently looking for properties that match your specific criteria around {}. I'll be in touch as soon as something comes up!\n\n{}",
        template.greeting,
        area_phrase(profile),
        template.signoff
    );

    match profile.platform {
        Platform::Email => format!("{}\n\n{}", EMAIL_SEARCHING_SUBJECT, body),
        Platform::WhatsApp => body,
    }
}
