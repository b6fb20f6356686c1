use once_cell::sync::Lazy;
use regex::Regex;
use crate::models::{Platform, Property, StudentProfile};

/// Replies longer than this many UTF-16 code units are rewritten as a
/// spoken script before synthesis
pub const SPOKEN_REPLY_MAX_CHARS: usize = 200;

static SUBJECT_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Subject:[^\n]*(\n|$)").unwrap());
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());
static MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[*_#]").unwrap());

/// Build a short spoken follow-up for a voice note
///
/// Only the first match is described; the listing itself stays in the
/// written reply.
pub fn build_voice_script(profile: &StudentProfile, properties: &[Property]) -> String {
    let areas = if profile.preferred_areas.is_empty() {
        "the main student areas".to_string()
    } else {
        profile.preferred_areas.join(" or ")
    };

    let mut script = format!("Hey {}, it's the Housr team here. ", profile.display_name());
    script.push_str(&format!(
        "Just following up on our chat. I've had a look for places around {} within your budget. ",
        areas
    ));

    match properties.first() {
        Some(first) => {
            script.push_str(&format!(
                "I've sent over {} options that look really good. ",
                properties.len()
            ));
            script.push_str(&format!(
                "The first one, the {}, is in {} and is only {}. ",
                first.title, first.area, first.distance_to_campus
            ));
            script.push_str(
                "Have a look at the links I sent, and let me know if you want to see any of them. Speak soon!",
            );
        }
        None => {
            script.push_str(
                "I'm still digging for the perfect spot, but I'll keep you posted as soon as new inventory drops. Speak soon!",
            );
        }
    }

    script
}

/// Clean already-rendered reply text so it reads well aloud
///
/// Drops a leading "Subject:" line, swaps links for "check the link" and
/// strips `*`, `_` and `#`. Whitespace is left as it was.
pub fn sanitize_for_speech(text: &str) -> String {
    let without_subject = SUBJECT_LINE.replace(text, "");
    let without_urls = URL.replace_all(&without_subject, "check the link");
    MARKUP.replace_all(&without_urls, "").into_owned()
}

/// Text to send for synthesis
///
/// Long Email replies get a dedicated spoken script; anything else is the
/// reply itself, sanitized.
pub fn speech_script(profile: &StudentProfile, properties: &[Property], reply: &str) -> String {
    if profile.platform == Platform::Email && reply.encode_utf16().count() > SPOKEN_REPLY_MAX_CHARS {
        build_voice_script(profile, properties)
    } else {
        sanitize_for_speech(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reply::build_reply;
    use crate::models::{catalog, Tone};

    fn create_profile(platform: Platform, areas: &[&str]) -> StudentProfile {
        StudentProfile {
            first_name: "Priya".to_string(),
            university: None,
            course: None,
            budget_min: 150.0,
            budget_max: 200.0,
            preferred_areas: areas.iter().map(|s| s.to_string()).collect(),
            move_in_date: None,
            vibe_keywords: vec![],
            notes: String::new(),
            tone: Tone::Friendly,
            platform,
        }
    }

    #[test]
    fn test_voice_script_with_matches() {
        let profile = create_profile(Platform::Email, &["fallowfield", "rusholme"]);
        let script = build_voice_script(&profile, &catalog()[..3]);

        assert!(script.starts_with("Hey Priya, it's the Housr team here. "));
        assert!(script.contains("places around fallowfield or rusholme within your budget"));
        assert!(script.contains("I've sent over 3 options"));
        assert!(script.contains("The first one, the Bright Ensuite in Social Flatshare, is in Fallowfield and is only 15–20 min bus."));
        assert!(!script.contains("Calm Studio"));
        assert!(script.ends_with("Speak soon!"));
    }

    #[test]
    fn test_voice_script_without_matches() {
        let mut profile = create_profile(Platform::WhatsApp, &[]);
        profile.first_name = String::new();
        let script = build_voice_script(&profile, &[]);

        assert!(script.starts_with("Hey there,"));
        assert!(script.contains("around the main student areas"));
        assert!(script.contains("I'm still digging for the perfect spot"));
        assert!(!script.contains("options"));
    }

    #[test]
    fn test_sanitize_for_speech() {
        let text = "Subject: Your Housing Matches 🏡\n\nHi *Sam*,\n🔗 https://housr.co/p/101 and http://x.y/a_b#c\n# done_";
        let clean = sanitize_for_speech(text);

        assert_eq!(clean, "\nHi Sam,\n🔗 check the link and check the link\n done");
        assert!(!clean.contains("Subject:"));
    }

    #[test]
    fn test_sanitize_keeps_leading_whitespace() {
        assert_eq!(sanitize_for_speech("  \n Hi _Sam_"), "  \n Hi Sam");
    }

    #[test]
    fn test_sanitize_keeps_inner_subject_text() {
        let text = "Hello\nSubject: later line";
        assert_eq!(sanitize_for_speech(text), "Hello\nSubject: later line");
    }

    #[test]
    fn test_speech_script_long_email_uses_voice_script() {
        let profile = create_profile(Platform::Email, &["fallowfield"]);
        let reply = build_reply(&profile, &catalog()[..3]);
        assert!(reply.encode_utf16().count() > SPOKEN_REPLY_MAX_CHARS);

        let script = speech_script(&profile, &catalog()[..3], &reply);
        assert_eq!(script, build_voice_script(&profile, &catalog()[..3]));
    }

    #[test]
    fn test_speech_script_threshold_counts_utf16_units() {
        let profile = create_profile(Platform::Email, &["fallowfield"]);

        // 101 chars but 202 UTF-16 code units
        let emoji_reply = "🏡".repeat(101);
        assert_eq!(
            speech_script(&profile, &catalog()[..1], &emoji_reply),
            build_voice_script(&profile, &catalog()[..1])
        );

        let at_limit = "a".repeat(SPOKEN_REPLY_MAX_CHARS);
        assert_eq!(speech_script(&profile, &catalog()[..1], &at_limit), at_limit);
    }

    #[test]
    fn test_speech_script_whatsapp_is_sanitized_reply() {
        let profile = create_profile(Platform::WhatsApp, &["fallowfield"]);
        let reply = build_reply(&profile, &catalog()[..1]);

        let script = speech_script(&profile, &catalog()[..1], &reply);
        assert!(script.contains("check the link"));
        assert!(!script.contains('*'));
        assert!(!script.contains("https://"));
    }
}
