use once_cell::sync::Lazy;
use crate::models::domain::Property;

/// Vibe chips offered on the student form
pub const VIBE_PRESETS: [&str; 6] = ["Social", "Quiet", "Modern", "Budget", "Gym", "Ensuite"];

static CATALOG: Lazy<Vec<Property>> = Lazy::new(|| {
    vec![
        property(
            "HSR-101",
            "Bright Ensuite in Social Flatshare",
            "Fallowfield",
            185.0,
            "15–20 min bus",
            "Ensuite • 5-bed",
            &["social", "lively", "student", "budget-friendly"],
            "https://housr.co/p/101",
            "https://images.unsplash.com/photo-1555854877-bab0e564b8d5?q=80&w=400&auto=format&fit=crop",
            "Big shared kitchen, popular with first-years.",
        ),
        property(
            "HSR-204",
            "Calm Studio Close to Campus",
            "City Centre",
            230.0,
            "8 min walk",
            "Private Studio",
            &["quiet", "modern", "close-to-campus"],
            "https://housr.co/p/204",
            "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?q=80&w=400&auto=format&fit=crop",
            "Good for focused study, smaller building.",
        ),
        property(
            "HSR-309",
            "Modern Ensuite in Premium Building",
            "Ancoats",
            255.0,
            "8 min tram",
            "Ensuite • Premium",
            &["social", "modern", "premium"],
            "https://housr.co/p/309",
            "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?q=80&w=400&auto=format&fit=crop",
            "Lots of shared spaces, rooftop terrace.",
        ),
        property(
            "HSR-410",
            "Value Room in Friendly House",
            "Rusholme",
            165.0,
            "18 min bus",
            "Standard Room",
            &["budget-friendly", "chilled", "homely"],
            "https://housr.co/p/410",
            "https://images.unsplash.com/photo-1595526114035-0d45ed16cfbf?q=80&w=400&auto=format&fit=crop",
            "Great for stretching budget, cosy vibe.",
        ),
    ]
});

/// The fixed property catalog, in display order
pub fn catalog() -> &'static [Property] {
    &CATALOG
}

/// Look up a catalog property by its code
pub fn find_property(code: &str) -> Option<&'static Property> {
    CATALOG.iter().find(|p| p.code.eq_ignore_ascii_case(code))
}

#[allow(clippy::too_many_arguments)]
fn property(
    code: &str,
    title: &str,
    area: &str,
    weekly_rent: f64,
    distance_to_campus: &str,
    room_type: &str,
    vibe_tags: &[&str],
    url: &str,
    image: &str,
    notes: &str,
) -> Property {
    Property {
        code: code.to_string(),
        title: title.to_string(),
        area: area.to_string(),
        weekly_rent,
        distance_to_campus: distance_to_campus.to_string(),
        room_type: room_type.to_string(),
        vibe_tags: vibe_tags.iter().map(|t| t.to_string()).collect(),
        url: url.to_string(),
        image: Some(image.to_string()),
        notes: Some(notes.to_string()),
    }
}
