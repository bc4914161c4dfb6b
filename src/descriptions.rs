//! Static text shown next to the detection results.

pub const NOTHING_DETECTED: &str = "No diseases detected in this image.";

const DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "healthy",
        "This plant appears to be healthy with no visible signs of disease.",
    ),
    (
        "early_blight",
        "Early Blight is characterized by small, dark spots that grow larger with concentric rings, \
         creating a 'bull's-eye' pattern. It primarily affects lower leaves first.",
    ),
    (
        "late_blight",
        "Late Blight appears as dark, water-soaked spots on leaves that rapidly enlarge to form \
         purple-brown lesions. White fungal growth may appear on the underside of leaves in humid \
         conditions.",
    ),
    (
        "bacterial_spot",
        "Bacterial Spot causes small, dark, water-soaked spots on leaves that later turn brown. \
         The centers may fall out, giving a shot-hole appearance.",
    ),
];

/// Look up the fixed description for a class name
pub fn describe(class_name: &str) -> Option<&'static str> {
    DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == class_name)
        .map(|(_, text)| *text)
}

/// Description for a class, with a fallback for classes missing from the table
pub fn description_for(class_name: &str) -> String {
    match describe(class_name) {
        Some(text) => text.to_string(),
        None => format!("No detailed information available for {}.", class_name),
    }
}

/// Human-readable class name: "early_blight" -> "Early Blight"
///
/// A letter is upper-cased when it starts a word (follows a non-letter) and
/// lower-cased otherwise.
pub fn display_name(class_name: &str) -> String {
    let mut out = String::with_capacity(class_name.len());
    let mut prev_is_letter = false;

    for c in class_name.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

