//! Content-type normalization shared by Blob and File construction

/// Normalize a raw content-type string.
///
/// Leading and trailing ASCII whitespace is stripped, and the result is
/// lowercased. A value containing any character outside printable ASCII
/// (U+0020..=U+007E) is not a usable media type and normalizes to the
/// empty string.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim_matches(|c: char| c.is_ascii_whitespace());
    if trimmed.chars().any(|c| !('\u{0020}'..='\u{007E}').contains(&c)) {
        return String::new();
    }
    trimmed.to_ascii_lowercase()
}
