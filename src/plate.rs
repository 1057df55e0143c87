//! Plate string normalization

/// Normalize a plate as typed by the user: uppercase, with whitespace and
/// `-` separators removed. No format validation is performed.
///
/// ```
/// assert_eq!(siv_checker::plate::normalize("ab-123 cd"), "AB123CD");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_uppercase)
        .collect()
}
