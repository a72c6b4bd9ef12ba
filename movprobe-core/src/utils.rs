//! Small string helpers used when rendering result fields.

/// Lowercases `s` and capitalises the first letter of every word.
///
/// Letters, digits and underscores continue a word; anything else starts a
/// new one, so `"h264"` becomes `"H264"` and `"PRORES RAW"` becomes
/// `"Prores Raw"`.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    out
}
