//! Word text normalization.
//!
//! Every word that reaches storage goes through [`normalize`] first; the
//! stored `word` column is always normalized text, never raw input.

use unicode_normalization::UnicodeNormalization;

/// Maximum stored word length, in characters.
pub const MAX_WORD_CHARS: usize = 50;

/// Normalize raw word text into its canonical stored form.
///
/// Performs, in order:
/// - Unicode NFC composition
/// - Lowercase conversion
/// - Removal of every character that is not a letter, apostrophe, hyphen,
///   or space
/// - Collapse of 2+ runs of spaces, apostrophes, and hyphens
/// - Trim of leading/trailing spaces, apostrophes, and hyphens
/// - Truncation to [`MAX_WORD_CHARS`] characters
///
/// The result may be empty (e.g., the input was only punctuation); callers
/// must treat an empty result as "not a word". Idempotent:
/// `normalize(normalize(x)) == normalize(x)`.
///
/// # Examples
///
/// ```
/// use lexi_core::normalize;
///
/// assert_eq!(normalize("  !Un  it--Th''ree ' "), "un it-th'ree");
/// assert_eq!(normalize("München"), "münchen");
/// assert_eq!(normalize(" !!! "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let folded: String = raw.nfc().collect::<String>().to_lowercase();

    // Filter to the allowed alphabet and collapse same-character runs of
    // the separator characters in a single pass.
    let mut collapsed = String::with_capacity(folded.len());
    let mut prev: Option<char> = None;
    for c in folded.chars() {
        if !(c.is_alphabetic() || matches!(c, '\'' | '-' | ' ')) {
            continue;
        }
        if matches!(c, '\'' | '-' | ' ') && prev == Some(c) {
            continue;
        }
        collapsed.push(c);
        prev = Some(c);
    }

    collapsed
        .trim_matches(|c| matches!(c, ' ' | '\'' | '-'))
        .chars()
        .take(MAX_WORD_CHARS)
        .collect()
}
