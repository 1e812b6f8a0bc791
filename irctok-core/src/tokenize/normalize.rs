use unicode_normalization::UnicodeNormalization;

/// Marker for characters lost during ASCII transliteration.
pub const UNCONVERTABLE: &str = "<unconvertable>";

/// Transliterates `word` to lower-case ASCII.
///
/// Characters are NFKD-decomposed and anything outside ASCII (combining marks
/// included) is dropped, then whitespace is removed. A word that loses
/// everything becomes [`UNCONVERTABLE`].
///
/// When only a prefix (or suffix) of the word survives, the marker is appended
/// (or prepended) after a single space, so the result reads as two tokens once
/// the line is joined. Callers must expect that embedded space.
pub fn convert_word(word: &str) -> String {
    let ascii: String = word.nfkd().filter(char::is_ascii).collect();
    let normalized: String = ascii.trim().to_lowercase().split_whitespace().collect();

    if normalized.is_empty() {
        return UNCONVERTABLE.to_string();
    }

    let lowered = word.to_lowercase();
    let shorter = normalized.chars().count() != word.chars().count();

    if shorter && lowered.starts_with(&normalized) {
        format!("{normalized} {UNCONVERTABLE}")
    } else if shorter && lowered.ends_with(&normalized) {
        format!("{UNCONVERTABLE} {normalized}")
    } else {
        normalized
    }
}
