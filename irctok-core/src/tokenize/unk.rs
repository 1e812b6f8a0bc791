use std::collections::BTreeSet;

/// Shape class for a token outside the vocabulary: `<unk`, then `#` if it has
/// a digit, `a` if it has a letter, then each distinct ASCII punctuation mark
/// in byte order, then `>`.
///
/// ```
/// use irctok_core::tokenize::make_unk;
///
/// assert_eq!(make_unk("abc123!!"), "<unk#a!>");
/// assert_eq!(make_unk("..,"), "<unk,.>");
/// ```
pub fn make_unk(token: &str) -> String {
    let has_digit = token.chars().any(|c| c.is_ascii_digit());
    let has_letter = token.chars().any(|c| c.is_ascii_alphabetic());
    let marks: BTreeSet<char> = token.chars().filter(char::is_ascii_punctuation).collect();

    let mut class = String::from("<unk");
    if has_digit {
        class.push('#');
    }
    if has_letter {
        class.push('a');
    }
    class.extend(marks);
    class.push('>');
    class
}
