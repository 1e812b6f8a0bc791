use crate::tokenize::make_unk;

#[test]
fn digits_letters_and_punctuation() {
    assert_eq!(make_unk("abc123!!"), "<unk#a!>");
}

#[test]
fn punctuation_only() {
    assert_eq!(make_unk("!!!"), "<unk!>");
}

#[test]
fn digits_only() {
    assert_eq!(make_unk("123"), "<unk#>");
}

#[test]
fn letters_only() {
    assert_eq!(make_unk("strangeword"), "<unka>");
}

#[test]
fn marks_are_unique_and_sorted() {
    assert_eq!(make_unk("a.b,c.d,"), "<unka,.>");
    assert_eq!(make_unk("~/x-y_z"), "<unka-/_~>");
}

#[test]
fn non_ascii_letters_do_not_count() {
    assert_eq!(make_unk("é"), "<unk>");
    assert_eq!(make_unk(""), "<unk>");
}
