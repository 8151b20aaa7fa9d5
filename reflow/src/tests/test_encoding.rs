use crate::OffsetEncoding;

#[test]
fn test_len_of_ascii_is_the_same_in_every_encoding() {
    for encoding in [
        OffsetEncoding::Utf8,
        OffsetEncoding::Utf16,
        OffsetEncoding::Chars,
    ] {
        assert_eq!(encoding.len_of("abc"), 3);
        assert_eq!(encoding.len_of(""), 0);
    }
}

#[test]
fn test_len_of_emoji() {
    let s = "😀a";
    assert_eq!(OffsetEncoding::Utf8.len_of(s), 5);
    assert_eq!(OffsetEncoding::Utf16.len_of(s), 3);
    assert_eq!(OffsetEncoding::Chars.len_of(s), 2);
}

#[test]
fn test_byte_index_utf16_rejects_split_surrogate() {
    let s = "😀a";
    assert_eq!(OffsetEncoding::Utf16.byte_index(s, 0), Some(0));
    assert_eq!(OffsetEncoding::Utf16.byte_index(s, 1), None);
    assert_eq!(OffsetEncoding::Utf16.byte_index(s, 2), Some(4));
    assert_eq!(OffsetEncoding::Utf16.byte_index(s, 3), Some(5));
    assert_eq!(OffsetEncoding::Utf16.byte_index(s, 4), None);
}

#[test]
fn test_byte_index_chars_and_utf8() {
    let s = "一二";
    assert_eq!(OffsetEncoding::Chars.byte_index(s, 1), Some(3));
    assert_eq!(OffsetEncoding::Chars.byte_index(s, 2), Some(6));
    assert_eq!(OffsetEncoding::Chars.byte_index(s, 3), None);

    assert_eq!(OffsetEncoding::Utf8.byte_index(s, 3), Some(3));
    assert_eq!(OffsetEncoding::Utf8.byte_index(s, 4), None);
    assert_eq!(OffsetEncoding::Utf8.byte_index(s, 7), None);
}

#[test]
fn test_default_encoding_counts_chars() {
    assert_eq!(OffsetEncoding::default(), OffsetEncoding::Chars);
}
