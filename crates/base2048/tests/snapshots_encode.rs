#![allow(missing_docs)]

use core::fmt::Write;

fn render_code_points(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (i, c) in base2048::encode(bytes).chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write!(out, "U+{:04X}", u32::from(c)).unwrap();
    }
    out
}

#[test]
fn snapshot_ascii_text() {
    insta::assert_snapshot!(render_code_points(b"Hello, World!"), @"U+0502 U+0412 U+038C U+0E2A U+0C60 U+0414 U+0C1C U+052B U+0687 U+01E6");
    insta::assert_snapshot!(render_code_points(b"base2048"), @"U+0679 U+0242 U+0E02 U+0689 U+0200 U+021E");
}

#[test]
fn snapshot_tail_terminated() {
    insta::assert_snapshot!(render_code_points(&[0xFF, 0xFF, 0xFF]), @"U+10F3 U+10F3 U+0F10");
}

#[test]
fn snapshot_empty() {
    insta::assert_snapshot!(render_code_points(&[]), @"");
}

#[test]
fn all_byte_values_roundtrip() {
    let bytes: Vec<u8> = (0..=u8::MAX).collect();
    let text = base2048::encode(&bytes);
    assert_eq!(text.chars().count(), base2048::encoded_len(bytes.len()));
    assert_eq!(text.chars().last(), Some('\u{0F10}'));
    assert_eq!(base2048::decode(&text).unwrap(), bytes);
}
