use alloc::string::ToString;

use rstest::rstest;

use crate::{DecodeError, decode};

fn decode_err(text: &str) -> DecodeError {
    match decode(text) {
        Ok(bytes) => panic!("expected {text:?} to be rejected, decoded {bytes:?}"),
        Err(err) => err,
    }
}

#[test]
fn code_point_above_table() {
    let err = decode_err("\u{01E5}\u{1100}");
    assert_eq!(
        err,
        DecodeError::InvalidCharacter {
            position: 1,
            code_point: 0x1100
        }
    );
    insta::assert_snapshot!(err.to_string(), @"Invalid character 1: [4352]");
}

#[test]
fn code_point_one_past_table() {
    insta::assert_snapshot!(decode_err("\u{01E5}\u{01E5}\u{10F4}").to_string(), @"Invalid character 2: [4340]");
}

#[test]
fn astral_code_point() {
    let err = decode_err("😀");
    assert_eq!(err.position(), 0);
    insta::assert_snapshot!(err.to_string(), @"Invalid character 0: [128512]");
}

#[test]
fn data_after_terminator() {
    let err = decode_err("\u{0F0D}\u{01E5}");
    assert_eq!(
        err,
        DecodeError::UnexpectedCharacter {
            position: 1,
            character: '\u{01E5}',
            terminator_position: 0,
            terminator: '\u{0F0D}',
        }
    );
    insta::assert_snapshot!(err.to_string(), @"Unexpected character 1: [ǥ] after termination sequence 0: [།]");
}

#[test]
fn terminator_after_terminator() {
    let err = decode_err("\u{01E5}\u{0F0D}\u{0F0E}");
    assert_eq!(err.position(), 2);
}

#[test]
fn unused_code_point_in_the_middle() {
    insta::assert_snapshot!(decode_err("AB").to_string(), @"Unexpected character 1: [B] after termination sequence 0: [A]");
}

#[rstest]
#[case::ascii('A')]
#[case::latin_1('\u{00E9}')]
#[case::tibetan_mark('\u{0F01}')]
fn unused_code_point_at_the_end(#[case] c: char) {
    let text = ['\u{01E5}', c].iter().collect::<alloc::string::String>();
    assert_eq!(
        decode_err(&text),
        DecodeError::InvalidTerminationCharacter {
            position: 1,
            character: c
        }
    );
}

#[test]
fn invalid_termination_message() {
    insta::assert_snapshot!(decode_err("A").to_string(), @"Invalid termination character 0: [A]");
}

#[test]
fn tail_value_wider_than_owed_bits() {
    // Two data symbols leave 6 bits pending, so only 2 bits are owed.
    let err = decode_err("\u{01E5}\u{01E5}\u{0F12}");
    assert_eq!(
        err,
        DecodeError::InvalidTailCharacter {
            position: 2,
            character: '\u{0F12}'
        }
    );
    insta::assert_snapshot!(err.to_string(), @"Invalid tail character 2: [༒]");
}

#[rstest]
#[case::fits('\u{0F10}', true)]
#[case::one_too_wide('\u{0F11}', false)]
fn tail_boundary(#[case] tail: char, #[case] accepted: bool) {
    let text = ['\u{01E5}', '\u{01E5}', tail]
        .iter()
        .collect::<alloc::string::String>();
    assert_eq!(decode(&text).is_ok(), accepted);
}
