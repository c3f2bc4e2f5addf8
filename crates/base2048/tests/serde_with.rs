#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Blob {
    name: String,
    #[serde(with = "base2048::serde")]
    data: Vec<u8>,
}

#[test]
fn serde_roundtrip_through_json() {
    let blob = Blob {
        name: "greeting".into(),
        data: b"hello".to_vec(),
    };
    let json = serde_json::to_string(&blob).unwrap();
    assert_eq!(
        json,
        "{\"name\":\"greeting\",\"data\":\"\u{06A9}\u{0412}\u{038C}\u{0255}\"}"
    );
    let back: Blob = serde_json::from_str(&json).unwrap();
    assert_eq!(back, blob);
}

#[test]
fn serde_reports_decode_errors() {
    let err = serde_json::from_str::<Blob>("{\"name\":\"x\",\"data\":\"\u{0F0D}\u{01E5}\"}")
        .unwrap_err();
    assert!(
        err.to_string()
            .starts_with("Unexpected character 1: [ǥ] after termination sequence 0: [།]"),
        "{err}"
    );
}

#[test]
fn serde_rejects_non_strings() {
    assert!(serde_json::from_str::<Blob>("{\"name\":\"x\",\"data\":[1,2]}").is_err());
}
