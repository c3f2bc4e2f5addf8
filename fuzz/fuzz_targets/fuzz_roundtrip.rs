#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = base2048::encode(data);
    assert_eq!(text.chars().count(), base2048::encoded_len(data.len()));
    let decoded = base2048::decode(&text).expect("encoder output must decode");
    assert_eq!(decoded, data);
});
