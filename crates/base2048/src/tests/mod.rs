mod decode_bad;
mod encode_good;
mod property_roundtrip;
