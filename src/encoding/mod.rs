mod hex;

pub use hex::{parse_hex, to_hex};

/// Trait allowing us to use .encode_hex to encode bytes
pub trait Encodable {
    fn encode_hex(&self) -> String;
}

impl Encodable for [u8] {
    fn encode_hex(&self) -> String {
        to_hex(self)
    }
}

/// Trait allowing us to use .decode_hex to decode strings
pub trait Decodable {
    fn decode_hex(&self) -> anyhow::Result<Vec<u8>>;
}

impl Decodable for str {
    fn decode_hex(&self) -> anyhow::Result<Vec<u8>> {
        parse_hex(self)
    }
}
