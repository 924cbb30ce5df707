use crate::util::try_cast_as_arrays;
use anyhow::{anyhow, ensure, Result};

/// Parse a hex string into bytes
/// ```
/// use hash_core::encoding::parse_hex;
/// assert_eq!(parse_hex("1234").unwrap(), &[0x12, 0x34]);
/// ```
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    ensure!(input.len() % 2 == 0, "Input string must be an even length.");
    try_cast_as_arrays(input.as_bytes())?
        .iter()
        .map(|&[h, l]| Ok(h2b(h)? << 4 | h2b(l)?))
        .collect()
}

/// Turn a slice of bytes into a hex encoded string, two lowercase digits per byte
/// ```
/// use hash_core::encoding::{to_hex, Encodable};
/// assert_eq!(to_hex([0x12, 0x34, 0x56, 0x78]), "12345678");
/// assert_eq!([0x12, 0x34, 0x56, 0x78].encode_hex(), "12345678");
/// ```
pub fn to_hex(input: impl AsRef<[u8]>) -> String {
    let mut utf8 = Vec::new();
    utf8.extend(input.as_ref().iter().copied().flat_map(b2h));

    // SAFETY: every character in the string is produced by b2h
    //         b2h uses a table of ASCII byte literals to encode
    //         its output, this means the bytes are always valid UTF-8
    unsafe { String::from_utf8_unchecked(utf8) }
}

/// Convert a hex character to its 4-bit value
fn h2b(b: u8) -> Result<u8> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        x => Err(anyhow!("Unrecognised hex character {x:?} - {:?}", x as char)),
    }
}

/// Convert a byte into the pair of hex characters representing it
fn b2h(h: u8) -> [u8; 2] {
    #[rustfmt::skip]
    const TABLE: [u8; 16] = [
        b'0', b'1', b'2', b'3',
        b'4', b'5', b'6', b'7',
        b'8', b'9', b'a', b'b',
        b'c', b'd', b'e', b'f',
    ];

    let hi = TABLE[(h >> 4) as usize];
    let lo = TABLE[(h & 0b1111) as usize];
    [hi, lo]
}
