//! SHA-1 implemented as per FIPS 180-4: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf

use crate::encoding::Encodable;
use crate::util::cast_as_arrays;

pub const DIGEST_SIZE: usize = 20;
pub const BLOCK_SIZE: usize = 64;

/// Longest message the 64-bit length field of the padding can describe, in bytes
pub const MAX_MESSAGE_LEN: u64 = (1 << 61) - 1;

const ROUNDS: usize = 80;

const INIT_STATE: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Round constants, one per band of 20 rounds
const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Sha1Digest(pub [u8; DIGEST_SIZE]);

impl AsRef<[u8]> for Sha1Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Encodable for Sha1Digest {
    fn encode_hex(&self) -> String {
        self.0.encode_hex()
    }
}

/// Hash a message with SHA-1
///
/// The message must be at most 2^61 - 1 bytes so that its bit length fits
/// the 64-bit length field of the padding.
/// ```
/// use hash_core::crypto::sha1::sha1;
/// use hash_core::encoding::Encodable;
/// assert_eq!(sha1("abc").encode_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
/// ```
pub fn sha1(message: impl AsRef<[u8]>) -> Sha1Digest {
    let message = message.as_ref();
    assert!(
        message.len() as u64 <= MAX_MESSAGE_LEN,
        "Message bit length must fit in the 64-bit length field."
    );

    let padded = pad(message);
    let mut state = INIT_STATE;
    for block in cast_as_arrays(&padded) {
        process_block(&mut state, block);
    }

    let mut digest = [0; DIGEST_SIZE];
    for (bytes, word) in digest.chunks_exact_mut(4).zip(state) {
        bytes.copy_from_slice(&word.to_be_bytes());
    }
    Sha1Digest(digest)
}

/// Merkle-Damgård padding: a 0x80 marker, zero fill to 56 (mod 64), then the
/// message bit length as a big-endian u64, for a total multiple of 64 bytes
fn pad(message: &[u8]) -> Vec<u8> {
    let mut padded = message.to_vec();
    padded.push(0x80);
    while padded.len() % BLOCK_SIZE != BLOCK_SIZE - 8 {
        padded.push(0x00);
    }
    padded.extend_from_slice(&(message.len() as u64 * u8::BITS as u64).to_be_bytes());
    padded
}

fn process_block(state: &mut [u32; 5], block: &[u8; BLOCK_SIZE]) {
    // load the block into the first 16 words of the message schedule
    let mut w = [0u32; ROUNDS];
    for (word, chunk) in w.iter_mut().zip(cast_as_arrays(block)) {
        *word = u32::from_be_bytes(*chunk);
    }

    // expand the message into the rest of the schedule
    for t in 16..ROUNDS {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }

    // working variables
    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for t in 0..ROUNDS {
        let f = match t {
            0..=19 => (b & c) | (!b & d),
            20..=39 | 60..=79 => b ^ c ^ d,
            40..=59 => (b & c) | (b & d) | (c & d),
            _ => unreachable!("sha1 has exactly 80 rounds"),
        };
        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(K[t / 20])
            .wrapping_add(w[t]);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    // fold the working variables back into the running state
    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}
