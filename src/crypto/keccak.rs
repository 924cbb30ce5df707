//! SHA3-256 implemented as per FIPS 202: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf
//!
//! The sponge absorbs 136-byte blocks into a 25-lane little-endian state and
//! squeezes the first 32 bytes back out as the digest. Two permutations are
//! available: the full Keccak-f[1600] round function, and a reduced variant
//! applying only the θ and ι step mappings of each round.

use crate::encoding::Encodable;
use crate::util::cast_as_arrays;

pub const DIGEST_SIZE: usize = 32;

/// A 1088-bit rate leaves a 512-bit capacity in the 1600-bit state
pub const RATE: usize = 136;

const ROUNDS: usize = 24;
const LANES: usize = 25;

#[rustfmt::skip]
const RC: [u64; ROUNDS] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808A, 0x8000000080008000,
    0x000000000000808B, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
    0x000000000000008A, 0x0000000000000088, 0x0000000080008009, 0x000000008000000A,
    0x000000008000808B, 0x800000000000008B, 0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080, 0x000000000000800A, 0x800000008000000A,
    0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

/// ρ rotation offset for the lane at x + 5y
#[rustfmt::skip]
const RHO: [u32; LANES] = [
     0,  1, 62, 28, 27,
    36, 44,  6, 55, 20,
     3, 10, 43, 25, 39,
    41, 45, 15, 21,  8,
    18,  2, 61, 56, 14,
];

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Sha3Digest(pub [u8; DIGEST_SIZE]);

impl AsRef<[u8]> for Sha3Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Encodable for Sha3Digest {
    fn encode_hex(&self) -> String {
        self.0.encode_hex()
    }
}

/// Hash a message with SHA3-256
/// ```
/// use hash_core::crypto::keccak::sha3_256;
/// use hash_core::encoding::Encodable;
/// assert_eq!(
///     sha3_256("").encode_hex(),
///     "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
/// );
/// ```
pub fn sha3_256(message: impl AsRef<[u8]>) -> Sha3Digest {
    sponge(pad(message.as_ref()), keccak_f1600)
}

/// Hash a message with the reduced-permutation SHA3-256 variant
///
/// Each round of the permutation applies only the column-parity (θ) and
/// round-constant (ι) step mappings, skipping ρ, π and χ, and the padding
/// always writes the domain byte and the final marker byte separately.
/// Digests are not interoperable with standard SHA3-256.
pub fn sha3_256_reduced(message: impl AsRef<[u8]>) -> Sha3Digest {
    sponge(pad_reduced(message.as_ref()), permute_reduced)
}

/// pad10*1 with the SHA-3 domain bits: 0x06, zero fill, 0x80, fusing both
/// marker bytes into a single 0x86 when only one byte of room remains
fn pad(message: &[u8]) -> Vec<u8> {
    let mut padded = message.to_vec();
    if padded.len() % RATE == RATE - 1 {
        padded.push(0x86);
    } else {
        padded.push(0x06);
        while padded.len() % RATE != RATE - 1 {
            padded.push(0x00);
        }
        padded.push(0x80);
    }
    padded
}

/// Domain byte, zero fill to one short of a block boundary, final marker byte
///
/// Unlike pad10*1 this never fuses the two marker bytes, so a message one
/// byte short of the rate picks up a whole extra block.
fn pad_reduced(message: &[u8]) -> Vec<u8> {
    let mut padded = message.to_vec();
    padded.push(0x06);
    while padded.len() % RATE != RATE - 1 {
        padded.push(0x00);
    }
    padded.push(0x80);
    padded
}

/// Absorb the padded message block by block, then squeeze out the digest
fn sponge(padded: Vec<u8>, permute: fn(&mut [u64; LANES])) -> Sha3Digest {
    let mut lanes = [0u64; LANES];
    for block in cast_as_arrays::<_, RATE>(&padded) {
        // XOR the block's 17 words into the rate portion of the state
        for (lane, word) in lanes.iter_mut().zip(cast_as_arrays(block)) {
            *lane ^= u64::from_le_bytes(*word);
        }
        permute(&mut lanes);
    }

    let mut digest = [0; DIGEST_SIZE];
    for (bytes, lane) in digest.chunks_exact_mut(8).zip(lanes) {
        bytes.copy_from_slice(&lane.to_le_bytes());
    }
    Sha3Digest(digest)
}

/// The Keccak-f[1600] permutation: 24 rounds of the θ, ρ, π, χ and ι step mappings
pub fn keccak_f1600(lanes: &mut [u64; LANES]) {
    for rc in RC {
        theta(lanes);

        // ρ and π: rotate the lane at (x, y) by its offset and move it to (y, 2x + 3y)
        let mut b = [0u64; LANES];
        for y in 0..5 {
            for x in 0..5 {
                b[y + 5 * ((2 * x + 3 * y) % 5)] = lanes[x + 5 * y].rotate_left(RHO[x + 5 * y]);
            }
        }

        // χ: mix each lane with the two lanes after it in its row
        for y in 0..5 {
            for x in 0..5 {
                lanes[x + 5 * y] =
                    b[x + 5 * y] ^ (!b[(x + 1) % 5 + 5 * y] & b[(x + 2) % 5 + 5 * y]);
            }
        }

        // ι: fold the round constant into the origin lane
        lanes[0] ^= rc;
    }
}

/// Reduced permutation: only the θ and ι step mappings of each round
fn permute_reduced(lanes: &mut [u64; LANES]) {
    for rc in RC {
        theta(lanes);
        lanes[0] ^= rc;
    }
}

/// θ: XOR each lane with the parities of its two neighbouring columns
fn theta(lanes: &mut [u64; LANES]) {
    let mut c = [0u64; 5];
    for x in 0..5 {
        c[x] = lanes[x] ^ lanes[x + 5] ^ lanes[x + 10] ^ lanes[x + 15] ^ lanes[x + 20];
    }
    let mut d = [0u64; 5];
    for x in 0..5 {
        d[x] = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
    }
    for (i, lane) in lanes.iter_mut().enumerate() {
        *lane ^= d[i % 5];
    }
}
