//! # Keccak-256
//!
//! The sponge hash Ethereum uses everywhere. This is the original Keccak
//! submission, not NIST SHA3-256: the two differ only in the padding domain
//! byte (`0x01` here, `0x06` for SHA-3), which changes every output.
//!
//! ## Parameters
//!
//! - State: 25 lanes of 64 bits (1600 bits)
//! - Rate: 136 bytes, capacity: 512 bits
//! - Permutation: Keccak-f[1600], 24 rounds of theta, rho, pi, chi, iota

use crate::Hash;

/// Sponge rate in bytes.
pub const RATE: usize = 136;

/// Prefix wallets prepend before signing a personal message.
pub const ETHEREUM_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

const ROUND_CONSTANTS: [u64; 24] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808a, 0x8000000080008000,
    0x000000000000808b, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
    0x000000000000008a, 0x0000000000000088, 0x0000000080008009, 0x000000008000000a,
    0x000000008000808b, 0x800000000000008b, 0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080, 0x000000000000800a, 0x800000008000000a,
    0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

/// Rotation applied to each lane visited along the pi cycle.
const RHO_OFFSETS: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Lane visiting order of the pi step, starting from lane 1.
const PI_LANES: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Keccak-f[1600] permutation. Lane `(x, y)` lives at `state[x + 5 * y]`.
fn keccak_f(state: &mut [u64; 25]) {
    for round_constant in ROUND_CONSTANTS {
        // theta
        let mut parity = [0u64; 5];
        for x in 0..5 {
            parity[x] = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            let d = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                state[x + 5 * y] ^= d;
            }
        }

        // rho + pi
        let mut carried = state[1];
        for (&lane, &offset) in PI_LANES.iter().zip(RHO_OFFSETS.iter()) {
            let displaced = state[lane];
            state[lane] = carried.rotate_left(offset);
            carried = displaced;
        }

        // chi
        for y in 0..5 {
            let row = [
                state[5 * y],
                state[5 * y + 1],
                state[5 * y + 2],
                state[5 * y + 3],
                state[5 * y + 4],
            ];
            for x in 0..5 {
                state[5 * y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }

        // iota
        state[0] ^= round_constant;
    }
}

fn absorb_block(state: &mut [u64; 25], block: &[u8; RATE]) {
    for (lane, bytes) in state.iter_mut().zip(block.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(bytes);
        *lane ^= u64::from_le_bytes(word);
    }
    keccak_f(state);
}

/// Streaming Keccak-256 hasher.
#[derive(Clone)]
pub struct Keccak256 {
    state: [u64; 25],
    buffer: [u8; RATE],
    buffered: usize,
}

impl Keccak256 {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            state: [0u64; 25],
            buffer: [0u8; RATE],
            buffered: 0,
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        let mut input = data;
        while !input.is_empty() {
            let take = (RATE - self.buffered).min(input.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&input[..take]);
            self.buffered += take;
            input = &input[take..];

            if self.buffered == RATE {
                let block = self.buffer;
                absorb_block(&mut self.state, &block);
                self.buffered = 0;
            }
        }
        self
    }

    /// Apply `pad10*1`, absorb the final block and squeeze 32 bytes.
    pub fn finalize(mut self) -> Hash {
        let mut block = [0u8; RATE];
        block[..self.buffered].copy_from_slice(&self.buffer[..self.buffered]);
        block[self.buffered] ^= 0x01;
        block[RATE - 1] ^= 0x80;
        absorb_block(&mut self.state, &block);

        let mut digest = [0u8; 32];
        for (chunk, lane) in digest.chunks_exact_mut(8).zip(self.state.iter()) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
        digest
    }
}

impl Default for Keccak256 {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash data with Keccak-256 (one-shot).
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize()
}

/// Hash a personal message the way `personal_sign` / `eth_sign` wallets do.
///
/// Computes `keccak256("\x19Ethereum Signed Message:\n" || len || message)`
/// where `len` is the decimal **byte** length of `message`. Counting
/// characters instead of bytes breaks every message with non-ASCII text.
pub fn hash_ethereum_message(message: &[u8]) -> Hash {
    let length = message.len().to_string();

    let mut hasher = Keccak256::new();
    hasher.update(ETHEREUM_MESSAGE_PREFIX);
    hasher.update(length.as_bytes());
    hasher.update(message);
    hasher.finalize()
}
