//! AES block cipher implementations
//!
//! This module implements the Advanced Encryption Standard (AES) block cipher
//! as specified in FIPS 197, for 128, 192 and 256-bit keys.
//!
//! ## Constant-Time Guarantees
//!
//! - GF(2^8) arithmetic is branchless
//! - The S-box is computed from the field inverse instead of a lookup table
//! - Every round touches the same state bytes in the same order
//!
//! The three variants share one key schedule and one round function; they
//! differ only in key length and round count.

use core::sync::atomic::{compiler_fence, Ordering};

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};
use tokencrypt_params::utils::symmetric::{
    AES128_KEY_SIZE, AES128_ROUNDS, AES192_KEY_SIZE, AES192_ROUNDS, AES256_KEY_SIZE,
    AES256_ROUNDS, AES_BLOCK_SIZE,
};

/// Round constants for AES key expansion
const RCON: [u32; 11] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000, 0x20000000,
    0x40000000, 0x80000000, 0x1b000000, 0x36000000,
];

/// Largest expanded key, in 32-bit words (AES-256)
const MAX_SCHEDULE_WORDS: usize = 4 * (AES256_ROUNDS + 1);

/// Multiply two bytes in GF(2⁸) with AES's reduction poly x⁸ + x⁴ + x³ + x + 1
#[inline(always)]
fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0u8;
    for _ in 0..8 {
        // 0xFF when the low bit of b is set
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let carry = (a >> 7).wrapping_neg();
        a = (a << 1) ^ (carry & 0x1B);
        b >>= 1;
    }
    p
}

/// Field inverse as x²⁵⁴; maps 0 to 0 without branching
#[inline(always)]
fn gf_inv(x: u8) -> u8 {
    let mut result = 1u8;
    let mut power = x;
    for _ in 1..8 {
        power = gf_mul(power, power);
        result = gf_mul(result, power);
    }
    result
}

/// AES forward S-box: inv(x) ⊕ ROTL(inv(x),1–4) ⊕ 0x63
#[inline(always)]
fn sbox(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

/// AES inverse S-box: undo the affine map, then invert
#[inline(always)]
fn inv_sbox(x: u8) -> u8 {
    let y = x ^ 0x63;
    gf_inv(y.rotate_left(1) ^ y.rotate_left(3) ^ y.rotate_left(6))
}

#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let [a, b, c, d] = word.to_be_bytes();
    u32::from_be_bytes([sbox(a), sbox(b), sbox(c), sbox(d)])
}

/// FIPS 197 key expansion into `out`, which holds `16 * (rounds + 1)` bytes
fn expand_key(key: &[u8], rounds: usize, out: &mut [u8]) {
    let nk = key.len() / 4;
    let total_words = 4 * (rounds + 1);
    let mut words = [0u32; MAX_SCHEDULE_WORDS];

    for (word, chunk) in words.iter_mut().zip(key.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in nk..total_words {
        let mut temp = words[i - 1];
        if i % nk == 0 {
            temp = sub_word(temp.rotate_left(8)) ^ RCON[i / nk];
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        words[i] = words[i - nk] ^ temp;
    }

    for (chunk, word) in out.chunks_exact_mut(4).zip(words[..total_words].iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    words.zeroize();
}

// The state is column-major: byte `4 * c + r` is row r of column c.

fn add_round_key(state: &mut [u8; 16], round_key: &[u8]) {
    for (s, k) in state.iter_mut().zip(round_key) {
        *s ^= k;
    }
}

fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
    compiler_fence(Ordering::SeqCst);
}

fn inv_sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
    compiler_fence(Ordering::SeqCst);
}

/// Row r rotates left by r columns
fn shift_rows(state: &mut [u8; 16]) {
    let old = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[4 * c + r] = old[4 * ((c + r) % 4) + r];
        }
    }
}

fn inv_shift_rows(state: &mut [u8; 16]) {
    let old = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[4 * c + r] = old[4 * ((c + 4 - r) % 4) + r];
        }
    }
}

/// Multiply by 2 in GF(2^8)
#[inline(always)]
fn mul2(byte: u8) -> u8 {
    (byte << 1) ^ ((byte >> 7) * 0x1B)
}

fn mix_columns(state: &mut [u8; 16]) {
    for column in state.chunks_exact_mut(4) {
        let [s0, s1, s2, s3] = [column[0], column[1], column[2], column[3]];
        column[0] = mul2(s0) ^ mul2(s1) ^ s1 ^ s2 ^ s3;
        column[1] = s0 ^ mul2(s1) ^ mul2(s2) ^ s2 ^ s3;
        column[2] = s0 ^ s1 ^ mul2(s2) ^ mul2(s3) ^ s3;
        column[3] = mul2(s0) ^ s0 ^ s1 ^ s2 ^ mul2(s3);
    }
}

fn inv_mix_columns(state: &mut [u8; 16]) {
    for column in state.chunks_exact_mut(4) {
        let [s0, s1, s2, s3] = [column[0], column[1], column[2], column[3]];
        column[0] = gf_mul(s0, 14) ^ gf_mul(s1, 11) ^ gf_mul(s2, 13) ^ gf_mul(s3, 9);
        column[1] = gf_mul(s0, 9) ^ gf_mul(s1, 14) ^ gf_mul(s2, 11) ^ gf_mul(s3, 13);
        column[2] = gf_mul(s0, 13) ^ gf_mul(s1, 9) ^ gf_mul(s2, 14) ^ gf_mul(s3, 11);
        column[3] = gf_mul(s0, 11) ^ gf_mul(s1, 13) ^ gf_mul(s2, 9) ^ gf_mul(s3, 14);
    }
}

/// Runs the forward cipher over one block with an expanded schedule
fn encrypt_with_schedule(block: &mut [u8], round_keys: &[u8], rounds: usize) -> Result<()> {
    validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

    let mut state = [0u8; 16];
    state.copy_from_slice(block);

    add_round_key(&mut state, &round_keys[..16]);
    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, &round_keys[16 * round..16 * (round + 1)]);
    }
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[16 * rounds..16 * (rounds + 1)]);

    block.copy_from_slice(&state);
    state.zeroize();
    Ok(())
}

/// Runs the inverse cipher over one block with an expanded schedule
fn decrypt_with_schedule(block: &mut [u8], round_keys: &[u8], rounds: usize) -> Result<()> {
    validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

    let mut state = [0u8; 16];
    state.copy_from_slice(block);

    add_round_key(&mut state, &round_keys[16 * rounds..16 * (rounds + 1)]);
    for round in (1..rounds).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, &round_keys[16 * round..16 * (round + 1)]);
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, &round_keys[..16]);

    block.copy_from_slice(&state);
    state.zeroize();
    Ok(())
}

/// AES-128 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128 {
    round_keys: [u8; 16 * (AES128_ROUNDS + 1)],
}

/// AES-192 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes192 {
    round_keys: [u8; 16 * (AES192_ROUNDS + 1)],
}

/// AES-256 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256 {
    round_keys: [u8; 16 * (AES256_ROUNDS + 1)],
}

impl CipherAlgorithm for Aes128 {
    const KEY_SIZE: usize = AES128_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-128"
    }
}

impl CipherAlgorithm for Aes192 {
    const KEY_SIZE: usize = AES192_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-192"
    }
}

impl CipherAlgorithm for Aes256 {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-256"
    }
}

impl BlockCipher for Aes128 {
    fn new(key: &[u8]) -> Result<Self> {
        validate::length("AES-128 key", key.len(), AES128_KEY_SIZE)?;
        let mut round_keys = [0u8; 16 * (AES128_ROUNDS + 1)];
        expand_key(key, AES128_ROUNDS, &mut round_keys);
        Ok(Self { round_keys })
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_with_schedule(block, &self.round_keys, AES128_ROUNDS)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_with_schedule(block, &self.round_keys, AES128_ROUNDS)
    }
}

impl BlockCipher for Aes192 {
    fn new(key: &[u8]) -> Result<Self> {
        validate::length("AES-192 key", key.len(), AES192_KEY_SIZE)?;
        let mut round_keys = [0u8; 16 * (AES192_ROUNDS + 1)];
        expand_key(key, AES192_ROUNDS, &mut round_keys);
        Ok(Self { round_keys })
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_with_schedule(block, &self.round_keys, AES192_ROUNDS)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_with_schedule(block, &self.round_keys, AES192_ROUNDS)
    }
}

impl BlockCipher for Aes256 {
    fn new(key: &[u8]) -> Result<Self> {
        validate::length("AES-256 key", key.len(), AES256_KEY_SIZE)?;
        let mut round_keys = [0u8; 16 * (AES256_ROUNDS + 1)];
        expand_key(key, AES256_ROUNDS, &mut round_keys);
        Ok(Self { round_keys })
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_with_schedule(block, &self.round_keys, AES256_ROUNDS)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_with_schedule(block, &self.round_keys, AES256_ROUNDS)
    }
}

impl core::fmt::Debug for Aes128 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Aes128([REDACTED])")
    }
}

impl core::fmt::Debug for Aes192 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Aes192([REDACTED])")
    }
}

impl core::fmt::Debug for Aes256 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Aes256([REDACTED])")
    }
}
