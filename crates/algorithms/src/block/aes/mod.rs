//! AES block cipher engines
//!
//! This module implements the Advanced Encryption Standard (AES) block
//! cipher as specified in FIPS 197, as three interchangeable engines that
//! trade table memory for speed:
//!
//! - [`AesFast`]: four pre-rotated 1 KB lookup tables per direction (8 KB
//!   total), one table read per state byte per round. Fastest.
//! - [`Aes`]: a single 1 KB table per direction plus twelve rotate
//!   instructions per round. The default tradeoff.
//! - [`AesLight`]: no combined tables at all; the S-box is looked up
//!   directly and MixColumns is computed from the GF(2⁸) doubling
//!   primitive. Smallest footprint, slowest.
//!
//! The three engines produce bit-identical output for every valid
//! (key, block) pair and expose the identical [`BlockCipher`] contract, so
//! choosing between them is a deployment-time decision.
//!
//! Decryption uses the FIPS 197 "equivalent inverse cipher": interior round
//! keys are pre-transformed with InvMixColumns during key expansion so the
//! decryption round loop has the same table-driven shape as encryption.
//!
//! ## Side-channel caveat
//!
//! The table lookups in [`AesFast`] (and, to a lesser degree, [`Aes`]) are
//! indexed by secret data and are not constant-time on hardware with
//! observable cache behavior. Where that threat model applies, prefer
//! hardware AES instructions or a bitsliced implementation over anything in
//! this module.

use byteorder::{ByteOrder, LittleEndian};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Error, Result};
use blockcrypt_api::{BlockCipher, CipherParameters, Result as ApiResult};
use blockcrypt_params::symmetric::{AES_BLOCK_SIZE, AES_KEY_SIZES, AES_MAX_ROUNDS};

mod consts;
use consts::{RCON, S, SI, T0, T1, T2, T3, TINV0, TINV1, TINV2, TINV3};


/// Multiply each byte of a packed word by x in GF(2⁸)
#[inline(always)]
fn ffmulx(x: u32) -> u32 {
    ((x & 0x7f7f7f7f) << 1) ^ (((x & 0x80808080) >> 7) * 0x1b)
}

/// Multiply each byte of a packed word by x² in GF(2⁸)
#[inline(always)]
fn ffmulx2(x: u32) -> u32 {
    let t0 = (x & 0x3f3f3f3f) << 2;
    let mut t1 = x & 0xc0c0c0c0;
    t1 ^= t1 >> 1;
    t0 ^ (t1 >> 2) ^ (t1 >> 5)
}

/// MixColumns on one packed column. The MDS coefficients (1, 2, 3)
/// decompose into a single doubling plus rotates.
#[inline(always)]
fn mcol(x: u32) -> u32 {
    let f2 = ffmulx(x);
    f2 ^ (x ^ f2).rotate_right(8) ^ x.rotate_right(16) ^ x.rotate_right(24)
}

/// InvMixColumns on one packed column, via the (9, 11, 13, 14) coefficient
/// decomposition into two doublings.
#[inline(always)]
fn inv_mcol(x: u32) -> u32 {
    let mut t1 = x ^ x.rotate_right(8);
    let t0 = x ^ ffmulx(t1);
    t1 ^= ffmulx2(t0);
    t0 ^ t1 ^ t1.rotate_right(16)
}

/// Apply the S-box to each byte of a packed word
#[inline(always)]
fn sub_word(x: u32) -> u32 {
    S[(x & 0xff) as usize] as u32
        | (S[((x >> 8) & 0xff) as usize] as u32) << 8
        | (S[((x >> 16) & 0xff) as usize] as u32) << 16
        | (S[(x >> 24) as usize] as u32) << 24
}

/// Gather four state bytes through the forward S-box into one word.
///
/// `b0..b3` are the state words supplying byte positions 0..3; handing in
/// the words in column order `j, j+1, j+2, j+3` realizes ShiftRows and
/// SubBytes together.
#[inline(always)]
fn sbox_word(b0: u32, b1: u32, b2: u32, b3: u32) -> u32 {
    S[(b0 & 0xff) as usize] as u32
        | (S[((b1 >> 8) & 0xff) as usize] as u32) << 8
        | (S[((b2 >> 16) & 0xff) as usize] as u32) << 16
        | (S[(b3 >> 24) as usize] as u32) << 24
}

/// Gather four state bytes through the inverse S-box into one word
#[inline(always)]
fn inv_sbox_word(b0: u32, b1: u32, b2: u32, b3: u32) -> u32 {
    SI[(b0 & 0xff) as usize] as u32
        | (SI[((b1 >> 8) & 0xff) as usize] as u32) << 8
        | (SI[((b2 >> 16) & 0xff) as usize] as u32) << 16
        | (SI[(b3 >> 24) as usize] as u32) << 24
}

/// One output word of a balanced-table encryption round: four T0 lookups
/// rotated into place, realizing SubBytes, ShiftRows, and MixColumns in a
/// single expression.
#[inline(always)]
fn t_word(b0: u32, b1: u32, b2: u32, b3: u32) -> u32 {
    T0[(b0 & 0xff) as usize]
        ^ T0[((b1 >> 8) & 0xff) as usize].rotate_left(8)
        ^ T0[((b2 >> 16) & 0xff) as usize].rotate_left(16)
        ^ T0[(b3 >> 24) as usize].rotate_left(24)
}

/// One output word of a balanced-table decryption round
#[inline(always)]
fn tinv_word(b0: u32, b1: u32, b2: u32, b3: u32) -> u32 {
    TINV0[(b0 & 0xff) as usize]
        ^ TINV0[((b1 >> 8) & 0xff) as usize].rotate_left(8)
        ^ TINV0[((b2 >> 16) & 0xff) as usize].rotate_left(16)
        ^ TINV0[(b3 >> 24) as usize].rotate_left(24)
}

/// One output word of a full-table encryption round: the rotations are
/// baked into the pre-rotated tables.
#[inline(always)]
fn t_word_full(b0: u32, b1: u32, b2: u32, b3: u32) -> u32 {
    T0[(b0 & 0xff) as usize]
        ^ T1[((b1 >> 8) & 0xff) as usize]
        ^ T2[((b2 >> 16) & 0xff) as usize]
        ^ T3[(b3 >> 24) as usize]
}

/// One output word of a full-table decryption round
#[inline(always)]
fn tinv_word_full(b0: u32, b1: u32, b2: u32, b3: u32) -> u32 {
    TINV0[(b0 & 0xff) as usize]
        ^ TINV1[((b1 >> 8) & 0xff) as usize]
        ^ TINV2[((b2 >> 16) & 0xff) as usize]
        ^ TINV3[(b3 >> 24) as usize]
}

/// An expanded AES round-key schedule.
///
/// Built once by `init`, read-only afterward, and zeroized both on drop and
/// when an engine is re-initialized. For decryption the interior round keys
/// already carry the InvMixColumns pre-transform.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct KeySchedule {
    /// Round keys `0..=rounds`, each four little-endian packed words
    words: [[u32; 4]; AES_MAX_ROUNDS + 1],
    /// Number of rounds for this key size (10, 12, or 14)
    rounds: usize,
    /// Direction the schedule was expanded for
    for_encryption: bool,
}

impl KeySchedule {
    /// Expand `key` into a round-key schedule for the given direction.
    ///
    /// The key length is checked against the three lengths AES defines
    /// before any schedule computation runs, so no "impossible key size"
    /// branch exists below this point.
    fn expand(key: &[u8], for_encryption: bool) -> Result<Self> {
        validate::key_length("AES", key.len(), &AES_KEY_SIZES)?;
        let kc = key.len() / 4;
        let rounds = kc + 6;

        let mut words = [[0u32; 4]; AES_MAX_ROUNDS + 1];
        for i in 0..kc {
            words[i >> 2][i & 3] = LittleEndian::read_u32(&key[4 * i..4 * i + 4]);
        }

        for i in kc..(rounds + 1) * 4 {
            let mut t = words[(i - 1) >> 2][(i - 1) & 3];
            if i % kc == 0 {
                // In little-endian packing RotWord is a right rotation and
                // the round constant lands in the low byte.
                t = sub_word(t.rotate_right(8)) ^ RCON[i / kc - 1];
            } else if kc > 6 && i % kc == 4 {
                // Extra SubWord rule for 256-bit keys (FIPS 197 §5.2)
                t = sub_word(t);
            }
            words[i >> 2][i & 3] = words[(i - kc) >> 2][(i - kc) & 3] ^ t;
        }

        if !for_encryption {
            // Equivalent inverse cipher: push the interior round keys
            // through InvMixColumns so decryption reuses the encryption
            // round structure with the keys consumed in reverse order.
            for round in words.iter_mut().take(rounds).skip(1) {
                for word in round.iter_mut() {
                    *word = inv_mcol(*word);
                }
            }
        }

        Ok(KeySchedule {
            words,
            rounds,
            for_encryption,
        })
    }

    #[inline(always)]
    fn round_key(&self, round: usize) -> &[u32; 4] {
        &self.words[round]
    }

    #[inline(always)]
    fn rounds(&self) -> usize {
        self.rounds
    }
}

// Round keys never appear in debug output.
impl core::fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeySchedule")
            .field("rounds", &self.rounds)
            .field("for_encryption", &self.for_encryption)
            .field("words", &"[REDACTED]")
            .finish()
    }
}

/// Unpack a 16-byte block into four little-endian words
#[inline(always)]
fn unpack_block(block: &[u8]) -> [u32; 4] {
    let mut words = [0u32; 4];
    LittleEndian::read_u32_into(block, &mut words);
    words
}

/// Pack four words back into a 16-byte block, little-endian
#[inline(always)]
fn pack_block(words: &[u32; 4], block: &mut [u8]) {
    LittleEndian::write_u32_into(words, block);
}

/// Replace any existing schedule with one expanded from `params`.
///
/// The schedule slot is cleared before validation, so a failed call leaves
/// the engine uninitialized rather than holding a stale schedule.
fn init_schedule(
    slot: &mut Option<KeySchedule>,
    for_encryption: bool,
    params: CipherParameters<'_>,
) -> ApiResult<()> {
    *slot = None;
    let key = match params {
        CipherParameters::Key(key) => key,
        CipherParameters::KeyWithIv { .. } => {
            return Err(Error::Parameter {
                name: "params",
                reason: "AES engine takes raw key material, not a key with IV",
            }
            .into())
        }
    };
    *slot = Some(KeySchedule::expand(key, for_encryption)?);
    Ok(())
}

/// Precondition checks shared by every engine's `process_block`: a schedule
/// must be present and both buffers must hold a full block at their offset.
fn check_process_block<'a>(
    slot: &'a Option<KeySchedule>,
    input: &[u8],
    in_off: usize,
    output: &[u8],
    out_off: usize,
) -> Result<&'a KeySchedule> {
    let schedule = slot.as_ref().ok_or(Error::NotInitialized {
        context: "AES engine",
    })?;
    validate::buffer("AES input", input.len(), in_off, AES_BLOCK_SIZE)?;
    validate::buffer("AES output", output.len(), out_off, AES_BLOCK_SIZE)?;
    Ok(schedule)
}

/// Final encryption round, shared by all three variants: SubBytes and
/// ShiftRows without MixColumns, then the last round key.
#[inline(always)]
fn final_round_enc(kw: &KeySchedule, c: [u32; 4]) -> [u32; 4] {
    let [c0, c1, c2, c3] = c;
    let k = kw.round_key(kw.rounds());
    [
        sbox_word(c0, c1, c2, c3) ^ k[0],
        sbox_word(c1, c2, c3, c0) ^ k[1],
        sbox_word(c2, c3, c0, c1) ^ k[2],
        sbox_word(c3, c0, c1, c2) ^ k[3],
    ]
}

/// Final decryption round, shared by all three variants
#[inline(always)]
fn final_round_dec(kw: &KeySchedule, c: [u32; 4]) -> [u32; 4] {
    let [c0, c1, c2, c3] = c;
    let k = kw.round_key(0);
    [
        inv_sbox_word(c0, c3, c2, c1) ^ k[0],
        inv_sbox_word(c1, c0, c3, c2) ^ k[1],
        inv_sbox_word(c2, c1, c0, c3) ^ k[2],
        inv_sbox_word(c3, c2, c1, c0) ^ k[3],
    ]
}

fn encrypt_balanced(kw: &KeySchedule, state: &mut [u32; 4]) {
    let k = kw.round_key(0);
    let mut c0 = state[0] ^ k[0];
    let mut c1 = state[1] ^ k[1];
    let mut c2 = state[2] ^ k[2];
    let mut c3 = state[3] ^ k[3];

    for round in 1..kw.rounds() {
        let k = kw.round_key(round);
        let r0 = t_word(c0, c1, c2, c3) ^ k[0];
        let r1 = t_word(c1, c2, c3, c0) ^ k[1];
        let r2 = t_word(c2, c3, c0, c1) ^ k[2];
        let r3 = t_word(c3, c0, c1, c2) ^ k[3];
        c0 = r0;
        c1 = r1;
        c2 = r2;
        c3 = r3;
    }

    *state = final_round_enc(kw, [c0, c1, c2, c3]);
}

fn decrypt_balanced(kw: &KeySchedule, state: &mut [u32; 4]) {
    let k = kw.round_key(kw.rounds());
    let mut c0 = state[0] ^ k[0];
    let mut c1 = state[1] ^ k[1];
    let mut c2 = state[2] ^ k[2];
    let mut c3 = state[3] ^ k[3];

    for round in (1..kw.rounds()).rev() {
        let k = kw.round_key(round);
        let r0 = tinv_word(c0, c3, c2, c1) ^ k[0];
        let r1 = tinv_word(c1, c0, c3, c2) ^ k[1];
        let r2 = tinv_word(c2, c1, c0, c3) ^ k[2];
        let r3 = tinv_word(c3, c2, c1, c0) ^ k[3];
        c0 = r0;
        c1 = r1;
        c2 = r2;
        c3 = r3;
    }

    *state = final_round_dec(kw, [c0, c1, c2, c3]);
}

fn encrypt_full(kw: &KeySchedule, state: &mut [u32; 4]) {
    let k = kw.round_key(0);
    let mut c0 = state[0] ^ k[0];
    let mut c1 = state[1] ^ k[1];
    let mut c2 = state[2] ^ k[2];
    let mut c3 = state[3] ^ k[3];

    for round in 1..kw.rounds() {
        let k = kw.round_key(round);
        let r0 = t_word_full(c0, c1, c2, c3) ^ k[0];
        let r1 = t_word_full(c1, c2, c3, c0) ^ k[1];
        let r2 = t_word_full(c2, c3, c0, c1) ^ k[2];
        let r3 = t_word_full(c3, c0, c1, c2) ^ k[3];
        c0 = r0;
        c1 = r1;
        c2 = r2;
        c3 = r3;
    }

    *state = final_round_enc(kw, [c0, c1, c2, c3]);
}

fn decrypt_full(kw: &KeySchedule, state: &mut [u32; 4]) {
    let k = kw.round_key(kw.rounds());
    let mut c0 = state[0] ^ k[0];
    let mut c1 = state[1] ^ k[1];
    let mut c2 = state[2] ^ k[2];
    let mut c3 = state[3] ^ k[3];

    for round in (1..kw.rounds()).rev() {
        let k = kw.round_key(round);
        let r0 = tinv_word_full(c0, c3, c2, c1) ^ k[0];
        let r1 = tinv_word_full(c1, c0, c3, c2) ^ k[1];
        let r2 = tinv_word_full(c2, c1, c0, c3) ^ k[2];
        let r3 = tinv_word_full(c3, c2, c1, c0) ^ k[3];
        c0 = r0;
        c1 = r1;
        c2 = r2;
        c3 = r3;
    }

    *state = final_round_dec(kw, [c0, c1, c2, c3]);
}

fn encrypt_light(kw: &KeySchedule, state: &mut [u32; 4]) {
    let k = kw.round_key(0);
    let mut c0 = state[0] ^ k[0];
    let mut c1 = state[1] ^ k[1];
    let mut c2 = state[2] ^ k[2];
    let mut c3 = state[3] ^ k[3];

    for round in 1..kw.rounds() {
        let k = kw.round_key(round);
        let r0 = mcol(sbox_word(c0, c1, c2, c3)) ^ k[0];
        let r1 = mcol(sbox_word(c1, c2, c3, c0)) ^ k[1];
        let r2 = mcol(sbox_word(c2, c3, c0, c1)) ^ k[2];
        let r3 = mcol(sbox_word(c3, c0, c1, c2)) ^ k[3];
        c0 = r0;
        c1 = r1;
        c2 = r2;
        c3 = r3;
    }

    *state = final_round_enc(kw, [c0, c1, c2, c3]);
}

fn decrypt_light(kw: &KeySchedule, state: &mut [u32; 4]) {
    let k = kw.round_key(kw.rounds());
    let mut c0 = state[0] ^ k[0];
    let mut c1 = state[1] ^ k[1];
    let mut c2 = state[2] ^ k[2];
    let mut c3 = state[3] ^ k[3];

    for round in (1..kw.rounds()).rev() {
        let k = kw.round_key(round);
        let r0 = inv_mcol(inv_sbox_word(c0, c3, c2, c1)) ^ k[0];
        let r1 = inv_mcol(inv_sbox_word(c1, c0, c3, c2)) ^ k[1];
        let r2 = inv_mcol(inv_sbox_word(c2, c1, c0, c3)) ^ k[2];
        let r3 = inv_mcol(inv_sbox_word(c3, c2, c1, c0)) ^ k[3];
        c0 = r0;
        c1 = r1;
        c2 = r2;
        c3 = r3;
    }

    *state = final_round_dec(kw, [c0, c1, c2, c3]);
}

/// AES engine, balanced-table variant: one 1 KB combined table per
/// direction plus twelve rotates per round. The default tradeoff.
#[derive(Clone, Debug, Default, Zeroize, ZeroizeOnDrop)]
pub struct Aes {
    schedule: Option<KeySchedule>,
}

/// AES engine, full-table variant: four pre-rotated 1 KB tables per
/// direction (8 KB total).
///
/// Fastest of the three, but its secret-indexed lookups span the most table
/// memory and are not constant-time; see the module documentation.
#[derive(Clone, Debug, Default, Zeroize, ZeroizeOnDrop)]
pub struct AesFast {
    schedule: Option<KeySchedule>,
}

/// AES engine, table-free variant: direct S-box lookups with MixColumns
/// computed arithmetically. Smallest footprint, slowest.
#[derive(Clone, Debug, Default, Zeroize, ZeroizeOnDrop)]
pub struct AesLight {
    schedule: Option<KeySchedule>,
}

impl Aes {
    /// Create an uninitialized engine
    pub fn new() -> Self {
        Self::default()
    }
}

impl AesFast {
    /// Create an uninitialized engine
    pub fn new() -> Self {
        Self::default()
    }
}

impl AesLight {
    /// Create an uninitialized engine
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlockCipher for Aes {
    fn init(&mut self, for_encryption: bool, params: CipherParameters<'_>) -> ApiResult<()> {
        init_schedule(&mut self.schedule, for_encryption, params)
    }

    fn algorithm_name(&self) -> &'static str {
        "AES"
    }

    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn process_block(
        &self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> ApiResult<usize> {
        let kw = check_process_block(&self.schedule, input, in_off, output, out_off)?;
        let mut state = unpack_block(&input[in_off..in_off + AES_BLOCK_SIZE]);
        if kw.for_encryption {
            encrypt_balanced(kw, &mut state);
        } else {
            decrypt_balanced(kw, &mut state);
        }
        pack_block(&state, &mut output[out_off..out_off + AES_BLOCK_SIZE]);
        Ok(AES_BLOCK_SIZE)
    }

    fn reset(&mut self) {
        // Stateless primitive: nothing carries over between blocks.
    }
}

impl BlockCipher for AesFast {
    fn init(&mut self, for_encryption: bool, params: CipherParameters<'_>) -> ApiResult<()> {
        init_schedule(&mut self.schedule, for_encryption, params)
    }

    fn algorithm_name(&self) -> &'static str {
        "AES"
    }

    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn process_block(
        &self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> ApiResult<usize> {
        let kw = check_process_block(&self.schedule, input, in_off, output, out_off)?;
        let mut state = unpack_block(&input[in_off..in_off + AES_BLOCK_SIZE]);
        if kw.for_encryption {
            encrypt_full(kw, &mut state);
        } else {
            decrypt_full(kw, &mut state);
        }
        pack_block(&state, &mut output[out_off..out_off + AES_BLOCK_SIZE]);
        Ok(AES_BLOCK_SIZE)
    }

    fn reset(&mut self) {
        // Stateless primitive: nothing carries over between blocks.
    }
}

impl BlockCipher for AesLight {
    fn init(&mut self, for_encryption: bool, params: CipherParameters<'_>) -> ApiResult<()> {
        init_schedule(&mut self.schedule, for_encryption, params)
    }

    fn algorithm_name(&self) -> &'static str {
        "AES"
    }

    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn process_block(
        &self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> ApiResult<usize> {
        let kw = check_process_block(&self.schedule, input, in_off, output, out_off)?;
        let mut state = unpack_block(&input[in_off..in_off + AES_BLOCK_SIZE]);
        if kw.for_encryption {
            encrypt_light(kw, &mut state);
        } else {
            decrypt_light(kw, &mut state);
        }
        pack_block(&state, &mut output[out_off..out_off + AES_BLOCK_SIZE]);
        Ok(AES_BLOCK_SIZE)
    }

    fn reset(&mut self) {
        // Stateless primitive: nothing carries over between blocks.
    }
}

// KeySchedule::expand derives kc and the round count directly from the
// key length, which is only sound for the lengths AES defines.
const _: () = assert!(AES_KEY_SIZES[0] == 16 && AES_KEY_SIZES[1] == 24 && AES_KEY_SIZES[2] == 32);
