//! Constant tables for the AES engines
//!
//! Everything here is key-independent and derived at compile time from the
//! S-box and the fixed MixColumns matrix over GF(2⁸) with reduction
//! polynomial 0x11B. The tables are plain `static` arrays: read-only,
//! shared by every engine instance, never torn down.

/// The AES forward S-box (FIPS 197 figure 7)
pub(super) static S: [u8; 256] = [
    0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76,
    0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4, 0x72, 0xc0,
    0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71, 0xd8, 0x31, 0x15,
    0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2, 0xeb, 0x27, 0xb2, 0x75,
    0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6, 0xb3, 0x29, 0xe3, 0x2f, 0x84,
    0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb, 0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf,
    0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45, 0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8,
    0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5, 0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2,
    0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44, 0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73,
    0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a, 0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb,
    0xe0, 0x32, 0x3a, 0x0a, 0x49, 0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79,
    0xe7, 0xc8, 0x37, 0x6d, 0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08,
    0xba, 0x78, 0x25, 0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a,
    0x70, 0x3e, 0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e,
    0xe1, 0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
    0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb, 0x16,
];

/// The inverse S-box, the exact inverse permutation of [`S`]
pub(super) static SI: [u8; 256] = invert_sbox(&S);

/// Round constants: successive powers of x in GF(2⁸)
pub(super) static RCON: [u32; 30] = build_rcon();

/// Combined SubBytes+MixColumns table for encryption: `T0[v]` is the
/// MixColumns matrix applied to `S[v]`, packed little-endian at byte 0.
/// This is the only encryption table the balanced engine uses (1 KB).
pub(super) static T0: [u32; 256] = build_table(&S, [2, 1, 1, 3]);
/// [`T0`] pre-rotated left by 8 bits (full-table engine only)
pub(super) static T1: [u32; 256] = rotate_table(&T0, 8);
/// [`T0`] pre-rotated left by 16 bits (full-table engine only)
pub(super) static T2: [u32; 256] = rotate_table(&T0, 16);
/// [`T0`] pre-rotated left by 24 bits (full-table engine only)
pub(super) static T3: [u32; 256] = rotate_table(&T0, 24);

/// Combined InvSubBytes+InvMixColumns table for decryption
pub(super) static TINV0: [u32; 256] = build_table(&SI, [14, 9, 13, 11]);
/// [`TINV0`] pre-rotated left by 8 bits (full-table engine only)
pub(super) static TINV1: [u32; 256] = rotate_table(&TINV0, 8);
/// [`TINV0`] pre-rotated left by 16 bits (full-table engine only)
pub(super) static TINV2: [u32; 256] = rotate_table(&TINV0, 16);
/// [`TINV0`] pre-rotated left by 24 bits (full-table engine only)
pub(super) static TINV3: [u32; 256] = rotate_table(&TINV0, 24);

/// Multiply by x in GF(2⁸)
const fn xtime(a: u8) -> u8 {
    (a << 1) ^ (((a >> 7) & 1) * 0x1b)
}

/// Multiply two bytes in GF(2⁸)
const fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    while b != 0 {
        if b & 1 != 0 {
            p ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    p
}

const fn invert_sbox(sbox: &[u8; 256]) -> [u8; 256] {
    let mut inv = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        inv[sbox[i] as usize] = i as u8;
        i += 1;
    }
    inv
}

const fn build_rcon() -> [u32; 30] {
    let mut rcon = [0u32; 30];
    let mut v = 1u8;
    let mut i = 0;
    while i < 30 {
        rcon[i] = v as u32;
        v = xtime(v);
        i += 1;
    }
    rcon
}

/// Build a combined substitution+diffusion table: entry `v` is the matrix
/// column `coeffs` multiplied by `sbox[v]`, packed little-endian.
const fn build_table(sbox: &[u8; 256], coeffs: [u8; 4]) -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let s = sbox[i];
        table[i] = gf_mul(coeffs[0], s) as u32
            | (gf_mul(coeffs[1], s) as u32) << 8
            | (gf_mul(coeffs[2], s) as u32) << 16
            | (gf_mul(coeffs[3], s) as u32) << 24;
        i += 1;
    }
    table
}

const fn rotate_table(table: &[u32; 256], bits: u32) -> [u32; 256] {
    let mut rotated = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        rotated[i] = table[i].rotate_left(bits);
        i += 1;
    }
    rotated
}
