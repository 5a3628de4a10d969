//! Shared helpers for the blockcrypt integration and property tests

use blockcrypt_algorithms::{Aes, AesFast, AesLight};
use blockcrypt_api::{BlockCipher, CipherParameters};

/// One uninitialized engine of each AES variant, labeled for diagnostics
pub fn all_engines() -> Vec<(&'static str, Box<dyn BlockCipher>)> {
    vec![
        ("balanced", Box::new(Aes::new()) as Box<dyn BlockCipher>),
        ("full", Box::new(AesFast::new())),
        ("light", Box::new(AesLight::new())),
    ]
}

/// Encrypt or decrypt one block with a fresh init
pub fn process_one(
    engine: &mut dyn BlockCipher,
    for_encryption: bool,
    key: &[u8],
    block: &[u8; 16],
) -> [u8; 16] {
    engine
        .init(for_encryption, CipherParameters::Key(key))
        .expect("valid key");
    let mut out = [0u8; 16];
    engine
        .process_block(block, 0, &mut out, 0)
        .expect("buffers hold a full block");
    out
}
