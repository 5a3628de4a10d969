//! Property-based tests for the AES engine family

use blockcrypt_algorithms::{Aes, AesFast, AesLight};
use blockcrypt_api::{BlockCipher, CipherParameters};
use blockcrypt_tests::process_one;
use proptest::prelude::*;

proptest! {
    #[test]
    fn aes128_roundtrip(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let mut engine = Aes::new();
        let ciphertext = process_one(&mut engine, true, &key, &block);
        let plaintext = process_one(&mut engine, false, &key, &ciphertext);
        prop_assert_eq!(plaintext, block);
    }

    #[test]
    fn aes192_roundtrip(key in any::<[u8; 24]>(), block in any::<[u8; 16]>()) {
        let mut engine = Aes::new();
        let ciphertext = process_one(&mut engine, true, &key, &block);
        let plaintext = process_one(&mut engine, false, &key, &ciphertext);
        prop_assert_eq!(plaintext, block);
    }

    #[test]
    fn aes256_roundtrip(key in any::<[u8; 32]>(), block in any::<[u8; 16]>()) {
        let mut engine = Aes::new();
        let ciphertext = process_one(&mut engine, true, &key, &block);
        let plaintext = process_one(&mut engine, false, &key, &ciphertext);
        prop_assert_eq!(plaintext, block);
    }

    #[test]
    fn variants_are_bit_identical_encrypting(
        key in any::<[u8; 32]>(),
        block in any::<[u8; 16]>()
    ) {
        let balanced = process_one(&mut Aes::new(), true, &key, &block);
        let full = process_one(&mut AesFast::new(), true, &key, &block);
        let light = process_one(&mut AesLight::new(), true, &key, &block);
        prop_assert_eq!(balanced, full);
        prop_assert_eq!(balanced, light);
    }

    #[test]
    fn variants_are_bit_identical_decrypting(
        key in any::<[u8; 24]>(),
        block in any::<[u8; 16]>()
    ) {
        let balanced = process_one(&mut Aes::new(), false, &key, &block);
        let full = process_one(&mut AesFast::new(), false, &key, &block);
        let light = process_one(&mut AesLight::new(), false, &key, &block);
        prop_assert_eq!(balanced, full);
        prop_assert_eq!(balanced, light);
    }

    #[test]
    fn cross_variant_roundtrip(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        // A block encrypted by one variant decrypts under any other
        let ciphertext = process_one(&mut AesFast::new(), true, &key, &block);
        let plaintext = process_one(&mut AesLight::new(), false, &key, &ciphertext);
        prop_assert_eq!(plaintext, block);
    }

    #[test]
    fn rejects_lengths_between_valid_sizes(len in 0usize..64) {
        prop_assume!(len != 16 && len != 24 && len != 32);
        let key = vec![0u8; len];
        let mut engine = Aes::new();
        prop_assert!(engine.init(true, CipherParameters::Key(&key)).is_err());
    }
}
