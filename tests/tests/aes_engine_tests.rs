//! Contract conformance tests for the AES engine family
//!
//! These exercise the engines exactly the way composing collaborators do:
//! through `dyn BlockCipher`, with buffers and offsets supplied by the
//! caller.

use blockcrypt_api::{BlockCipher, CipherParameters, Error};
use blockcrypt_params::symmetric::AES_BLOCK_SIZE;
use blockcrypt_tests::{all_engines, process_one};

#[test]
fn engines_agree_through_trait_objects() {
    let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let plain = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    let expected = "69c4e0d86a7b0430d8cdb78070b4c55a";

    for (name, mut engine) in all_engines() {
        assert_eq!(engine.algorithm_name(), "AES", "{}", name);
        assert_eq!(engine.block_size(), AES_BLOCK_SIZE, "{}", name);

        let block: [u8; 16] = plain.as_slice().try_into().unwrap();
        let out = process_one(engine.as_mut(), true, &key, &block);
        assert_eq!(hex::encode(out), expected, "{}", name);
    }
}

#[test]
fn reinit_switches_direction() {
    let key = [0x24u8; 24];
    let block = [0x9cu8; 16];

    for (name, mut engine) in all_engines() {
        let ciphertext = process_one(engine.as_mut(), true, &key, &block);

        // Same engine instance, re-initialized for decryption
        engine.init(false, CipherParameters::Key(&key)).unwrap();
        let mut plaintext = [0u8; 16];
        engine
            .process_block(&ciphertext, 0, &mut plaintext, 0)
            .unwrap();
        assert_eq!(plaintext, block, "{}", name);
    }
}

#[test]
fn reinit_replaces_key() {
    let block = [0u8; 16];

    for (name, mut engine) in all_engines() {
        let under_a = process_one(engine.as_mut(), true, &[0xaa; 16], &block);
        let under_b = process_one(engine.as_mut(), true, &[0xbb; 16], &block);
        assert_ne!(under_a, under_b, "{}", name);

        // And back: the first key must be fully restored, not blended
        let again = process_one(engine.as_mut(), true, &[0xaa; 16], &block);
        assert_eq!(under_a, again, "{}", name);
    }
}

#[test]
fn error_paths_in_contract_order() {
    for (name, mut engine) in all_engines() {
        let mut out = [0u8; 16];

        // Uninitialized use comes first
        let err = engine
            .process_block(&[0u8; 16], 0, &mut out, 0)
            .unwrap_err();
        assert!(matches!(err, Error::NotInitialized { .. }), "{}", name);

        // Wrong parameter kind
        let err = engine
            .init(
                true,
                CipherParameters::KeyWithIv {
                    key: &[0u8; 16],
                    iv: &[0u8; 16],
                },
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { .. }), "{}", name);

        // Bad key length
        let err = engine.init(true, CipherParameters::Key(&[0u8; 17])).unwrap_err();
        assert!(matches!(err, Error::InvalidKey { .. }), "{}", name);

        // Short buffers after a good init
        engine.init(true, CipherParameters::Key(&[0u8; 16])).unwrap();
        let err = engine.process_block(&[0u8; 10], 0, &mut out, 0).unwrap_err();
        assert!(matches!(err, Error::BufferTooShort { .. }), "{}", name);
    }
}

#[test]
fn concurrent_block_processing_shares_one_engine() {
    use std::sync::Arc;
    use std::thread;

    let mut engine = blockcrypt_algorithms::Aes::new();
    engine.init(true, CipherParameters::Key(&[0x31u8; 32])).unwrap();
    let engine = Arc::new(engine);

    // An initialized engine only reads its schedule, so concurrent
    // process_block calls from several threads must all agree.
    let block = [0x77u8; 16];
    let mut expected = [0u8; 16];
    engine.process_block(&block, 0, &mut expected, 0).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for _ in 0..100 {
                    let mut out = [0u8; 16];
                    engine.process_block(&block, 0, &mut out, 0).unwrap();
                    assert_eq!(out, expected);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
