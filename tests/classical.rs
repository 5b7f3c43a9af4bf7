use cryptolab::classical::{
    ClassicalCipherError, affine_block_decrypt, affine_block_encrypt, monoalphabetic_substitution,
    vernam,
};

const PLAIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const QWERTY: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";

// -------------------------------------------------------
// 1. VERNAM
// -------------------------------------------------------

#[test]
fn vernam_roundtrip() {
    let message = b"one time pad";
    let key = b"\x13\x37\xc0\xff\xee\x42\x00\x99\xab\xcd\xef\x01";

    let ciphertext = vernam(message, key).unwrap();
    assert_ne!(&ciphertext[..], &message[..]);
    assert_eq!(vernam(&ciphertext, key).unwrap(), message);
}

#[test]
fn vernam_uses_key_prefix() {
    assert_eq!(vernam(&[0xF0, 0x0F], &[0xFF, 0xFF, 0x00]).unwrap(), [0x0F, 0xF0]);
    assert!(vernam(b"", b"").unwrap().is_empty());
}

#[test]
fn vernam_short_key() {
    assert_eq!(
        vernam(b"hello", b"hey").unwrap_err(),
        ClassicalCipherError::KeyTooShort { key: 3, message: 5 }
    );
}

// -------------------------------------------------------
// 2. SUBSTITUTION
// -------------------------------------------------------

#[test]
fn substitution_known_value() {
    assert_eq!(monoalphabetic_substitution("hello", PLAIN, QWERTY).unwrap(), "ITSSG");
}

#[test]
fn substitution_inverse_swaps_alphabets() {
    let ciphertext = monoalphabetic_substitution("Attack", PLAIN, QWERTY).unwrap();

    assert_eq!(
        monoalphabetic_substitution(&ciphertext, QWERTY, PLAIN).unwrap(),
        "ATTACK"
    );
}

#[test]
fn substitution_errors() {
    assert_eq!(
        monoalphabetic_substitution("abc", PLAIN, "XYZ").unwrap_err(),
        ClassicalCipherError::AlphabetMismatch { plain: 26, cipher: 3 }
    );
    assert_eq!(
        monoalphabetic_substitution("no spaces", PLAIN, QWERTY).unwrap_err(),
        ClassicalCipherError::InvalidCharacter(' ')
    );
}

// -------------------------------------------------------
// 3. AFFINE DIGRAPHS
// -------------------------------------------------------

#[test]
fn affine_known_values() {
    assert_eq!(affine_block_encrypt("HELLOWORLD", 5, 8).unwrap(), "KCFLWOVPDX");
    assert_eq!(affine_block_encrypt("ab", 3, 0).unwrap(), "AD");
    assert_eq!(affine_block_encrypt("zz", 1, 1).unwrap(), "AA");
}

#[test]
fn affine_roundtrip() {
    for (a, b) in [(1u64, 0u64), (5, 8), (677, 1000), (675, 3)] {
        let ciphertext = affine_block_encrypt("cryptography", a, b).unwrap();

        assert_eq!(affine_block_decrypt(&ciphertext, a, b).unwrap(), "CRYPTOGRAPHY");
    }
}

#[test]
fn affine_errors() {
    assert_eq!(
        affine_block_encrypt("ABCD", 2, 1).unwrap_err(),
        ClassicalCipherError::NonInvertibleMultiplier(2)
    );
    assert_eq!(
        affine_block_decrypt("ABCD", 13, 1).unwrap_err(),
        ClassicalCipherError::NonInvertibleMultiplier(13)
    );
    assert_eq!(
        affine_block_encrypt("ABC", 5, 1).unwrap_err(),
        ClassicalCipherError::OddLength(3)
    );
    assert_eq!(
        affine_block_encrypt("AB1D", 5, 1).unwrap_err(),
        ClassicalCipherError::InvalidCharacter('1')
    );
}
