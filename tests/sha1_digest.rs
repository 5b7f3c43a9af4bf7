use cryptolab::hash::sha1::{BLOCK_SIZE, H160_INIT, Sha1, Sha1Digest, compress, hash, pad, sha1};

fn expect_sha1_eq(input: &[u8], expected: &str) {
    let got = hash(input);

    assert_eq!(
        got, expected,
        "Digest mismatch for input {:?}\nExpected {}\nGot      {}",
        input, expected, got,
    );
}

// -------------------------------------------------------
// 1. STANDARD SHA-1 VECTORS (non-aligned input)
// -------------------------------------------------------

#[test]
fn sha1_abc_vector() {
    expect_sha1_eq(b"abc", "a9993e364706816aba3e25717850c26c9cd0d89d");
}

#[test]
fn sha1_known_phrase() {
    expect_sha1_eq(
        b"The quick brown fox jumps over the lazy dog",
        "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
    );
}

#[test]
fn sha1_length_field_spills_into_second_block() {
    // 55 bytes: 0x80 and the length still fit in one block
    expect_sha1_eq(&[b'a'; 55], "c1c8bbdc22796e28c0e15163d20899b65621d65a");

    // 56 bytes: the length needs an extra block
    expect_sha1_eq(&[b'a'; 56], "c2db330f6083854c99d4b5bfb6e8f29f201be699");
}

#[test]
fn sha1_multi_block_phrase() {
    let input = b"The quick brown fox jumps over the lazy dogThe quick brown fox jumps over the lazy dog";

    expect_sha1_eq(input, "86c842aa0249527aad022bab2f8a9b4d77b82b12");
}

// -------------------------------------------------------
// 2. BLOCK-ALIGNED INPUT (no padding applied)
// -------------------------------------------------------

#[test]
fn sha1_empty_input_is_initial_state() {
    expect_sha1_eq(b"", "67452301efcdab8998badcfe10325476c3d2e1f0");
    assert_eq!(sha1(b""), Sha1Digest::from(H160_INIT));
}

#[test]
fn sha1_single_aligned_block() {
    expect_sha1_eq(&[b'a'; 64], "da4968eb2e377c1f884e8f5283524bebe74ebdbd");
    expect_sha1_eq(&[0u8; 64], "92b404e556588ced6c1acd4ebf053f6809f73a93");
}

#[test]
fn sha1_two_aligned_blocks() {
    expect_sha1_eq(&[b'a'; 128], "0ba02949de712838689e76e5885bf88117ba3444");
}

// -------------------------------------------------------
// 3. PADDING
// -------------------------------------------------------

#[test]
fn pad_is_noop_when_aligned() {
    for len in [0usize, 64, 128, 192] {
        let input = vec![0x5Au8; len];
        assert_eq!(pad(&input), input);
    }
}

#[test]
fn pad_layout() {
    let padded = pad(b"abc");

    assert_eq!(padded.len(), BLOCK_SIZE);
    assert_eq!(&padded[..3], b"abc");
    assert_eq!(padded[3], 0x80);
    assert!(padded[4..56].iter().all(|&b| b == 0));
    assert_eq!(&padded[56..], &24u64.to_be_bytes());
}

#[test]
fn pad_always_reaches_block_multiple() {
    for len in 1..200usize {
        if len % BLOCK_SIZE == 0 {
            continue;
        }

        let padded = pad(&vec![1u8; len]);

        assert_eq!(padded.len() % BLOCK_SIZE, 0, "len {len}");
        assert_eq!(padded[len], 0x80);
        assert_eq!(
            &padded[padded.len() - 8..],
            &((len as u64) * 8).to_be_bytes()
        );
    }
}

// -------------------------------------------------------
// 4. ACCUMULATOR
// -------------------------------------------------------

#[test]
fn accumulator_matches_one_shot() {
    let input = [b'a'; 128];
    let mut hasher = Sha1::new();

    for chunk in input.chunks_exact(BLOCK_SIZE) {
        let block: &[u8; BLOCK_SIZE] = chunk.try_into().unwrap();
        hasher.update_block(block);
    }

    assert_eq!(hasher.blocks(), 2);
    assert_eq!(hasher.digest(), sha1(&input));
}

#[test]
fn compress_updates_state_in_place() {
    let mut state = H160_INIT;
    compress(&[0u8; 64], &mut state);

    assert_ne!(state, H160_INIT);
    assert_eq!(
        Sha1Digest::from(state).to_hex(),
        "92b404e556588ced6c1acd4ebf053f6809f73a93"
    );
}

#[test]
fn repeated_calls_do_not_share_state() {
    let first = hash(b"abc");
    let second = hash(b"abc");

    assert_eq!(first, second);
}

#[test]
fn digest_formats_as_forty_hex_chars() {
    let digest = sha1(b"abc");

    assert_eq!(digest.to_string().len(), 40);
    assert_eq!(digest.as_ref().len(), 20);
    assert_eq!(digest.as_ref()[0], 0xa9);
}
