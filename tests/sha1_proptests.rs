//! Property-based tests comparing the hash against the `sha1` crate.

use cryptolab::hash::sha1::{BLOCK_SIZE, sha1 as variant_sha1};
use proptest::prelude::*;
use sha1::Digest;

proptest! {
    /// Inputs that are not block-aligned receive standard padding and so
    /// hash to standard SHA-1.
    #[test]
    fn unaligned_input_matches_reference(
        input in proptest::collection::vec(any::<u8>(), 1..1024)
            .prop_filter("block-aligned", |v| v.len() % BLOCK_SIZE != 0),
    ) {
        let reference = sha1::Sha1::digest(&input);
        let digest = variant_sha1(&input);

        prop_assert_eq!(digest.as_ref(), reference.as_slice());
    }

    /// Block-aligned inputs skip padding and therefore differ from standard
    /// SHA-1.
    #[test]
    fn aligned_input_differs_from_reference(
        blocks in 1usize..6,
        fill in any::<u8>(),
    ) {
        let input = vec![fill; blocks * BLOCK_SIZE];
        let reference = sha1::Sha1::digest(&input);
        let digest = variant_sha1(&input);

        prop_assert_ne!(digest.as_ref(), reference.as_slice());
    }
}
