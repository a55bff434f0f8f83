#[cfg(test)]
mod tests {
    use kdbx_core::crypto::{derive_master_key, sha256, transform_key, CryptoError};
    use kdbx_core::keys::{CompositeKey, PasswordKey};
    use proptest::prelude::*;

    const MASTER_SEED: [u8; 32] = [1; 32];
    const TRANSFORM_SEED: [u8; 32] = [2; 32];

    fn composite_of_password() -> [u8; 32] {
        sha256(&sha256(b"password"))
    }

    #[test]
    fn composite_hash_of_single_password() {
        assert_eq!(
            hex::encode(composite_of_password()),
            "73641c99f7719f57d8f4beb11a303afcd190243a51ced8782ca6d3dbe014d146"
        );
        let key = CompositeKey::new().with(PasswordKey::new("password"));
        assert_eq!(*key.hash().unwrap(), composite_of_password());
    }

    #[test]
    fn known_answers() {
        let composite = composite_of_password();
        for (rounds, expected) in [
            (0u64, "d1c6f1fbc704ef2712a91fc6be2089f3f362f986dd42fee9b85e02074295549f"),
            (3, "f82249dcffc26a393734fb1abc394383de6b0869628c2e53372a068249d5657b"),
            (6000, "347e7ed6f3154cf2bd7f670761f873f826ecf7d74730ee5c58b63528bf03ff94"),
        ] {
            let key = derive_master_key(&composite, &MASTER_SEED, &TRANSFORM_SEED, rounds).unwrap();
            assert_eq!(hex::encode(*key), expected, "rounds {}", rounds);
        }
    }

    #[test]
    fn composite_master_key_matches_free_function() {
        let key = CompositeKey::new().with(PasswordKey::new("password"));
        let a = key.master_key(&MASTER_SEED, &TRANSFORM_SEED, 3).unwrap();
        let b = derive_master_key(&composite_of_password(), &MASTER_SEED, &TRANSFORM_SEED, 3).unwrap();
        assert_eq!(*a, *b);
    }

    #[test]
    fn zero_rounds_leaves_composite_untouched() {
        let composite = composite_of_password();
        let t = transform_key(&composite, &TRANSFORM_SEED, 0).unwrap();
        assert_eq!(*t, composite);
    }

    #[test]
    fn rejects_wrong_lengths() {
        let composite = composite_of_password();
        assert!(matches!(
            transform_key(&composite[..31], &TRANSFORM_SEED, 1),
            Err(CryptoError::InvalidKeyLen { expected: 32, actual: 31 })
        ));
        assert!(matches!(
            transform_key(&composite, &TRANSFORM_SEED[..16], 1),
            Err(CryptoError::InvalidKeyLen { .. })
        ));
        assert!(matches!(
            derive_master_key(&composite, &MASTER_SEED[..8], &TRANSFORM_SEED, 1),
            Err(CryptoError::InvalidKeyLen { .. })
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_seeds_change_the_key(m1 in any::<[u8; 32]>(), m2 in any::<[u8; 32]>(), t in any::<[u8; 32]>()) {
            let composite = composite_of_password();
            let k1 = derive_master_key(&composite, &m1, &t, 2).unwrap();
            let k2 = derive_master_key(&composite, &m2, &t, 2).unwrap();
            if m1 != m2 {
                prop_assert_ne!(*k1, *k2);
            } else {
                prop_assert_eq!(*k1, *k2);
            }
        }

        #[test]
        fn prop_rounds_are_sequential(r in 0u64..20, t in any::<[u8; 32]>()) {
            // transform(r + 1) == transform(1) applied to transform(r)
            let composite = composite_of_password();
            let step = transform_key(&composite, &t, r).unwrap();
            let next = transform_key(step.as_slice(), &t, 1).unwrap();
            let direct = transform_key(&composite, &t, r + 1).unwrap();
            prop_assert_eq!(*next, *direct);
        }
    }
}
