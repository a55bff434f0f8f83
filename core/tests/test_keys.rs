#[cfg(test)]
mod tests {
    use kdbx_core::crypto::{sha256, sha256_concat};
    use kdbx_core::keys::{
        generate_key_file, CompositeKey, CredentialSource, KeyError, KeyFile, KeyFileKind,
        PasswordKey,
    };
    use kdbx_core::utils::from_base64;
    use proptest::prelude::*;

    struct Fixed {
        hash: [u8; 32],
        priority: i32,
    }

    impl CredentialSource for Fixed {
        fn hash(&self) -> [u8; 32] {
            self.hash
        }
        fn priority(&self) -> i32 {
            self.priority
        }
    }

    #[test]
    fn password_key_is_sha256_of_utf8() {
        let pw = PasswordKey::new("pässword");
        assert_eq!(pw.hash(), sha256("pässword".as_bytes()));
        assert_eq!(pw.priority(), 100);
        assert_eq!(format!("{:?}", pw), "PasswordKey(<redacted>)");
    }

    #[test]
    fn empty_composite_has_no_credentials() {
        let key = CompositeKey::new();
        assert!(key.is_empty());
        assert!(matches!(key.hash(), Err(KeyError::NoCredentials)));
        assert!(matches!(key.master_key(&[0; 32], &[0; 32], 1), Err(KeyError::NoCredentials)));
    }

    #[test]
    fn from_sources_matches_builder() {
        let built = CompositeKey::new()
            .with(Fixed { hash: [1; 32], priority: 5 })
            .with(Fixed { hash: [2; 32], priority: 1 });
        let boxed: Vec<Box<dyn CredentialSource>> = vec![
            Box::new(Fixed { hash: [1; 32], priority: 5 }),
            Box::new(Fixed { hash: [2; 32], priority: 1 }),
        ];
        let from_vec = CompositeKey::from_sources(boxed);

        assert_eq!(from_vec.len(), 2);
        assert_eq!(*from_vec.hash().unwrap(), *built.hash().unwrap());
        assert_eq!(*from_vec.hash().unwrap(), sha256_concat(&[&[2u8; 32], &[1u8; 32]]));
    }

    #[test]
    fn sources_are_combined_by_ascending_priority() {
        let pw = PasswordKey::new("pw");
        let kf = KeyFile::from_bytes(&[9u8; 32]).unwrap();
        let expected = sha256_concat(&[&pw.hash(), &kf.hash()]);

        // Insert the key file first; the password still goes first.
        let key = CompositeKey::new().with(KeyFile::from_bytes(&[9u8; 32]).unwrap()).with(pw);
        assert_eq!(key.len(), 2);
        assert_eq!(*key.hash().unwrap(), expected);
    }

    #[test]
    fn equal_priorities_keep_insertion_order() {
        let a = Fixed { hash: [1; 32], priority: 5 };
        let b = Fixed { hash: [2; 32], priority: 5 };
        let key = CompositeKey::new().with(a).with(b);
        assert_eq!(*key.hash().unwrap(), sha256_concat(&[&[1u8; 32], &[2u8; 32]]));
    }

    #[test]
    fn clear_removes_all_sources() {
        let mut key = CompositeKey::new();
        key.add(PasswordKey::new("a")).add(PasswordKey::new("b"));
        assert_eq!(key.len(), 2);
        key.clear();
        assert!(matches!(key.hash(), Err(KeyError::NoCredentials)));
    }

    #[test]
    fn key_file_kinds() {
        let raw = KeyFile::from_bytes(&[7u8; 32]).unwrap();
        assert_eq!(raw.kind(), KeyFileKind::Raw);
        assert_eq!(raw.hash(), [7u8; 32]);

        let hex_text = "ab".repeat(32);
        let hexed = KeyFile::from_bytes(hex_text.as_bytes()).unwrap();
        assert_eq!(hexed.kind(), KeyFileKind::Hex);
        assert_eq!(hexed.hash(), [0xAB; 32]);

        let other = KeyFile::from_bytes(b"just some file contents").unwrap();
        assert_eq!(other.kind(), KeyFileKind::Hashed);
        assert_eq!(other.hash(), sha256(b"just some file contents"));
        assert_eq!(other.priority(), 200);

        // 64 bytes that are not hex fall back to hashing
        let not_hex = [b'z'; 64];
        let hashed = KeyFile::from_bytes(&not_hex).unwrap();
        assert_eq!(hashed.kind(), KeyFileKind::Hashed);
    }

    #[test]
    fn xml_key_file_with_bad_data_is_rejected() {
        let short = "<KeyFile><Key><Data>AAAA</Data></Key></KeyFile>";
        assert!(matches!(KeyFile::from_bytes(short.as_bytes()), Err(KeyError::InvalidKeyFile(_))));

        let not_b64 = "<KeyFile><Key><Data>@@@@</Data></Key></KeyFile>";
        assert!(matches!(KeyFile::from_bytes(not_b64.as_bytes()), Err(KeyError::InvalidKeyFile(_))));
    }

    #[test]
    fn generated_key_file_parses_back() {
        let xml = generate_key_file().unwrap();
        assert!(xml.contains("<KeyFile>"));
        assert!(xml.contains("<Version>1.00</Version>"));

        let start = xml.find("<Data>").unwrap() + "<Data>".len();
        let end = xml.find("</Data>").unwrap();
        let data = from_base64(&xml[start..end]).unwrap();
        assert_eq!(data.len(), 32);

        let kf = KeyFile::from_bytes(xml.as_bytes()).unwrap();
        assert_eq!(kf.kind(), KeyFileKind::Xml);
        assert_eq!(kf.hash().as_slice(), data.as_slice());
    }

    #[test]
    fn generated_key_files_differ() {
        assert_ne!(generate_key_file().unwrap(), generate_key_file().unwrap());
    }

    proptest! {
        #[test]
        fn prop_order_independent_of_insertion(pw in ".{0,24}", file in proptest::collection::vec(any::<u8>(), 1..100)) {
            let a = CompositeKey::new()
                .with(PasswordKey::new(&pw))
                .with(KeyFile::from_bytes(&file).unwrap());
            let b = CompositeKey::new()
                .with(KeyFile::from_bytes(&file).unwrap())
                .with(PasswordKey::new(&pw));
            prop_assert_eq!(*a.hash().unwrap(), *b.hash().unwrap());
        }
    }
}
