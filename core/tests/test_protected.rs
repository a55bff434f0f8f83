#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use kdbx_core::crypto::{ProcessKey, ProtectedBuffer};
    use proptest::prelude::*;

    #[test]
    fn reveal_returns_original_bytes() {
        let buf = ProtectedBuffer::new(b"correct horse");
        assert_eq!(buf.len(), 13);
        assert_eq!(buf.reveal().as_slice(), b"correct horse");
        assert_eq!(buf.reveal_string().as_str(), "correct horse");
    }

    #[test]
    fn resident_bytes_are_obfuscated() {
        let buf = ProtectedBuffer::from_text("correct horse battery staple");
        assert_ne!(buf.ciphertext(), b"correct horse battery staple");
    }

    #[test]
    fn buffers_under_one_key_get_distinct_nonces() {
        let key = Arc::new(ProcessKey::from_bytes([3; 32]));
        let a = ProtectedBuffer::with_key(key.clone(), b"same");
        let b = ProtectedBuffer::with_key(key, b"same");
        assert_ne!(a.nonce(), b.nonce());
        assert_ne!(a.ciphertext(), b.ciphertext());
        assert_eq!(a, b);
    }

    #[test]
    fn clone_reprotects_under_new_nonce() {
        let a = ProtectedBuffer::new(b"secret");
        let b = a.clone();
        assert_ne!(a.nonce(), b.nonce());
        assert_eq!(a, b);
    }

    #[test]
    fn empty_buffer() {
        let buf = ProtectedBuffer::new(b"");
        assert!(buf.is_empty());
        assert!(buf.reveal().is_empty());
    }

    #[test]
    fn debug_never_shows_contents() {
        let buf = ProtectedBuffer::from_text("topsecret");
        let dbg = format!("{:?}", buf);
        assert!(!dbg.contains("topsecret"));
        assert!(dbg.contains("len"));

        let key = ProcessKey::from_bytes([1; 32]);
        assert!(format!("{:?}", key).contains("<redacted>"));
    }

    #[test]
    fn global_key_is_shared() {
        let a = ProcessKey::global();
        let b = ProcessKey::global();
        assert!(Arc::ptr_eq(&a, &b));

        let c = ProcessKey::try_global().unwrap();
        assert!(Arc::ptr_eq(&a, &c));
    }

    #[test]
    fn try_new_protects_under_the_global_key() {
        let buf = ProtectedBuffer::try_new(b"entropy available").unwrap();
        assert_eq!(buf.reveal().as_slice(), b"entropy available");
        assert_ne!(buf.ciphertext(), b"entropy available");
    }

    proptest! {
        #[test]
        fn prop_reveal_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..200)) {
            let buf = ProtectedBuffer::new(&data);
            let revealed = buf.reveal();
            prop_assert_eq!(revealed.as_slice(), data.as_slice());
        }
    }
}
