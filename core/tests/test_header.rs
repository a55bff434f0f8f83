#[cfg(test)]
mod tests {
    use kdbx_core::buffer::BlockReader;
    use kdbx_core::compression::CompressionMode;
    use kdbx_core::constants::*;
    use kdbx_core::crypto::AES256_CBC_ID;
    use kdbx_core::headers::{
        decode_header, decode_header_with_limit, encode_header, ContainerOptions, HeaderError,
        HeaderFieldId,
    };

    fn fixed_options() -> ContainerOptions {
        ContainerOptions {
            cipher: AES256_CBC_ID,
            compression: CompressionMode::Gzip,
            transform_rounds: 6000,
            master_seed: [1; 32],
            transform_seed: [2; 32],
            encryption_iv: [3; 16],
            protected_stream_key: [4; 32],
            stream_start_bytes: [5; 32],
        }
    }

    /// Hand-built header: preamble plus the given raw fields and an end marker.
    fn raw_header(fields: &[(u8, Vec<u8>)]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&FILE_SIGNATURE_1);
        out.extend_from_slice(&FILE_SIGNATURE_2);
        out.extend_from_slice(&FILE_VERSION);
        for (id, payload) in fields {
            out.push(*id);
            out.extend_from_slice(&(payload.len() as u16).to_le_bytes());
            out.extend_from_slice(payload);
        }
        out.push(0);
        out.extend_from_slice(&4u16.to_le_bytes());
        out.extend_from_slice(&END_OF_HEADER);
        out
    }

    fn all_fields() -> Vec<(u8, Vec<u8>)> {
        vec![
            (2, AES256_CBC_ID.as_bytes().to_vec()),
            (3, 1u32.to_le_bytes().to_vec()),
            (4, vec![1; 32]),
            (5, vec![2; 32]),
            (6, 6000u64.to_le_bytes().to_vec()),
            (7, vec![3; 16]),
            (8, vec![4; 32]),
            (9, vec![5; 32]),
            (10, 2u32.to_le_bytes().to_vec()),
        ]
    }

    fn replace_field(id: u8, payload: Vec<u8>) -> Vec<u8> {
        let fields: Vec<_> = all_fields()
            .into_iter()
            .map(|(fid, p)| if fid == id { (fid, payload.clone()) } else { (fid, p) })
            .collect();
        raw_header(&fields)
    }

    #[test]
    fn encode_then_decode_preserves_every_field() {
        let opts = fixed_options();
        let bytes = encode_header(&opts);
        let (decoded, consumed) = decode_header(&bytes).unwrap();
        assert_eq!(consumed, bytes.len());
        assert_eq!(decoded, opts);
    }

    #[test]
    fn encoded_header_starts_with_signatures_and_version() {
        let bytes = encode_header(&fixed_options());
        assert_eq!(&bytes[0..4], &[0x03, 0xD9, 0xA2, 0x9A]);
        assert_eq!(&bytes[4..8], &[0x67, 0xFB, 0x4B, 0xB5]);
        assert_eq!(&bytes[8..12], &[0x01, 0x00, 0x03, 0x00]);
        assert_eq!(&bytes[bytes.len() - 4..], b"\r\n\r\n");
    }

    #[test]
    fn encoded_fields_are_tlv_with_le_lengths() {
        let bytes = encode_header(&fixed_options());
        let mut r = BlockReader::new(&bytes[12..]);
        let mut seen = Vec::new();
        loop {
            let id = r.next_u8().unwrap();
            let len = r.next_u16_le().unwrap() as usize;
            let payload = r.next_buffer(len).unwrap();
            let field = HeaderFieldId::try_from(id).unwrap();
            if let Some(need) = field.fixed_len() {
                assert_eq!(payload.len(), need, "{:?}", field);
            }
            seen.push(field);
            if field == HeaderFieldId::EndOfHeader {
                break;
            }
        }
        assert_eq!(seen.len(), 10);
        assert!(seen.contains(&HeaderFieldId::InnerRandomStreamId));
    }

    #[test]
    fn hand_built_header_decodes() {
        let bytes = raw_header(&all_fields());
        let (opts, consumed) = decode_header(&bytes).unwrap();
        assert_eq!(consumed, bytes.len());
        assert_eq!(opts, fixed_options());
    }

    #[test]
    fn consumed_excludes_trailing_ciphertext() {
        let mut bytes = encode_header(&fixed_options());
        let header_len = bytes.len();
        bytes.extend_from_slice(&[0xEE; 48]);
        let (_, consumed) = decode_header(&bytes).unwrap();
        assert_eq!(consumed, header_len);
    }

    #[test]
    fn bad_signature_is_format_error() {
        let mut bytes = encode_header(&fixed_options());
        bytes[0] ^= 0xFF;
        let err = decode_header(&bytes).unwrap_err();
        assert!(matches!(err, HeaderError::InvalidSignature { which: 1, .. }));
        assert!(err.is_format_error());

        let mut bytes = encode_header(&fixed_options());
        bytes[7] ^= 0xFF;
        assert!(matches!(
            decode_header(&bytes).unwrap_err(),
            HeaderError::InvalidSignature { which: 2, .. }
        ));
    }

    #[test]
    fn other_major_version_is_rejected() {
        let mut bytes = encode_header(&fixed_options());
        bytes[10] = 4; // major 4
        let err = decode_header(&bytes).unwrap_err();
        assert!(matches!(err, HeaderError::UnsupportedVersion { major: 4, minor: 1 }));
        assert!(err.is_format_error());
    }

    #[test]
    fn newer_minor_version_is_accepted() {
        let mut bytes = encode_header(&fixed_options());
        bytes[8] = 9; // minor 9
        assert!(decode_header(&bytes).is_ok());
    }

    #[test]
    fn wrong_fixed_length_is_malformed() {
        let bytes = replace_field(4, vec![1; 31]);
        let err = decode_header(&bytes).unwrap_err();
        assert!(matches!(
            err,
            HeaderError::InvalidFieldLength { field: HeaderFieldId::MasterSeed, have: 31, need: 32 }
        ));
        assert!(!err.is_format_error());

        let bytes = replace_field(7, vec![3; 8]);
        assert!(matches!(
            decode_header(&bytes).unwrap_err(),
            HeaderError::InvalidFieldLength { field: HeaderFieldId::EncryptionIv, .. }
        ));
    }

    #[test]
    fn unknown_cipher_is_rejected() {
        let bytes = replace_field(2, vec![0xAA; 16]);
        assert!(matches!(decode_header(&bytes).unwrap_err(), HeaderError::UnknownCipher { .. }));
    }

    #[test]
    fn unknown_compression_is_rejected() {
        let bytes = replace_field(3, 7u32.to_le_bytes().to_vec());
        assert!(matches!(
            decode_header(&bytes).unwrap_err(),
            HeaderError::UnknownCompression { raw: 7 }
        ));
    }

    #[test]
    fn rounds_with_high_word_set_are_rejected() {
        let bytes = replace_field(6, (1u64 << 32 | 5).to_le_bytes().to_vec());
        assert!(matches!(
            decode_header(&bytes).unwrap_err(),
            HeaderError::TransformRoundsTooLarge { high: 1 }
        ));
    }

    #[test]
    fn rounds_above_configured_limit_are_rejected() {
        let bytes = encode_header(&fixed_options());
        assert!(decode_header_with_limit(&bytes, 6000).is_ok());
        assert!(matches!(
            decode_header_with_limit(&bytes, 5999).unwrap_err(),
            HeaderError::RoundsExceedLimit { rounds: 6000, max: 5999 }
        ));
    }

    #[test]
    fn non_salsa20_inner_stream_is_rejected() {
        let bytes = replace_field(10, 1u32.to_le_bytes().to_vec());
        assert!(matches!(
            decode_header(&bytes).unwrap_err(),
            HeaderError::UnsupportedInnerStream { raw: 1 }
        ));
    }

    #[test]
    fn missing_field_is_reported() {
        let fields: Vec<_> = all_fields().into_iter().filter(|(id, _)| *id != 9).collect();
        let bytes = raw_header(&fields);
        assert!(matches!(
            decode_header(&bytes).unwrap_err(),
            HeaderError::MissingField { field: HeaderFieldId::StreamStartBytes }
        ));
    }

    #[test]
    fn comment_and_unknown_fields_are_skipped() {
        let mut fields = vec![(1u8, b"exported".to_vec()), (200u8, vec![0xFF; 5])];
        fields.extend(all_fields());
        let bytes = raw_header(&fields);
        let (opts, consumed) = decode_header(&bytes).unwrap();
        assert_eq!(consumed, bytes.len());
        assert_eq!(opts, fixed_options());
    }

    #[test]
    fn truncated_header_is_malformed() {
        let bytes = encode_header(&fixed_options());
        for cut in [PREAMBLE_LEN, 20, bytes.len() - 1] {
            let err = decode_header(&bytes[..cut]).unwrap_err();
            assert!(matches!(err, HeaderError::Truncated(_)), "cut {}: {:?}", cut, err);
            assert!(!err.is_format_error());
        }
    }

    #[test]
    fn input_shorter_than_preamble_is_format_error() {
        let bytes = encode_header(&fixed_options());
        for cut in [0usize, 3, 8, PREAMBLE_LEN - 1] {
            let err = decode_header(&bytes[..cut]).unwrap_err();
            assert!(
                matches!(err, HeaderError::TruncatedPreamble { have } if have == cut),
                "cut {}: {:?}",
                cut,
                err
            );
            assert!(err.is_format_error());
        }
    }

    #[test]
    fn generated_options_are_fresh() {
        let a = ContainerOptions::generate(AES256_CBC_ID, CompressionMode::None, 10).unwrap();
        let b = ContainerOptions::generate(AES256_CBC_ID, CompressionMode::None, 10).unwrap();
        assert_ne!(a.master_seed, b.master_seed);
        assert_ne!(a.encryption_iv, b.encryption_iv);
        assert_ne!(a.stream_start_bytes, b.stream_start_bytes);
        assert_eq!(a.transform_rounds, 10);
    }

    #[test]
    fn debug_output_redacts_stream_key() {
        let dbg = format!("{:?}", fixed_options());
        assert!(dbg.contains("<redacted>"));
        assert!(!dbg.contains(&hex::encode([4u8; 32])));
    }
}
