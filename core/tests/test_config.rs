#[cfg(test)]
mod tests {
    use std::io::Write;

    use kdbx_core::compression::CompressionMode;
    use kdbx_core::config::{CodecConfig, ConfigError};
    use kdbx_core::hashed_block::IndexPolicy;

    #[test]
    fn defaults() {
        let cfg = CodecConfig::default();
        assert_eq!(cfg.default_compression, CompressionMode::Gzip);
        assert_eq!(cfg.default_transform_rounds, 6000);
        assert_eq!(cfg.max_transform_rounds, u32::MAX);
        assert_eq!(cfg.gzip_level, 6);
        assert!(!cfg.strict_block_index);
        assert_eq!(cfg.index_policy(), IndexPolicy::Lenient);
        cfg.validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = CodecConfig::from_json_str(
            r#"{ "default_compression": "none", "strict_block_index": true }"#,
        )
        .unwrap();
        assert_eq!(cfg.default_compression, CompressionMode::None);
        assert_eq!(cfg.index_policy(), IndexPolicy::Strict);
        assert_eq!(cfg.default_transform_rounds, 6000);
    }

    #[test]
    fn validation_errors() {
        assert!(matches!(
            CodecConfig::from_json_str(r#"{ "default_transform_rounds": 10, "max_transform_rounds": 5 }"#),
            Err(ConfigError::RoundsAboveCap { rounds: 10, max: 5 })
        ));
        assert!(matches!(
            CodecConfig::from_json_str(r#"{ "gzip_level": 12 }"#),
            Err(ConfigError::GzipLevel(12))
        ));
        assert!(matches!(
            CodecConfig::from_json_str(r#"{ "default_compression": "zstd" }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn from_path_reads_file() {
        let path = std::env::temp_dir().join(format!("kdbx-core-config-{}.json", std::process::id()));
        {
            let mut f = std::fs::File::create(&path).unwrap();
            f.write_all(br#"{ "default_transform_rounds": 100 }"#).unwrap();
        }
        let cfg = CodecConfig::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(cfg.default_transform_rounds, 100);

        assert!(matches!(
            CodecConfig::from_path(path.with_extension("missing")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn serializes_back_to_json() {
        let cfg = CodecConfig::default();
        let text = serde_json::to_string(&cfg).unwrap();
        assert!(text.contains("\"default_compression\":\"gzip\""));
        assert_eq!(CodecConfig::from_json_str(&text).unwrap(), cfg);
    }
}
