//! Configuration loading tests.

use std::io::Write;

use quarry_core::config::QuarryConfig;
use quarry_core::errors::{ConfigError, QuarryErrorCode};

// ─── Helpers ───────────────────────────────────────────────────────────────

fn write_temp_config(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(text.as_bytes()).expect("write temp file");
    file
}

// ═══════════════════════════════════════════════════════════════════════════
// TOML PARSING
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_empty_config_uses_defaults() {
    let config = QuarryConfig::from_toml("").expect("empty config should parse");
    assert_eq!(
        config.declarations.effective_patterns(),
        vec!["BUILD", "BUILD.*"]
    );
    assert!(config.synthetic.effective_enabled());
    assert_eq!(config.synthetic.effective_cache_capacity(), 10_000);
}

#[test]
fn test_full_config_round_trip() {
    let text = r#"
[declarations]
patterns = ["TARGETS", "TARGETS.*"]
ignores = ["vendor/", "third_party/"]

[synthetic]
enabled = false
cache_capacity = 256
"#;
    let config = QuarryConfig::from_toml(text).expect("config should parse");
    assert_eq!(
        config.declarations.effective_patterns(),
        vec!["TARGETS", "TARGETS.*"]
    );
    assert!(config.declarations.is_ignored("vendor/x/BUILD"));
    assert!(!config.synthetic.effective_enabled());
    assert_eq!(config.synthetic.effective_cache_capacity(), 256);
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let text = r#"
[synthetic]
cache_capacity = 42
"#;
    let config = QuarryConfig::from_toml(text).expect("config should parse");
    assert!(config.synthetic.effective_enabled());
    assert_eq!(config.synthetic.effective_cache_capacity(), 42);
    assert_eq!(
        config.declarations.effective_patterns(),
        vec!["BUILD", "BUILD.*"]
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// FILE LOADING
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_load_from_file() {
    let file = write_temp_config("[synthetic]\nenabled = false\n");
    let config = QuarryConfig::load_from_file(file.path()).expect("file should load");
    assert!(!config.synthetic.effective_enabled());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = QuarryConfig::load_from_file(std::path::Path::new("/nonexistent/quarry.toml"));
    match result {
        Err(ConfigError::Io { path, .. }) => assert!(path.contains("quarry.toml")),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_load_malformed_file_is_parse_error() {
    let file = write_temp_config("[synthetic\nenabled = maybe");
    let result = QuarryConfig::load_from_file(file.path());
    match result {
        Err(err @ ConfigError::Parse { .. }) => {
            assert_eq!(err.error_code(), "CONFIG_PARSE_ERROR");
        }
        other => panic!("expected Parse error, got {:?}", other),
    }
}
