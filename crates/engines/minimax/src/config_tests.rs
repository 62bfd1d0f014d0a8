use super::*;

#[test]
fn test_empty_config_uses_defaults() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.depth, DEFAULT_DEPTH);
    assert_eq!(config.terminal_scoring, TerminalScoring::Material);
}

#[test]
fn test_full_config() {
    let config = EngineConfig::from_toml_str(
        r#"
        depth = 4
        terminal_scoring = "outcome"
        "#,
    )
    .unwrap();
    assert_eq!(config.depth, 4);
    assert_eq!(config.terminal_scoring, TerminalScoring::Outcome);
}

#[test]
fn test_depth_out_of_range() {
    for text in ["depth = 0", "depth = 7"] {
        let err = EngineConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, ConfigError::DepthOutOfRange(_, MAX_DEPTH)), "{}", text);
    }
}

#[test]
fn test_unknown_fields_rejected() {
    let err = EngineConfig::from_toml_str("quiescence = true").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_bad_terminal_scoring_rejected() {
    let err = EngineConfig::from_toml_str(r#"terminal_scoring = "infinity""#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_with_depth() {
    let config = EngineConfig::default().with_depth(3).unwrap();
    assert_eq!(config.depth, 3);
    assert!(EngineConfig::default().with_depth(9).is_err());
}

#[test]
fn test_load_missing_file() {
    let err = EngineConfig::load("/nonexistent/minimax.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/minimax.toml"));
}

#[test]
fn test_load_from_disk() {
    let path = std::env::temp_dir().join(format!("minimax_config_{}.toml", std::process::id()));
    std::fs::write(&path, "depth = 3\n").unwrap();

    let config = EngineConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.depth, 3);
    assert_eq!(config.terminal_scoring, TerminalScoring::Material);
}
