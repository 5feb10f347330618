use sheetbase::{Config, Error};

#[test]
fn missing_keys_take_defaults() {
    let config = Config::from_toml("default_limit = 25\n").unwrap();
    assert_eq!(config.default_limit, 25);
    assert_eq!(config.log_level, "info");
    assert_eq!(config.csv_delimiter, ',');
}

#[test]
fn config_round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sheetbase.toml");

    let config = Config {
        default_limit: 50,
        log_level: "debug".into(),
        csv_delimiter: ';',
    };
    config.save(&path).unwrap();
    assert_eq!(Config::from_file(&path).unwrap(), config);
}

#[test]
fn invalid_config_is_reported() {
    let err = Config::from_toml("default_limit = \"many\"").unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    let err = Config::from_file(std::path::Path::new("/nonexistent/sheetbase.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
