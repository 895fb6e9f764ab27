use dietlog::config::Config;
use dietlog::errors::AppError;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{dtl, setup_test_db};

/// A throwaway HOME with `.dietlog/dietlog.conf` holding `yaml`.
fn setup_home(name: &str, yaml: &str) -> PathBuf {
    let mut home = env::temp_dir();
    home.push(format!("{}_dietlog_home", name));
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(home.join(".dietlog")).unwrap();
    fs::write(home.join(".dietlog").join("dietlog.conf"), yaml).unwrap();
    home
}

#[test]
fn test_missing_fields_take_defaults() {
    let cfg = Config::from_yaml("port: 9000\n").unwrap();
    let defaults = Config::default();

    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.database, defaults.database);
    assert_eq!(cfg.bind, "0.0.0.0");
    assert_eq!(cfg.window_days, 3);
}

#[test]
fn test_empty_mapping_is_default_config() {
    assert_eq!(Config::from_yaml("{}").unwrap(), Config::default());
}

#[test]
fn test_database_tilde_expanded() {
    let cfg = Config::from_yaml("database: ~/meals/diet.db\n").unwrap();
    let home = dirs::home_dir().unwrap();
    assert_eq!(
        cfg.database,
        home.join("meals/diet.db").to_string_lossy().to_string()
    );

    let cfg = Config::from_yaml("database: /var/lib/diet.db\n").unwrap();
    assert_eq!(cfg.database, "/var/lib/diet.db");
}

#[test]
fn test_malformed_yaml_rejected() {
    assert!(matches!(
        Config::from_yaml("port: not-a-port\n"),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_yaml_round_trip() {
    let cfg = Config {
        database: "/data/diet.db".to_string(),
        bind: "127.0.0.1".to_string(),
        port: 8123,
        window_days: 7,
    };
    assert_eq!(Config::from_yaml(&cfg.to_yaml().unwrap()).unwrap(), cfg);
}

#[test]
fn test_missing_file_gives_defaults() {
    let path = env::temp_dir().join("no_such_dietlog.conf");
    fs::remove_file(&path).ok();
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_port_override() {
    let mut cfg = Config::default();

    cfg.apply_port_override(None).unwrap();
    assert_eq!(cfg.port, 8000);

    cfg.apply_port_override(Some("9100")).unwrap();
    assert_eq!(cfg.port, 9100);

    let err = cfg.apply_port_override(Some("eighty")).unwrap_err();
    assert!(matches!(err, AppError::Config(ref msg) if msg.contains("DIETLOG_PORT")));
    assert_eq!(cfg.port, 9100);

    assert!(cfg.apply_port_override(Some("70000")).is_err());
}

#[test]
fn test_serve_rejects_bad_port_env() {
    let db_path = setup_test_db("serve_bad_port");
    dtl()
        .env("DIETLOG_PORT", "eighty")
        .args(["--db", &db_path, "serve"])
        .assert()
        .failure()
        .stderr(contains("invalid DIETLOG_PORT: eighty"));
}

#[test]
fn test_config_print_reads_home_config() {
    let home = setup_home("cfg_print", "database: /srv/diet/cfg_print.db\nport: 9100\n");

    dtl()
        .env("HOME", &home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("port: 9100"))
        .stdout(contains("database: /srv/diet/cfg_print.db"))
        .stdout(contains("window_days: 3"));
}

#[test]
fn test_db_flag_overrides_config_file() {
    let home = setup_home("cfg_override", "database: /srv/diet/from_file.db\n");
    let db_path = setup_test_db("cfg_override");

    dtl()
        .env("HOME", &home)
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains(db_path.as_str()).and(contains("from_file.db").not()));
}
