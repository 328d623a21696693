use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn database_url_is_required() {
    let err = Config::from_lookup(lookup(&[("PORT", "8080")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
}

#[test]
fn blank_database_url_counts_as_missing() {
    let err = Config::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
}

#[test]
fn defaults_apply_when_optional_vars_absent() {
    let config = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/folio")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.db.url, "postgres://localhost/folio");
    assert_eq!(config.db.max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert_eq!(config.db.acquire_timeout, Duration::from_secs(DEFAULT_DB_ACQUIRE_TIMEOUT_SECS));
    assert_eq!(config.website_dir, default_website_dir());
}

#[test]
fn overrides_are_parsed() {
    let config = Config::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://db/folio"),
        ("PORT", " 8080 "),
        ("WEBSITE_DIR", "/srv/site"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("DB_ACQUIRE_TIMEOUT_SECS", "2"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.website_dir, PathBuf::from("/srv/site"));
    assert_eq!(config.db.max_connections, 12);
    assert_eq!(config.db.acquire_timeout, Duration::from_secs(2));
}

#[test]
fn unparsable_port_is_reported() {
    let err = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://db/folio"), ("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "http".into() });
}

#[test]
fn out_of_range_port_is_reported() {
    let err = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://db/folio"), ("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
}
