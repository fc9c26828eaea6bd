use std::{
    collections::HashMap,
    env, fs,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use super::*;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_point_at_local_collection_endpoint() {
    let settings = ClientSettings::default();
    assert_eq!(settings.robots_path, "/api/robots");
    assert_eq!(settings.request_timeout(), Duration::from_secs(10));
}

#[test]
fn file_values_override_defaults() {
    let mut settings = ClientSettings::default();
    apply_file_settings(
        &mut settings,
        r#"
server_url = "http://robots.internal:9000"
request_timeout_secs = 3
"#,
    )
    .expect("parse");

    assert_eq!(settings.server_url, "http://robots.internal:9000");
    assert_eq!(settings.robots_path, "/api/robots");
    assert_eq!(settings.request_timeout_secs, 3);
}

#[test]
fn malformed_file_is_reported() {
    let mut settings = ClientSettings::default();
    let err = apply_file_settings(&mut settings, "request_timeout_secs = \"soon\"")
        .expect_err("must fail");
    assert!(err.to_string().contains("malformed client config"));
}

#[test]
fn app_env_overrides_server_and_path() {
    let mut settings = ClientSettings::default();
    apply_env_overrides(
        &mut settings,
        env_from(&[
            ("ROBOTS_SERVER_URL", "http://unrecognized:1"),
            ("APP__SERVER_URL", "http://robots.internal:2"),
            ("APP__ROBOTS_PATH", "/v2/robots"),
        ]),
    );
    assert_eq!(settings.server_url, "http://robots.internal:2");
    assert_eq!(settings.robots_path, "/v2/robots");
}

#[test]
fn unparsable_timeout_env_is_ignored() {
    let mut settings = ClientSettings::default();
    apply_env_overrides(
        &mut settings,
        env_from(&[("APP__REQUEST_TIMEOUT_SECS", "forever")]),
    );
    assert_eq!(settings.request_timeout_secs, 10);
}

#[test]
fn explicit_config_path_must_exist() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let missing = env::temp_dir().join(format!("robots_client_missing_{suffix}.toml"));

    let err = load_settings_with(Some(&missing), env_from(&[])).expect_err("must fail");
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn explicit_config_path_is_loaded() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("robots_client_{suffix}.toml"));
    fs::write(&path, "robots_path = \"/fixtures/robots\"\n").expect("write config");

    let from_file = load_settings_with(Some(&path), env_from(&[])).expect("load");
    let with_env = load_settings_with(
        Some(&path),
        env_from(&[("APP__ROBOTS_PATH", "/env/robots")]),
    )
    .expect("load");
    fs::remove_file(&path).expect("cleanup");

    assert_eq!(from_file.robots_path, "/fixtures/robots");
    assert_eq!(from_file.server_url, ClientSettings::default().server_url);
    assert_eq!(with_env.robots_path, "/env/robots");
}

#[test]
fn unprefixed_server_url_env_is_not_read() {
    let mut settings = ClientSettings::default();
    apply_env_overrides(
        &mut settings,
        env_from(&[("ROBOTS_SERVER_URL", "http://unrecognized:1")]),
    );
    assert_eq!(settings, ClientSettings::default());
}
