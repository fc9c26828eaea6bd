use super::{apply_env_overrides, apply_file_settings, Settings};

use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn file_sets_bind_and_fixture() {
    let mut settings = Settings::default();
    apply_file_settings(
        &mut settings,
        "bind_addr = \"0.0.0.0:9000\"\nrobots_file = \"./fixtures/robots.json\"\n",
    )
    .expect("parse");

    assert_eq!(settings.server_bind, "0.0.0.0:9000");
    assert_eq!(settings.robots_file.as_deref(), Some("./fixtures/robots.json"));
}

#[test]
fn non_string_file_values_are_rejected() {
    let mut settings = Settings::default();
    assert!(apply_file_settings(&mut settings, "bind_addr = 9000").is_err());
    assert_eq!(settings, Settings::default());
}

#[test]
fn bind_env_overrides_file_value() {
    let mut settings = Settings::default();
    apply_file_settings(&mut settings, "bind_addr = \"0.0.0.0:9000\"\n").expect("parse");
    apply_env_overrides(
        &mut settings,
        env_from(&[("SERVER_BIND", "127.0.0.1:1"), ("APP__BIND_ADDR", "127.0.0.1:2")]),
    );
    assert_eq!(settings.server_bind, "127.0.0.1:2");
}

#[test]
fn unknown_file_keys_are_ignored() {
    let mut settings = Settings::default();
    apply_file_settings(&mut settings, "database_url = \"sqlite::memory:\"\n").expect("parse");
    assert_eq!(settings, Settings::default());
}

#[test]
fn blank_robots_file_env_clears_fixture() {
    let mut settings = Settings {
        robots_file: Some("robots.json".to_string()),
        ..Settings::default()
    };
    apply_env_overrides(&mut settings, env_from(&[("APP__ROBOTS_FILE", "  ")]));
    assert_eq!(settings.robots_file, None);
}

#[test]
fn unprefixed_bind_env_is_not_read() {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, env_from(&[("SERVER_BIND", "127.0.0.1:1")]));
    assert_eq!(settings, Settings::default());
}
