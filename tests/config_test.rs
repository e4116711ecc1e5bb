use std::collections::BTreeMap;
use std::path::PathBuf;

use ablstyle::theme::StyleKey;
use ablstyle::{initialize, AblStyleError, Config, MatchMode};

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn map_parsing_is_lenient() {
    let config = Config::from_map(&map(&[
        ("mode", "telepathic"),
        ("theme", "  "),
        ("trace_level", "debug"),
        ("unrelated", "ignored"),
    ]));

    assert_eq!(config.match_mode, None);
    assert_eq!(config.active_theme, None);
    assert_eq!(config.trace_level.as_deref(), Some("debug"));
    assert_eq!(config.engine().mode(), MatchMode::Substring);
}

#[test]
fn toml_accepts_field_names_and_aliases() {
    let config = Config::from_toml_str(
        "theme_file = \"/tmp/themes.txt\"\ntheme = \"Dark\"\nmode = \"fuzzy\"\n",
    )
    .expect("config");

    assert_eq!(config.theme_file, Some(PathBuf::from("/tmp/themes.txt")));
    assert_eq!(config.active_theme.as_deref(), Some("Dark"));
    assert_eq!(config.match_mode, Some(MatchMode::Fuzzy));
}

#[test]
fn toml_rejects_unknown_keys() {
    let err = Config::from_toml_str("colour = \"red\"\n").expect_err("unknown key");
    assert!(matches!(err, AblStyleError::Toml(_)));
}

#[test]
fn overrides_win_when_merging() {
    let base = Config::from_toml_str("active_theme = \"Dark\"\ntrace_level = \"warn\"\n")
        .expect("config");
    let merged = base.merge(Config::from_map(&map(&[("theme", "Solarized")])));

    assert_eq!(merged.active_theme.as_deref(), Some("Solarized"));
    assert_eq!(merged.trace_level.as_deref(), Some("warn"));
}

#[test]
fn initialize_loads_file_and_selects_theme() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("themes.txt");
    std::fs::write(
        &path,
        ">Light\ncomment\t#008000\tunset\t2\n>Night\ncomment\t#6A9955\t#1E1E1E\t0\n",
    )
    .expect("write");

    let config = Config {
        theme_file: Some(path),
        active_theme: Some("night".to_string()),
        ..Config::default()
    };
    let store = initialize(&config).expect("store");

    assert_eq!(store.active_theme().name, "Night");
    assert!(store
        .active_theme()
        .get(StyleKey::Comment)
        .is_some_and(|e| !e.is_italic()));
}

#[test]
fn initialize_keeps_first_theme_for_unknown_name() {
    let config = Config {
        active_theme: Some("NoSuchTheme".to_string()),
        ..Config::default()
    };
    let store = initialize(&config).expect("store");
    assert_eq!(store.active_index(), 0);
}

#[test]
fn initialize_fails_for_missing_theme_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config {
        theme_file: Some(dir.path().join("absent.txt")),
        ..Config::default()
    };
    assert!(matches!(initialize(&config), Err(AblStyleError::Io(_))));
}
