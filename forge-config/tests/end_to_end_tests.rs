//! Discovery through persistence, against an isolated home directory

use forge_config::{ConfigError, ConfigFile, ConfigFinder, ErrorKind, SearchError};
use forge_config_test_utils::IsolatedTestEnvironment;
use serde_json::json;
use serial_test::serial;
use std::fs;

const NAMES: [&str; 3] = ["wp-forge.yml", "wp-forge.yaml", "wp-forge.json"];

#[test]
#[serial]
fn test_discover_read_edit_write() {
    let env = IsolatedTestEnvironment::new().unwrap();
    let site = env.project_dir("site");
    let theme = env.project_dir("site/wp-content/themes/forge");
    fs::write(
        site.join("wp-forge.yml"),
        "site:\n  title: Example\nplugins:\n  - akismet\n",
    )
    .unwrap();

    let finder = ConfigFinder::search_for(NAMES);
    let mut config = ConfigFile::discover(&finder, &theme).unwrap();
    assert_eq!(config.file(), site.join("wp-forge.yml"));
    assert_eq!(config.path(), site.as_path());
    assert_eq!(config.get("site.title"), Some(&json!("Example")));

    config.set("site.title", json!("Renamed"));
    config.update().unwrap();

    let reloaded = ConfigFile::discover(&finder, &theme).unwrap();
    assert_eq!(reloaded.get("site.title"), Some(&json!("Renamed")));
    assert_eq!(reloaded.get("plugins"), Some(&json!(["akismet"])));
}

#[test]
#[serial]
fn test_discover_prefers_nearest_directory() {
    let env = IsolatedTestEnvironment::new().unwrap();
    let site = env.project_dir("site");
    let nested = env.project_dir("site/nested");
    fs::write(site.join("wp-forge.yml"), "level: site\n").unwrap();
    fs::write(nested.join("wp-forge.json"), "{\"level\": \"nested\"}\n").unwrap();

    let config = ConfigFile::discover(&ConfigFinder::search_for(NAMES), &nested).unwrap();
    assert_eq!(config.get("level"), Some(&json!("nested")));
}

#[test]
#[serial]
fn test_discover_does_not_escape_home() {
    let env = IsolatedTestEnvironment::new().unwrap();
    let site = env.project_dir("site");
    fs::write(env.temp_dir().join("wp-forge.json"), "{\"leak\": true}\n").unwrap();

    let err = ConfigFile::discover(&ConfigFinder::search_for(NAMES), &site).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(matches!(
        err,
        ConfigError::Search(SearchError::NotFound { .. })
    ));
}

#[test]
#[serial]
fn test_discover_without_traversal() {
    let env = IsolatedTestEnvironment::new().unwrap();
    let site = env.project_dir("site");
    let nested = env.project_dir("site/nested");
    fs::write(site.join("wp-forge.json"), "{\"a\": 1}\n").unwrap();

    let finder = ConfigFinder::search_for(NAMES).traverse(false);
    assert!(ConfigFile::discover(&finder, &nested).is_err());
    assert!(ConfigFile::discover(&finder, &site).is_ok());
}

#[test]
#[serial]
fn test_create_in_home_then_find() {
    let env = IsolatedTestEnvironment::new().unwrap();
    let target = env.home_path().join(".forge").join("wp-forge.json");

    let mut config = ConfigFile::new(&target).unwrap();
    config.set("user", json!("alex"));
    config.create().unwrap();

    let finder = ConfigFinder::search_for(".forge/wp-forge.json");
    let start = env.project_dir("site/deep");
    assert_eq!(finder.find(&start), Some(target.clone()));
    assert_eq!(
        ConfigFile::discover(&finder, &start).unwrap().data(),
        &json!({"user": "alex"})
    );
}
