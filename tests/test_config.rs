use binmark::{test_utils, Config, HOME_VAR};
use std::env;
use tempfile::tempdir;

#[test]
#[cfg_attr(not(feature = "integration-test"), ignore)]
fn test_config() {
    let temp_dir = tempdir().unwrap();
    let temp_path = temp_dir.path();
    assert!(temp_path.exists(), "Missing path: {}", temp_path.display());
    let settings_path = test_utils::write_config(temp_path, "https://api.jsonbin.io/v3").unwrap();

    env::set_var(HOME_VAR, temp_path);

    let res = Config::init(None);
    assert!(
        res.is_ok(),
        "Can't init config for {HOME_VAR}={}: {}",
        temp_path.display(),
        res.unwrap_err()
    );

    let config = res.unwrap();
    assert_eq!(config.settings_path, settings_path);
    assert_eq!(config.settings.request_timeout, 5000);
    assert!(config.settings.collection("tech_bookmarks").is_some());
    assert_eq!(config.settings.categories, vec!["programming", "cooking"]);

    // An explicit path takes precedence.
    let other_dir = tempdir().unwrap();
    let other_path = test_utils::write_config(other_dir.path(), "https://other.io/v3").unwrap();

    let config = Config::init(Some(&other_path)).unwrap();
    assert_eq!(config.settings_path, other_path);
    assert_eq!(
        config.settings.jsonbin.base_url.as_str(),
        "https://other.io/v3"
    );

    let res = Config::init(Some(&temp_path.join("missing.yaml")));
    assert!(res.is_err());
}
