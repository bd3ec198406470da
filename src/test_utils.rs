use crate::{
    settings::{BackendType, CollectionSettings, JsonBinSettings},
    Settings,
};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use url::Url;

/// Settings with the collection `tech_bookmarks` and the categories
/// `programming` and `cooking`.
pub fn settings(base_url: &str) -> Settings {
    let collections = BTreeMap::from([(
        "tech_bookmarks".to_owned(),
        CollectionSettings {
            id: "abc123".to_owned(),
            name: "Tech".to_owned(),
            backend: BackendType::JsonBin,
        },
    )]);

    Settings::new(
        JsonBinSettings {
            base_url: Url::parse(base_url).expect("Invalid base url"),
        },
        collections,
        vec!["programming".to_owned(), "cooking".to_owned()],
    )
}

/// Write a settings file to `dir` which uses `base_url` for JSONBin and
/// for the metadata sources.
pub fn write_config(dir: &Path, base_url: &str) -> Result<PathBuf, anyhow::Error> {
    let settings_path = dir.join("config.yaml");
    let content = format!(
        r#"jsonbin:
  base_url: {base_url}
collections:
  tech_bookmarks:
    id: abc123
    name: Tech
categories:
  - programming
  - cooking
request_timeout: 5000
sources:
  youtube_oembed_url: {base_url}/oembed
  reddit_base_url: {base_url}
"#
    );
    fs::write(&settings_path, content)?;
    Ok(settings_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_config() {
        let temp_dir = tempdir().unwrap();

        let res = write_config(temp_dir.path(), "http://127.0.0.1:8080");
        assert!(res.is_ok(), "{}", res.unwrap_err());

        let actual = Settings::read(&res.unwrap()).unwrap();
        let mut expected = settings("http://127.0.0.1:8080");
        expected.request_timeout = 5000;
        expected.sources.youtube_oembed_url = Url::parse("http://127.0.0.1:8080/oembed").unwrap();
        expected.sources.reddit_base_url = Url::parse("http://127.0.0.1:8080").unwrap();
        assert_eq!(actual, expected);
    }
}
