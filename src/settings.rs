use crate::utils;
use anyhow::{anyhow, Context};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, path::Path};
use url::{Host, Url};

/// The default for `Settings::request_timeout`.
const REQUEST_TIMEOUT_DEFAULT: u64 = 60_000;

/// The default for `SourceSettings::youtube_oembed_url`.
const YOUTUBE_OEMBED_URL_DEFAULT: &str = "https://www.youtube.com/oembed";

/// The default for `SourceSettings::reddit_base_url`.
const REDDIT_BASE_URL_DEFAULT: &str = "https://www.reddit.com";

/// The default for `SourceSettings::user_agent`.
///
/// Reddit rejects requests without a browser-like user agent.
const USER_AGENT_DEFAULT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:132.0) Gecko/20100101 Firefox/132.0";

/// The storage backend used for a collection.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendType {
    #[default]
    JsonBin,
}

impl fmt::Display for BackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let backend_name = match self {
            BackendType::JsonBin => "jsonbin",
        };
        write!(f, "{}", backend_name)
    }
}

/// Settings for the hosted JSONBin API.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct JsonBinSettings {
    /// The base url of the API, e.g. `https://api.jsonbin.io/v3`.
    pub base_url: Url,
}

/// A collection as configured in the settings file.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct CollectionSettings {
    /// The backend-specific identifier of the collection.
    pub id: String,
    /// The display name of the collection.
    pub name: String,
    #[serde(default)]
    pub backend: BackendType,
}

/// Endpoints and headers used to extract metadata from a source.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct SourceSettings {
    pub youtube_oembed_url: Url,
    pub reddit_base_url: Url,
    pub user_agent: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            youtube_oembed_url: Url::parse(YOUTUBE_OEMBED_URL_DEFAULT)
                .expect("Invalid default url"),
            reddit_base_url: Url::parse(REDDIT_BASE_URL_DEFAULT).expect("Invalid default url"),
            user_agent: USER_AGENT_DEFAULT.to_owned(),
        }
    }
}

fn request_timeout_default() -> u64 {
    REQUEST_TIMEOUT_DEFAULT
}

/// Describes the settings used in binmark.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Settings {
    pub jsonbin: JsonBinSettings,
    /// The configured collections by the name used on the command line.
    pub collections: BTreeMap<String, CollectionSettings>,
    /// The permitted categories in the order they are offered.
    pub categories: Vec<String>,
    /// The request timeout in milliseconds.
    #[serde(default = "request_timeout_default")]
    pub request_timeout: u64,
    #[serde(default)]
    pub sources: SourceSettings,
}

impl Settings {
    pub fn new(
        jsonbin: JsonBinSettings,
        collections: BTreeMap<String, CollectionSettings>,
        categories: Vec<String>,
    ) -> Self {
        Self {
            jsonbin,
            collections,
            categories,
            request_timeout: REQUEST_TIMEOUT_DEFAULT,
            sources: SourceSettings::default(),
        }
    }

    /// Read and validate the settings file at `settings_path`.
    pub fn read(settings_path: &Path) -> Result<Settings, anyhow::Error> {
        debug!("Reading settings file at {}", settings_path.display());
        let buf = utils::read_file(settings_path)?;
        Self::from_yaml(&buf).context(format!(
            "Invalid settings file at {}",
            settings_path.display()
        ))
    }

    pub fn from_yaml(slice: &[u8]) -> Result<Settings, anyhow::Error> {
        let settings = serde_yaml::from_slice::<Settings>(slice)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        validate_url("jsonbin.base_url", &self.jsonbin.base_url)?;
        validate_url(
            "sources.youtube_oembed_url",
            &self.sources.youtube_oembed_url,
        )?;
        validate_url("sources.reddit_base_url", &self.sources.reddit_base_url)?;

        if self.collections.is_empty() {
            return Err(anyhow!("Missing collections"));
        }

        for (name, collection) in &self.collections {
            if collection.id.trim().is_empty() {
                return Err(anyhow!("Missing id for collection `{name}`"));
            }
        }

        if self.categories.is_empty() {
            return Err(anyhow!("Missing categories"));
        }

        for (i, category) in self.categories.iter().enumerate() {
            if self.categories[..i].contains(category) {
                return Err(anyhow!("Duplicate category: {category}"));
            }
        }

        if self.request_timeout == 0 {
            return Err(anyhow!("`request_timeout` must be greater than zero"));
        }

        Ok(())
    }

    pub fn collection(&self, name: &str) -> Option<&CollectionSettings> {
        self.collections.get(name)
    }

    pub fn is_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

/// Credentials and requests must not leave the machine unencrypted: plain
/// `http` is only allowed for loopback hosts.
fn validate_url(key: &str, url: &Url) -> Result<(), anyhow::Error> {
    match url.scheme() {
        "https" => Ok(()),
        "http" if is_loopback(url) => Ok(()),
        "http" => Err(anyhow!("`{key}` must use https: {url}")),
        _ => Err(anyhow!("Invalid `{key}`: {url}")),
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain == "localhost",
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}
