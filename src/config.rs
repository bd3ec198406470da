use crate::{errors::BinmarkError, Settings};
use anyhow::anyhow;
use log::{debug, trace};
use std::{
    env, fmt,
    path::{Path, PathBuf},
};

const CONFIG_DIR: &str = "binmark";
const SETTINGS_FILE: &str = "config.yaml";

/// The environment variable for the home directory of binmark.
pub const HOME_VAR: &str = "BINMARK_HOME";
/// The environment variable for the JSONBin master key.
pub const API_KEY_VAR: &str = "JSONBIN_API_KEY";
/// The environment variable for the JSONBin access key.
pub const ACCESS_KEY_VAR: &str = "JSONBIN_ACCESS_KEY";

/// A configuration for running binmark.
#[derive(Debug, PartialEq, Clone)]
pub struct Config {
    /// The path of the settings file.
    pub settings_path: PathBuf,
    /// The configured settings.
    pub settings: Settings,
}

impl Config {
    pub fn new(settings_path: &Path, settings: Settings) -> Self {
        Self {
            settings_path: settings_path.to_owned(),
            settings,
        }
    }

    /// Locate and read the settings file.
    ///
    /// An explicit `settings_path` takes precedence over `BINMARK_HOME`, the
    /// working directory, and the user's config directory.
    pub fn init(settings_path: Option<&Path>) -> Result<Config, anyhow::Error> {
        let settings_path = match settings_path {
            Some(settings_path) => settings_path.to_owned(),
            None => Self::locate()?,
        };

        if !settings_path.exists() {
            return Err(anyhow!(
                "Missing config file at {}",
                settings_path.display()
            ));
        }

        let settings = Settings::read(&settings_path)?;
        let config = Config::new(&settings_path, settings);

        trace!("Config: {:#?}", config);

        Ok(config)
    }

    fn locate() -> Result<PathBuf, anyhow::Error> {
        if let Ok(binmark_home) = env::var(HOME_VAR) {
            return Ok(PathBuf::from(binmark_home).join(SETTINGS_FILE));
        }

        let local_path = PathBuf::from(SETTINGS_FILE);

        if local_path.exists() {
            debug!("Use config in working directory");
            return Ok(local_path);
        }

        if let Some(config_path) = dirs::config_dir() {
            Ok(config_path.join(CONFIG_DIR).join(SETTINGS_FILE))
        } else {
            Err(anyhow!("HOME environment variable not set"))
        }
    }
}

/// The credentials sent with every request to JSONBin.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    access_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            access_key: access_key.into(),
        }
    }

    /// Read the credentials from `JSONBIN_API_KEY` and `JSONBIN_ACCESS_KEY`.
    pub fn from_env() -> Result<Self, BinmarkError> {
        Self::from_vars(env::var(API_KEY_VAR).ok(), env::var(ACCESS_KEY_VAR).ok())
    }

    pub fn from_vars(
        api_key: Option<String>,
        access_key: Option<String>,
    ) -> Result<Self, BinmarkError> {
        let credentials = Self::new(
            api_key.unwrap_or_default(),
            access_key.unwrap_or_default(),
        );
        credentials.validate()?;
        Ok(credentials)
    }

    pub fn validate(&self) -> Result<(), BinmarkError> {
        let mut missing = Vec::new();

        if self.api_key.trim().is_empty() {
            missing.push(API_KEY_VAR);
        }

        if self.access_key.trim().is_empty() {
            missing.push(ACCESS_KEY_VAR);
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(BinmarkError::Config(format!(
                "Missing {}: both {API_KEY_VAR} and {ACCESS_KEY_VAR} are required",
                missing.join(" and ")
            )))
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"***")
            .field("access_key", &"***")
            .finish()
    }
}
