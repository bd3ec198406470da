//! A command line bookmark manager which stores bookmarks in JSONBin
//! collections.
//!
//! New bookmarks are classified by the source of their url (YouTube, Reddit,
//! Twitter/X, or any other webpage) and enriched with the metadata extracted
//! from the source.

/// Available arguments.
mod args;
/// The bookmarks and their source metadata.
pub mod bookmarks;
/// The client for fetching websites.
mod client;
/// Available commands.
pub mod cmd;
/// The configuration used in binmark.
mod config;
mod errors;
/// Helper functions to work with HTML.
pub mod html;
/// Helper function to work with JSON.
pub mod json;
mod logger;
/// Interactive prompts.
pub mod prompt;
/// The settings used in binmark.
mod settings;
/// Classification of urls and extraction of their metadata.
pub mod sources;
/// Abstraction and implementations to store bookmarks.
pub mod storage;
/// Utilities used in testing.
pub mod test_utils;
/// Utilities to work with files and urls.
pub mod utils;

pub use args::{AddArgs, Args, DeleteArgs, InspectArgs, ListArgs, ShowArgs, Subcommands};
pub use client::{Client, ClientConfig, Fetch, MockClient};
pub use config::{Config, Credentials, ACCESS_KEY_VAR, API_KEY_VAR, HOME_VAR};
pub use errors::BinmarkError;
pub use logger::Logger;
pub use settings::{BackendType, CollectionSettings, JsonBinSettings, Settings, SourceSettings};
