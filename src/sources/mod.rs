mod generic;
mod reddit;
mod twitter;
mod youtube;

use crate::{
    bookmarks::{SourceKind, SourceMetadata},
    errors::BinmarkError,
    settings::SourceSettings,
    Fetch,
};
use async_trait::async_trait;
pub use generic::GenericSource;
use log::debug;
pub use reddit::RedditSource;
pub use twitter::TwitterSource;
use url::Url;
pub use youtube::YouTubeSource;

pub const YOUTUBE_DOMAINS: &[&str] = &["youtube.com", "youtu.be", "youtube-nocookie.com"];
pub const REDDIT_DOMAINS: &[&str] = &["reddit.com"];
pub const TWITTER_DOMAINS: &[&str] = &["twitter.com", "x.com"];

/// Check if the host of `url` is one of `domains` or a subdomain of them.
pub fn host_matches(url: &Url, domains: &[&str]) -> bool {
    url.host_str().is_some_and(|host| {
        let host = host.to_lowercase();
        domains.iter().any(|domain| {
            host == *domain
                || host
                    .strip_suffix(domain)
                    .is_some_and(|subdomain| subdomain.ends_with('.'))
        })
    })
}

/// A strategy to extract metadata for one kind of source.
#[async_trait]
pub trait Extract: Send + Sync {
    /// The kind of source handled by this strategy.
    fn kind(&self) -> SourceKind;

    /// Check if the strategy is responsible for the url.
    fn can_handle(&self, url: &Url) -> bool;

    /// Extract the metadata of the url.
    async fn extract(&self, url: &Url) -> Result<SourceMetadata, BinmarkError>;
}

/// The detected source kind with its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    pub kind: SourceKind,
    pub metadata: SourceMetadata,
}

/// Classifies urls and dispatches to the extraction strategy of the detected
/// source kind.
pub struct SourceResolver {
    /// The strategies in priority order; the first match wins.
    strategies: Vec<Box<dyn Extract>>,
    /// Used if no strategy matches.
    fallback: Box<dyn Extract>,
}

impl SourceResolver {
    pub fn new<F>(client: F, settings: &SourceSettings) -> Result<Self, BinmarkError>
    where
        F: Fetch + 'static,
    {
        let strategies: Vec<Box<dyn Extract>> = vec![
            Box::new(YouTubeSource::new(
                client.clone(),
                settings.youtube_oembed_url.clone(),
            )),
            Box::new(RedditSource::new(
                client.clone(),
                settings.reddit_base_url.clone(),
            )?),
            Box::new(TwitterSource),
        ];

        Ok(Self {
            strategies,
            fallback: Box::new(GenericSource::new(client)),
        })
    }

    /// Register a strategy which is checked after the existing ones.
    pub fn with_strategy(mut self, strategy: Box<dyn Extract>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn detect(&self, url: &Url) -> SourceKind {
        self.strategy(url).kind()
    }

    pub async fn resolve(&self, url: &Url) -> Result<ResolvedSource, BinmarkError> {
        let strategy = self.strategy(url);
        let kind = strategy.kind();
        debug!("Resolve {kind} source ({url})");

        let metadata = strategy.extract(url).await.map_err(|err| {
            if err.is_recoverable() {
                err
            } else {
                BinmarkError::extraction_failed(url, err)
            }
        })?;

        if metadata.kind() != kind {
            return Err(BinmarkError::extraction_failed(
                url,
                format!("expected {kind} metadata, got {}", metadata.kind()),
            ));
        }

        Ok(ResolvedSource { kind, metadata })
    }

    fn strategy(&self, url: &Url) -> &dyn Extract {
        match self
            .strategies
            .iter()
            .find(|strategy| strategy.can_handle(url))
        {
            Some(strategy) => strategy.as_ref(),
            None => self.fallback.as_ref(),
        }
    }
}
