use super::{host_matches, Extract, TWITTER_DOMAINS};
use crate::{
    bookmarks::{SourceKind, SourceMetadata},
    errors::BinmarkError,
};
use async_trait::async_trait;
use url::Url;

/// Twitter/X urls are detected, but extracting their metadata is not
/// supported.
#[derive(Debug, Clone, Copy)]
pub struct TwitterSource;

#[async_trait]
impl Extract for TwitterSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Twitter
    }

    fn can_handle(&self, url: &Url) -> bool {
        host_matches(url, TWITTER_DOMAINS)
    }

    async fn extract(&self, url: &Url) -> Result<SourceMetadata, BinmarkError> {
        Err(BinmarkError::UnsupportedSource(url.to_string()))
    }
}
