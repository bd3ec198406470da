use super::Extract;
use crate::{
    bookmarks::{GenericMetadata, SourceKind, SourceMetadata},
    errors::BinmarkError,
    html, Fetch,
};
use async_trait::async_trait;
use log::debug;
use url::Url;

/// Scrapes title and summary from any webpage.
#[derive(Debug, Clone)]
pub struct GenericSource<F: Fetch> {
    client: F,
}

impl<F: Fetch> GenericSource<F> {
    pub fn new(client: F) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<F: Fetch> Extract for GenericSource<F> {
    fn kind(&self) -> SourceKind {
        SourceKind::Generic
    }

    fn can_handle(&self, _url: &Url) -> bool {
        true
    }

    async fn extract(&self, url: &Url) -> Result<SourceMetadata, BinmarkError> {
        let website = self.client.fetch(url).await?;
        let page = html::extract_page(&website, url)?;
        debug!("Extracted page: {page:?}");

        let summary = page.summary();
        let title = page
            .title
            .ok_or(BinmarkError::extraction_failed(url, "missing page title"))?;

        Ok(SourceMetadata::Generic(GenericMetadata {
            title,
            summary,
            keywords: page.keywords,
            author: page.author,
            site: url.host_str().map(|host| host.to_owned()),
        }))
    }
}
