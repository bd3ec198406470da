use super::{host_matches, Extract, REDDIT_DOMAINS};
use crate::{
    bookmarks::{RedditMetadata, SourceKind, SourceMetadata},
    errors::BinmarkError,
    json, Fetch,
};
use anyhow::anyhow;
use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use url::Url;

const POST_PATTERN: &str = r"^/r/([^/]+)/comments/([^/]+)";

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    data: Post,
}

#[derive(Debug, Deserialize)]
struct Post {
    title: String,
    author: String,
    #[serde(default)]
    score: i64,
}

/// Extracts metadata of Reddit posts via the public json api.
#[derive(Debug, Clone)]
pub struct RedditSource<F: Fetch> {
    client: F,
    base_url: Url,
    post_pattern: Regex,
}

impl<F: Fetch> RedditSource<F> {
    pub fn new(client: F, base_url: Url) -> Result<Self, BinmarkError> {
        let post_pattern = Regex::new(POST_PATTERN).map_err(|err| anyhow!(err))?;
        Ok(Self {
            client,
            base_url,
            post_pattern,
        })
    }

    /// Get subreddit and post id from the path of a post url.
    fn post(&self, url: &Url) -> Option<(String, String)> {
        let captures = self.post_pattern.captures(url.path())?;
        Some((captures[1].to_owned(), captures[2].to_owned()))
    }

    /// The json endpoint of a post, e.g. `/r/rust/comments/abc123/title.json`.
    fn request_url(&self, url: &Url) -> Result<Url, BinmarkError> {
        let path = format!("{}.json", url.path().trim_end_matches('/'));
        Ok(self.base_url.join(&path)?)
    }
}

#[async_trait]
impl<F: Fetch> Extract for RedditSource<F> {
    fn kind(&self) -> SourceKind {
        SourceKind::Reddit
    }

    fn can_handle(&self, url: &Url) -> bool {
        host_matches(url, REDDIT_DOMAINS)
    }

    async fn extract(&self, url: &Url) -> Result<SourceMetadata, BinmarkError> {
        let (subreddit, post_id) = self
            .post(url)
            .ok_or(BinmarkError::extraction_failed(url, "invalid Reddit url format"))?;
        let body = self.client.fetch_json(&self.request_url(url)?).await?;
        let listings = json::deserialize::<Vec<Listing>>(body.as_bytes())?;
        let post = listings
            .into_iter()
            .next()
            .and_then(|listing| listing.data.children.into_iter().next())
            .map(|child| child.data)
            .ok_or(anyhow!("Missing post in Reddit response"))?;

        Ok(SourceMetadata::Reddit(RedditMetadata {
            subreddit,
            post_id,
            title: post.title,
            author: post.author,
            score: post.score,
        }))
    }
}
