use super::SourceKind;
use serde::{Deserialize, Serialize};
use url::Url;

/// Metadata of a YouTube video as returned by the oEmbed endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YouTubeMetadata {
    pub video_id: String,
    pub title: String,
    /// The name of the channel.
    pub author: String,
    pub thumbnail: Url,
}

/// Metadata of a Reddit post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedditMetadata {
    pub subreddit: String,
    pub post_id: String,
    pub title: String,
    pub author: String,
    pub score: i64,
}

/// Metadata scraped from an arbitrary webpage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericMetadata {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// The host of the page, e.g. `blog.rust-lang.org`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}

/// The normalized metadata of a source. Twitter/X has no variant because
/// extraction is not supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceMetadata {
    YouTube(YouTubeMetadata),
    Reddit(RedditMetadata),
    Generic(GenericMetadata),
}

impl SourceMetadata {
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceMetadata::YouTube(_) => SourceKind::YouTube,
            SourceMetadata::Reddit(_) => SourceKind::Reddit,
            SourceMetadata::Generic(_) => SourceKind::Generic,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            SourceMetadata::YouTube(metadata) => &metadata.title,
            SourceMetadata::Reddit(metadata) => &metadata.title,
            SourceMetadata::Generic(metadata) => &metadata.title,
        }
    }

    /// The text suggested as description of the bookmark.
    pub fn description(&self) -> &str {
        match self {
            SourceMetadata::YouTube(metadata) => &metadata.title,
            SourceMetadata::Reddit(metadata) => &metadata.title,
            SourceMetadata::Generic(metadata) => &metadata.summary,
        }
    }

    pub fn author(&self) -> Option<&str> {
        match self {
            SourceMetadata::YouTube(metadata) => Some(&metadata.author),
            SourceMetadata::Reddit(metadata) => Some(&metadata.author),
            SourceMetadata::Generic(metadata) => metadata.author.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json;
    use serde_json::json;

    #[test]
    fn test_serialize_tagged() {
        let metadata = SourceMetadata::Reddit(RedditMetadata {
            subreddit: "rust".to_owned(),
            post_id: "abc123".to_owned(),
            title: "Announcing Rust".to_owned(),
            author: "ferris".to_owned(),
            score: 42,
        });

        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "reddit",
                "subreddit": "rust",
                "post_id": "abc123",
                "title": "Announcing Rust",
                "author": "ferris",
                "score": 42,
            })
        );
    }

    #[test]
    fn test_deserialize_generic_without_optionals() {
        let buf = br#"{"type": "generic", "title": "Page", "summary": "About"}"#;
        let metadata = json::deserialize::<SourceMetadata>(buf).unwrap();

        assert_eq!(metadata.kind(), SourceKind::Generic);
        assert_eq!(metadata.title(), "Page");
        assert_eq!(metadata.description(), "About");
        assert_eq!(metadata.author(), None);
    }

    #[test]
    fn test_deserialize_unknown_type() {
        let buf = br#"{"type": "twitter", "title": "Tweet"}"#;
        assert!(json::deserialize::<SourceMetadata>(buf).is_err());
    }
}
