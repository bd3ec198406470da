use super::{host_matches, Extract, YOUTUBE_DOMAINS};
use crate::{
    bookmarks::{SourceKind, SourceMetadata, YouTubeMetadata},
    errors::BinmarkError,
    json, Fetch,
};
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

/// Path prefixes followed by the video id, e.g. `/shorts/<id>`.
const VIDEO_PATHS: &[&str] = &["shorts", "embed", "live", "v"];

/// The response of the oEmbed endpoint.
#[derive(Debug, Deserialize)]
struct OEmbed {
    title: Option<String>,
    author_name: Option<String>,
    thumbnail_url: Option<String>,
}

/// Extracts metadata of YouTube videos via oEmbed, which needs no api key.
#[derive(Debug, Clone)]
pub struct YouTubeSource<F: Fetch> {
    client: F,
    oembed_url: Url,
}

impl<F: Fetch> YouTubeSource<F> {
    pub fn new(client: F, oembed_url: Url) -> Self {
        Self { client, oembed_url }
    }

    fn request_url(&self, url: &Url) -> Url {
        let mut request_url = self.oembed_url.clone();
        request_url
            .query_pairs_mut()
            .append_pair("url", url.as_str())
            .append_pair("format", "json");
        request_url
    }
}

/// Get the video id from `watch?v=<id>`, `youtu.be/<id>`, or `/shorts/<id>`
/// style urls.
pub fn video_id(url: &Url) -> Option<String> {
    let mut segments = url.path_segments()?.filter(|segment| !segment.is_empty());

    let video_id = if host_matches(url, &["youtu.be"]) {
        segments.next().map(|segment| segment.to_owned())
    } else if let Some((_, video_id)) = url.query_pairs().find(|(key, _)| key == "v") {
        Some(video_id.into_owned())
    } else {
        match (segments.next(), segments.next()) {
            (Some(prefix), Some(video_id)) if VIDEO_PATHS.contains(&prefix) => {
                Some(video_id.to_owned())
            }
            _ => None,
        }
    };

    video_id.filter(|video_id| {
        !video_id.is_empty()
            && video_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    })
}

fn required(field: Option<String>, name: &str) -> Result<String, BinmarkError> {
    field
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .ok_or(BinmarkError::Other(anyhow::anyhow!(
            "Missing `{name}` in oEmbed response"
        )))
}

#[async_trait]
impl<F: Fetch> Extract for YouTubeSource<F> {
    fn kind(&self) -> SourceKind {
        SourceKind::YouTube
    }

    fn can_handle(&self, url: &Url) -> bool {
        host_matches(url, YOUTUBE_DOMAINS)
    }

    async fn extract(&self, url: &Url) -> Result<SourceMetadata, BinmarkError> {
        let video_id =
            video_id(url).ok_or(BinmarkError::extraction_failed(url, "missing video id"))?;
        let body = self.client.fetch_json(&self.request_url(url)).await?;
        let oembed = json::deserialize::<OEmbed>(body.as_bytes())?;
        let thumbnail = Url::parse(&required(oembed.thumbnail_url, "thumbnail_url")?)?;

        Ok(SourceMetadata::YouTube(YouTubeMetadata {
            video_id,
            title: required(oembed.title, "title")?,
            author: required(oembed.author_name, "author_name")?,
            thumbnail,
        }))
    }
}
