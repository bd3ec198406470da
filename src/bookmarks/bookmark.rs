use super::{SourceKind, SourceMetadata, Visibility};
use crate::errors::BinmarkError;
use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// The content of a bookmark as supplied by the client.
///
/// Older records store the kind as `type` and keep the title in the bin
/// name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    url: Url,
    #[serde(default)]
    title: String,
    #[serde(default)]
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    category: String,
    #[serde(default, alias = "type")]
    kind: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<SourceMetadata>,
}

impl Bookmark {
    pub fn builder(url: Url, kind: SourceKind) -> BookmarkBuilder {
        BookmarkBuilder::new(url, kind)
    }

    /// Complete a bookmark read from storage: a missing title is taken from
    /// `name`, then from the url, and a blank note is dropped.
    pub(crate) fn fill_missing(&mut self, name: Option<&str>) {
        if !is_visible(&self.title) {
            self.title = name
                .map(str::trim)
                .filter(|name| is_visible(name))
                .map(str::to_owned)
                .unwrap_or_else(|| self.url.to_string());
        }

        if self.note.as_deref().is_some_and(|note| !is_visible(note)) {
            self.note = None;
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    pub fn source(&self) -> Option<&SourceMetadata> {
        self.source.as_ref()
    }
}

#[derive(Debug)]
pub struct BookmarkBuilder {
    url: Url,
    kind: SourceKind,
    title: Option<String>,
    text: String,
    note: Option<String>,
    category: String,
    source: Option<SourceMetadata>,
}

impl BookmarkBuilder {
    pub fn new(url: Url, kind: SourceKind) -> BookmarkBuilder {
        BookmarkBuilder {
            url,
            kind,
            title: None,
            text: String::new(),
            note: None,
            category: String::new(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: SourceMetadata) -> BookmarkBuilder {
        self.source = Some(source);
        self
    }

    /// Titles without visible characters are dropped.
    pub fn with_title(mut self, title: impl Into<String>) -> BookmarkBuilder {
        let title = title.into();

        if is_visible(&title) {
            self.title = Some(title.trim().to_owned());
        }

        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> BookmarkBuilder {
        self.text = text.into();
        self
    }

    /// Blank notes are dropped.
    pub fn with_note(mut self, note: impl Into<String>) -> BookmarkBuilder {
        let note = note.into();
        self.note = if note.trim().is_empty() {
            None
        } else {
            Some(note)
        };
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> BookmarkBuilder {
        self.category = category.into();
        self
    }

    pub fn build(self) -> Result<Bookmark, BinmarkError> {
        if let Some(source) = &self.source {
            if source.kind() != self.kind {
                return Err(BinmarkError::Other(anyhow!(
                    "Metadata of kind {} doesn't match source kind {}",
                    source.kind(),
                    self.kind
                )));
            }
        }

        if self.category.trim().is_empty() {
            return Err(BinmarkError::Other(anyhow!("Missing category")));
        }

        let title = self
            .title
            .or_else(|| {
                self.source
                    .as_ref()
                    .map(|source| source.title().trim().to_owned())
                    .filter(|title| is_visible(title))
            })
            .unwrap_or_else(|| self.url.to_string());

        Ok(Bookmark {
            url: self.url,
            title,
            text: self.text,
            note: self.note,
            category: self.category,
            kind: self.kind,
            source: self.source,
        })
    }
}

fn is_visible(text: &str) -> bool {
    text.chars().any(|c| !c.is_whitespace() && !c.is_control())
}

/// A bookmark stored in a collection, including the fields assigned by the
/// backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub visibility: Visibility,
    pub bookmark: Bookmark,
}

/// An entry in the listing of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkSummary {
    pub id: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub visibility: Visibility,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::{GenericMetadata, YouTubeMetadata};
    use assert_matches::assert_matches;

    fn youtube_metadata() -> SourceMetadata {
        SourceMetadata::YouTube(YouTubeMetadata {
            video_id: "XYZ".to_owned(),
            title: "Rust in 100 seconds".to_owned(),
            author: "Fireship".to_owned(),
            thumbnail: Url::parse("https://i.ytimg.com/vi/XYZ/hqdefault.jpg").unwrap(),
        })
    }

    #[test]
    fn test_build_title_from_source() {
        let url = Url::parse("https://www.youtube.com/watch?v=XYZ").unwrap();
        let bookmark = Bookmark::builder(url.clone(), SourceKind::YouTube)
            .with_source(youtube_metadata())
            .with_text("Rust in 100 seconds")
            .with_category("programming")
            .build()
            .unwrap();

        assert_eq!(bookmark.url(), &url);
        assert_eq!(bookmark.title(), "Rust in 100 seconds");
        assert_eq!(bookmark.kind(), SourceKind::YouTube);
        assert_eq!(bookmark.source(), Some(&youtube_metadata()));
        assert!(bookmark.note().is_none());
    }

    #[test]
    fn test_build_title_from_url() {
        let url = Url::parse("https://x.com/user/status/1").unwrap();
        let bookmark = Bookmark::builder(url, SourceKind::Twitter)
            .with_title("  ")
            .with_note("")
            .with_category("social")
            .build()
            .unwrap();

        assert_eq!(bookmark.title(), "https://x.com/user/status/1");
        assert!(bookmark.source().is_none());
        assert!(bookmark.note().is_none());
    }

    #[test]
    fn test_build_title_control_chars() {
        let url = Url::parse("https://example.com/page").unwrap();
        let bookmark = Bookmark::builder(url, SourceKind::Generic)
            .with_title("\u{7}\u{1b}")
            .with_category("programming")
            .build()
            .unwrap();

        assert_eq!(bookmark.title(), "https://example.com/page");
    }

    #[test]
    fn test_deserialize_older_record() {
        let json = r#"{
            "url": "https://blog.rust-lang.org/2024/07/25/Rust-1.80.0.html",
            "text": "Release notes",
            "category": "programming",
            "note": "",
            "type": "article",
            "title": "",
            "description": "Release notes",
            "author": "The Rust Release Team"
        }"#;

        let mut bookmark = serde_json::from_str::<Bookmark>(json).unwrap();
        bookmark.fill_missing(Some("Announcing Rust 1.80.0"));

        assert_eq!(bookmark.title(), "Announcing Rust 1.80.0");
        assert_eq!(bookmark.text(), "Release notes");
        assert_eq!(bookmark.kind(), SourceKind::Generic);
        assert!(bookmark.note().is_none());
        assert!(bookmark.source().is_none());

        let json = r#"{
            "url": "https://www.youtube.com/watch?v=XYZ",
            "text": "",
            "category": "programming",
            "type": "youtube"
        }"#;

        let mut bookmark = serde_json::from_str::<Bookmark>(json).unwrap();
        bookmark.fill_missing(None);

        assert_eq!(bookmark.title(), "https://www.youtube.com/watch?v=XYZ");
        assert_eq!(bookmark.kind(), SourceKind::YouTube);
    }

    #[test]
    fn test_build_mismatched_kind() {
        let url = Url::parse("https://example.com").unwrap();
        let res = Bookmark::builder(url, SourceKind::Generic)
            .with_source(youtube_metadata())
            .with_category("programming")
            .build();

        assert_matches!(res, Err(BinmarkError::Other(_)));
    }

    #[test]
    fn test_build_missing_category() {
        let url = Url::parse("https://example.com").unwrap();
        let res = Bookmark::builder(url, SourceKind::Generic)
            .with_source(SourceMetadata::Generic(GenericMetadata {
                title: "Example".to_owned(),
                summary: String::new(),
                keywords: vec![],
                author: None,
                site: None,
            }))
            .build();

        assert!(res.is_err());
    }
}
