mod bookmark;
mod source_metadata;

pub use bookmark::{Bookmark, BookmarkBuilder, BookmarkRecord, BookmarkSummary};
use serde::{Deserialize, Serialize};
pub use source_metadata::{GenericMetadata, RedditMetadata, SourceMetadata, YouTubeMetadata};
use std::fmt;

/// The type used to classify the origin of a bookmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    YouTube,
    Reddit,
    Twitter,
    #[default]
    #[serde(alias = "article")]
    Generic,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind_name = match &self {
            SourceKind::YouTube => "YouTube",
            SourceKind::Reddit => "Reddit",
            SourceKind::Twitter => "Twitter/X",
            SourceKind::Generic => "Generic",
        };
        write!(f, "{}", kind_name)
    }
}

/// The visibility of a stored bookmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

impl Visibility {
    pub fn from_private(private: bool) -> Self {
        if private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }

    pub fn is_private(&self) -> bool {
        *self == Visibility::Private
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Private => write!(f, "Private"),
            Visibility::Public => write!(f, "Public"),
        }
    }
}
