use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One tracked repository, as resolved from a config entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryTarget {
    pub owner: String,
    pub name: String,
    pub max_releases: usize,
    pub include_patch_releases: bool,
}

impl RepositoryTarget {
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Web URL of the repository itself (not a release).
    pub fn repo_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }
}

/// A release record as returned by the GitHub API.
///
/// Only the fields this tool consumes are mirrored; everything else in the
/// payload is ignored. Optional fields default to `None` so a sparse record
/// deserializes instead of failing the whole response.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRelease {
    pub id: u64,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub tag_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Parsed form of a release tag like `v1.2.0` or `2.0.1-rc.1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub suffix: Option<String>,
}

/// Canonical feed entry produced from one qualifying release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub repo_slug: String,
    pub repo_url: String,
    pub html_url: String,
    pub tag_name: String,
    pub published_at: Option<DateTime<Utc>>,
    pub description_html: String,
    pub id: String,
    pub name: String,
}

/// Feed-level metadata. Built once at startup and injected into the
/// assembler so the serialization path stays testable.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: String,
    pub generator: String,
    pub ttl_minutes: u32,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            title: "Tracked Releases".to_string(),
            link: "https://releases.example.com/".to_string(),
            description: "New releases from tracked GitHub repositories".to_string(),
            language: "en-us".to_string(),
            generator: "release-feed".to_string(),
            ttl_minutes: 60,
        }
    }
}

/// The assembled feed: sorted items plus channel metadata and the build
/// timestamp captured at assembly time.
#[derive(Debug, Clone)]
pub struct FeedDocument {
    pub channel: ChannelConfig,
    pub items: Vec<FeedItem>,
    pub built_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid repository identifier: {0}")]
    Target(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("releases endpoint returned HTTP {status}")]
    Fetch { status: u16 },

    #[error("Response parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FeedError>;
