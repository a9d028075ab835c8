use crate::types::{FeedError, RepositoryTarget, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

const DEFAULT_MAX_RELEASES: usize = 10;

/// Top-level shape of the config document.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    repositories: Vec<RepoEntry>,
}

/// One configured repository: either a bare `"owner/name"` string or an
/// object carrying per-repository options.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RepoEntry {
    Slug(String),
    Detailed {
        slug: String,
        #[serde(default = "default_max_releases", rename = "maxReleases")]
        max_releases: usize,
        #[serde(default, rename = "includePatchReleases")]
        include_patch_releases: bool,
    },
}

fn default_max_releases() -> usize {
    DEFAULT_MAX_RELEASES
}

impl RepoEntry {
    /// The raw identifier as written in the config, for error reporting.
    pub fn raw_slug(&self) -> &str {
        match self {
            RepoEntry::Slug(slug) => slug,
            RepoEntry::Detailed { slug, .. } => slug,
        }
    }

    /// Resolve the entry into a validated target. An identifier that is
    /// not `owner/name` (both tokens non-empty, exactly one separator)
    /// is a per-target error: the caller skips the entry, the run goes on.
    pub fn into_target(self) -> Result<RepositoryTarget> {
        let (slug, max_releases, include_patch_releases) = match self {
            RepoEntry::Slug(slug) => (slug, DEFAULT_MAX_RELEASES, false),
            RepoEntry::Detailed {
                slug,
                max_releases,
                include_patch_releases,
            } => (slug, max_releases, include_patch_releases),
        };

        let (owner, name) = parse_slug(&slug)?;
        if max_releases == 0 {
            return Err(FeedError::Target(format!(
                "{}: maxReleases must be positive",
                slug
            )));
        }

        Ok(RepositoryTarget {
            owner,
            name,
            max_releases,
            include_patch_releases,
        })
    }
}

fn parse_slug(slug: &str) -> Result<(String, String)> {
    let mut parts = slug.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
            Ok((owner.to_string(), name.to_string()))
        }
        _ => Err(FeedError::Target(format!(
            "expected owner/name, got {:?}",
            slug
        ))),
    }
}

/// Load the repository list from a JSON config file.
///
/// Structural problems (unreadable file, invalid JSON, missing
/// `repositories` list, entry that is neither a string nor an object with
/// a `slug`) are fatal; per-entry slug validation happens later, at the
/// iteration boundary.
pub fn load_entries(path: &Path) -> Result<Vec<RepoEntry>> {
    let raw = fs::read_to_string(path).map_err(|e| {
        FeedError::Config(format!("cannot read {}: {}", path.display(), e))
    })?;

    let parsed: ConfigFile = serde_json::from_str(&raw).map_err(|e| {
        FeedError::Config(format!("cannot parse {}: {}", path.display(), e))
    })?;

    debug!(
        "Loaded {} repository entries from {}",
        parsed.repositories.len(),
        path.display()
    );
    Ok(parsed.repositories)
}
