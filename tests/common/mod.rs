#![allow(dead_code)]

// Shared fixtures for the integration tests.
pub use release_feed::types::{RawRelease, RepositoryTarget};

use chrono::{DateTime, TimeZone, Utc};

/// A target with the default policy (10 releases, no patch releases).
pub fn target(owner: &str, name: &str) -> RepositoryTarget {
    RepositoryTarget {
        owner: owner.to_string(),
        name: name.to_string(),
        max_releases: 10,
        include_patch_releases: false,
    }
}

/// A published, non-draft release carrying only a tag.
pub fn release(id: u64, tag: &str) -> RawRelease {
    RawRelease {
        id,
        html_url: Some(format!("https://github.com/acme/widget/releases/tag/{}", tag)),
        tag_name: Some(tag.to_string()),
        name: None,
        body: None,
        draft: false,
        prerelease: false,
        published_at: Some(ts(2024, 5, 1, 12, 0, 0)),
        created_at: None,
    }
}

pub fn ts(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec).unwrap()
}
