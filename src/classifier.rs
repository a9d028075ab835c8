use crate::types::{RawRelease, RepositoryTarget, SemanticVersion};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Anchored tag shape: optional leading `v`, `major.minor`, optional
/// `.patch`, optional suffix starting with `-` or `+` (pre-release or
/// build metadata). Anything with trailing garbage fails the match.
fn tag_regex() -> &'static Regex {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    TAG_RE.get_or_init(|| {
        Regex::new(r"^v?(\d+)\.(\d+)(?:\.(\d+))?([-+].*)?$")
            .expect("tag regex must compile")
    })
}

/// Parse a release tag into its semantic-version components.
///
/// The regex only admits digit runs for the numeric captures, but each
/// capture is still integer-parsed explicitly so an out-of-range component
/// rejects the tag instead of slipping through. Patch defaults to 0 when
/// the tag has only two components.
pub fn parse_tag(tag: &str) -> Option<SemanticVersion> {
    let captures = tag_regex().captures(tag)?;

    let major = captures.get(1)?.as_str().parse::<u64>().ok()?;
    let minor = captures.get(2)?.as_str().parse::<u64>().ok()?;
    let patch = match captures.get(3) {
        Some(m) => m.as_str().parse::<u64>().ok()?,
        None => 0,
    };
    let suffix = captures.get(4).map(|m| m.as_str().to_string());

    Some(SemanticVersion {
        major,
        minor,
        patch,
        suffix,
    })
}

/// Decide whether a raw release qualifies for the feed.
///
/// Rules apply in order and short-circuit on the first failure:
/// drafts and prereleases are out unconditionally, the tag must parse as
/// a semantic version, and patch releases are excluded unless the target
/// opted into them. A pre-release/build suffix on the tag does not by
/// itself exclude; only the numeric patch component is policed.
pub fn qualifies(release: &RawRelease, target: &RepositoryTarget) -> bool {
    if release.draft {
        debug!("Skipping draft release {} in {}", release.id, target.slug());
        return false;
    }
    if release.prerelease {
        debug!(
            "Skipping prerelease {} in {}",
            release.id,
            target.slug()
        );
        return false;
    }

    let tag = match release.tag_name.as_deref() {
        Some(tag) if !tag.is_empty() => tag,
        _ => {
            debug!("Skipping untagged release {} in {}", release.id, target.slug());
            return false;
        }
    };

    let version = match parse_tag(tag) {
        Some(version) => version,
        None => {
            debug!("Tag {} in {} is not a semantic version", tag, target.slug());
            return false;
        }
    };

    if !target.include_patch_releases && version.patch != 0 {
        debug!(
            "Skipping patch release {} in {} (patch policy)",
            tag,
            target.slug()
        );
        return false;
    }

    true
}
