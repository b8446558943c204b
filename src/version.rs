//! Semantic version comparison and tag normalization.

use std::cmp::Ordering;

use semver::Version;

use crate::error::{Result, UpcheckError};

/// Strip one leading `v` from a release tag (`v1.2.3` -> `1.2.3`).
///
/// Tags without the prefix pass through unchanged.
pub fn strip_tag(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

fn parse(version: &str) -> Result<Version> {
    Version::parse(version).map_err(|e| UpcheckError::InvalidVersion {
        version: version.to_string(),
        message: e.to_string(),
    })
}

/// Compare two version strings with semver precedence.
///
/// Pre-release versions sort before the corresponding release.
pub fn compare(a: &str, b: &str) -> Result<Ordering> {
    Ok(parse(a)?.cmp(&parse(b)?))
}

/// Whether `latest` is strictly newer than `installed`.
pub fn is_newer(latest: &str, installed: &str) -> Result<bool> {
    Ok(compare(latest, installed)? == Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_tag_removes_leading_v() {
        assert_eq!(strip_tag("v3.1.0"), "3.1.0");
    }

    #[test]
    fn strip_tag_passes_bare_version_through() {
        assert_eq!(strip_tag("3.1.0"), "3.1.0");
    }

    #[test]
    fn strip_tag_removes_only_one_prefix() {
        assert_eq!(strip_tag("vv1.0.0"), "v1.0.0");
    }

    #[test]
    fn compare_patch_difference() {
        assert_eq!(compare("1.2.3", "1.2.4").unwrap(), Ordering::Less);
    }

    #[test]
    fn compare_major_beats_minor_and_patch() {
        assert_eq!(compare("2.0.0", "1.9.9").unwrap(), Ordering::Greater);
    }

    #[test]
    fn compare_equal_versions() {
        assert_eq!(compare("1.0.0", "1.0.0").unwrap(), Ordering::Equal);
    }

    #[test]
    fn prerelease_sorts_before_release() {
        assert_eq!(compare("1.0.0-alpha", "1.0.0").unwrap(), Ordering::Less);
        assert!(is_newer("1.0.0", "1.0.0-alpha").unwrap());
    }

    #[test]
    fn prerelease_segments_order() {
        assert!(is_newer("1.0.0-beta", "1.0.0-alpha").unwrap());
        assert!(is_newer("1.0.0-alpha.2", "1.0.0-alpha.1").unwrap());
    }

    #[test]
    fn build_metadata_does_not_affect_precedence() {
        assert_eq!(
            compare("1.0.0+build1", "1.0.0+build2").unwrap(),
            Ordering::Equal
        );
    }

    #[test]
    fn is_newer_rejects_same_version() {
        assert!(!is_newer("1.0.0", "1.0.0").unwrap());
    }

    #[test]
    fn invalid_version_is_an_error() {
        let result = compare("not-a-version", "1.0.0");
        assert!(matches!(result, Err(UpcheckError::InvalidVersion { .. })));
    }
}
