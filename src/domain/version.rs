use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Release severity decided for a commit or an aggregated batch of commits.
///
/// Ordered by severity so that a batch decision is simply the maximum of the
/// per-commit levels: major > minor > patch > none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseLevel {
    None,
    Patch,
    Minor,
    Major,
}

impl ReleaseLevel {
    /// True if this level triggers a release
    pub fn triggers_release(&self) -> bool {
        *self != ReleaseLevel::None
    }
}

impl fmt::Display for ReleaseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReleaseLevel::None => "none",
            ReleaseLevel::Patch => "patch",
            ReleaseLevel::Minor => "minor",
            ReleaseLevel::Major => "major",
        };
        write!(f, "{}", name)
    }
}

/// Bump a version according to the release level.
///
/// Pre-release and build metadata on the input are discarded; the result is
/// always a plain `X.Y.Z` base. A `none` level returns the base unchanged.
pub fn bump(version: &Version, level: ReleaseLevel) -> Version {
    match level {
        ReleaseLevel::Major => Version::new(version.major + 1, 0, 0),
        ReleaseLevel::Minor => Version::new(version.major, version.minor + 1, 0),
        ReleaseLevel::Patch => Version::new(version.major, version.minor, version.patch + 1),
        ReleaseLevel::None => Version::new(version.major, version.minor, version.patch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(ReleaseLevel::Major > ReleaseLevel::Minor);
        assert!(ReleaseLevel::Minor > ReleaseLevel::Patch);
        assert!(ReleaseLevel::Patch > ReleaseLevel::None);
    }

    #[test]
    fn test_max_aggregation() {
        let levels = vec![
            ReleaseLevel::Patch,
            ReleaseLevel::Minor,
            ReleaseLevel::None,
        ];
        assert_eq!(
            levels.into_iter().max().unwrap_or(ReleaseLevel::None),
            ReleaseLevel::Minor
        );
    }

    #[test]
    fn test_bump_major() {
        let v = Version::new(1, 2, 3);
        assert_eq!(bump(&v, ReleaseLevel::Major), Version::new(2, 0, 0));
    }

    #[test]
    fn test_bump_minor() {
        let v = Version::new(1, 2, 3);
        assert_eq!(bump(&v, ReleaseLevel::Minor), Version::new(1, 3, 0));
    }

    #[test]
    fn test_bump_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(bump(&v, ReleaseLevel::Patch), Version::new(1, 2, 4));
    }

    #[test]
    fn test_bump_none_keeps_base() {
        let v = Version::new(1, 2, 3);
        assert_eq!(bump(&v, ReleaseLevel::None), Version::new(1, 2, 3));
    }

    #[test]
    fn test_bump_strips_prerelease() {
        let v = Version::parse("1.2.3-beta.4").unwrap();
        assert_eq!(bump(&v, ReleaseLevel::Minor), Version::new(1, 3, 0));
    }

    #[test]
    fn test_level_display() {
        assert_eq!(ReleaseLevel::Major.to_string(), "major");
        assert_eq!(ReleaseLevel::None.to_string(), "none");
    }

    #[test]
    fn test_level_deserialize() {
        let table: std::collections::HashMap<String, ReleaseLevel> =
            toml::from_str("level = \"patch\"").unwrap();
        assert_eq!(table["level"], ReleaseLevel::Patch);

        assert!(toml::from_str::<std::collections::HashMap<String, ReleaseLevel>>(
            "level = \"gigantic\""
        )
        .is_err());
    }
}
