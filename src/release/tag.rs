use regex::Regex;
use semver::Version;

use crate::error::{CommitPilotError, Result};

/// Version-tag template (e.g. "v{version}", "release-{version}")
///
/// Renders a version into a tag name and recognizes existing release tags,
/// extracting their versions.
#[derive(Debug, Clone)]
pub struct TagTemplate {
    template: String,
    matcher: Regex,
}

impl TagTemplate {
    /// Create a template; must contain the `{version}` placeholder exactly once
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();

        if template.matches("{version}").count() != 1 {
            return Err(CommitPilotError::config(format!(
                "Tag format '{}' must contain exactly one {{version}} placeholder",
                template
            )));
        }

        let escaped = regex::escape(&template);
        let pattern = escaped.replace(r"\{version\}", "(.+)");
        let matcher = Regex::new(&format!("^{}$", pattern)).map_err(|e| {
            CommitPilotError::config(format!("Invalid tag format '{}': {}", template, e))
        })?;

        Ok(TagTemplate { template, matcher })
    }

    /// Render a version into a tag name
    pub fn format(&self, version: &Version) -> String {
        self.template.replace("{version}", &version.to_string())
    }

    /// Extract the version from a tag name, if the tag matches this template
    pub fn extract(&self, tag: &str) -> Option<Version> {
        let captures = self.matcher.captures(tag)?;
        let version_part = captures.get(1)?.as_str();
        Version::parse(version_part).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let template = TagTemplate::new("v{version}").unwrap();
        assert_eq!(template.format(&Version::new(1, 2, 3)), "v1.2.3");
    }

    #[test]
    fn test_format_prerelease() {
        let template = TagTemplate::new("v{version}").unwrap();
        let version = Version::parse("1.2.0-beta.1").unwrap();
        assert_eq!(template.format(&version), "v1.2.0-beta.1");
    }

    #[test]
    fn test_extract() {
        let template = TagTemplate::new("v{version}").unwrap();
        assert_eq!(template.extract("v1.2.3"), Some(Version::new(1, 2, 3)));
        assert_eq!(
            template.extract("v1.2.0-beta.4"),
            Some(Version::parse("1.2.0-beta.4").unwrap())
        );
    }

    #[test]
    fn test_extract_rejects_foreign_tags() {
        let template = TagTemplate::new("v{version}").unwrap();
        assert_eq!(template.extract("release-1.2.3"), None);
        assert_eq!(template.extract("v1.2"), None);
        assert_eq!(template.extract("vnot-a-version"), None);
    }

    #[test]
    fn test_custom_template_roundtrip() {
        let template = TagTemplate::new("release-{version}-final").unwrap();
        let version = Version::new(2, 0, 0);
        let tag = template.format(&version);
        assert_eq!(tag, "release-2.0.0-final");
        assert_eq!(template.extract(&tag), Some(version));
    }

    #[test]
    fn test_template_requires_placeholder() {
        assert!(TagTemplate::new("release").is_err());
        assert!(TagTemplate::new("{version}-{version}").is_err());
    }
}
