use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::ReleaseLevel;
use crate::error::{CommitPilotError, Result};

/// Represents the complete configuration for commit-pilot.
///
/// Contains the lint rule settings, the release bump policy, the ordered
/// branch/channel list, and the tag format template.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub lint: LintConfig,

    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default = "default_branches")]
    pub branches: Vec<BranchRule>,

    #[serde(default = "default_tag_format")]
    pub tag_format: String,
}

/// Returns the default commit type set.
fn default_commit_types() -> Vec<String> {
    vec![
        "feat".to_string(),
        "fix".to_string(),
        "docs".to_string(),
        "style".to_string(),
        "refactor".to_string(),
        "test".to_string(),
        "chore".to_string(),
        "build".to_string(),
        "ci".to_string(),
        "perf".to_string(),
        "revert".to_string(),
    ]
}

fn default_lint_preset() -> String {
    "conventional".to_string()
}

fn default_max_length() -> usize {
    100
}

/// Settings for the commit message grammar.
///
/// `extends` names the base rule preset; the remaining fields tune the
/// limits the individual rules enforce.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LintConfig {
    #[serde(default = "default_lint_preset")]
    pub extends: String,

    #[serde(default = "default_commit_types")]
    pub types: Vec<String>,

    #[serde(default = "default_max_length")]
    pub header_max_length: usize,

    #[serde(default = "default_max_length")]
    pub body_max_line_length: usize,

    #[serde(default = "default_max_length")]
    pub footer_max_line_length: usize,
}

impl Default for LintConfig {
    fn default() -> Self {
        LintConfig {
            extends: default_lint_preset(),
            types: default_commit_types(),
            header_max_length: default_max_length(),
            body_max_line_length: default_max_length(),
            footer_max_line_length: default_max_length(),
        }
    }
}

fn default_release_preset() -> String {
    "conventional".to_string()
}

/// Bump policy: an ordered override list layered over a named preset.
///
/// Later rules for the same commit type win over earlier ones; types with no
/// rule fall back to the preset mapping.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReleaseConfig {
    #[serde(default = "default_release_preset")]
    pub preset: String,

    #[serde(default)]
    pub rules: Vec<ReleaseRuleConfig>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            preset: default_release_preset(),
            rules: Vec::new(),
        }
    }
}

/// A single `(type -> level)` override entry.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ReleaseRuleConfig {
    pub r#type: String,
    pub level: ReleaseLevel,
}

/// One entry in the ordered branch/channel list.
///
/// `pattern` is a glob over branch names (`*` matches any run of
/// characters). A branch with a `prerelease` label releases on that
/// pre-release channel; otherwise it releases on the stable channel.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BranchRule {
    pub pattern: String,

    #[serde(default)]
    pub channel: Option<String>,

    #[serde(default)]
    pub prerelease: Option<String>,
}

fn default_branches() -> Vec<BranchRule> {
    vec![
        BranchRule {
            pattern: "main".to_string(),
            channel: None,
            prerelease: None,
        },
        BranchRule {
            pattern: "master".to_string(),
            channel: None,
            prerelease: None,
        },
        // Maintenance branches such as "1.2.x" release on the stable channel
        BranchRule {
            pattern: "*.x".to_string(),
            channel: None,
            prerelease: None,
        },
        BranchRule {
            pattern: "develop".to_string(),
            channel: Some("beta".to_string()),
            prerelease: Some("beta".to_string()),
        },
    ]
}

fn default_tag_format() -> String {
    "v{version}".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lint: LintConfig::default(),
            release: ReleaseConfig::default(),
            branches: default_branches(),
            tag_format: default_tag_format(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `commitpilot.toml` in current directory
/// 3. `commitpilot.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./commitpilot.toml").exists() {
        fs::read_to_string("./commitpilot.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("commitpilot.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| CommitPilotError::config(format!("Cannot parse configuration: {}", e)))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.lint.extends, "conventional");
        assert_eq!(config.lint.header_max_length, 100);
        assert!(config.lint.types.contains(&"feat".to_string()));
        assert_eq!(config.release.preset, "conventional");
        assert!(config.release.rules.is_empty());
        assert_eq!(config.tag_format, "v{version}");
    }

    #[test]
    fn test_default_branches_order() {
        let config = Config::default();
        let patterns: Vec<&str> = config
            .branches
            .iter()
            .map(|b| b.pattern.as_str())
            .collect();
        assert_eq!(patterns, vec!["main", "master", "*.x", "develop"]);

        let develop = config.branches.last().unwrap();
        assert_eq!(develop.channel.as_deref(), Some("beta"));
        assert_eq!(develop.prerelease.as_deref(), Some("beta"));
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            tag_format = "release-{version}"

            [lint]
            extends = "conventional"
            types = ["feat", "fix"]
            header_max_length = 72

            [release]
            preset = "conventional"

            [[release.rules]]
            type = "refactor"
            level = "patch"

            [[branches]]
            pattern = "trunk"

            [[branches]]
            pattern = "canary"
            channel = "next"
            prerelease = "next"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tag_format, "release-{version}");
        assert_eq!(config.lint.header_max_length, 72);
        assert_eq!(config.lint.types, vec!["feat", "fix"]);
        assert_eq!(config.release.rules.len(), 1);
        assert_eq!(config.release.rules[0].r#type, "refactor");
        assert_eq!(config.release.rules[0].level, ReleaseLevel::Patch);
        assert_eq!(config.branches.len(), 2);
        assert_eq!(config.branches[1].prerelease.as_deref(), Some("next"));
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let toml_str = r#"
            [lint]
            header_max_length = 50
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.lint.header_max_length, 50);
        // Untouched sections fall back to defaults
        assert_eq!(config.lint.extends, "conventional");
        assert_eq!(config.branches.len(), 4);
        assert_eq!(config.tag_format, "v{version}");
    }

    #[test]
    fn test_invalid_level_rejected() {
        let toml_str = r#"
            [[release.rules]]
            type = "feat"
            level = "huge"
        "#;

        assert!(toml::from_str::<Config>(toml_str).is_err());
    }
}
