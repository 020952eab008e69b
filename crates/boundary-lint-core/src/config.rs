//! TOML configuration for boundary-lint.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::types::Severity;

/// Which rule dialect a project uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// Role inferred from an optional string-literal directive;
    /// absence defaults to a server role.
    #[default]
    Attribute,
    /// Role always explicit via a leading comment marker.
    Directive,
}

impl std::fmt::Display for DialectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attribute => write!(f, "attribute"),
            Self::Directive => write!(f, "directive"),
        }
    }
}

/// Top-level configuration for boundary-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Rule dialect for this project (default: attribute).
    #[serde(default)]
    pub dialect: DialectKind,

    /// Severity threshold for process failure (default: error).
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Path resolver configuration.
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_exclude(),
        }
    }
}

/// Path resolver configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Alias table: pattern -> root-relative target, e.g. `"@/*" = "src/*"`.
    ///
    /// Patterns may end in `/*` to remap a whole subtree. Kept sorted so
    /// resolution order is deterministic; longer patterns win.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

/// True if the relative path lexically climbs above its starting point.
fn escapes_root(target: &str) -> bool {
    let mut depth = 0i32;
    for component in Path::new(target).components() {
        match component {
            std::path::Component::ParentDir => {
                depth -= 1;
                if depth < 0 {
                    return true;
                }
            }
            std::path::Component::Normal(_) => depth += 1,
            _ => {}
        }
    }
    false
}

fn default_exclude() -> Vec<String> {
    vec![
        "**/node_modules/**".to_string(),
        "**/dist/**".to_string(),
        "**/.next/**".to_string(),
    ]
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Config is structurally invalid.
    #[error("config validation: {0}")]
    Validation(String),
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Validates the configuration against the set of known rule names.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first problem found.
    pub fn validate(&self, known_rules: &[&str]) -> Result<(), ConfigError> {
        for name in self.rules.keys() {
            if !known_rules.contains(&name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "rules.{name}: unknown rule"
                )));
            }
        }

        for (pattern, target) in &self.resolver.aliases {
            if pattern.matches('*').count() > 1 || target.matches('*').count() > 1 {
                return Err(ConfigError::Validation(format!(
                    "resolver.aliases.\"{pattern}\": at most one wildcard per side"
                )));
            }
            if pattern.ends_with("/*") != target.ends_with("/*") {
                return Err(ConfigError::Validation(format!(
                    "resolver.aliases.\"{pattern}\": wildcard must appear on both sides or neither"
                )));
            }
            let target_path = target.trim_end_matches("/*");
            if Path::new(target_path).is_absolute() {
                return Err(ConfigError::Validation(format!(
                    "resolver.aliases.\"{pattern}\": target must be root-relative"
                )));
            }
            if escapes_root(target_path) {
                return Err(ConfigError::Validation(format!(
                    "resolver.aliases.\"{pattern}\": target must stay inside the project root"
                )));
            }
        }

        Ok(())
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Severity at which the process exits non-zero.
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Error)
    }
}
