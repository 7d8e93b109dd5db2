//! Configuration types for stopword-lint.

use crate::dictionary;
use crate::rule::Rule;
use crate::ruleset::{BuildError, Exclusion, RuleSet, RuleSetBuilder, Words};
use crate::skip::{SkipError, SkipList, DEFAULT_SKIP};
use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration for stopword-lint.
///
/// ```toml
/// words = "./words.txt"
/// exclude = ["just", ["utilize", "use"]]
/// default_words = true
/// skip = ["BlockQuote"]
/// severity = "warning"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Extra rules: a dictionary file path or an inline list.
    #[serde(default)]
    pub words: Option<WordsConfig>,

    /// Rules to remove from the final set.
    #[serde(default)]
    pub exclude: Vec<Exclusion>,

    /// Whether the built-in dictionary is used.
    #[serde(default = "default_true", alias = "defaultWords")]
    pub default_words: bool,

    /// Node kinds whose descendants are not scanned.
    #[serde(default = "default_skip")]
    pub skip: Vec<String>,

    /// Severity reported for violations.
    #[serde(default)]
    pub severity: Severity,

    /// Severity threshold for a failing exit status (default: "error").
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Directory relative `words` paths are resolved against.
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words: None,
            exclude: Vec::new(),
            default_words: true,
            skip: default_skip(),
            severity: Severity::default(),
            fail_on: None,
            base_dir: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_skip() -> Vec<String> {
    DEFAULT_SKIP.iter().map(ToString::to_string).collect()
}

/// The `words` option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WordsConfig {
    /// Path to a dictionary file.
    Path(PathBuf),
    /// Inline entries.
    List(Vec<WordEntry>),
}

/// One inline `words` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WordEntry {
    /// A line in dictionary syntax (`"utilize > use"`).
    Line(String),
    /// A `[term]` or `[term, replacement]` array.
    Rule(Rule),
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// Relative `words` paths are resolved against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut config = Self::parse(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
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

    /// Sets the directory relative `words` paths resolve against.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Returns the extra rules as a rule-set source.
    #[must_use]
    pub fn words_source(&self) -> Option<Words> {
        match self.words.as_ref()? {
            WordsConfig::Path(path) => Some(Words::Path(self.resolve_path(path))),
            WordsConfig::List(entries) => Some(Words::Rules(
                entries
                    .iter()
                    .flat_map(|entry| match entry {
                        WordEntry::Line(line) => dictionary::parse(line),
                        WordEntry::Rule(rule) => vec![rule.clone()],
                    })
                    .collect(),
            )),
        }
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Returns a rule-set builder carrying this configuration.
    #[must_use]
    pub fn rule_set_builder(&self) -> RuleSetBuilder {
        let builder = RuleSet::builder()
            .default_words(self.default_words)
            .excludes(self.exclude.iter().cloned());
        match self.words_source() {
            Some(words) => builder.words(words),
            None => builder,
        }
    }

    /// Builds the rule set described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary file cannot be read.
    pub fn rule_set(&self) -> Result<RuleSet, BuildError> {
        self.rule_set_builder().build()
    }

    /// Resolves the skip list through the host's node-kind lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured name is not a known node kind.
    pub fn skip_list<K, F>(&self, lookup: F) -> Result<SkipList<K>, SkipError>
    where
        K: PartialEq,
        F: Fn(&str) -> Option<K>,
    {
        SkipList::resolve(&self.skip, lookup)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.default_words);
        assert_eq!(config.skip, vec!["BlockQuote"]);
        assert!(config.words.is_none());
        assert_eq!(config.severity, Severity::Error);
    }

    #[test]
    fn empty_toml_matches_default() {
        let config = Config::parse("").unwrap();
        assert!(config.default_words);
        assert_eq!(config.skip, vec!["BlockQuote"]);
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
words = "words.txt"
exclude = ["just", ["utilize", "use"]]
defaultWords = false
skip = ["BlockQuote", "Heading"]
severity = "warning"
fail_on = "warning"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.words, Some(WordsConfig::Path(PathBuf::from("words.txt"))));
        assert_eq!(
            config.exclude,
            vec![Exclusion::term("just"), Exclusion::pair("utilize", "use")]
        );
        assert!(!config.default_words);
        assert_eq!(config.skip, vec!["BlockQuote", "Heading"]);
        assert_eq!(config.severity, Severity::Warning);
        assert_eq!(config.fail_on, Some(Severity::Warning));
    }

    #[test]
    fn inline_words_accept_lines_and_arrays() {
        let toml = r#"
default_words = false
words = ["foo > bar", ["baz"], ["qux", "quux"]]
"#;
        let config = Config::parse(toml).unwrap();
        let set = config.rule_set().unwrap();
        let rules: Vec<Rule> = set.rules().cloned().collect();
        assert_eq!(
            rules,
            vec![
                Rule::with_replacement("foo", "bar"),
                Rule::new("baz"),
                Rule::with_replacement("qux", "quux"),
            ]
        );
    }

    #[test]
    fn relative_words_path_resolves_against_config_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("words.txt"), "synergize > work together\n").unwrap();
        let config_path = dir.path().join("stopword-lint.toml");
        std::fs::write(&config_path, "words = \"words.txt\"\ndefault_words = false\n").unwrap();

        let config = Config::from_file(&config_path).unwrap();
        let set = config.rule_set().unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn exclusions_apply_to_builtins() {
        let config = Config::parse(r#"exclude = [["utilize", "use"]]"#).unwrap();
        let set = config.rule_set().unwrap();
        assert!(!set.rules().any(|r| r.term() == "utilize"));
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = Config::parse("default_words = \"maybe\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn malformed_exclusion_is_parse_error() {
        let err = Config::parse(r#"exclude = [["utilize", "use", "x"]]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(Config::parse("exclude = [[]]").is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::from_file(Path::new("/nonexistent/stopword-lint.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn skip_list_uses_host_lookup() {
        let config = Config::default();
        let skip = config
            .skip_list(|name| (name == "BlockQuote").then_some(1u8))
            .unwrap();
        assert_eq!(skip.kinds(), &[1]);

        let config = Config::parse(r#"skip = ["Nope"]"#).unwrap();
        assert!(config.skip_list(|_| None::<u8>).is_err());
    }
}
