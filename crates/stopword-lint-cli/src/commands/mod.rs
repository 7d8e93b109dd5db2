//! Subcommand implementations.

pub mod check;
pub mod fix;
pub mod init;
pub mod list_words;
pub mod output;

use crate::config_resolver;
use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use stopword_lint_core::{dictionary, Config, Exclusion, WordsConfig};

/// Command-line overrides for the rule configuration.
#[derive(Args, Debug, Default, Clone)]
pub struct RuleArgs {
    /// Dictionary file with extra rules (replaces `words` from the config)
    #[arg(short, long)]
    pub words: Option<PathBuf>,

    /// Rule to exclude, as `term` or `term > replacement` (repeatable)
    #[arg(short, long)]
    pub exclude: Vec<String>,

    /// Do not use the built-in dictionary
    #[arg(long)]
    pub no_default_words: bool,

    /// Node kind whose text is not linted (repeatable, replaces the config list)
    #[arg(long, conflicts_with = "no_skip")]
    pub skip: Vec<String>,

    /// Lint text under every node kind
    #[arg(long)]
    pub no_skip: bool,
}

impl RuleArgs {
    /// Applies these overrides on top of a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for an exclusion without a term.
    pub fn apply(&self, mut config: Config) -> Result<Config> {
        if let Some(path) = &self.words {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            config.words = Some(WordsConfig::Path(cwd.join(path)));
        }
        for raw in &self.exclude {
            config.exclude.push(parse_exclusion(raw)?);
        }
        if self.no_default_words {
            config.default_words = false;
        }
        if self.no_skip {
            config.skip.clear();
        } else if !self.skip.is_empty() {
            config.skip.clone_from(&self.skip);
        }
        Ok(config)
    }
}

fn parse_exclusion(raw: &str) -> Result<Exclusion> {
    match dictionary::parse(raw).into_iter().next() {
        Some(rule) => Ok(rule.into()),
        None => bail!("Invalid exclusion {raw:?}: expected `term` or `term > replacement`"),
    }
}

/// Resolves, loads and overrides the configuration for documents under `paths`.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded.
pub fn load_config(paths: &[PathBuf], explicit: Option<&Path>, rules: &RuleArgs) -> Result<Config> {
    let start_dir = start_dir(paths);
    let source = config_resolver::resolve(&start_dir, explicit);
    rules.apply(source.load()?)
}

/// Directory the config search starts from.
fn start_dir(paths: &[PathBuf]) -> PathBuf {
    let first = paths.first().map_or(Path::new("."), PathBuf::as_path);
    let dir = if first.is_file() {
        first
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
    } else {
        first
    };
    std::fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stopword_lint_core::Rule;

    #[test]
    fn exclusions_parse_dictionary_syntax() {
        assert_eq!(parse_exclusion("just").unwrap(), Exclusion::term("just"));
        assert_eq!(
            parse_exclusion("utilize > use").unwrap(),
            Exclusion::pair("utilize", "use")
        );
        assert!(parse_exclusion("   ").is_err());
    }

    #[test]
    fn overrides_replace_config_values() {
        let args = RuleArgs {
            exclude: vec!["utilize > use".to_string()],
            no_default_words: true,
            skip: vec!["Heading".to_string()],
            ..RuleArgs::default()
        };
        let config = args.apply(Config::default()).unwrap();

        assert!(!config.default_words);
        assert_eq!(config.skip, vec!["Heading"]);
        assert!(config.exclude[0].excludes(&Rule::with_replacement("utilize", "use")));
    }

    #[test]
    fn no_skip_clears_skip_list() {
        let args = RuleArgs {
            no_skip: true,
            ..RuleArgs::default()
        };
        assert!(args.apply(Config::default()).unwrap().skip.is_empty());
    }

    #[test]
    fn words_path_is_resolved_from_working_directory() {
        let args = RuleArgs {
            words: Some(PathBuf::from("words.txt")),
            ..RuleArgs::default()
        };
        let config = args
            .apply(Config::default().with_base_dir("/elsewhere"))
            .unwrap();
        let Some(WordsConfig::Path(path)) = config.words else {
            panic!("expected a words path");
        };
        assert!(path.is_absolute());
        assert!(path.ends_with("words.txt"));
        assert!(!path.starts_with("/elsewhere"));
    }

    #[test]
    fn start_dir_of_file_is_its_parent() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = tmp.path().join("a.md");
        std::fs::write(&file, "").unwrap();
        assert_eq!(
            start_dir(&[file]),
            std::fs::canonicalize(tmp.path()).unwrap()
        );
    }
}
