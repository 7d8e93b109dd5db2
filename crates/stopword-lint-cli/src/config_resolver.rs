//! Locating and loading the configuration file.
//!
//! Candidates, first hit wins:
//!
//! 1. `--config <path>`
//! 2. `stopword-lint.toml` or `.stopword-lint.toml` in the start directory
//!    or any of its ancestors
//! 3. `config.toml` in `$STOPWORD_LINT_CONFIG_DIR` or `~/.stopword-lint/`
//! 4. built-in defaults

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use stopword_lint_core::Config;

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line.
    Explicit(PathBuf),
    /// Found next to the documents.
    Project(PathBuf),
    /// Found in the user's global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the config file path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Loads the configuration this source points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            tracing::debug!("No config file found, using defaults");
            return Ok(Config::default());
        };
        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        }
        Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

const PROJECT_FILE_NAMES: [&str; 2] = ["stopword-lint.toml", ".stopword-lint.toml"];

const GLOBAL_FILE_NAME: &str = "config.toml";

/// Resolves the configuration starting from `start_dir`.
#[must_use]
pub fn resolve(start_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_with_global(start_dir, explicit, global_config_dir().as_deref())
}

fn resolve_with_global(
    start_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<&Path>,
) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Some(found) = find_in_ancestors(start_dir) {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_FILE_NAME))
        .filter(|candidate| candidate.is_file())
        .map_or(ConfigSource::Default, ConfigSource::Global)
}

fn find_in_ancestors(start_dir: &Path) -> Option<PathBuf> {
    start_dir.ancestors().find_map(|dir| {
        PROJECT_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Returns the global config directory.
///
/// `$STOPWORD_LINT_CONFIG_DIR` overrides `~/.stopword-lint/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    std::env::var_os("STOPWORD_LINT_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|home| home.join(".stopword-lint")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_wins_and_is_not_checked() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("stopword-lint.toml"), "").unwrap();

        let source = resolve_with_global(tmp.path(), Some(Path::new("/nowhere.toml")), None);
        assert_eq!(source, ConfigSource::Explicit(PathBuf::from("/nowhere.toml")));
    }

    #[test]
    fn finds_project_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".stopword-lint.toml"), "").unwrap();

        let source = resolve_with_global(tmp.path(), None, None);
        assert_eq!(
            source,
            ConfigSource::Project(tmp.path().join(".stopword-lint.toml"))
        );
    }

    #[test]
    fn plain_name_preferred_over_dotfile() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("stopword-lint.toml"), "").unwrap();
        fs::write(tmp.path().join(".stopword-lint.toml"), "").unwrap();

        let source = resolve_with_global(tmp.path(), None, None);
        assert_eq!(
            source,
            ConfigSource::Project(tmp.path().join("stopword-lint.toml"))
        );
    }

    #[test]
    fn finds_project_file_in_parent_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("stopword-lint.toml"), "").unwrap();
        let nested = tmp.path().join("docs/guide");
        fs::create_dir_all(&nested).unwrap();

        let source = resolve_with_global(&nested, None, None);
        assert_eq!(
            source,
            ConfigSource::Project(tmp.path().join("stopword-lint.toml"))
        );
    }

    #[test]
    fn falls_back_to_global_config() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();

        let source = resolve_with_global(project.path(), None, Some(global.path()));
        assert_eq!(source, ConfigSource::Global(global.path().join("config.toml")));
    }

    #[test]
    fn empty_global_dir_means_defaults() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();

        let source = resolve_with_global(project.path(), None, Some(global.path()));
        assert_eq!(source, ConfigSource::Default);
        assert!(source.path().is_none());
    }

    #[test]
    fn load_default_source_gives_default_config() {
        let config = ConfigSource::Default.load().unwrap();
        assert!(config.default_words);
    }

    #[test]
    fn load_reads_project_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("stopword-lint.toml");
        fs::write(&path, "default_words = false\n").unwrap();

        let config = ConfigSource::Project(path).load().unwrap();
        assert!(!config.default_words);
    }

    #[test]
    fn load_reports_missing_explicit_file() {
        let err = ConfigSource::Explicit(PathBuf::from("/nonexistent/sw.toml"))
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }
}
