//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# stopword-lint configuration

# Use the built-in dictionary of discouraged words
default_words = true

# Extra rules: a dictionary file, one `term` or `term > replacement` per line,
# relative to this file
# words = "./words.txt"

# ...or inline, in the same syntax
# words = ["synergize > work together", "hyperlocal"]

# Rules to drop. A bare term only removes rules without a replacement.
exclude = [
    # "just",
    # ["utilize", "use"],
]

# Node kinds whose text is not linted
skip = ["BlockQuote"]

# Severity reported for every violation: "error", "warning" or "info"
severity = "error"

# Lowest severity that makes `check` exit with a failure
# fail_on = "warning"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("stopword-lint.toml"), force)?;

    println!("Created stopword-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit stopword-lint.toml to add or exclude words");
    println!("  2. Run: stopword-lint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }
    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stopword_lint_core::{Config, Severity};

    #[test]
    fn template_is_a_valid_default_config() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert!(config.default_words);
        assert_eq!(config.skip, vec!["BlockQuote"]);
        assert_eq!(config.severity, Severity::Error);
        assert!(config.rule_set().is_ok());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("stopword-lint.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(write_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        write_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
