//! List words command implementation.

use anyhow::Result;
use std::path::{Path, PathBuf};
use stopword_lint_core::RuleSet;

use super::RuleArgs;
use crate::lint::Linter;

/// Runs the list-words command.
pub fn run(rules: &RuleArgs, config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(&[PathBuf::from(".")], config_path, rules)?;
    let linter = Linter::from_config(&config)?;
    print!("{}", render(linter.rule_set()));
    Ok(())
}

fn render(rule_set: &RuleSet) -> String {
    let width = rule_set
        .rules()
        .map(|rule| rule.term().chars().count())
        .max()
        .unwrap_or(0)
        .max("Term".len());

    let mut out = format!("{:<width$}  Replacement\n", "Term");
    out.push_str(&"-".repeat(width + 13));
    out.push('\n');
    for rule in rule_set.rules() {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            rule.term(),
            rule.replacement().unwrap_or("-")
        ));
    }
    out.push_str(&format!("\n{} rule(s)\n", rule_set.len()));
    out
}
