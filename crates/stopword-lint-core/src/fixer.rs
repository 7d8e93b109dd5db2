//! Applying fixes to source text.

use crate::types::Fix;
use tracing::debug;

/// Outcome of [`apply_fixes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    /// The text with fixes applied.
    pub output: String,
    /// Number of fixes applied.
    pub applied: usize,
    /// Number of fixes skipped because they overlapped an applied one or
    /// fell outside the text.
    pub skipped: usize,
}

impl FixOutcome {
    /// Returns true if the output differs from the input.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.applied > 0
    }
}

/// Applies fixes in order of their start offset.
///
/// A fix overlapping one that was already applied is skipped, so two rules
/// matching the same word never produce garbled output. Fixes with equal
/// starts keep their input order.
#[must_use]
pub fn apply_fixes(source: &str, fixes: &[Fix]) -> FixOutcome {
    let mut ordered: Vec<&Fix> = fixes.iter().collect();
    ordered.sort_by_key(|fix| fix.range[0]);

    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;
    let mut applied = 0;
    let mut skipped = 0;

    for fix in ordered {
        let range = fix.range();
        let valid = range.start >= cursor
            && range.start <= range.end
            && source.is_char_boundary(range.start)
            && source.is_char_boundary(range.end)
            && range.end <= source.len();
        if !valid {
            debug!("Skipping fix at {:?}", range);
            skipped += 1;
            continue;
        }

        output.push_str(&source[cursor..range.start]);
        output.push_str(&fix.text);
        cursor = range.end;
        applied += 1;
    }
    output.push_str(&source[cursor..]);

    FixOutcome {
        output,
        applied,
        skipped,
    }
}
