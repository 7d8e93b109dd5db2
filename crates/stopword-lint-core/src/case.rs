//! Case-preserving replacement.

/// Uppercases the first character of `s`, leaving the rest untouched.
#[must_use]
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns `replacement`, capitalized if `original` starts with a capital.
///
/// `original` counts as capitalized when uppercasing its first character
/// leaves it unchanged, so a term starting with a digit or symbol also
/// capitalizes the replacement.
#[must_use]
pub fn clone_case(replacement: &str, original: &str) -> String {
    if upper_first(original) == original {
        upper_first(replacement)
    } else {
        replacement.to_string()
    }
}

/// Substitutes the matched term inside `matched_text` with `replacement`,
/// following the term's leading capital.
///
/// `matched_text` is the whole matched span, which may begin with a
/// boundary character; `matched_term` is the term as it appears in the
/// source. Everything around the term is kept as is.
#[must_use]
pub fn apply(matched_text: &str, matched_term: &str, replacement: &str) -> String {
    let cased = clone_case(replacement, matched_term);
    match matched_text.strip_suffix(matched_term) {
        Some(prefix) => format!("{prefix}{cased}"),
        None => matched_text.replacen(matched_term, &cased, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_capital_first_letter() {
        assert_eq!(clone_case("use", "Utilize"), "Use");
        assert_eq!(clone_case("use", "UTILIZE"), "Use");
    }

    #[test]
    fn lowercase_source_keeps_replacement_verbatim() {
        assert_eq!(clone_case("use", "utilize"), "use");
        assert_eq!(clone_case("JavaScript", "javascript"), "JavaScript");
    }

    #[test]
    fn only_first_letter_changes() {
        assert_eq!(clone_case("make use of", "Utilize"), "Make use of");
    }

    #[test]
    fn non_letter_start_counts_as_capitalized() {
        assert_eq!(clone_case("use", "'tis"), "Use");
    }

    #[test]
    fn upper_first_handles_empty_and_unicode() {
        assert_eq!(upper_first(""), "");
        assert_eq!(upper_first("élan"), "Élan");
    }

    #[test]
    fn apply_preserves_boundary_character() {
        assert_eq!(apply(" utilize", "utilize", "use"), " use");
        assert_eq!(apply("(Utilize", "Utilize", "use"), "(Use");
        assert_eq!(apply("Utilize", "Utilize", "use"), "Use");
    }
}
