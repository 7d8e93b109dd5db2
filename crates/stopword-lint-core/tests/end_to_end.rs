//! Integration test: built-in dictionary → rule set → scan → fix.
//!
//! Each case runs a single text node through the default rule set and
//! checks the reported messages and the text after applying every fix.

use stopword_lint_core::{apply_fixes, scan, Config, Exclusion, Rule, RuleSet};

fn default_rules() -> RuleSet {
    RuleSet::builder().build().expect("built-in rules should build")
}

fn lint(rules: &RuleSet, text: &str) -> (Vec<String>, String) {
    let records = scan(rules, text, false);
    let messages = records.iter().map(|r| r.message.clone()).collect();
    let fixes: Vec<_> = records.into_iter().filter_map(|r| r.fix).collect();
    (messages, apply_fixes(text, &fixes).output)
}

// ── Valid texts: no reports ──

#[test]
fn term_as_part_of_another_word_is_ignored() {
    let rules = default_rules();
    for text in ["Bar utilizen foo", "Utilizen", "Bar uberutilize foo", "uberutilize"] {
        assert!(scan(&rules, text, false).is_empty(), "unexpected report in {text:?}");
    }
}

#[test]
fn term_in_hyphenated_word_is_ignored() {
    let rules = default_rules();
    for text in [
        "Install utilize-some-plugin here",
        "utilize-some-plugin",
        "Install some-plugin-utilize here",
        "some-plugin-utilize",
    ] {
        assert!(scan(&rules, text, false).is_empty(), "unexpected report in {text:?}");
    }
}

#[test]
fn file_names_are_ignored() {
    assert!(scan(&default_rules(), "utilize.md", false).is_empty());
}

#[test]
fn terms_are_not_regular_expressions() {
    let rules = RuleSet::builder()
        .rule(Rule::new("i.e."))
        .build()
        .unwrap();
    assert!(scan(&rules, "I have an idea", false).is_empty());
}

// ── Invalid texts: reports and fixes ──

#[test]
fn one_word_without_fix() {
    let (messages, output) = lint(&default_rules(), "You should hyperlocal Elm");
    assert_eq!(messages, vec!["Avoid using \"hyperlocal\""]);
    assert_eq!(output, "You should hyperlocal Elm");
}

#[test]
fn one_word_with_fix() {
    let (messages, output) = lint(&default_rules(), "You should utilize Elm");
    assert_eq!(messages, vec!["Avoid using \"utilize\", use \"use\" instead"]);
    assert_eq!(output, "You should use Elm");
}

#[test]
fn several_words_keep_suffix() {
    let rules = default_rules();
    let text = "You should utilize Elm and hyperlocal JavaScript";
    let records = scan(&rules, text, false);

    let mut by_position = records.clone();
    by_position.sort_by_key(|r| r.offset);
    let messages: Vec<&str> = by_position.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Avoid using \"utilize\", use \"use\" instead",
            "Avoid using \"hyperlocal\"",
        ]
    );
    assert!(by_position[0].fix.is_some());
    assert!(by_position[1].fix.is_none());

    let first_fix = by_position[0].fix.clone().into_iter().collect::<Vec<_>>();
    assert_eq!(
        apply_fixes(text, &first_fix).output,
        "You should use Elm and hyperlocal JavaScript"
    );
}

#[test]
fn keeps_capital_first_letter() {
    let (messages, output) = lint(&default_rules(), "Utilize Elm");
    assert_eq!(messages, vec!["Avoid using \"utilize\", use \"use\" instead"]);
    assert_eq!(output, "Use Elm");
}

#[test]
fn sentence_final_term_is_fixed() {
    let (_, output) = lint(&default_rules(), "We leverage synergy. We utilize.");
    assert_eq!(output, "We use synergy. We use.");
}

#[test]
fn typographic_apostrophes_match_dictionary_apostrophe() {
    let rules = default_rules();
    for text in [
        "it's worth noting that cats sleep",
        "It’s worth noting that cats sleep",
    ] {
        let records = scan(&rules, text, false);
        assert_eq!(records.len(), 1, "expected one report in {text:?}");
    }
}

// ── Configuration ──

#[test]
fn excluded_builtin_is_not_reported() {
    let rules = RuleSet::builder()
        .exclude("hyperlocal")
        .exclude(Exclusion::pair("utilize", "use"))
        .build()
        .unwrap();
    assert!(scan(&rules, "You should utilize Elm and hyperlocal JavaScript", false).is_empty());
}

#[test]
fn config_without_default_words_uses_only_custom_rules() {
    let config = Config::parse(
        r#"
default_words = false
words = ["synergize > cooperate"]
"#,
    )
    .unwrap();
    let rules = config.rule_set().unwrap();

    let (messages, output) = lint(&rules, "Teams synergize. You should utilize Elm");
    assert_eq!(
        messages,
        vec!["Avoid using \"synergize\", use \"cooperate\" instead"]
    );
    assert_eq!(output, "Teams cooperate. You should utilize Elm");
}

#[test]
fn rule_set_can_be_shared_across_threads() {
    let rules = default_rules();
    let texts = ["You should utilize Elm", "hyperlocal", "nothing here"];

    let counts: Vec<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = texts
            .iter()
            .map(|text| {
                let rules = &rules;
                s.spawn(move || scan(rules, text, false).len())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(counts, vec![1, 1, 0]);
}
