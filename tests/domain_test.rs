//! Tests for languages, run-mode resolution and the static catalogs

use std::collections::HashSet;

use rstest::rstest;

use func_ux_demo::domain::catalog::command_names;
use func_ux_demo::domain::{
    DomainError, ErrorScenario, Guidance, Language, RunMode, CATALOG, PACK_BUILDER,
    WORKFLOW_CATEGORIES,
};

// ============================================================
// Language
// ============================================================

#[rstest]
#[case("go", Language::Go)]
#[case("python", Language::Python)]
#[case("node", Language::Node)]
#[case("java", Language::Java)]
#[case("rust", Language::Rust)]
fn given_supported_language_when_parse_then_accepts(#[case] input: &str, #[case] expected: Language) {
    let language: Language = input.parse().unwrap();
    assert_eq!(language, expected);
    assert_eq!(language.to_string(), input);
}

#[rstest]
#[case("ruby")]
#[case("Go")]
#[case("")]
#[case("typescript")]
fn given_unsupported_language_when_parse_then_invalid_language(#[case] input: &str) {
    let err = input.parse::<Language>().unwrap_err();
    assert!(matches!(err, DomainError::InvalidLanguage(ref s) if s == input));
    assert_eq!(err.to_string(), format!("invalid language '{}'", input));
}

// ============================================================
// RunMode
// ============================================================

#[test]
fn given_pack_without_container_when_resolve_then_forces_container() {
    let mode = RunMode::resolve(PACK_BUILDER, false);
    assert!(mode.container);
    assert!(mode.forced_container);
    assert_eq!(mode.label(), "Container");
}

#[test]
fn given_pack_with_container_when_resolve_then_no_override() {
    let mode = RunMode::resolve(PACK_BUILDER, true);
    assert!(mode.container);
    assert!(!mode.forced_container);
}

#[rstest]
#[case("host", false, "Source")]
#[case("host", true, "Container")]
#[case("s2i", false, "Source")]
#[case("kaniko", false, "Source")]
#[case("Pack", false, "Source")]
fn given_non_pack_builder_when_resolve_then_keeps_container_flag(
    #[case] builder: &str,
    #[case] container: bool,
    #[case] label: &str,
) {
    let mode = RunMode::resolve(builder, container);
    assert_eq!(mode.container, container);
    assert!(!mode.forced_container);
    assert_eq!(mode.label(), label);
}

// ============================================================
// Error scenarios
// ============================================================

#[rstest]
#[case("missing-function", "No function found in current directory", 5)]
#[case("invalid-flag", "Unknown flag '--invalid-flag'", 3)]
#[case("missing-registry", "Container registry required", 11)]
#[case("flag-conflict", "Invalid flag combination", 5)]
#[case("deploy-no-function", "No function project found", 14)]
fn given_known_scenario_when_resolve_then_title_and_count_match(
    #[case] name: &str,
    #[case] title: &str,
    #[case] count: usize,
) {
    let guidance = ErrorScenario::resolve(name);
    assert_eq!(guidance.title, title);
    assert_eq!(guidance.suggestions.len(), count);
    assert!(!guidance.details.is_empty());
}

#[test]
fn given_unknown_scenario_when_resolve_then_generic_fallback() {
    let guidance = ErrorScenario::resolve("segfault");

    assert_eq!(guidance.title, "Unknown error type");
    assert_eq!(guidance.details, "Error type 'segfault' is not recognized.");
    assert_eq!(guidance.suggestions.len(), 2);
    assert_eq!(
        guidance.suggestions[0],
        "Available types: missing-function, invalid-flag, missing-registry, flag-conflict, deploy-no-function"
    );
}

#[test]
fn given_catalog_when_indexed_by_variant_then_entry_matches_variant() {
    for (i, entry) in CATALOG.iter().enumerate() {
        assert_eq!(entry.scenario as usize, i, "catalog out of order at {}", entry.name);
        assert_eq!(entry.scenario.entry().name, entry.name);
    }
}

#[test]
fn given_catalog_when_listing_then_names_are_unique_and_parse_back() {
    let names: HashSet<_> = ErrorScenario::all().map(ErrorScenario::name).collect();
    assert_eq!(names.len(), CATALOG.len());
    for scenario in ErrorScenario::all() {
        assert_eq!(scenario.name().parse::<ErrorScenario>().unwrap(), scenario);
    }
}

#[test]
fn given_no_type_when_default_then_missing_function() {
    assert_eq!(ErrorScenario::DEFAULT.name(), "missing-function");
}

// ============================================================
// Help catalog and guidance
// ============================================================

#[test]
fn given_workflow_categories_when_collecting_names_then_all_unique() {
    let names: Vec<_> = command_names().collect();
    let unique: HashSet<_> = names.iter().collect();
    assert_eq!(names.len(), unique.len());
    assert_eq!(WORKFLOW_CATEGORIES.len(), 5);
    assert!(names.contains(&"create"));
    assert!(names.contains(&"deploy"));
}

#[test]
fn given_not_in_function_directory_when_info_hint_then_three_suggestions() {
    assert_eq!(Guidance::not_in_function_directory(true).suggestions.len(), 3);
    assert_eq!(Guidance::not_in_function_directory(false).suggestions.len(), 2);
}

#[test]
fn given_context_error_when_guidance_then_returns_carried_guidance() {
    let err = DomainError::NoFunctionToInvoke {
        dir: "/tmp".into(),
        guidance: Guidance::no_function_to_invoke(),
    };
    assert_eq!(err.guidance().unwrap().title, "No function to invoke");
    assert!(DomainError::InvalidLanguage("x".into()).guidance().is_none());
}
