//! Tests for the presentation layer, rendered with a plain palette

use func_ux_demo::cli::{Output, Paint, Palette};
use func_ux_demo::config::PaletteSettings;
use func_ux_demo::domain::{ErrorScenario, Guidance, WORKFLOW_CATEGORIES};

fn render(f: impl FnOnce(&mut Output<Vec<u8>>) -> std::io::Result<()>) -> String {
    let mut out = Output::new(Vec::new(), Palette::plain());
    f(&mut out).unwrap();
    String::from_utf8(out.into_inner()).unwrap()
}

// ============================================================
// Banners
// ============================================================

#[test]
fn given_message_when_success_then_prefixed_with_checkmark() {
    let text = render(|out| out.success("Function deployed successfully!"));
    assert_eq!(text, "✓ Function deployed successfully!\n");
}

#[test]
fn given_label_when_field_then_indented_label_value() {
    let text = render(|out| out.field("Language", "go"));
    assert_eq!(text, "  Language: go\n");
}

#[test]
fn given_pending_step_when_rendered_then_hourglass_prefix() {
    let text = render(|out| out.pending("Deploying to Kubernetes..."));
    assert_eq!(text, "  ⏳ Deploying to Kubernetes...\n");
}

// ============================================================
// Guidance panel
// ============================================================

#[test]
fn given_guidance_when_rendered_then_title_details_and_bullets() {
    let guidance = Guidance::new("Not in function directory", "Run it elsewhere.")
        .suggest("first")
        .suggest("second");

    let text = render(|out| out.guidance(&guidance));

    assert_eq!(
        text,
        "\n✗ Error: Not in function directory\n\n  Run it elsewhere.\n\n💡 Suggestions:\n  • first\n  • second\n\n"
    );
}

#[test]
fn given_blank_suggestion_when_rendered_then_bare_bullet() {
    let guidance = Guidance::new("t", "d").suggest_all(["a", "", "b"]);

    let text = render(|out| out.guidance(&guidance));

    assert!(text.contains("  • a\n  • \n  • b\n"));
    assert_eq!(text.matches('•').count(), 3);
}

#[test]
fn given_missing_function_scenario_when_rendered_then_separator_is_bare_bullet() {
    let text = render(|out| out.guidance(&ErrorScenario::MissingFunction.guidance()));

    assert!(text.contains("  • Specify function path:     func invoke --path /path/to/function\n  • \n  • Run 'func create --help'"));
    assert_eq!(text.matches("  • ").count(), 5);
}

#[test]
fn given_no_details_and_no_suggestions_when_rendered_then_only_title() {
    let text = render(|out| out.guidance(&Guidance::new("Bare", "")));
    assert_eq!(text, "\n✗ Error: Bare\n\n");
}

// ============================================================
// Workflow help
// ============================================================

#[test]
fn given_categories_when_workflow_help_then_all_categories_and_padded_names() {
    let text = render(|out| out.workflow_help(WORKFLOW_CATEGORIES));

    assert!(text.contains("KNATIVE FUNCTIONS CLI"));
    assert!(text.contains("    func <command> [options]"));
    for category in WORKFLOW_CATEGORIES {
        assert!(text.contains(&format!("  {}:", category.title)));
    }
    assert!(text.contains("    create      Create a new function from template\n"));
    assert!(text.contains("Use func <command> --help for detailed information about each command."));
}

// ============================================================
// Palette
// ============================================================

#[test]
fn given_style_strings_when_parse_then_color_and_modifiers_set() {
    let paint = Paint::parse("yellow bold underline").unwrap();
    assert_eq!(paint.fg, Some(colored::Color::Yellow));
    assert!(paint.bold);
    assert!(paint.underline);
    assert!(!paint.italic);

    let bright = Paint::parse("bright_blue").unwrap();
    assert_eq!(bright.fg, Some(colored::Color::BrightBlue));
}

#[test]
fn given_bad_style_when_parse_then_error() {
    assert!(Paint::parse("chartreuse").is_err());
    assert!(Paint::parse("red blue").is_err());
}

#[test]
fn given_default_palette_settings_when_build_then_matches_builtin_styles() {
    let palette = Palette::from_settings(&PaletteSettings::default()).unwrap();
    assert_eq!(palette.error.fg, Some(colored::Color::Red));
    assert!(palette.error.bold);
    assert!(palette.header.underline);
    assert_eq!(palette, Palette::default());
}

#[test]
fn given_invalid_palette_setting_when_build_then_names_role() {
    let settings = PaletteSettings {
        flag: "neon".into(),
        ..PaletteSettings::default()
    };
    let err = Palette::from_settings(&settings).unwrap_err();
    assert!(err.to_string().contains("'flag'"));
}
