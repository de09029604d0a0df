//! Three-part error message: title, explanation, ordered remedies

/// Structured guidance shown when a command cannot proceed.
///
/// Empty suggestion entries are kept: they render as separators and
/// count toward `suggestions.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guidance {
    pub title: String,
    pub details: String,
    pub suggestions: Vec<String>,
}

impl Guidance {
    pub fn new(title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: details.into(),
            suggestions: Vec::new(),
        }
    }

    pub fn suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn suggest_all<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions
            .extend(suggestions.into_iter().map(Into::into));
        self
    }

    /// Fallback for errors that carry no guidance of their own.
    pub fn command_failed(details: impl Into<String>) -> Self {
        Self::new("Command execution failed", details).suggest_all([
            "Check command syntax with --help",
            "Verify all required flags are provided",
            "Ensure you're in a function directory",
        ])
    }

    pub fn not_in_function_directory(with_info_hint: bool) -> Self {
        let guidance = Self::new(
            "Not in function directory",
            "This command must be run from within a function project directory.",
        )
        .suggest_all([
            "Run 'func-ux-demo create' to create a new function",
            "Navigate to an existing function directory",
        ]);
        if with_info_hint {
            guidance.suggest("Use 'func-ux-demo info' to verify function project")
        } else {
            guidance
        }
    }

    pub fn no_function_to_invoke() -> Self {
        Self::new(
            "No function to invoke",
            "No target specified and not in a function directory.",
        )
        .suggest_all([
            "Use --target to specify a deployed function URL",
            "Run from a function directory to invoke locally",
            "Start local function with 'func-ux-demo run'",
        ])
    }
}
