//! Text styles for the presentation layer
//!
//! A `Palette` is built once from settings and handed to `Output`;
//! nothing here is global except colored's own override switch.

use colored::{Color, ColoredString, Colorize};

use crate::cli::{CliError, CliResult};
use crate::config::{ColorMode, PaletteSettings};

/// A single text style: optional foreground color plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Paint {
    pub fg: Option<Color>,
    pub bold: bool,
    pub underline: bool,
    pub italic: bool,
    pub dimmed: bool,
}

impl Paint {
    /// No color, no modifiers.
    pub const PLAIN: Paint = Paint {
        fg: None,
        bold: false,
        underline: false,
        italic: false,
        dimmed: false,
    };

    /// Parse a style string such as `"yellow bold underline"`.
    ///
    /// Multi-word colors use underscores: `bright_blue`.
    pub fn parse(spec: &str) -> Result<Self, String> {
        let mut paint = Paint::PLAIN;
        for token in spec.split_whitespace() {
            match token.to_ascii_lowercase().as_str() {
                "bold" => paint.bold = true,
                "underline" => paint.underline = true,
                "italic" => paint.italic = true,
                "dimmed" => paint.dimmed = true,
                "plain" | "none" => {}
                color => {
                    if paint.fg.is_some() {
                        return Err(format!("more than one color in '{spec}'"));
                    }
                    let color = color
                        .replace('_', " ")
                        .parse::<Color>()
                        .map_err(|()| format!("unknown color or modifier '{token}'"))?;
                    paint.fg = Some(color);
                }
            }
        }
        Ok(paint)
    }

    pub fn paint(&self, text: impl AsRef<str>) -> ColoredString {
        let text = text.as_ref();
        let mut styled = match self.fg {
            Some(color) => text.color(color),
            None => text.normal(),
        };
        if self.bold {
            styled = styled.bold();
        }
        if self.underline {
            styled = styled.underline();
        }
        if self.italic {
            styled = styled.italic();
        }
        if self.dimmed {
            styled = styled.dimmed();
        }
        styled
    }
}

/// Named styles, one per role in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub error: Paint,
    pub warning: Paint,
    pub success: Paint,
    pub command: Paint,
    pub flag: Paint,
    pub example: Paint,
    pub description: Paint,
    pub header: Paint,
}

impl Palette {
    pub fn from_settings(settings: &PaletteSettings) -> CliResult<Self> {
        let parse = |role: &str, value: &str| {
            Paint::parse(value).map_err(|reason| CliError::InvalidStyle {
                role: role.to_string(),
                value: value.to_string(),
                reason,
            })
        };
        Ok(Self {
            error: parse("error", &settings.error)?,
            warning: parse("warning", &settings.warning)?,
            success: parse("success", &settings.success)?,
            command: parse("command", &settings.command)?,
            flag: parse("flag", &settings.flag)?,
            example: parse("example", &settings.example)?,
            description: parse("description", &settings.description)?,
            header: parse("header", &settings.header)?,
        })
    }

    /// Every role unstyled.
    pub fn plain() -> Self {
        Self {
            error: Paint::PLAIN,
            warning: Paint::PLAIN,
            success: Paint::PLAIN,
            command: Paint::PLAIN,
            flag: Paint::PLAIN,
            example: Paint::PLAIN,
            description: Paint::PLAIN,
            header: Paint::PLAIN,
        }
    }
}

impl Default for Palette {
    /// Built-in styles; falls back to plain if the defaults ever fail to parse.
    fn default() -> Self {
        Self::from_settings(&PaletteSettings::default()).unwrap_or_else(|_| Self::plain())
    }
}

/// Forward the configured mode to colored.
///
/// `Auto` leaves colored's environment detection (NO_COLOR, CLICOLOR, tty) in charge.
pub fn apply_color_mode(mode: ColorMode) {
    match mode {
        ColorMode::Auto => colored::control::unset_override(),
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
    }
}
