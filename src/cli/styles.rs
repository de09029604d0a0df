//! ANSI styling for clap-rendered help
//!
//! Mirrors the default palette roles: headers, commands, flags, examples
//! and descriptions look the same in `--help` as in command output.
//! clap strips the escapes again whenever color is off.

use clap::builder::styling::{AnsiColor, Effects, Style, Styles};
use clap::builder::StyledStr;

pub const HEADER: Style = AnsiColor::Yellow
    .on_default()
    .effects(Effects::BOLD.insert(Effects::UNDERLINE));
pub const COMMAND: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
pub const FLAG: Style = AnsiColor::Blue.on_default();
pub const EXAMPLE: Style = AnsiColor::Magenta.on_default();
pub const DESCRIPTION: Style = AnsiColor::White.on_default();
pub const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
pub const SUCCESS: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);

/// Styles handed to `#[command(styles = ...)]`.
pub fn help_styles() -> Styles {
    Styles::styled()
        .header(HEADER)
        .usage(COMMAND)
        .literal(FLAG)
        .placeholder(EXAMPLE)
        .error(ERROR)
        .valid(SUCCESS)
        .invalid(ERROR)
}

/// Long command description in the description style.
pub fn description(text: &str) -> StyledStr {
    paint(DESCRIPTION, text)
}

/// `Examples:` block in the example style.
pub fn examples(text: &str) -> StyledStr {
    paint(EXAMPLE, text)
}

fn paint(style: Style, text: &str) -> StyledStr {
    StyledStr::from(format!("{}{}{}", style.render(), text, style.render_reset()))
}
