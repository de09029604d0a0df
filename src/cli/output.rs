//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.
//! Everything goes to the wrapped writer: stdout in the binary, a buffer in tests.

use std::fmt::Display;
use std::io::{self, Write};

use clap::builder::StyledStr;
use colored::control::SHOULD_COLORIZE;

use crate::cli::palette::Palette;
use crate::domain::{Guidance, HelpCategory};

/// Styled writer shared by all command handlers.
pub struct Output<W: Write> {
    out: W,
    palette: Palette,
}

impl<W: Write> Output<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        Self { out, palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Raw access for generated content such as completion scripts.
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Print clap-rendered help, keeping its styles only when color is on.
    pub fn help(&mut self, text: &StyledStr) -> io::Result<()> {
        if SHOULD_COLORIZE.should_colorize() {
            write!(self.out, "{}", text.ansi())
        } else {
            write!(self.out, "{}", text)
        }
    }

    /// Print an empty line
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Print plain output (no color)
    pub fn info(&mut self, msg: &(impl Display + ?Sized)) -> io::Result<()> {
        writeln!(self.out, "{}", msg)
    }

    /// Print indented detail (no color of its own)
    pub fn detail(&mut self, msg: &(impl Display + ?Sized)) -> io::Result<()> {
        writeln!(self.out, "  {}", msg)
    }

    /// Print `  label: value` with the value in the flag style
    pub fn field(&mut self, label: &str, value: &(impl Display + ?Sized)) -> io::Result<()> {
        let value = self.palette.flag.paint(value.to_string());
        writeln!(self.out, "  {}: {}", label, value)
    }

    /// Print success status (checkmark, success style)
    pub fn success(&mut self, msg: &(impl Display + ?Sized)) -> io::Result<()> {
        let line = self.palette.success.paint(format!("✓ {}", msg));
        writeln!(self.out, "{}", line)
    }

    /// Print a progress headline in the success style
    pub fn status(&mut self, msg: &(impl Display + ?Sized)) -> io::Result<()> {
        let line = self.palette.success.paint(msg.to_string());
        writeln!(self.out, "{}", line)
    }

    /// Print warning (warning style)
    pub fn warning(&mut self, msg: &(impl Display + ?Sized)) -> io::Result<()> {
        let line = self.palette.warning.paint(msg.to_string());
        writeln!(self.out, "{}", line)
    }

    /// Print a pending step: `  ⏳ msg`
    pub fn pending(&mut self, msg: &(impl Display + ?Sized)) -> io::Result<()> {
        let marker = self.palette.warning.paint("⏳");
        writeln!(self.out, "  {} {}", marker, msg)
    }

    /// Print a numbered step with the command in the example style
    pub fn step(&mut self, n: usize, cmd: &(impl Display + ?Sized)) -> io::Result<()> {
        let cmd = self.palette.example.paint(cmd.to_string());
        writeln!(self.out, "  {}. {}", n, cmd)
    }

    /// Print section header (header style)
    pub fn header(&mut self, msg: &(impl Display + ?Sized)) -> io::Result<()> {
        let line = self.palette.header.paint(msg.to_string());
        writeln!(self.out, "{}", line)
    }

    /// Render a three-part error: title, details, suggestions.
    pub fn guidance(&mut self, guidance: &Guidance) -> io::Result<()> {
        self.blank()?;
        let title = self
            .palette
            .error
            .paint(format!("✗ Error: {}", guidance.title));
        writeln!(self.out, "{}", title)?;
        self.blank()?;

        if !guidance.details.is_empty() {
            self.detail(&guidance.details)?;
            self.blank()?;
        }

        if !guidance.suggestions.is_empty() {
            self.warning("💡 Suggestions:")?;
            for suggestion in &guidance.suggestions {
                writeln!(self.out, "  • {}", suggestion)?;
            }
            self.blank()?;
        }
        Ok(())
    }

    /// Render one help category: title line plus aligned `name  description` rows.
    pub fn command_category(&mut self, category: &HelpCategory) -> io::Result<()> {
        let title = self.palette.command.paint(format!("  {}:", category.title));
        writeln!(self.out, "{}", title)?;
        for cmd in category.commands {
            let name = self.palette.flag.paint(format!("{:<10}", cmd.name));
            let description = self.palette.description.paint(cmd.description);
            writeln!(self.out, "    {}  {}", name, description)?;
        }
        self.blank()
    }

    /// The menu shown when no subcommand is given.
    pub fn workflow_help(&mut self, categories: &[HelpCategory]) -> io::Result<()> {
        self.blank()?;
        self.header("KNATIVE FUNCTIONS CLI")?;
        self.blank()?;

        self.header("USAGE")?;
        let usage = self.palette.flag.paint("func <command> [options]");
        writeln!(self.out, "    {}", usage)?;
        self.blank()?;

        for category in categories {
            self.command_category(category)?;
        }

        let hint = self.palette.example.paint("func <command> --help");
        writeln!(
            self.out,
            "Use {} for detailed information about each command.",
            hint
        )?;
        self.blank()
    }
}
