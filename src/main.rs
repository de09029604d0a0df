use std::io::{self, Write};
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use func_ux_demo::cli::commands::execute_command;
use func_ux_demo::cli::palette::apply_color_mode;
use func_ux_demo::cli::{Cli, CliResult, Output, Palette};
use func_ux_demo::config::Settings;
use func_ux_demo::exitcode;
use func_ux_demo::infrastructure::di::ServiceContainer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let parsed = Cli::try_parse();
    setup_logging(parsed.as_ref().map_or(0, |cli| cli.verbose));

    let stdout = io::stdout();
    let mut out = Output::new(stdout.lock(), Palette::default());

    let code = match run(parsed, &mut out) {
        Ok(()) => exitcode::OK,
        Err(e) => {
            tracing::debug!("command failed: {:?}", e);
            if let Err(write_err) = out.guidance(&e.guidance()) {
                eprintln!("{}: {}", "error".red().bold(), write_err);
            }
            e.exit_code()
        }
    };

    out.flush().ok();
    process::exit(code);
}

fn run<W: Write>(parsed: Result<Cli, clap::Error>, out: &mut Output<W>) -> CliResult<()> {
    let loaded = Settings::load();

    let parsed = match parsed {
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // help and version stay available with a broken config file
            let settings = loaded.unwrap_or_else(|err| {
                tracing::warn!("ignoring configuration: {}", err);
                Settings::default()
            });
            apply_color_mode(settings.color);
            out.help(&e.render())?;
            return Ok(());
        }
        other => other,
    };

    let mut settings = loaded?;
    if let Ok(Some(color)) = parsed.as_ref().map(|cli| cli.color) {
        settings.color = color;
    }
    apply_color_mode(settings.color);
    out.set_palette(Palette::from_settings(&settings.palette)?);

    let cli = parsed?;
    let ctx = ServiceContainer::new()?;
    execute_command(&cli, &ctx, out)
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -v -v -v");
            LevelFilter::TRACE
        }
    };

    // Formatted output directed to stderr, keeping stdout for the demo itself
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
