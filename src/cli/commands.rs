//! Command handlers
//!
//! Each handler makes at most one local check and then prints a fixed
//! narrative. Nothing is built, deployed or sent over the network.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::output::Output;
use crate::cli::CliResult;
use crate::config::APP_NAME;
use crate::domain::{
    DomainError, ErrorScenario, Guidance, Language, RunMode, WORKFLOW_CATEGORIES,
};
use crate::infrastructure::di::ServiceContainer;

pub const DEFAULT_FUNCTION_NAME: &str = "my-function";
pub const LOCAL_TARGET: &str = "http://localhost:8080";
pub const DEPLOYED_URL: &str = "https://my-function.example.com";

pub fn execute_command<W: Write>(
    cli: &Cli,
    ctx: &ServiceContainer,
    out: &mut Output<W>,
) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Create {
            name,
            language,
            template,
            registry,
        }) => _create(out, name.as_deref(), language, template, registry.as_deref()),
        Some(Commands::Run {
            container,
            build,
            registry,
            address,
            builder,
        }) => _run(
            ctx,
            out,
            *container,
            build,
            registry.as_deref(),
            address,
            builder,
        ),
        Some(Commands::Deploy {
            registry,
            namespace,
            build,
        }) => _deploy(ctx, out, registry, namespace.as_deref(), *build),
        Some(Commands::Invoke {
            target,
            data,
            content_type,
        }) => _invoke(ctx, out, target.as_deref(), data, content_type),
        Some(Commands::ErrorDemo { kind }) => _error_demo(out, kind.as_deref()),
        Some(Commands::Completion { shell }) => _completion(out, *shell),
        None => _workflow_help(out),
    }
}

#[instrument(skip(out))]
fn _create<W: Write>(
    out: &mut Output<W>,
    name: Option<&str>,
    language: &str,
    template: &str,
    registry: Option<&str>,
) -> CliResult<()> {
    let name = name.unwrap_or(DEFAULT_FUNCTION_NAME);
    let language: Language = language.parse()?;
    debug!("language: {}, template: {}", language, template);

    out.blank()?;
    out.success(&format!("Created function project: {}", name))?;
    out.field("Language", &language)?;
    out.field("Template", template)?;
    if let Some(registry) = registry {
        out.field("Registry", registry)?;
    }
    out.blank()?;

    out.warning("🔄 Next Steps:")?;
    out.step(1, &format!("cd {}", name))?;
    out.step(2, &format!("{} run --help", APP_NAME))?;
    out.step(3, &format!("{} run", APP_NAME))?;
    out.blank()?;
    Ok(())
}

#[instrument(skip(ctx, out))]
fn _run<W: Write>(
    ctx: &ServiceContainer,
    out: &mut Output<W>,
    container: bool,
    build: &str,
    registry: Option<&str>,
    address: &str,
    builder: &str,
) -> CliResult<()> {
    require_function_project(ctx, Guidance::not_in_function_directory(true))?;
    debug!("build: {}, registry: {:?}", build, registry);

    let mode = RunMode::resolve(builder, container);
    if mode.forced_container {
        let flag = out.palette().flag.paint("--container=true");
        out.warning("⚠️  Pack builder requires container mode")?;
        out.info(&format!("   Automatically enabling {}", flag))?;
    }

    out.blank()?;
    out.status("🚀 Starting function...")?;
    out.field("Mode", mode.label())?;
    out.field("Builder", builder)?;
    out.field("Address", address)?;
    out.blank()?;

    let example = out.palette().example;
    out.success(&format!("Function running on {}", address))?;
    out.detail(&example.paint(format!("curl http://{}", address)))?;
    out.detail(&example.paint(format!("{} invoke", APP_NAME)))?;
    out.blank()?;
    Ok(())
}

#[instrument(skip(ctx, out))]
fn _deploy<W: Write>(
    ctx: &ServiceContainer,
    out: &mut Output<W>,
    registry: &str,
    namespace: Option<&str>,
    build: bool,
) -> CliResult<()> {
    require_function_project(ctx, Guidance::not_in_function_directory(false))?;

    let flag = out.palette().flag;
    out.blank()?;
    out.status("🚀 Deploying function...")?;
    if build {
        out.pending("Building container image...")?;
        out.pending(&format!("Pushing to {}...", flag.paint(registry)))?;
    }
    out.pending("Deploying to Kubernetes...")?;
    if let Some(namespace) = namespace {
        out.field("Namespace", namespace)?;
    }
    out.blank()?;

    let example = out.palette().example;
    out.success("Function deployed successfully!")?;
    out.detail(&format!("URL: {}", example.paint(DEPLOYED_URL)))?;
    out.detail(&format!(
        "Test: {}",
        example.paint(format!("{} invoke --target {}", APP_NAME, DEPLOYED_URL))
    ))?;
    out.blank()?;
    Ok(())
}

#[instrument(skip(ctx, out))]
fn _invoke<W: Write>(
    ctx: &ServiceContainer,
    out: &mut Output<W>,
    target: Option<&str>,
    data: &str,
    content_type: &str,
) -> CliResult<()> {
    let target = match target {
        Some(target) => target,
        None if ctx.in_function_project() => LOCAL_TARGET,
        None => {
            return Err(DomainError::NoFunctionToInvoke {
                dir: ctx.work_dir().to_path_buf(),
                guidance: Guidance::no_function_to_invoke(),
            }
            .into())
        }
    };

    out.blank()?;
    out.status(&format!("🔥 Invoking function: {}", target))?;
    out.field("Data", data)?;
    out.field("Content-Type", content_type)?;
    out.blank()?;

    let palette = *out.palette();
    out.status("✓ Response received:")?;
    out.detail(&format!("Status: {}", palette.success.paint("200 OK")))?;
    out.detail(&format!(
        "Body: {}",
        palette.example.paint(r#"{"message": "Hello, World!"}"#)
    ))?;
    out.blank()?;
    Ok(())
}

/// Prints the requested scenario; an unknown type is itself a demo, so
/// this never fails on input.
#[instrument(skip(out))]
fn _error_demo<W: Write>(out: &mut Output<W>, kind: Option<&str>) -> CliResult<()> {
    let kind = kind.unwrap_or(ErrorScenario::DEFAULT.name());
    let palette = *out.palette();

    out.blank()?;
    out.info(&format!(
        "{} Demonstrating: {}",
        palette.warning.paint("🎭"),
        palette.command.paint(kind)
    ))?;
    out.blank()?;
    out.guidance(&ErrorScenario::resolve(kind))?;
    Ok(())
}

#[instrument(skip(out))]
fn _completion<W: Write>(out: &mut Output<W>, shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out.writer());
    Ok(())
}

fn _workflow_help<W: Write>(out: &mut Output<W>) -> CliResult<()> {
    out.workflow_help(WORKFLOW_CATEGORIES)?;
    Ok(())
}

/// Fails with `guidance` unless the working directory is a function project.
fn require_function_project(ctx: &ServiceContainer, guidance: Guidance) -> CliResult<()> {
    if ctx.in_function_project() {
        return Ok(());
    }
    Err(DomainError::NotInFunctionDirectory {
        dir: ctx.work_dir().to_path_buf(),
        guidance,
    }
    .into())
}
