use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use hive_examples::cli::{Cli, Commands, ConfigAction, Display, OutputFormat};
use hive_examples::config::{ExamplesConfig, LoggingConfig};
use hive_examples::error::Result;
use hive_examples::output::{LineWriter, OutputWriter, TextSink};
use hive_examples::scenario::{ScenarioId, catalog};

/// Context for command output handling.
struct OutputContext<'a> {
    display: &'a Display,
    writer: &'a OutputWriter,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Display::new().print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(config: &LoggingConfig, verbose: bool) {
    let directive = if verbose {
        &config.verbose_filter
    } else {
        &config.filter
    };

    // Logs go to stderr; stdout carries only command output.
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(EnvFilter::new(directive))
        .init();
}

/// Forces styling on or off; `None` keeps console's terminal detection.
fn apply_color(choice: Option<bool>) {
    if let Some(enabled) = choice {
        console::set_colors_enabled(enabled);
        console::set_colors_enabled_stderr(enabled);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ExamplesConfig::load(&cli.config).await?;
    init_logging(&config.logging, cli.verbose);
    apply_color(config.display.color);

    let display = Display::new();
    let format = cli.output.unwrap_or(config.output.format);
    let writer = OutputWriter::new(format).with_list_id_width(config.display.list_id_width);
    let out = OutputContext {
        display: &display,
        writer: &writer,
    };

    match cli.command {
        Commands::List => cmd_list(&out),
        Commands::Run { scenario } => cmd_run(&out, scenario.into()),
        Commands::Config { action } => cmd_config(&out, &config, action),
    }
}

fn cmd_list(out: &OutputContext<'_>) -> Result<()> {
    let mut stdout = LineWriter::stdout();
    let text = out.writer.format() == OutputFormat::Text;

    if text {
        out.display.print_header(&mut stdout, "Example Scenarios")?;
    }
    out.writer.emit_list(catalog::all(), &mut stdout)?;

    if text {
        stdout.write_line("")?;
        out.display
            .print_info(&mut stdout, "Run one with: hive-examples run <scenario>")?;
        stdout.flush()?;
    }
    Ok(())
}

fn cmd_run(out: &OutputContext<'_>, id: ScenarioId) -> Result<()> {
    let scenario = catalog::scenario(id);
    info!(scenario = %id, format = ?out.writer.format(), "Running scenario");

    out.writer.emit_scenario(scenario, &mut LineWriter::stdout())
}

fn cmd_config(
    out: &OutputContext<'_>,
    config: &ExamplesConfig,
    action: ConfigAction,
) -> Result<()> {
    let mut stdout = LineWriter::stdout();

    match action {
        ConfigAction::Show => match out.writer.format() {
            OutputFormat::Text => {
                out.display.print_header(&mut stdout, "Configuration")?;
                stdout.write_line(&config.to_toml()?)?;
            }
            OutputFormat::Json | OutputFormat::Stream => {
                stdout.write_line(&serde_json::to_string(config)?)?;
            }
        },
    }
    stdout.flush()?;
    Ok(())
}
