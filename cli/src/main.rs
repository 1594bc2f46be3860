use std::io::BufRead;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use command_dispatch_engine::{
    CatalogFormat, DispatchConfig, DispatchOutcome, Dispatcher, format_catalog,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "dispatch-demo")]
#[command(about = "Dispatch sample commands through the command-dispatch pipeline")]
struct Cli {
    /// YAML dispatcher configuration.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log pipeline steps to stderr.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Dispatch one argument vector, command name first (e.g. greet -name Alice).
    Run(RunArgs),
    /// Dispatch one space-delimited command line (e.g. "g Alice").
    Line(LineArgs),
    /// Dispatch every non-blank line read from stdin until end of input.
    Repl,
    /// Print every registered command.
    Catalog(CatalogArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Command name followed by its parameters.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Debug, Args)]
struct LineArgs {
    /// Command line to dispatch.
    #[arg(allow_hyphen_values = true)]
    text: String,
}

#[derive(Debug, Args)]
struct CatalogArgs {
    /// Output format (default: catalog_format from the config, else text).
    #[arg(long)]
    format: Option<CatalogFormat>,
}

/// Exit status when a dispatched input was rejected.
const INPUT_ERROR_EXIT: i32 = 2;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Command::Run(args) => run_args(&config, args),
        Command::Line(args) => run_line(&config, args),
        Command::Repl => run_repl(&config),
        Command::Catalog(args) => run_catalog(&config, args),
    });

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(INPUT_ERROR_EXIT),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<DispatchConfig, String> {
    match path {
        Some(path) => DispatchConfig::load(path)
            .map_err(|e| format!("failed to load config {}: {e}", path.display())),
        None => Ok(DispatchConfig::default()),
    }
}

fn build_dispatcher(config: &DispatchConfig) -> Result<Dispatcher, String> {
    let mut dispatcher = Dispatcher::from_config(config)
        .on_help(|text| print!("{text}"))
        .on_error(|err| eprintln!("error: {err}"));
    commands::register_all(&mut dispatcher)
        .map_err(|e| format!("failed to register commands: {e}"))?;
    debug!(commands = dispatcher.registry().len(), "Dispatcher ready");
    Ok(dispatcher)
}

fn run_args(config: &DispatchConfig, args: RunArgs) -> Result<bool, String> {
    let dispatcher = build_dispatcher(config)?;
    let outcome = dispatcher.dispatch_args(&args.args).map_err(|e| e.to_string())?;
    Ok(!matches!(outcome, DispatchOutcome::Failed(_)))
}

fn run_line(config: &DispatchConfig, args: LineArgs) -> Result<bool, String> {
    let dispatcher = build_dispatcher(config)?;
    let outcome = dispatcher.dispatch_line(&args.text).map_err(|e| e.to_string())?;
    Ok(!matches!(outcome, DispatchOutcome::Failed(_)))
}

fn run_repl(config: &DispatchConfig) -> Result<bool, String> {
    let dispatcher = build_dispatcher(config)?;
    let stdin = std::io::stdin();

    let mut failures = 0usize;
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("failed to read stdin: {e}"))?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let outcome = dispatcher.dispatch_line(line).map_err(|e| e.to_string())?;
        if matches!(outcome, DispatchOutcome::Failed(_)) {
            failures += 1;
        }
    }

    debug!(failures, "Input exhausted");
    Ok(failures == 0)
}

fn run_catalog(config: &DispatchConfig, args: CatalogArgs) -> Result<bool, String> {
    let dispatcher = build_dispatcher(config)?;
    let format = args.format.unwrap_or(config.catalog_format);
    let rendered = format_catalog(dispatcher.registry(), format)?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(true)
}
