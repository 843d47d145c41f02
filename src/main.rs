mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use relief_board::adapters::outbound::console::{StderrProgressReporter, TracingDiagnosticSink};
use relief_board::adapters::outbound::network::{ContractSettings, DEFAULT_REQUEST_TIMEOUT};
use relief_board::application::dto::{ListingRequest, OutputFormat};
use relief_board::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType, RecordSourceFactory, SourceSpec,
};
use relief_board::application::use_cases::ShowListingsUseCase;
use relief_board::shared::error::{ExitCode, ReliefBoardError};
use relief_board::shared::Result;
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Logs go to stderr. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path)?,
        None => match config::discover_config(Path::new("."))? {
            Some(config) => {
                eprintln!("📄 Auto-discovered config file: {}", config::CONFIG_FILENAME);
                config
            }
            None => ConfigFile::default(),
        },
    };

    let request = resolve_listings(&args, &config)?;
    let format = resolve_format(&args, &config)?;
    let source_spec = resolve_source(&args, &config)?;
    tracing::info!(?format, listings = ?request.listings(), "resolved settings");

    // Create adapters (Dependency Injection)
    let source = RecordSourceFactory::create(source_spec)?;
    let diagnostics = Arc::new(TracingDiagnosticSink::new());
    let progress_reporter = StderrProgressReporter::new();

    let use_case = ShowListingsUseCase::new(source, diagnostics, progress_reporter);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let report = runtime.block_on(use_case.execute(request))?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    let color = use_color(&args, format);
    let formatted_output = FormatterFactory::create(format, color).format(&report)?;

    let presenter = PresenterFactory::create(PresenterType::from(args.output.clone()));
    presenter.present(&formatted_output)?;

    if report.unavailable_count() > 0 {
        Ok(ExitCode::ListingUnavailable)
    } else {
        Ok(ExitCode::Success)
    }
}

fn resolve_listings(args: &Args, config: &ConfigFile) -> Result<ListingRequest> {
    let names: &[String] = if !args.listings.is_empty() {
        &args.listings
    } else {
        config.listings.as_deref().unwrap_or_default()
    };

    ListingRequest::parse(names).map_err(|message| ReliefBoardError::Validation { message }.into())
}

fn resolve_format(args: &Args, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }
    match config.format.as_deref() {
        Some(format) => OutputFormat::from_str(format)
            .map_err(|message| ReliefBoardError::Validation { message }.into()),
        None => Ok(OutputFormat::default()),
    }
}

/// Command-line flags win over the config file; a snapshot on either side
/// excludes the contract settings of the same side.
fn resolve_source(args: &Args, config: &ConfigFile) -> Result<SourceSpec> {
    if let Some(snapshot) = args.snapshot.as_ref() {
        return Ok(SourceSpec::Snapshot(snapshot.clone()));
    }

    let cli_targets_chain = args.rpc_url.is_some() || args.contract.is_some();
    if !cli_targets_chain {
        if let Some(snapshot) = config.snapshot.as_ref() {
            return Ok(SourceSpec::Snapshot(snapshot.clone()));
        }
    }

    let rpc_url = args.rpc_url.as_ref().or(config.rpc_url.as_ref());
    let contract = args.contract.as_ref().or(config.contract.as_ref());

    match (rpc_url, contract) {
        (Some(rpc_url), Some(contract)) => {
            let mut settings = ContractSettings::new(rpc_url.clone(), contract.clone());
            settings.field_order = config.field_order.unwrap_or_default();
            settings.request_timeout = config
                .request_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT);
            settings.max_attempts = config.max_attempts.unwrap_or(1);
            settings.method_overrides = config.method_overrides();
            Ok(SourceSpec::Contract(settings))
        }
        (Some(rpc_url), None) => Err(ReliefBoardError::MissingContract {
            rpc_url: rpc_url.clone(),
        }
        .into()),
        (None, _) => Err(ReliefBoardError::NoRecordSource.into()),
    }
}

fn use_color(args: &Args, format: OutputFormat) -> bool {
    format == OutputFormat::Table
        && !args.no_color
        && args.output.is_none()
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal()
}
