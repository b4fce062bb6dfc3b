mod cli;
mod config;

use cli::Args;
use config::{OutputTarget, Settings};
use grant_report::adapters::outbound::console::StderrProgressReporter;
use grant_report::adapters::outbound::filesystem::FileSystemReader;
use grant_report::application::dto::{ConvertRequest, ConvertResponse};
use grant_report::application::factories::{PresenterFactory, PresenterType};
use grant_report::application::use_cases::ConvertReportUseCase;
use grant_report::ports::outbound::{InputSource, ProgressReporter};
use grant_report::shared::error::ExitCode;
use grant_report::shared::Result;
use owo_colors::OwoColorize;
use std::process;

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version arrive here too, on stdout
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
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

fn run(args: Args) -> Result<ExitCode> {
    let progress_reporter = stderr_reporter(args.quiet);

    let loaded_config = config::load_for_args(&args)?;
    if let Some(loaded) = &loaded_config {
        progress_reporter.report(&loaded.describe());
    }
    let settings =
        config::resolve_settings(&args, loaded_config.as_ref().map(|loaded| &loaded.file))?;

    let input = match args.input.as_deref() {
        Some(arg) => InputSource::from_arg(arg),
        None => InputSource::Stdin,
    };

    // Create adapters (Dependency Injection)
    let report_reader = FileSystemReader::new();

    let request = ConvertRequest::builder()
        .input(input)
        .format(settings.format)
        .build()?;

    let use_case = ConvertReportUseCase::new(report_reader, progress_reporter);
    let response = use_case.execute(request)?;

    let presenter_type = match &settings.output {
        OutputTarget::Stdout => PresenterType::Stdout,
        OutputTarget::File(path) => PresenterType::File(path.clone()),
    };
    PresenterFactory::create(presenter_type).present(&response.content)?;

    Ok(policy_exit_code(
        &settings,
        &response,
        &stderr_reporter(args.quiet),
    ))
}

fn stderr_reporter(quiet: bool) -> StderrProgressReporter {
    if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    }
}

/// Maps the enabled `--fail-on-*` checks to an exit code, explaining any failure.
fn policy_exit_code(
    settings: &Settings,
    response: &ConvertResponse,
    reporter: &dyn ProgressReporter,
) -> ExitCode {
    let compliance = &response.compliance;
    let mut violated = false;

    if settings.fail_on_denied && compliance.has_denied() {
        reporter.report_error(&format!(
            "⚠️  Policy violation: {} denied package(s) found",
            compliance.denied_count
        ));
        violated = true;
    }
    if settings.fail_on_unlicensed && compliance.has_unlicensed() {
        reporter.report_error(&format!(
            "⚠️  Policy violation: {} unlicensed package(s) found",
            compliance.unlicensed_count
        ));
        violated = true;
    }

    if violated {
        ExitCode::PolicyViolation
    } else {
        reporter.report_completion(&format!(
            "License report complete (status: {})",
            compliance.status
        ));
        ExitCode::Success
    }
}
