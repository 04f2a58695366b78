use anyhow::{Context, Result};
use judge_runner_core::{Config, Harness, Invocation};
use std::process::ExitCode;
use tracing::debug;

use crate::cli::Runner;
use crate::display::{StdoutProgress, print_diagnostic, print_plan, print_report};

pub fn run_command(args: &Runner) -> Result<ExitCode> {
    let invocation = Invocation::new(
        &args.source_file,
        &args.input_file,
        &args.output_file,
        &args.expected_output_file,
    );
    debug!("Invocation: {:?}", invocation);

    // Missing inputs stop the run before any work begins
    if let Err(err) = invocation.validate() {
        println!("Error: {err}");
        return Ok(ExitCode::from(1));
    }
    if let Some(ref path) = args.config {
        if !path.exists() {
            println!("Error: {} does not exist.", path.display());
            return Ok(ExitCode::from(1));
        }
    }

    let config = match args.config {
        Some(ref path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::discover(&invocation.source_file)
            .context("Failed to load configuration")?,
    };
    if let Some(ref source) = config.source {
        debug!("Using config {:?}", source);
    }

    let mut harness = Harness::with_config(config);
    if let Some(context) = args.context {
        harness = harness.with_context(context);
    }

    if args.dry_run {
        match harness.plan(&invocation) {
            Ok(plan) => print_plan(&plan),
            Err(err) => print_diagnostic(&err),
        }
        return Ok(ExitCode::SUCCESS);
    }

    // Pipeline failures are reported, not turned into an exit status
    match harness.run(&invocation, &mut StdoutProgress) {
        Ok(report) => print_report(&report),
        Err(err) => print_diagnostic(&err),
    }

    Ok(ExitCode::SUCCESS)
}
