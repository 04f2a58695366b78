use std::process::ExitCode;

use judge_runner::parse_args;

fn main() -> ExitCode {
    // Initialize tracing based on RUST_LOG env var; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let runner = match parse_args(std::env::args_os()) {
        Ok(runner) => runner,
        Err(code) => return ExitCode::from(code),
    };

    match runner.execute() {
        Ok(code) => code,
        Err(err) => {
            // errors that escape the pipeline are still only diagnostics
            println!("An error occurred: {err:#}");
            ExitCode::SUCCESS
        }
    }
}
