//! # check_docker
//!
//! Prints exactly one `<SEVERITY>: <message>` line and exits with the
//! matching plugin status code.

use clap::error::ErrorKind;
use clap::Parser;
use docker_check::cli::{AppConfigResolver, CheckArgs};
use docker_check::Verdict;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let args = match CheckArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{e}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let rendered = e.to_string();
            let first_line = rendered.lines().next().unwrap_or("invalid arguments");
            return emit(Verdict::unknown(first_line.trim_start_matches("error: ")));
        }
    };

    if let Err(e) = init_logging(&args.log_level) {
        return emit(Verdict::unknown(format!("Failed to initialize logging: {e}")));
    }

    emit(run(&args))
}

fn run(args: &CheckArgs) -> Verdict {
    let plan = match AppConfigResolver::resolve(args) {
        Ok(plan) => plan,
        Err(e) => return Verdict::unknown(format!("Invalid configuration: {e}")),
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => return Verdict::unknown(format!("Failed to start async runtime: {e}")),
    };

    runtime.block_on(docker_check::run(&plan))
}

fn emit(verdict: Verdict) -> ExitCode {
    println!("{verdict}");
    ExitCode::from(verdict.exit_code())
}

fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()?;

    Ok(())
}
