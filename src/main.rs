#![allow(clippy::module_inception)]

mod cli;
mod commands;
mod tools;

use std::process::ExitCode;

use cli::{Cli, Commands};

use clap::Parser;
use log::{error, trace};
use tools::ToolFailure;

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {
    // no-op
}

/// Exit status of a failed run: the failing tool's own code when there is one
fn exit_code(err: &anyhow::Error) -> ExitCode {
    err.chain()
        .find_map(|e| e.downcast_ref::<ToolFailure>())
        .map_or(ExitCode::FAILURE, |failure| {
            ExitCode::from(failure.exit_code())
        })
}

fn main() -> ExitCode {
    reset_sigpipe();

    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_env("VARSUB_LOG")
        .init();

    let args = Cli::parse();

    trace!("init");
    let result = match args.command {
        Commands::Run(ref run) => commands::run::run(run),
        Commands::Index(ref index) => commands::index::run(index),
        Commands::Subsample(ref subsample) => commands::subsample::run(subsample),
        Commands::Ids(ref ids) => commands::ids::run(ids),
        Commands::Extract(ref extract) => commands::extract::run(extract),
    };
    match result {
        Ok(()) => {
            trace!("done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            exit_code(&err)
        }
    }
}
