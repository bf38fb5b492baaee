mod cli;
mod command;
mod command_result;
mod commands;
mod graphql_files;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e:#}");
                std::process::ExitCode::FAILURE
            },
        }
    }
}

fn setup_logger(cli: &Cli) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) = choose_log_level(cli.verbose, env_val.as_deref());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(log_level)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

/// `-v` wins over `LOG_LEVEL`; an unrecognized `LOG_LEVEL` falls back to
/// [`DEFAULT_LOG_LEVEL`] with a warning to log once logging is up.
pub(crate) fn choose_log_level(
    verbose: bool,
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }
    match env_val.map(str::trim) {
        None | Some("") => (DEFAULT_LOG_LEVEL, None),
        Some(val) => match val.to_ascii_uppercase().as_str() {
            "TRACE" => (tracing::Level::TRACE, None),
            "DEBUG" | "VERBOSE" => (tracing::Level::DEBUG, None),
            "INFO" => (tracing::Level::INFO, None),
            "WARN" => (tracing::Level::WARN, None),
            "ERROR" => (tracing::Level::ERROR, None),
            _ => (
                DEFAULT_LOG_LEVEL,
                Some(format!("Invalid `LOG_LEVEL` environment variable value: `{val}`")),
            ),
        },
    }
}

#[cfg(test)]
mod tests;
