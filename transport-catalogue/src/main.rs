use std::io::{self, Write};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transport_catalogue::request::{self, RequestDocument, RequestError};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Read the document named by the first argument, or stdin if there is none.
fn read_input() -> Result<RequestDocument, RequestError> {
    match std::env::args_os().nth(1) {
        Some(path) => {
            info!(path = %path.to_string_lossy(), "reading requests");
            request::load_document(path)
        }
        None => request::read_document(io::stdin().lock()),
    }
}

fn run() -> Result<(), RequestError> {
    let document = read_input()?;
    let answers = request::process(&document)?;

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &answers)?;
    writeln!(out)?;
    Ok(())
}
