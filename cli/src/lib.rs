//! `abby-post`: send one captured request, print the outcome.
//!
//! Stdout carries only the outcome report; logs go to stderr.

pub mod args;
pub mod transport;

use std::io::Write;

use abby_post_core::{AbbyClient, HttpRequest, Outcome};
use tracing_subscriber::EnvFilter;

pub use args::{Cli, Command, PayloadSource};
pub use transport::{Transport, TransportError, UreqTransport};

/// Install the stderr subscriber. `RUST_LOG` wins over `level`.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the request `cli` selects, send it once and write the report.
///
/// A non-200 status is a reported `Outcome::Failed`, not an error. Only
/// configuration and transport faults return `Err`.
pub fn run(cli: &Cli, transport: &impl Transport, out: &mut impl Write) -> anyhow::Result<Outcome> {
    let client = AbbyClient::new(&cli.plant_base_url, &cli.gcl_base_url)?;
    let req = build_request(&client, &cli.command)?;

    let response = transport.execute(&req)?;
    let outcome = Outcome::from_response(response);
    if !outcome.is_success() {
        tracing::warn!(url = %req.url, "non-200 response");
    }

    writeln!(out, "{outcome}")?;
    Ok(outcome)
}

fn build_request(client: &AbbyClient, command: &Command) -> anyhow::Result<HttpRequest> {
    let req = match command {
        Command::PlantInfo { token } => {
            if token.is_empty() {
                tracing::warn!("token is empty; the server will likely reject the request");
            }
            client.build_plant_info(token)
        }
        Command::Gcl(source) => {
            let payload = source.resolve()?;
            if payload.is_empty() {
                tracing::warn!("payload is empty; sending a zero-length body");
            }
            client.build_gcl(&payload)
        }
    };
    Ok(req)
}
