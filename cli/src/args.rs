//! Command-line and environment configuration.

use std::path::PathBuf;

use abby_post_core::client::{GCL_BASE_URL, PLANT_BASE_URL};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "abby-post",
    about = "Send one of the captured Abby POST requests and print the result",
    version
)]
pub struct Cli {
    /// Origin for the plant-info request.
    #[arg(long, env = "ABBY_PLANT_BASE_URL", default_value = PLANT_BASE_URL, global = true)]
    pub plant_base_url: String,

    /// Origin for the GCL request.
    #[arg(long, env = "ABBY_GCL_BASE_URL", default_value = GCL_BASE_URL, global = true)]
    pub gcl_base_url: String,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// POST /abby/plant/plantInfo with the session token header.
    PlantInfo {
        /// Value of the `token` header.
        #[arg(long, env = "ABBY_TOKEN")]
        token: String,
    },

    /// POST /v5/gcl with a captured form body.
    Gcl(PayloadSource),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct PayloadSource {
    /// The URL-encoded form body, sent verbatim.
    #[arg(long, env = "GCL_PAYLOAD")]
    pub payload: Option<String>,

    /// Read the form body from a file. One trailing newline is dropped.
    #[arg(long)]
    pub payload_file: Option<PathBuf>,
}

impl PayloadSource {
    pub fn resolve(&self) -> anyhow::Result<String> {
        if let Some(payload) = &self.payload {
            return Ok(payload.clone());
        }
        match &self.payload_file {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading payload file {}", path.display()))?;
                Ok(strip_trailing_newline(raw))
            }
            None => Ok(String::new()),
        }
    }
}

fn strip_trailing_newline(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}
