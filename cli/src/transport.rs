//! Blocking execution of a built `HttpRequest`.
//!
//! # Design
//! The core crate never touches the network; this module is the host side
//! of that split. Status codes come back as data so the caller decides what
//! a non-200 means. There is no retry and no timeout.
//!
//! ureq decodes gzip and br bodies itself; `deflate` is decoded here.

use std::io::Read;

use abby_post_core::{HttpMethod, HttpRequest, HttpResponse};
use flate2::read::{DeflateDecoder, ZlibDecoder};
use thiserror::Error;

/// Framing headers ureq derives from the URL and body. The fixed requests
/// carry them only so the built request matches the captured one.
pub const TRANSPORT_MANAGED: [&str; 2] = ["host", "content-length"];

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("reading response body from {url} failed: {source}")]
    Body {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("decoding {encoding} response body from {url} failed: {source}")]
    Decode {
        url: String,
        encoding: String,
        #[source]
        source: std::io::Error,
    },
}

pub trait Transport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        tracing::info!(method = req.method.as_str(), url = %req.url, "sending request");

        let mut builder = match req.method {
            HttpMethod::Post => self.agent.post(&req.url),
        };
        for (name, value) in &req.headers {
            if is_transport_managed(name) {
                continue;
            }
            tracing::debug!(header = %name, "forwarding header");
            builder = builder.header(name.as_str(), value.as_str());
        }

        let sent = match &req.body {
            Some(body) => builder.send(body.as_bytes()),
            None => builder.send_empty(),
        };
        let mut response = sent.map_err(|source| TransportError::Request {
            url: req.url.clone(),
            source,
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
                (name.as_str().to_string(), value)
            })
            .collect::<Vec<_>>();
        let raw = response
            .body_mut()
            .read_to_vec()
            .map_err(|source| TransportError::Body {
                url: req.url.clone(),
                source,
            })?;
        tracing::info!(status, body_len = raw.len(), "response received");

        let mut response = HttpResponse {
            status,
            headers,
            body: String::new(),
        };
        let bytes = match response.header("content-encoding") {
            Some(encoding) if encoding.trim().eq_ignore_ascii_case("deflate") => {
                inflate(&raw).map_err(|source| TransportError::Decode {
                    url: req.url.clone(),
                    encoding: encoding.to_string(),
                    source,
                })?
            }
            _ => raw,
        };
        response.body = String::from_utf8_lossy(&bytes).into_owned();
        Ok(response)
    }
}

/// `deflate` is meant to be zlib-wrapped, but some servers send a raw
/// deflate stream; fall back to that when the zlib header is missing.
fn inflate(raw: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut out = Vec::new();
    if ZlibDecoder::new(raw).read_to_end(&mut out).is_ok() {
        return Ok(out);
    }
    out.clear();
    DeflateDecoder::new(raw).read_to_end(&mut out)?;
    Ok(out)
}

fn is_transport_managed(name: &str) -> bool {
    TRANSPORT_MANAGED.iter().any(|m| name.eq_ignore_ascii_case(m))
}
