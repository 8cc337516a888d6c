//! Request builders and response classification for the plant-info and GCL
//! endpoints.
//!
//! # Overview
//! Builds `HttpRequest` values and classifies `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip.
//!
//! # Design
//! - `AbbyClient` is stateless; it holds only the two origins.
//! - Headers are ordered lists so the captured requests are reproduced
//!   exactly.
//! - `Outcome` is the sole interpretation of a response: 200 or not.

pub mod client;
pub mod error;
pub mod http;
pub mod outcome;

pub use client::AbbyClient;
pub use error::ConfigError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use outcome::Outcome;
