//! Success/failure classification of a response.

use std::fmt;

use crate::http::HttpResponse;

/// The only status treated as success. Every other code, including other
/// 2xx and 3xx codes, is a failure.
pub const SUCCESS_STATUS: u16 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { body: String },
    Failed { status: u16 },
}

impl Outcome {
    pub fn from_response(response: HttpResponse) -> Self {
        if response.status == SUCCESS_STATUS {
            Outcome::Success {
                body: response.body,
            }
        } else {
            Outcome::Failed {
                status: response.status,
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

/// Renders the console report: two lines on success, one on failure. No
/// trailing newline; the caller terminates the last line.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success { body } => {
                writeln!(f, "Request was successful")?;
                write!(f, "Response Content: {body}")
            }
            Outcome::Failed { status } => {
                write!(f, "Request failed with status code: {status}")
            }
        }
    }
}
