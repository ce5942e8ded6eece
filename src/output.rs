//! CLI response formatting and output.
//!
//! Provides the JSON envelope, printing, and exit code mapping for the
//! non-interactive tasks. Interactive tasks (serve, preview) bypass this
//! and inherit their process output.

use serde::Serialize;
use sitekick::Error;

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code().to_string(),
                message: err.to_string(),
            }),
        }
    }
}

fn print_response<T: Serialize>(response: &CliResponse<T>) {
    use std::io::{self, Write};

    let payload = match serde_json::to_string_pretty(response) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("Failed to serialize response: {}", e);
            return;
        }
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    // Exit gracefully on SIGPIPE
    let _ = writeln!(handle, "{}", payload);
}

pub fn print_success<T: Serialize>(data: T) {
    print_response(&CliResponse::success(data));
}

pub fn print_error(err: &Error) {
    print_response(&CliResponse::<()>::from_error(err));
}

/// Map an error to a process exit code. Configuration resolution failures
/// are distinguished from external-process failures.
pub fn exit_code_for_error(err: &Error) -> i32 {
    match err {
        Error::Config(_) | Error::SettingsNotFound(_) => 2,
        _ => 1,
    }
}
