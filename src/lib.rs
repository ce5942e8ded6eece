/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("build", "Generating site from {}", settings);
/// log_status!("publish", "Pushing to {}/{}", remote, branch);
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod config;
pub mod error;
pub mod git;
pub mod runner;
pub mod tasks;

pub use error::{Error, Result};
