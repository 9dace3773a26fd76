//! Error kinds for a graph run.
//!
//! Everything here is fatal: the tool is single-shot, so a failed command or
//! an unrecognized table format aborts the run before any output is written.

use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    /// A required header label is missing: the runtime's table format is not
    /// the one this tool was built against.
    #[error("header label {label:?} not found in table header {header:?}")]
    LabelNotFound { label: String, header: String },

    /// The runtime CLI could not be started at all.
    #[error("failed to run `{command}`: {source}")]
    CommandLaunch {
        command: String,
        source: std::io::Error,
    },

    /// The runtime CLI ran but reported failure.
    #[error("`{command}` failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}
