//! Shelling out to the container runtime CLI.

use std::process::Command;

use crate::error::{GraphError, Result};

/// The three tabular reports the graph is built from, as raw text.
///
/// The flag sets (and the header labels they produce) are contract-critical:
/// if the installed runtime prints different columns, parsing fails fast.
pub trait ContainerRuntime {
    /// Full image listing (`images -a --no-trunc`).
    fn images(&self) -> Result<String>;
    /// Layer history for one image (`history --no-trunc <id>`).
    fn history(&self, image_id: &str) -> Result<String>;
    /// Full container listing (`ps -a --no-trunc`).
    fn ps(&self) -> Result<String>;
}

/// Invokes the runtime binary as a blocking subprocess, one call per table.
/// No timeout and no retry; a launch failure or non-zero exit aborts the run.
pub struct CliRuntime {
    program: String,
}

impl CliRuntime {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn capture(&self, args: &[&str]) -> Result<String> {
        let command = format!("{} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| GraphError::CommandLaunch {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GraphError::CommandFailed {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl ContainerRuntime for CliRuntime {
    fn images(&self) -> Result<String> {
        self.capture(&["images", "-a", "--no-trunc"])
    }

    fn history(&self, image_id: &str) -> Result<String> {
        self.capture(&["history", "--no-trunc", image_id])
    }

    fn ps(&self) -> Result<String> {
        self.capture(&["ps", "-a", "--no-trunc"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_returns_stdout() {
        let runtime = CliRuntime::new("echo");
        let out = runtime.images().unwrap();
        assert_eq!(out.trim_end(), "images -a --no-trunc");
    }

    #[test]
    fn nonzero_exit_is_an_error() {
        let runtime = CliRuntime::new("false");
        let err = runtime.ps().unwrap_err();
        assert!(matches!(err, GraphError::CommandFailed { .. }));
    }

    #[test]
    fn missing_program_is_an_error() {
        let runtime = CliRuntime::new("no-such-container-cli");
        let err = runtime.images().unwrap_err();
        assert!(matches!(err, GraphError::CommandLaunch { .. }));
    }
}
