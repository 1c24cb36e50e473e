//! Runners for the external tools around the assembly engine.
//!
//! - [`blastn`]: aligns the query against the reference database
//! - [`bakta`]: annotates the consensus sequence
//!
//! Each executable can be overridden through an environment variable
//! (`CPS_BLASTN_BIN`, `CPS_BAKTA_BIN`), which is also how tests substitute
//! stand-ins.

use std::io::ErrorKind;
use std::process::{Command, Output};

use thiserror::Error;
use tracing::debug;

pub mod bakta;
pub mod blastn;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Executable '{executable}' not found; is it installed and on PATH?")]
    NotFound { executable: String },

    #[error("Could not run '{executable}': {source}")]
    Io {
        executable: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },
}

/// Executable named by `env_var`, or `default` if unset or blank
fn executable_from_env(env_var: &str, default: &str) -> String {
    std::env::var(env_var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Run a tool to completion, failing on a non-zero exit status
fn run_tool(executable: &str, args: &[String]) -> Result<Output, ToolError> {
    let command = format!("{} {}", executable, args.join(" "));
    debug!(command = %command, "Running external tool");

    let output = Command::new(executable).args(args).output().map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ToolError::NotFound {
                executable: executable.to_string(),
            }
        } else {
            ToolError::Io {
                executable: executable.to_string(),
                source: e,
            }
        }
    })?;

    if !output.status.success() {
        return Err(ToolError::Failed {
            command,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output)
}
