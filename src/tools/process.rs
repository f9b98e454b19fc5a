use std::{
    fmt,
    process::{Command, Output, Stdio},
};

use anyhow::{Context, Result};
use log::trace;

/// An external tool finished with a non-zero exit status.
#[derive(Debug)]
pub struct ToolFailure {
    /// Name of the invocation, e.g. `augur index`
    pub tool: String,
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    pub stderr: String,
}
impl ToolFailure {
    /// Exit code for this process when the failure is fatal.
    ///
    /// Codes outside of `1..=255` (and signal terminations) map to 1.
    pub fn exit_code(&self) -> u8 {
        match self.code {
            Some(code) => u8::try_from(code).ok().filter(|c| *c != 0).unwrap_or(1),
            None => 1,
        }
    }
}
impl fmt::Display for ToolFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} exited with status {code}", self.tool)?,
            None => write!(f, "{} was terminated by a signal", self.tool)?,
        }
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            write!(f, ":\n{stderr}")?;
        }
        Ok(())
    }
}
impl std::error::Error for ToolFailure {}

/// Runs a command to completion, capturing stderr.
///
/// Stdout is captured too unless the caller already redirected it.
pub fn execute(mut command: Command, tool: &str) -> Result<Output> {
    let program = command.get_program().to_string_lossy().into_owned();
    trace!("    {command:?}");
    let output = command
        .stdin(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .with_context(|| format!("Could not launch {tool} (executable: {program})"))?;
    if output.status.success() {
        Ok(output)
    } else {
        Err(ToolFailure {
            tool: tool.to_string(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
        .into())
    }
}
