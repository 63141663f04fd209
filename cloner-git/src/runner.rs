//! Version-control client invocation.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::CloneError;

/// One `git clone` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneRequest {
    pub location: String,
    pub branch: Option<String>,
    pub recursive: bool,
    /// Target directory relative to `cwd`; `None` lets git derive it.
    pub clone_path: Option<String>,
    /// Working directory for the child process (the projects root).
    pub cwd: PathBuf,
}

impl CloneRequest {
    /// `clone [--recursive] [-b <branch>] <location> [<clone_path>]`
    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["clone".to_string()];
        if self.recursive {
            args.push("--recursive".to_string());
        }
        if let Some(branch) = &self.branch {
            args.push("-b".to_string());
            args.push(branch.clone());
        }
        args.push(self.location.clone());
        if let Some(path) = &self.clone_path {
            args.push(path.clone());
        }
        args
    }
}

/// Performs clones. Implementations block until the clone has finished.
pub trait GitRunner {
    /// Run the clone and return its standard output as text.
    fn clone_repo(&self, request: &CloneRequest) -> Result<String, CloneError>;
}

/// Runs an external `git` executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    program: String,
}

impl GitCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for GitCommand {
    fn default() -> Self {
        Self::new(cloner_core::DEFAULT_GIT_PROGRAM)
    }
}

impl GitRunner for GitCommand {
    fn clone_repo(&self, request: &CloneRequest) -> Result<String, CloneError> {
        let args = request.args();
        tracing::debug!(program = %self.program, ?args, cwd = %request.cwd.display(), "running clone");

        let output = Command::new(&self.program)
            .args(&args)
            .current_dir(&request.cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| CloneError::Spawn {
                program: self.program.clone(),
                cwd: request.cwd.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(CloneError::Failed {
                location: request.location.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
