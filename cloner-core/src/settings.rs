//! Run settings.
//!
//! The binary collects [`RawSettings`] from arguments and environment once at
//! startup; [`Settings::resolve`] validates them. Library code only ever sees
//! the resolved [`Settings`].

use std::fmt;
use std::path::PathBuf;

use crate::error::PreconditionError;
use crate::types::WorkspaceId;

/// In-cluster workspace API endpoint used when `CHE_API` is unset.
pub const DEFAULT_API_URL: &str = "http://che-host:8080/api";

/// Version-control client invoked when no override is given.
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Unvalidated inputs, one field per environment variable or flag.
#[derive(Debug, Clone, Default)]
pub struct RawSettings {
    pub workspace_id: Option<String>,
    pub api_url: Option<String>,
    pub token: Option<String>,
    pub projects_root: Option<PathBuf>,
    pub strict: bool,
    pub git_program: Option<String>,
}

/// Validated, immutable configuration for one run.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub workspace_id: WorkspaceId,
    pub api_url: String,
    /// Bearer token; `None` means unauthenticated requests.
    pub token: Option<String>,
    pub projects_root: PathBuf,
    /// Fail fast on malformed descriptors and isolate per-project clone
    /// failures. When off, fields are assumed present and the first clone
    /// failure aborts the pass.
    pub strict: bool,
    pub git_program: String,
}

impl Settings {
    /// Validate raw inputs.
    ///
    /// Surrounding whitespace is trimmed and empty strings count as unset.
    /// The workspace ID is always required; the projects root is required in
    /// strict mode and defaults to the current directory otherwise. The
    /// root's existence is not checked.
    pub fn resolve(raw: RawSettings) -> Result<Self, PreconditionError> {
        let workspace_id = non_empty(raw.workspace_id)
            .map(WorkspaceId::from)
            .ok_or(PreconditionError::MissingWorkspaceId)?;

        let projects_root = match raw.projects_root.filter(|p| !p.as_os_str().is_empty()) {
            Some(root) => root,
            None if raw.strict => return Err(PreconditionError::MissingProjectsRoot),
            None => PathBuf::from("."),
        };

        Ok(Self {
            workspace_id,
            api_url: non_empty(raw.api_url).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token: non_empty(raw.token),
            projects_root,
            strict: raw.strict,
            git_program: non_empty(raw.git_program)
                .unwrap_or_else(|| DEFAULT_GIT_PROGRAM.to_string()),
        })
    }
}

// Hand-written so the token never reaches a log line.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("workspace_id", &self.workspace_id)
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("projects_root", &self.projects_root)
            .field("strict", &self.strict)
            .field("git_program", &self.git_program)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
