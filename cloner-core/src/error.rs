//! Error types for cloner-core.

use thiserror::Error;

use crate::types::ProjectName;

/// A required input was missing. Raised before any side-effecting work.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreconditionError {
    /// `CHE_WORKSPACE_ID` absent or empty.
    #[error("CHE_WORKSPACE_ID is not found")]
    MissingWorkspaceId,

    /// `CHE_PROJECTS_ROOT` absent or empty while running in strict mode.
    #[error("CHE_PROJECTS_ROOT is not found")]
    MissingProjectsRoot,

    /// The fetched workspace carries no devfile.
    #[error("devfile not found in workspace {workspace}")]
    MissingDevfile { workspace: String },

    /// A declared project has no `source` section.
    #[error("source not found for project '{project}'")]
    MissingSource { project: ProjectName },

    /// A git project has no `source.location`.
    #[error("git project '{project}' has no source location")]
    MissingLocation { project: ProjectName },
}
