//! Error types for cloner-git.

use std::path::PathBuf;

use thiserror::Error;

use cloner_core::PreconditionError;

/// All errors that can end a clone pass.
#[derive(Debug, Error)]
pub enum CloneError {
    /// The descriptor is missing a section the pass depends on.
    #[error("malformed workspace: {0}")]
    Precondition(#[from] PreconditionError),

    /// The version-control client could not be started.
    #[error("failed to run '{program}' in {cwd}: {source}")]
    Spawn {
        program: String,
        cwd: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The version-control client exited unsuccessfully.
    #[error("clone of {location} failed ({status}): {stderr}")]
    Failed {
        location: String,
        status: String,
        stderr: String,
    },
}
