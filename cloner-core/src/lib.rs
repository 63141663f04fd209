//! che-project-cloner core library: descriptor types, run settings, errors.
//!
//! - [`types`]: the workspace descriptor as returned by the workspace API
//! - [`settings`]: validated run configuration built once at program entry
//! - [`error`]: [`PreconditionError`]

pub mod error;
pub mod settings;
pub mod types;

pub use error::PreconditionError;
pub use settings::{RawSettings, Settings, DEFAULT_API_URL, DEFAULT_GIT_PROGRAM};
pub use types::{
    Devfile, ProjectDeclaration, ProjectName, ProjectSource, SourceType, WorkspaceDescriptor,
    WorkspaceId,
};
