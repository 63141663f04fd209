//! # cloner-git
//!
//! Project cloner: materializes a workspace's declared git projects under the
//! projects root.
//!
//! Call [`clone_all`] with a fetched descriptor, the run settings and a
//! [`GitRunner`]. [`GitCommand`] is the runner that shells out to `git`.

pub mod cloner;
pub mod error;
pub mod runner;

pub use cloner::{clone_all, CloneReport, ProjectOutcome, ProjectResult};
pub use error::CloneError;
pub use runner::{CloneRequest, GitCommand, GitRunner};
