//! Clone pass over a workspace's declared projects.
//!
//! Projects are handled one at a time, in declaration order. Each ends in
//! exactly one [`ProjectOutcome`]. In strict mode the descriptor is checked
//! up front and a failed clone only marks its own project as failed; in
//! lenient mode missing sections are tolerated and the first failed clone
//! ends the pass.

use std::path::PathBuf;

use serde::Serialize;

use cloner_core::{
    PreconditionError, ProjectDeclaration, ProjectName, Settings, WorkspaceDescriptor,
};

use crate::error::CloneError;
use crate::runner::{CloneRequest, GitRunner};

/// What happened to one declared project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProjectOutcome {
    /// Not a git source. `None` when the declaration had no source at all.
    Unsupported { source_type: Option<String> },
    /// Destination already present; nothing was run.
    AlreadyExists { path: PathBuf },
    /// Clone succeeded. `path` is `None` when git chose the directory.
    Cloned {
        path: Option<PathBuf>,
        output: String,
    },
    /// Clone failed and was isolated to this project.
    Failed { location: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectResult {
    pub project: ProjectName,
    #[serde(flatten)]
    pub outcome: ProjectOutcome,
}

/// Outcomes of a whole pass, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CloneReport {
    pub results: Vec<ProjectResult>,
}

impl CloneReport {
    pub fn cloned(&self) -> usize {
        self.count(|o| matches!(o, ProjectOutcome::Cloned { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| {
            matches!(
                o,
                ProjectOutcome::Unsupported { .. } | ProjectOutcome::AlreadyExists { .. }
            )
        })
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ProjectOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&ProjectOutcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Clone every git project declared by `workspace` under
/// `settings.projects_root`.
///
/// Strict mode returns [`CloneError::Precondition`] before running anything
/// if the devfile, a project source, or a git location is missing. Lenient
/// mode returns the first clone error as-is.
pub fn clone_all<R: GitRunner + ?Sized>(
    workspace: &WorkspaceDescriptor,
    settings: &Settings,
    runner: &R,
) -> Result<CloneReport, CloneError> {
    let projects = declared_projects(workspace, settings.strict)?;
    tracing::info!(
        workspace = workspace.label(),
        projects = projects.len(),
        strict = settings.strict,
        root = %settings.projects_root.display(),
        "cloning declared projects"
    );

    let mut report = CloneReport::default();
    for project in projects {
        let outcome = clone_project(project, settings, runner)?;
        report.results.push(ProjectResult {
            project: project.name.clone(),
            outcome,
        });
    }

    tracing::info!(
        cloned = report.cloned(),
        skipped = report.skipped(),
        failed = report.failed(),
        "clone pass finished"
    );
    Ok(report)
}

fn declared_projects(
    workspace: &WorkspaceDescriptor,
    strict: bool,
) -> Result<&[ProjectDeclaration], PreconditionError> {
    let projects: &[ProjectDeclaration] = match &workspace.devfile {
        Some(devfile) => devfile.projects(),
        None if strict => {
            return Err(PreconditionError::MissingDevfile {
                workspace: workspace.label().to_string(),
            })
        }
        None => &[],
    };

    if strict {
        for project in projects {
            let source = project
                .source
                .as_ref()
                .ok_or_else(|| PreconditionError::MissingSource {
                    project: project.name.clone(),
                })?;
            if source.source_type.is_git() && source.location().is_none() {
                return Err(PreconditionError::MissingLocation {
                    project: project.name.clone(),
                });
            }
        }
    }
    Ok(projects)
}

fn clone_project<R: GitRunner + ?Sized>(
    project: &ProjectDeclaration,
    settings: &Settings,
    runner: &R,
) -> Result<ProjectOutcome, CloneError> {
    let Some(source) = project.source.as_ref() else {
        tracing::info!(project = %project.name, "project has no source, skipping");
        return Ok(ProjectOutcome::Unsupported { source_type: None });
    };

    if !source.source_type.is_git() {
        tracing::info!(
            project = %project.name,
            "unsupported source type '{}', che-project-cloner supports only \"git\"",
            source.source_type
        );
        return Ok(ProjectOutcome::Unsupported {
            source_type: Some(source.source_type.to_string()),
        });
    }

    let location = source
        .location()
        .ok_or_else(|| PreconditionError::MissingLocation {
            project: project.name.clone(),
        })?;

    let (clone_path, destination) = if settings.strict {
        let clone_path = project.clone_path();
        let destination = settings.projects_root.join(clone_path);
        if destination.exists() {
            tracing::info!(project = %project.name, "{} already exists", destination.display());
            return Ok(ProjectOutcome::AlreadyExists { path: destination });
        }
        (Some(clone_path.to_string()), Some(destination))
    } else {
        (None, None)
    };

    let request = CloneRequest {
        location: location.to_string(),
        branch: source.branch().map(str::to_string),
        recursive: settings.strict,
        clone_path,
        cwd: settings.projects_root.clone(),
    };

    match runner.clone_repo(&request) {
        Ok(output) => {
            let trimmed = output.trim_end();
            if !trimmed.is_empty() {
                tracing::info!(project = %project.name, "{trimmed}");
            }
            Ok(ProjectOutcome::Cloned {
                path: destination,
                output,
            })
        }
        Err(err) if settings.strict => {
            tracing::warn!(
                project = %project.name,
                error = %err,
                "clone error, skip repository: {location}"
            );
            Ok(ProjectOutcome::Failed {
                location: location.to_string(),
                reason: err.to_string(),
            })
        }
        Err(err) => Err(err),
    }
}
