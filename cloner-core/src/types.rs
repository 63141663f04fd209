//! Workspace descriptor types.
//!
//! These mirror the subset of the workspace API's JSON that the cloner reads.
//! Unknown fields are ignored; every section the cloner may have to report as
//! missing is an `Option` so that decoding never fails on it.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Identifier of a remote workspace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceId(pub String);

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for WorkspaceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for WorkspaceId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Name of a project declared in a devfile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectName(pub String);

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ProjectName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Source type
// ---------------------------------------------------------------------------

/// Kind of a project source. Only [`SourceType::Git`] is actionable; any
/// other value is kept verbatim so it can be reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceType {
    Git,
    Other(String),
}

impl SourceType {
    pub fn is_git(&self) -> bool {
        matches!(self, SourceType::Git)
    }
}

impl From<String> for SourceType {
    fn from(s: String) -> Self {
        if s == "git" {
            SourceType::Git
        } else {
            SourceType::Other(s)
        }
    }
}

impl From<&str> for SourceType {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

impl From<SourceType> for String {
    fn from(t: SourceType) -> Self {
        match t {
            SourceType::Git => "git".to_string(),
            SourceType::Other(s) => s,
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceType::Git => write!(f, "git"),
            SourceType::Other(s) => s.fmt(f),
        }
    }
}

// ---------------------------------------------------------------------------
// Descriptor structs
// ---------------------------------------------------------------------------

/// Where a project's code comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSource {
    #[serde(rename = "type")]
    pub source_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl ProjectSource {
    /// Branch to check out. An empty string counts as unset.
    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref().filter(|b| !b.is_empty())
    }

    /// Repository location. An empty string counts as unset.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.is_empty())
    }
}

/// One entry of `devfile.projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDeclaration {
    pub name: ProjectName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clone_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ProjectSource>,
}

impl ProjectDeclaration {
    /// Directory the project is checked out into, relative to the projects
    /// root. Falls back to the project name when `clonePath` is unset or empty.
    pub fn clone_path(&self) -> &str {
        match self.clone_path.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => &self.name.0,
        }
    }
}

/// The `devfile` section of a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Devfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ProjectDeclaration>>,
}

impl Devfile {
    /// Declared projects; an absent list reads as empty.
    pub fn projects(&self) -> &[ProjectDeclaration] {
        self.projects.as_deref().unwrap_or(&[])
    }
}

/// A remote development workspace as returned by `GET /workspace/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkspaceDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devfile: Option<Devfile>,
}

impl WorkspaceDescriptor {
    /// Decode a descriptor from the API's JSON body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Human label for log lines: the descriptor's own id, or `"<unknown>"`.
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or("<unknown>")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
