//! The one-shot fetch-then-clone run.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use cloner_core::{RawSettings, Settings};
use cloner_fetch::{ClientConfig, WorkspaceClient};
use cloner_git::{clone_all, GitCommand};

use crate::report;

/// Inputs for a clone run. Each flag falls back to its environment variable.
#[derive(Args, Debug)]
pub struct CloneArgs {
    /// Workspace to fetch.
    #[arg(long, env = "CHE_WORKSPACE_ID", value_name = "ID")]
    pub workspace_id: Option<String>,

    /// Workspace API base URL (default: http://che-host:8080/api).
    #[arg(long = "api", env = "CHE_API", value_name = "URL")]
    pub api_url: Option<String>,

    /// Bearer token sent as the Authorization header.
    #[arg(long, env = "CHE_MACHINE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Directory projects are cloned into; also the working directory for git.
    #[arg(long, env = "CHE_PROJECTS_ROOT", value_name = "DIR")]
    pub projects_root: Option<PathBuf>,

    /// Assume descriptor fields are present, clone without a named subpath,
    /// and stop at the first failed clone.
    #[arg(
        long,
        env = "CHE_CLONER_LENIENT",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub lenient: bool,

    /// Version-control client to invoke.
    #[arg(long = "git", env = "CHE_CLONER_GIT", value_name = "PROGRAM")]
    pub git_program: Option<String>,

    /// Print the clone report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl CloneArgs {
    pub fn run(self) -> Result<()> {
        let json = self.json;
        let settings = Settings::resolve(self.into_raw()).context("invalid configuration")?;
        tracing::debug!(?settings, "resolved settings");

        let config = ClientConfig::from_settings(&settings).context("invalid configuration")?;
        let client = WorkspaceClient::new(config);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to start async runtime")?;
        let workspace = runtime
            .block_on(client.get_by_id(&settings.workspace_id))
            .with_context(|| format!("failed to fetch workspace '{}'", settings.workspace_id))?;

        let git = GitCommand::new(settings.git_program.clone());
        let report = clone_all(&workspace, &settings, &git)
            .with_context(|| format!("clone pass aborted for workspace '{}'", settings.workspace_id))?;

        if json {
            report::print_json(&report)?;
        } else {
            report::print_table(&report);
        }
        Ok(())
    }

    fn into_raw(self) -> RawSettings {
        RawSettings {
            workspace_id: self.workspace_id,
            api_url: self.api_url,
            token: self.token,
            projects_root: self.projects_root,
            strict: !self.lenient,
            git_program: self.git_program,
        }
    }
}
