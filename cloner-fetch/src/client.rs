//! Workspace API client.

use std::fmt;

use cloner_core::{WorkspaceDescriptor, WorkspaceId};

use crate::config::ClientConfig;
use crate::error::FetchError;

/// Client for the one workspace API operation the cloner needs.
#[derive(Clone)]
pub struct WorkspaceClient {
    config: ClientConfig,
    agent: ureq::Agent,
}

impl WorkspaceClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch a workspace by id without blocking the async runtime.
    ///
    /// The request runs on tokio's blocking pool. No retry.
    pub async fn get_by_id(&self, id: &WorkspaceId) -> Result<WorkspaceDescriptor, FetchError> {
        let client = self.clone();
        let id = id.clone();
        tokio::task::spawn_blocking(move || client.get_by_id_blocking(&id)).await?
    }

    /// Blocking form of [`get_by_id`](Self::get_by_id).
    pub fn get_by_id_blocking(
        &self,
        id: &WorkspaceId,
    ) -> Result<WorkspaceDescriptor, FetchError> {
        let url = self.config.workspace_url(id)?;
        tracing::debug!(%url, authenticated = self.config.authorization().is_some(), "requesting workspace");

        let mut request = self.agent.get(url.as_str()).set("Accept", "application/json");
        if let Some(auth) = self.config.authorization() {
            request = request.set("Authorization", auth);
        }

        let response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status,
                    body,
                });
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(FetchError::Transport {
                    url: url.to_string(),
                    source: Box::new(transport),
                });
            }
        };

        let body = response.into_string().map_err(|e| FetchError::Body {
            url: url.to_string(),
            source: e,
        })?;
        let workspace = WorkspaceDescriptor::from_json(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            source: e,
        })?;

        tracing::info!(workspace = workspace.label(), "fetched workspace");
        Ok(workspace)
    }
}

impl fmt::Debug for WorkspaceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkspaceClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
