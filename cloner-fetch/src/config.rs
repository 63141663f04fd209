//! REST client configuration.

use std::fmt;

use cloner_core::{Settings, WorkspaceId};
use url::Url;

use crate::error::FetchError;

/// Base URL plus optional `Authorization` header value. Immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    authorization: Option<String>,
}

impl ClientConfig {
    /// Parse `base_url` and, when a non-empty token is given, prepare a
    /// `Bearer` authorization header.
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, FetchError> {
        let parsed = Url::parse(base_url).map_err(|e| FetchError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        Ok(Self {
            base_url: parsed,
            authorization: token
                .filter(|t| !t.is_empty())
                .map(|t| format!("Bearer {t}")),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        Self::new(&settings.api_url, settings.token.as_deref())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Value for the `Authorization` header, if any.
    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }

    /// `{base}/workspace/{id}`, with the id encoded as a single path segment.
    pub fn workspace_url(&self, id: &WorkspaceId) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .push("workspace")
            .push(&id.0);
        Ok(url)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field(
                "authorization",
                &self.authorization.as_ref().map(|_| "Bearer <redacted>"),
            )
            .finish()
    }
}
