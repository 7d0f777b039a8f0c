//! REST implementation of the `StatusUpdater` port.
//!
//! Issues the partial update the list synchronizer relies on:
//! `PATCH {base_url}/api/applications/{id}` with `{"status": "..."}`.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

use crate::domain::applications::ApplicationStatus;
use crate::domain::foundation::ApplicationId;
use crate::ports::{StatusUpdater, UpdateError};

/// REST status updater.
pub struct RestStatusUpdater {
    client: Client,
    base_url: String,
    token: Secret<String>,
}

impl RestStatusUpdater {
    /// Creates an updater targeting the given API base URL with a session token.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            token: Secret::new(token.into()),
        }
    }

    fn update_url(&self, id: &ApplicationId) -> String {
        format!("{}/api/applications/{}", self.base_url, id)
    }
}

#[derive(Debug, Serialize)]
struct StatusPatch {
    status: ApplicationStatus,
}

#[async_trait]
impl StatusUpdater for RestStatusUpdater {
    async fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<(), UpdateError> {
        let response = self
            .client
            .patch(self.update_url(id))
            .header(
                "Authorization",
                format!("Bearer {}", self.token.expose_secret()),
            )
            .json(&StatusPatch { status })
            .send()
            .await
            .map_err(|e| UpdateError::network(e.to_string()))?;

        let http_status = response.status();
        if !http_status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpdateError::rejected(format!(
                "HTTP {}: {}",
                http_status.as_u16(),
                body
            )));
        }

        Ok(())
    }
}
