//! Action API operations and the polling loop

use std::time::Duration;

use log::debug;
use serde::Serialize;

use crate::api::client::unwrap_item;
use crate::api::transport::Transport;
use crate::error::Result;

use super::models::Action;

impl Transport {
    /// List actions across the whole account
    pub async fn list_actions(&self, per_page: Option<u32>) -> Result<Vec<Action>> {
        self.list_all("/actions", "actions", per_page).await
    }

    /// Fetch one action by id
    pub async fn get_action(&self, id: u64) -> Result<Action> {
        self.get_item(&format!("/actions/{}", id), "action").await
    }

    /// POST to an action-producing endpoint and unwrap `{action: {...}}`
    /// together with the `monitor` link, when the server provided one.
    pub async fn post_action<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(Action, Option<String>)> {
        let body = serde_json::to_value(body)?;
        let envelope = self
            .request_checked(reqwest::Method::POST, path, &[], Some(&body))
            .await?;
        let action = unwrap_item(&envelope.body, "action")?;
        Ok((action, envelope.monitor))
    }

    /// Poll an action until it leaves `in-progress`.
    ///
    /// Prefers the `monitor` URI when it resolves against our base URL,
    /// falling back to the canonical `/actions/{id}` endpoint. No
    /// wall-clock timeout: the terminal state transition is the only exit,
    /// the user aborts by terminating the process.
    pub async fn wait_action(
        &self,
        id: u64,
        monitor: Option<&str>,
        interval: Duration,
    ) -> Result<Action> {
        let path = monitor
            .and_then(|uri| relative_to(self.base_url(), uri))
            .unwrap_or_else(|| format!("/actions/{}", id));
        debug!("Polling action {} at {} every {:?}", id, path, interval);

        loop {
            let action: Action = self.get_item(&path, "action").await?;
            if action.is_terminal() {
                debug!("Action {} reached terminal state {}", id, action.status);
                return Ok(action);
            }
            tokio::time::sleep(interval).await;
        }
    }
}

/// Turn an absolute monitor URI into a path relative to our base URL
fn relative_to(base_url: &str, uri: &str) -> Option<String> {
    uri.strip_prefix(base_url)
        .filter(|rest| rest.starts_with('/'))
        .map(|rest| rest.to_string())
}
