//! Server API operations

use log::debug;
use serde_json::json;

use crate::api::actions::Action;
use crate::api::transport::Transport;
use crate::error::{Error, Result};

use super::models::{CreateServerRequest, Server};

impl Transport {
    /// List all servers, optionally filtered server-side by tag
    pub async fn list_servers(
        &self,
        tag: Option<&str>,
        per_page: Option<u32>,
    ) -> Result<Vec<Server>> {
        let path = match tag {
            Some(tag) => format!("/servers?tag_name={}", urlencoding::encode(tag)),
            None => "/servers".to_string(),
        };
        self.list_all(&path, "servers", per_page).await
    }

    /// Fetch one server by id
    pub async fn get_server(&self, id: u64) -> Result<Server> {
        self.get_item(&format!("/servers/{}", id), "server").await
    }

    /// Create a server; name, region, size, and image are required
    pub async fn create_server(&self, req: &CreateServerRequest) -> Result<Server> {
        for (field, value) in [
            ("name", &req.name),
            ("region", &req.region),
            ("size", &req.size),
            ("image", &req.image),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Validation(format!("{} is required", field)));
            }
        }
        debug!("Creating server '{}' in {}", req.name, req.region);
        self.post_item("/servers", req, "server").await
    }

    /// Delete a server
    pub async fn delete_server(&self, id: u64) -> Result<()> {
        self.delete_path(&format!("/servers/{}", id)).await
    }

    /// Trigger a named server action (reboot, power_off, power_on)
    pub async fn server_action(
        &self,
        id: u64,
        action_type: &str,
    ) -> Result<(Action, Option<String>)> {
        self.post_action(
            &format!("/servers/{}/actions", id),
            &json!({"type": action_type}),
        )
        .await
    }
}
