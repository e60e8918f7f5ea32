//! Volume API operations

use crate::api::transport::Transport;
use crate::error::{Error, Result};

use super::models::{CreateVolumeRequest, Volume};

impl Transport {
    /// List all volumes
    pub async fn list_volumes(&self, per_page: Option<u32>) -> Result<Vec<Volume>> {
        self.list_all("/volumes", "volumes", per_page).await
    }

    /// Fetch one volume by id
    pub async fn get_volume(&self, id: &str) -> Result<Volume> {
        if id.trim().is_empty() {
            return Err(Error::Validation("volume id is required".to_string()));
        }
        self.get_item(&format!("/volumes/{}", id), "volume").await
    }

    /// Create a volume; name, region, and a positive size are required
    pub async fn create_volume(&self, req: &CreateVolumeRequest) -> Result<Volume> {
        if req.name.trim().is_empty() {
            return Err(Error::Validation("name is required".to_string()));
        }
        if req.region.trim().is_empty() {
            return Err(Error::Validation("region is required".to_string()));
        }
        if req.size_gigabytes == 0 {
            return Err(Error::Validation(
                "size must be at least one gigabyte".to_string(),
            ));
        }
        self.post_item("/volumes", req, "volume").await
    }

    /// Delete a volume
    pub async fn delete_volume(&self, id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(Error::Validation("volume id is required".to_string()));
        }
        self.delete_path(&format!("/volumes/{}", id)).await
    }
}
