//! Load balancer API operations

use crate::api::transport::Transport;
use crate::error::{Error, Result};

use super::models::{CreateLoadBalancerRequest, LoadBalancer};

impl Transport {
    /// List all load balancers
    pub async fn list_load_balancers(&self, per_page: Option<u32>) -> Result<Vec<LoadBalancer>> {
        self.list_all("/load_balancers", "load_balancers", per_page)
            .await
    }

    /// Fetch one load balancer by id
    pub async fn get_load_balancer(&self, id: &str) -> Result<LoadBalancer> {
        if id.trim().is_empty() {
            return Err(Error::Validation(
                "load balancer id is required".to_string(),
            ));
        }
        self.get_item(&format!("/load_balancers/{}", id), "load_balancer")
            .await
    }

    /// Create a load balancer; name, region, and at least one rule required
    pub async fn create_load_balancer(
        &self,
        req: &CreateLoadBalancerRequest,
    ) -> Result<LoadBalancer> {
        if req.name.trim().is_empty() {
            return Err(Error::Validation("name is required".to_string()));
        }
        if req.region.trim().is_empty() {
            return Err(Error::Validation("region is required".to_string()));
        }
        if req.forwarding_rules.is_empty() {
            return Err(Error::Validation(
                "at least one forwarding rule is required".to_string(),
            ));
        }
        self.post_item("/load_balancers", req, "load_balancer")
            .await
    }

    /// Delete a load balancer
    pub async fn delete_load_balancer(&self, id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(Error::Validation(
                "load balancer id is required".to_string(),
            ));
        }
        self.delete_path(&format!("/load_balancers/{}", id)).await
    }
}
