//! Domain API operations

use serde_json::json;

use crate::api::transport::Transport;
use crate::error::{Error, Result};

use super::models::{CreateRecordRequest, Domain, DomainRecord};

/// Reject identifiers that would corrupt the request path
fn validate_domain_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation("domain name is required".to_string()));
    }
    if name.contains('/') || name.contains(char::is_whitespace) {
        return Err(Error::Validation(format!(
            "malformed domain name '{}'",
            name
        )));
    }
    Ok(())
}

impl Transport {
    /// List all domains
    pub async fn list_domains(&self, per_page: Option<u32>) -> Result<Vec<Domain>> {
        self.list_all("/domains", "domains", per_page).await
    }

    /// Fetch one domain by name
    pub async fn get_domain(&self, name: &str) -> Result<Domain> {
        validate_domain_name(name)?;
        self.get_item(&format!("/domains/{}", name), "domain").await
    }

    /// Create a domain, optionally with an apex A record
    pub async fn create_domain(&self, name: &str, ip_address: Option<&str>) -> Result<Domain> {
        validate_domain_name(name)?;
        let body = match ip_address {
            Some(ip) => json!({"name": name, "ip_address": ip}),
            None => json!({"name": name}),
        };
        self.post_item("/domains", &body, "domain").await
    }

    /// Delete a domain and all its records
    pub async fn delete_domain(&self, name: &str) -> Result<()> {
        validate_domain_name(name)?;
        self.delete_path(&format!("/domains/{}", name)).await
    }

    /// List all records of a domain
    pub async fn list_records(
        &self,
        domain: &str,
        per_page: Option<u32>,
    ) -> Result<Vec<DomainRecord>> {
        validate_domain_name(domain)?;
        self.list_all(
            &format!("/domains/{}/records", domain),
            "domain_records",
            per_page,
        )
        .await
    }

    /// Create a record; type, name, and data are required
    pub async fn create_record(
        &self,
        domain: &str,
        req: &CreateRecordRequest,
    ) -> Result<DomainRecord> {
        validate_domain_name(domain)?;
        if req.record_type.as_deref().unwrap_or("").is_empty() {
            return Err(Error::Validation("record type is required".to_string()));
        }
        if req.data.as_deref().unwrap_or("").is_empty() {
            return Err(Error::Validation("record data is required".to_string()));
        }
        self.post_item(
            &format!("/domains/{}/records", domain),
            req,
            "domain_record",
        )
        .await
    }

    /// Update a record in place; only the set fields change
    pub async fn update_record(
        &self,
        domain: &str,
        record_id: u64,
        req: &CreateRecordRequest,
    ) -> Result<DomainRecord> {
        validate_domain_name(domain)?;
        self.put_item(
            &format!("/domains/{}/records/{}", domain, record_id),
            req,
            "domain_record",
        )
        .await
    }

    /// Delete a record
    pub async fn delete_record(&self, domain: &str, record_id: u64) -> Result<()> {
        validate_domain_name(domain)?;
        self.delete_path(&format!("/domains/{}/records/{}", domain, record_id))
            .await
    }
}
