//! Database API operations

use crate::api::transport::Transport;
use crate::error::{Error, Result};

use super::models::{CreateDatabaseRequest, Database};

impl Transport {
    /// List all database clusters
    pub async fn list_databases(&self, per_page: Option<u32>) -> Result<Vec<Database>> {
        self.list_all("/databases", "databases", per_page).await
    }

    /// Fetch one database cluster by id
    pub async fn get_database(&self, id: &str) -> Result<Database> {
        if id.trim().is_empty() {
            return Err(Error::Validation("database id is required".to_string()));
        }
        self.get_item(&format!("/databases/{}", id), "database").await
    }

    /// Create a database cluster
    pub async fn create_database(&self, req: &CreateDatabaseRequest) -> Result<Database> {
        if req.name.trim().is_empty() {
            return Err(Error::Validation("name is required".to_string()));
        }
        if req.engine.trim().is_empty() {
            return Err(Error::Validation("engine is required".to_string()));
        }
        if req.region.trim().is_empty() {
            return Err(Error::Validation("region is required".to_string()));
        }
        if req.size.trim().is_empty() {
            return Err(Error::Validation("size is required".to_string()));
        }
        if req.num_nodes == 0 {
            return Err(Error::Validation(
                "at least one node is required".to_string(),
            ));
        }
        self.post_item("/databases", req, "database").await
    }

    /// Delete a database cluster
    pub async fn delete_database(&self, id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(Error::Validation("database id is required".to_string()));
        }
        self.delete_path(&format!("/databases/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn db_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": name,
            "engine": "pg",
            "version": "16",
            "status": "online",
            "region": "fra1",
            "size": "db-s-2vcpu-4gb",
            "num_nodes": 2,
            "connection": null,
            "created_at": null
        })
    }

    #[tokio::test]
    async fn test_list_databases() {
        let mock_server = MockServer::start().await;
        let transport = Transport::test_transport(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/databases"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "databases": [db_json("db-1", "orders")],
                "links": {},
                "meta": {"total": 1}
            })))
            .mount(&mock_server)
            .await;

        let databases = transport.list_databases(None).await.unwrap();
        assert_eq!(databases.len(), 1);
        assert_eq!(databases[0].name, "orders");
    }

    #[tokio::test]
    async fn test_create_database() {
        let mock_server = MockServer::start().await;
        let transport = Transport::test_transport(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/databases"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "database": db_json("db-9", "orders")
            })))
            .mount(&mock_server)
            .await;

        let req = CreateDatabaseRequest {
            name: "orders".to_string(),
            engine: "pg".to_string(),
            region: "fra1".to_string(),
            size: "db-s-2vcpu-4gb".to_string(),
            num_nodes: 2,
            version: Some("16".to_string()),
        };
        let db = transport.create_database(&req).await.unwrap();
        assert_eq!(db.id, "db-9");
    }

    #[tokio::test]
    async fn test_create_requires_engine() {
        let transport = Transport::test_transport("https://unused.invalid");
        let req = CreateDatabaseRequest {
            name: "orders".to_string(),
            region: "fra1".to_string(),
            size: "db-s-2vcpu-4gb".to_string(),
            num_nodes: 1,
            ..Default::default()
        };
        match transport.create_database(&req).await.unwrap_err() {
            Error::Validation(msg) => assert!(msg.contains("engine")),
            other => panic!("Expected Error::Validation, got {}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_database() {
        let mock_server = MockServer::start().await;
        let transport = Transport::test_transport(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/databases/db-1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        transport.delete_database("db-1").await.unwrap();
    }
}
