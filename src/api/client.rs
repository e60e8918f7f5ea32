//! Generic wrap/unwrap layer shared by every resource facade
//!
//! Item endpoints reply `{resource: {...}}`, collection endpoints reply
//! `{resources: [...], links: {pages: {...}}, meta: {total: N}}`. The only
//! per-resource custom logic is the path and the wrap key, so the facades
//! reduce to thin calls into these helpers.

use log::debug;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

use super::meta::{BodyPages, ListOpts};
use super::paginate::paginate_all;
use super::transport::{Envelope, Transport};

impl Transport {
    /// GET an item endpoint and unwrap `{key: {...}}`
    pub async fn get_item<T: DeserializeOwned>(&self, path: &str, key: &str) -> Result<T> {
        let envelope = self.request_checked(Method::GET, path, &[], None).await?;
        unwrap_item(&envelope.body, key)
    }

    /// GET one page of a collection endpoint and unwrap `{key: [...]}`
    ///
    /// The envelope's pagination links are completed from the body's
    /// `links.pages` object, which wins over the `Link` header per relation.
    pub async fn list_page<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
        opts: ListOpts,
    ) -> Result<(Vec<T>, Envelope)> {
        let query = opts.query();
        let mut envelope = self.request_checked(Method::GET, path, &query, None).await?;

        if let Ok(pages) = serde_json::from_value::<BodyPages>(
            envelope.body["links"]["pages"].clone(),
        ) {
            envelope.links.merge_body(&pages);
        }

        let items = unwrap_collection(&envelope.body, key)?;
        Ok((items, envelope))
    }

    /// GET every page of a collection endpoint as one flat vector
    pub async fn list_all<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
        per_page: Option<u32>,
    ) -> Result<Vec<T>> {
        debug!("Listing all '{}' from {}", key, path);
        paginate_all(per_page, |opts| self.list_page(path, key, opts)).await
    }

    /// POST a request body and unwrap the created `{key: {...}}`
    pub async fn post_item<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        key: &str,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        let envelope = self
            .request_checked(Method::POST, path, &[], Some(&body))
            .await?;
        unwrap_item(&envelope.body, key)
    }

    /// PUT a request body and unwrap the updated `{key: {...}}`
    pub async fn put_item<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        key: &str,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        let envelope = self
            .request_checked(Method::PUT, path, &[], Some(&body))
            .await?;
        unwrap_item(&envelope.body, key)
    }

    /// DELETE an item endpoint; the API replies 204 with no body
    pub async fn delete_path(&self, path: &str) -> Result<()> {
        self.request_checked(Method::DELETE, path, &[], None).await?;
        Ok(())
    }
}

/// Unwrap `{key: {...}}` into a typed record
pub(crate) fn unwrap_item<T: DeserializeOwned>(body: &Value, key: &str) -> Result<T> {
    let value = &body[key];
    if value.is_null() {
        return Err(Error::Decode(format!("response is missing '{}'", key)));
    }
    serde_json::from_value(value.clone())
        .map_err(|e| Error::Decode(format!("failed to parse '{}': {}", key, e)))
}

/// Unwrap `{key: [...]}` into typed records; a null or absent collection
/// is an empty page, not an error
pub(crate) fn unwrap_collection<T: DeserializeOwned>(body: &Value, key: &str) -> Result<Vec<T>> {
    let value = &body[key];
    if value.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value.clone())
        .map_err(|e| Error::Decode(format!("failed to parse '{}': {}", key, e)))
}
