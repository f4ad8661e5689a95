//! Typed REST client for one portal resource collection.
//!
//! A thin wrapper over a shared `reqwest::Client`, parameterized only by the
//! resource's base endpoint. Every call is a single best-effort round trip:
//! no retry, no timeout, no caching.

use std::marker::PhantomData;

use crate::errors::ApiError;
use crate::models::{RecordId, Resource};

/// HTTP client for one resource kind.
#[derive(Debug, Clone)]
pub struct ResourceClient<R: Resource> {
    http: reqwest::Client,
    base_url: String,
    _marker: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceClient<R> {
    /// Create a client rooted at `<api_root><R::ENDPOINT>`.
    pub fn new(http: reqwest::Client, api_root: &str) -> Self {
        Self {
            http,
            base_url: format!("{}{}", api_root, R::ENDPOINT),
            _marker: PhantomData,
        }
    }

    fn item_url(&self, id: RecordId) -> String {
        format!("{}{}/", self.base_url, id)
    }

    /// GET the full collection, in server order.
    pub async fn list(&self) -> Result<Vec<R>, ApiError> {
        let resp = self.http.get(&self.base_url).send().await?;
        let resp = self.check_status(resp).await?;
        Ok(resp.json().await?)
    }

    /// GET a single record.
    pub async fn get_one(&self, id: RecordId) -> Result<R, ApiError> {
        let resp = self.http.get(self.item_url(id)).send().await?;
        let resp = self.check_status(resp).await?;
        Ok(resp.json().await?)
    }

    /// POST a draft. The response body is not trusted; callers re-list to see
    /// the created record and its backend-assigned id.
    pub async fn create(&self, draft: &R::Draft) -> Result<(), ApiError> {
        let resp = self.http.post(&self.base_url).json(draft).send().await?;
        self.check_status(resp).await?;
        Ok(())
    }

    /// PUT a full record replacement (not a partial patch).
    pub async fn update(&self, id: RecordId, record: &R) -> Result<(), ApiError> {
        let resp = self.http.put(self.item_url(id)).json(record).send().await?;
        self.check_status(resp).await?;
        Ok(())
    }

    /// DELETE one record. Deleting a missing id is a failure, not a success.
    pub async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        let resp = self.http.delete(self.item_url(id)).send().await?;
        self.check_status(resp).await?;
        Ok(())
    }

    /// Map a non-success status to the matching error kind.
    async fn check_status(&self, resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp.text().await.unwrap_or_default();
        tracing::error!("{} request failed with {}: {}", R::NOUN, status, message);
        Err(match status.as_u16() {
            404 => ApiError::NotFound(format!("{} not found", R::NOUN)),
            400 => ApiError::Validation(if message.is_empty() {
                format!("Backend rejected the {}", R::NOUN)
            } else {
                message
            }),
            code => ApiError::Server {
                status: code,
                message,
            },
        })
    }
}
