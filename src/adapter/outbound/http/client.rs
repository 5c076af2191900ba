//! HTTP client for the food backend REST API.
//!
//! Routes:
//!
//! - `GET /foods/{id}`
//! - `GET /favorites`, `POST /favorites`, `DELETE /favorites/{id}`
//! - `POST /orders`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};
use url::Url;

use crate::config::BackendConfig;
use crate::domain::FoodId;
use crate::error::BackendError;
use crate::port::outbound::{FavoriteRecord, FoodBackend, FoodRecord, OrderPayload};

/// `reqwest`-backed [`FoodBackend`].
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Create a client for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        // Url::join replaces the last path segment unless the base ends in '/'.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized).map_err(|e| BackendError::Url {
            path: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Transport {
                path: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { client, base_url })
    }

    /// Create a client from backend configuration.
    pub fn from_config(config: &BackendConfig) -> Result<Self, BackendError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        self.base_url.join(path).map_err(|e| BackendError::Url {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    async fn send(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<reqwest::Response, BackendError> {
        request.send().await.map_err(|e| BackendError::Transport {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "GET");

        let response = self.send(path, self.client.get(url)).await?;
        let response = check_status(path, response)?;
        decode(path, response).await
    }

    async fn write<B: Serialize + ?Sized>(
        &self,
        path: &str,
        request: RequestBuilder,
        body: Option<&B>,
    ) -> Result<(), BackendError> {
        let request = match body {
            Some(body) => request.json(body),
            None => request,
        };
        let response = self.send(path, request).await?;
        let response = check_status(path, response)?;
        debug!(path, status = response.status().as_u16(), "Write accepted");
        Ok(())
    }
}

fn check_status(path: &str, response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(BackendError::Status {
            path: path.to_string(),
            status: status.as_u16(),
        })
    }
}

async fn decode<T: DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
) -> Result<T, BackendError> {
    response.json::<T>().await.map_err(|e| BackendError::Decode {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

#[async_trait]
impl FoodBackend for HttpBackend {
    async fn fetch_food(&self, id: FoodId) -> Result<Option<FoodRecord>, BackendError> {
        let path = format!("foods/{id}");
        let url = self.endpoint(&path)?;
        debug!(url = %url, "GET");

        let response = self.send(&path, self.client.get(url)).await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(food_id = %id, "Food not found");
            return Ok(None);
        }
        let response = check_status(&path, response)?;

        // json-server style backends answer a missing id with `{}`.
        let body: serde_json::Value = decode(&path, response).await?;
        if body.as_object().is_some_and(serde_json::Map::is_empty) || body.is_null() {
            debug!(food_id = %id, "Empty food body");
            return Ok(None);
        }

        serde_json::from_value(body)
            .map(Some)
            .map_err(|e| BackendError::Decode {
                path,
                reason: e.to_string(),
            })
    }

    async fn fetch_favorites(&self) -> Result<Vec<FavoriteRecord>, BackendError> {
        let favorites: Vec<FavoriteRecord> = self.get_json("favorites").await?;
        debug!(count = favorites.len(), "Fetched favorites");
        Ok(favorites)
    }

    async fn add_favorite(&self, favorite: &FavoriteRecord) -> Result<(), BackendError> {
        let url = self.endpoint("favorites")?;
        info!(food_id = %favorite.id, "Adding favorite");
        self.write("favorites", self.client.post(url), Some(favorite))
            .await
    }

    async fn remove_favorite(&self, id: FoodId) -> Result<(), BackendError> {
        let path = format!("favorites/{id}");
        let url = self.endpoint(&path)?;
        info!(food_id = %id, "Removing favorite");
        self.write::<()>(&path, self.client.delete(url), None).await
    }

    async fn create_order(&self, order: &OrderPayload) -> Result<(), BackendError> {
        let url = self.endpoint("orders")?;
        info!(
            product_id = %order.product_id,
            total = %order.price,
            extras = order.extras.len(),
            "Posting order"
        );
        self.write("orders", self.client.post(url), Some(order)).await
    }

    fn backend_name(&self) -> &'static str {
        "http"
    }
}
