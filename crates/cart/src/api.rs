//! Remote cart collaborator client.
//!
//! The backend owns the authoritative cart; this module consumes its REST
//! surface. The store only calls three routes:
//!
//! - `DELETE /carrinho/item/{id}` - remove one line item remotely
//! - `DELETE /carrinho/limpar` - clear the remote cart
//! - `PUT /carrinho/sincronizar` - push the local lines for reconciliation
//!
//! Any non-success status is a full operation failure; the store leaves
//! local state untouched and surfaces the error as a notification.

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use thiserror::Error;

use sufficius_core::{CartLineItem, ProductId};

use crate::config::CartApiConfig;

/// Errors that can occur when interacting with the cart backend.
#[derive(Debug, Error)]
pub enum CartApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to build the client or parse a response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// The remote cart collaborator seam.
///
/// Production code uses [`HttpCartApi`]; tests inject doubles that record
/// calls and return scripted results.
pub trait CartApi {
    /// Remove one line item from the remote cart.
    fn delete_item(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<(), CartApiError>> + Send;

    /// Clear the remote cart.
    fn clear(&self) -> impl Future<Output = Result<(), CartApiError>> + Send;

    /// Push the local lines to the backend reconciliation endpoint.
    fn sync(
        &self,
        items: &[CartLineItem],
    ) -> impl Future<Output = Result<(), CartApiError>> + Send;
}

/// REST client for the cart backend.
#[derive(Debug, Clone)]
pub struct HttpCartApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCartApi {
    /// Create a new cart API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build or the configured
    /// token is not a valid header value.
    pub fn new(config: &CartApiConfig) -> Result<Self, CartApiError> {
        let mut headers = HeaderMap::new();

        if let Some(token) = &config.api_token {
            let auth_value = format!("Bearer {}", token.expose_secret());
            let mut value = HeaderValue::from_str(&auth_value)
                .map_err(|e| CartApiError::Parse(format!("Invalid API token format: {e}")))?;
            value.set_sensitive(true);
            headers.insert("Authorization", value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Map a response to `Ok` on success or `CartApiError::Api` otherwise.
    async fn check(response: reqwest::Response) -> Result<(), CartApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = response.text().await.unwrap_or_default();
        Err(CartApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

impl CartApi for HttpCartApi {
    async fn delete_item(&self, id: ProductId) -> Result<(), CartApiError> {
        let url = format!("{}/carrinho/item/{id}", self.base_url);
        let response = self.client.delete(&url).send().await?;
        Self::check(response).await
    }

    async fn clear(&self) -> Result<(), CartApiError> {
        let url = format!("{}/carrinho/limpar", self.base_url);
        let response = self.client.delete(&url).send().await?;
        Self::check(response).await
    }

    async fn sync(&self, items: &[CartLineItem]) -> Result<(), CartApiError> {
        let url = format!("{}/carrinho/sincronizar", self.base_url);
        let response = self.client.put(&url).json(&items).send().await?;
        Self::check(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = CartApiError::Api {
            status: 404,
            message: "item not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 404 - item not found");
    }

    #[test]
    fn client_strips_trailing_slash_from_base_url() {
        let config = CartApiConfig {
            base_url: "https://api.sufficius.test/".to_string(),
            api_token: None,
            timeout: std::time::Duration::from_secs(5),
        };
        let api = HttpCartApi::new(&config).unwrap();
        assert_eq!(api.base_url, "https://api.sufficius.test");
    }
}
