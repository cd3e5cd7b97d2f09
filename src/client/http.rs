use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::ItemsClient;
use crate::errors::ClientError;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::items::{CreateItemRequest, Item, UpdateItemRequest};

/// Message part of an error body returned by the server
#[derive(Deserialize)]
struct ServerMessage {
    message: String,
}

/// `ItemsClient` over HTTP
///
/// `base_url` points at the items collection, e.g.
/// `http://localhost:5000/api/items`. Single items live at `{base_url}/{id}`.
#[derive(Debug, Clone)]
pub struct HttpItemsClient {
    http: Client,
    base_url: Url,
}

impl HttpItemsClient {
    /// Create a client for the collection at `base_url`
    ///
    /// # Errors
    /// Returns `ClientError::Transport` if `base_url` is not an absolute http(s) URL
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::Transport(format!("Invalid API URL '{}': {}", base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::Transport(format!(
                "Invalid API URL '{}': not a base URL",
                base_url
            )));
        }

        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of a single item, with `id` percent-encoded as one path segment
    fn item_url(&self, id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url)
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Items request failed: {}", e);
            ClientError::Transport(e.to_string())
        })?;

        let response = Self::check_status(response).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Turn a non-success response into `ClientError::Server`
    ///
    /// The server's `message` is used when the body carries one, otherwise the
    /// canonical reason phrase of the status.
    async fn check_status(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let fallback = status.canonical_reason().unwrap_or("Request failed").to_string();
        let message = match response.json::<ServerMessage>().await {
            Ok(body) => body.message,
            Err(_) => fallback,
        };

        tracing::warn!("Items request returned {}: {}", status.as_u16(), message);

        Err(ClientError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ItemsClient for HttpItemsClient {
    async fn list_items(&self) -> Result<Vec<Item>, ClientError> {
        Self::send(self.request(Method::GET, self.base_url.clone())).await
    }

    async fn get_item(&self, id: &str) -> Result<Item, ClientError> {
        Self::send(self.request(Method::GET, self.item_url(id))).await
    }

    async fn create_item(&self, request: &CreateItemRequest) -> Result<Item, ClientError> {
        Self::send(self.request(Method::POST, self.base_url.clone()).json(request)).await
    }

    async fn update_item(&self, id: &str, request: &UpdateItemRequest) -> Result<Item, ClientError> {
        Self::send(self.request(Method::PUT, self.item_url(id)).json(request)).await
    }

    async fn delete_item(&self, id: &str) -> Result<MessageResponse, ClientError> {
        Self::send(self.request(Method::DELETE, self.item_url(id))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_url_appends_id_segment() {
        let client = HttpItemsClient::new("http://localhost:5000/api/items").unwrap();

        assert_eq!(
            client.item_url("abc").as_str(),
            "http://localhost:5000/api/items/abc"
        );
    }

    #[test]
    fn test_item_url_ignores_trailing_slash() {
        let client = HttpItemsClient::new("http://localhost:5000/api/items/").unwrap();

        assert_eq!(
            client.item_url("abc").as_str(),
            "http://localhost:5000/api/items/abc"
        );
    }

    #[test]
    fn test_item_url_encodes_id() {
        let client = HttpItemsClient::new("http://localhost:5000/api/items").unwrap();

        assert_eq!(
            client.item_url("a/b c").as_str(),
            "http://localhost:5000/api/items/a%2Fb%20c"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = HttpItemsClient::new("not a url");

        assert!(matches!(result, Err(ClientError::Transport(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) is not expected to be listening locally
        let client = HttpItemsClient::new("http://127.0.0.1:9/api/items").unwrap();

        let result = client.list_items().await;

        assert!(matches!(result, Err(ClientError::Transport(_))));
    }
}
