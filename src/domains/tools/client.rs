//! Shared HTTP client for the Ganjinex REST API.
//!
//! Every tool funnels its single outbound request through this client so the
//! base URL, the fixed JSON headers, the token header, and the status check
//! live in exactly one place.

use reqwest::{
    Client, Method, RequestBuilder,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde_json::Value;
use tracing::debug;

use super::error::ToolError;
use crate::core::config::ExchangeConfig;

/// Header carrying the account token on every request.
pub const TOKEN_HEADER: &str = "X-Token";

/// HTTP client bound to one exchange endpoint and one account token.
///
/// Cheap to share: the inner `reqwest::Client` pools connections and the
/// rest is immutable, so concurrent tool calls need no coordination.
pub struct ExchangeClient {
    http: Client,
    base_url: String,
    token: String,
}

impl ExchangeClient {
    /// Create a client from the exchange configuration.
    pub fn new(config: &ExchangeConfig) -> Self {
        Self::with_endpoint(config.base_url.clone(), config.token.clone())
    }

    /// Create a client against an explicit endpoint.
    pub fn with_endpoint(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// The endpoint this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET request with URL-encoded query parameters.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String, ToolError> {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    /// Issue a POST request with a JSON body.
    pub async fn post(&self, path: &str, body: &Value) -> Result<String, ToolError> {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    /// Issue a DELETE request with a JSON body.
    ///
    /// The exchange addresses the resource in the body, not the path.
    pub async fn delete(&self, path: &str, body: &Value) -> Result<String, ToolError> {
        self.send(self.request(Method::DELETE, path).json(body))
            .await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(TOKEN_HEADER, &self.token)
    }

    /// Execute the request and translate the response.
    ///
    /// A success status yields the body text verbatim; anything else yields
    /// an upstream error carrying the status code and the body text. No
    /// retries, one request per call.
    async fn send(&self, request: RequestBuilder) -> Result<String, ToolError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!("Exchange answered {}", status);

        if status.is_success() {
            Ok(body)
        } else {
            Err(ToolError::UpstreamStatus {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TEST_TOKEN: &str = "test-token";

    async fn mock_client() -> (MockServer, ExchangeClient) {
        let server = MockServer::start().await;
        let client = ExchangeClient::with_endpoint(server.uri(), TEST_TOKEN);
        (server, client)
    }

    #[tokio::test]
    async fn test_success_body_passes_through_verbatim() {
        let (server, client) = mock_client().await;
        let payload = "{\"BTC\": {\"price\": \"4200000000\"}} trailing junk";

        Mock::given(method("GET"))
            .and(path("/currencies"))
            .respond_with(ResponseTemplate::new(200).set_body_string(payload))
            .mount(&server)
            .await;

        let body = client.get("/currencies", &[]).await.unwrap();
        assert_eq!(body, payload);
    }

    #[tokio::test]
    async fn test_fixed_headers_attached_to_every_request() {
        let (server, client) = mock_client().await;

        Mock::given(method("GET"))
            .and(path("/currencies"))
            .and(header("X-Token", TEST_TOKEN))
            .and(header("Accept", "application/json"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        assert!(client.get("/currencies", &[]).await.is_ok());
    }

    #[tokio::test]
    async fn test_error_status_carries_status_and_body() {
        let (server, client) = mock_client().await;

        Mock::given(method("GET"))
            .and(path("/currencies"))
            .respond_with(ResponseTemplate::new(418).set_body_string("short and stout"))
            .mount(&server)
            .await;

        let err = client.get("/currencies", &[]).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("418"));
        assert!(message.contains("short and stout"));
    }

    #[tokio::test]
    async fn test_query_parameters_are_encoded() {
        let (server, client) = mock_client().await;

        Mock::given(method("GET"))
            .and(path("/v1/asset/index"))
            .and(query_param("type", "spot futures"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let query = [("type", "spot futures".to_string())];
        assert!(client.get("/v1/asset/index", &query).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_sends_json_body() {
        let (server, client) = mock_client().await;

        Mock::given(method("DELETE"))
            .and(path("/v1/order/delete"))
            .and(body_json(json!({"id": 7})))
            .respond_with(ResponseTemplate::new(200).set_body_string("deleted"))
            .expect(1)
            .mount(&server)
            .await;

        let body = client
            .delete("/v1/order/delete", &json!({"id": 7}))
            .await
            .unwrap();
        assert_eq!(body, "deleted");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_transport_error() {
        // Port 9 (discard) is not listening locally.
        let client = ExchangeClient::with_endpoint("http://127.0.0.1:9", TEST_TOKEN);
        let err = client.get("/currencies", &[]).await.unwrap_err();
        assert!(matches!(err, ToolError::Transport(_)));
    }
}
