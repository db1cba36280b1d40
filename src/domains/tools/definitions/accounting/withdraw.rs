//! Crypto withdrawal tool.
//!
//! `tag` is the memo/destination-tag some networks require. The exchange
//! rejects an explicit null, so the field goes into the body only when it is
//! provided and non-empty; an empty string counts as absent.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

use crate::domains::tools::ExchangeClient;
use crate::domains::tools::definitions::common::{error_result, success_result};

/// Parameters for the withdrawal tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WithdrawParams {
    /// Amount to withdraw.
    #[schemars(description = "Withdrawal amount")]
    pub amount: f64,

    /// Network to withdraw over.
    #[schemars(description = "Network for withdrawal")]
    pub network: String,

    /// Destination address.
    #[schemars(description = "Target address for withdrawal")]
    pub target_address: String,

    /// Destination tag/memo, where the network uses one.
    #[schemars(description = "Optional tag for withdrawal")]
    #[serde(default)]
    pub tag: Option<String>,

    /// Symbol to withdraw.
    #[schemars(description = "Symbol to withdraw")]
    pub symbol: String,
}

impl WithdrawParams {
    /// Request body for the outbound withdrawal.
    pub fn body(&self) -> Value {
        let mut body = json!({
            "amount": self.amount,
            "network": self.network,
            "target_address": self.target_address,
            "symbol": self.symbol,
        });

        if let Some(tag) = self.tag.as_deref().filter(|t| !t.is_empty()) {
            body["tag"] = json!(tag);
        }

        body
    }
}

/// Crypto withdrawal tool.
pub struct WithdrawTool;

impl WithdrawTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "withdraw";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a withdrawal request";

    /// Execute the tool logic.
    pub async fn execute(params: &WithdrawParams, client: &ExchangeClient) -> CallToolResult {
        info!(
            "Withdrawing {} {} over {}",
            params.amount, params.symbol, params.network
        );

        match client
            .post("/v1/accounting/withdraw", &params.body())
            .await
        {
            Ok(body) => success_result(body),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WithdrawParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(client: Arc<ExchangeClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: WithdrawParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn params(tag: Option<&str>) -> WithdrawParams {
        WithdrawParams {
            amount: 0.5,
            network: "TRC20".to_string(),
            target_address: "TXYZabc123".to_string(),
            tag: tag.map(|t| t.to_string()),
            symbol: "USDT".to_string(),
        }
    }

    #[test]
    fn test_absent_tag_omitted_from_body() {
        let body = params(None).body();
        assert!(body.get("tag").is_none());
    }

    #[test]
    fn test_empty_tag_omitted_from_body() {
        let body = params(Some("")).body();
        assert!(body.get("tag").is_none());
    }

    #[test]
    fn test_present_tag_included() {
        let body = params(Some("memo-77")).body();
        assert_eq!(body["tag"], json!("memo-77"));
    }

    #[tokio::test]
    async fn test_execute_posts_body_without_tag() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/accounting/withdraw"))
            .and(body_json(json!({
                "amount": 0.5,
                "network": "TRC20",
                "target_address": "TXYZabc123",
                "symbol": "USDT"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"queued\":true}"))
            .expect(1)
            .mount(&server)
            .await;

        let client = ExchangeClient::with_endpoint(server.uri(), "tok");
        let result = WithdrawTool::execute(&params(None), &client).await;
        assert_eq!(result.is_error, Some(false));
    }
}
