//! Bank card listing tool.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::domains::tools::ExchangeClient;
use crate::domains::tools::definitions::common::{error_result, success_result};

/// Parameters for the card listing tool (none).
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetUserCardsParams {}

/// Bank card listing tool.
pub struct GetUserCardsTool;

impl GetUserCardsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_user_cards";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch user's bank cards";

    /// Execute the tool logic.
    pub async fn execute(_params: &GetUserCardsParams, client: &ExchangeClient) -> CallToolResult {
        info!("Fetching user bank cards");

        match client.get("/v1/bank/getUserCards", &[]).await {
            Ok(body) => success_result(body),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetUserCardsParams>(),
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
                let params: GetUserCardsParams =
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
    use rmcp::model::RawContent;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_upstream_failure_becomes_error_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/bank/getUserCards"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let client = ExchangeClient::with_endpoint(server.uri(), "tok");
        let result = GetUserCardsTool::execute(&GetUserCardsParams {}, &client).await;

        assert_eq!(result.is_error, Some(true));
        match &result.content[0].raw {
            RawContent::Text(text) => {
                assert!(text.text.contains("401"));
                assert!(text.text.contains("unauthorized"));
            }
            _ => panic!("expected text content"),
        }
    }
}
