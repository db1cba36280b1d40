//! Bank card removal tool.

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

/// Parameters for the card removal tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteUserCardParams {
    /// Identifier of the card to remove.
    #[schemars(description = "Bank card ID to delete")]
    pub id: i64,
}

impl DeleteUserCardParams {
    /// Request body; the exchange addresses the card in the DELETE body.
    pub fn body(&self) -> Value {
        json!({ "id": self.id })
    }
}

/// Bank card removal tool.
pub struct DeleteUserCardTool;

impl DeleteUserCardTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_user_card";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete a user's bank card by ID";

    /// Execute the tool logic.
    pub async fn execute(params: &DeleteUserCardParams, client: &ExchangeClient) -> CallToolResult {
        info!("Deleting bank card {}", params.id);

        match client.delete("/v1/bank/deleteUserCard", &params.body()).await {
            Ok(body) => success_result(body),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DeleteUserCardParams>(),
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
                let params: DeleteUserCardParams =
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

    #[test]
    fn test_body_carries_id() {
        let params = DeleteUserCardParams { id: 3 };
        assert_eq!(params.body(), json!({"id": 3}));
    }
}
