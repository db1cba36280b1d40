//! Order deletion tool.

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

/// Parameters for the order deletion tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteOrderParams {
    /// Identifier of the order to cancel.
    #[schemars(description = "Order ID to delete")]
    pub id: i64,
}

impl DeleteOrderParams {
    /// Request body; the exchange addresses the order in the DELETE body.
    pub fn body(&self) -> Value {
        json!({ "id": self.id })
    }
}

/// Order deletion tool.
pub struct DeleteOrderTool;

impl DeleteOrderTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_order";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete an existing order by ID";

    /// Execute the tool logic.
    pub async fn execute(params: &DeleteOrderParams, client: &ExchangeClient) -> CallToolResult {
        info!("Deleting order {}", params.id);

        match client.delete("/v1/order/delete", &params.body()).await {
            Ok(body) => success_result(body),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DeleteOrderParams>(),
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
                let params: DeleteOrderParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}
