//! Watchlist removal tool.
//!
//! Unlike the other DELETE endpoints the watchlist is addressed by symbol,
//! not by numeric id.

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

/// Parameters for the watchlist removal tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteFromWatchListParams {
    /// Symbol to stop tracking.
    #[schemars(description = "Trading symbol to remove from watchlist")]
    pub symbol: String,
}

impl DeleteFromWatchListParams {
    /// Request body for the outbound removal.
    pub fn body(&self) -> Value {
        json!({ "symbol": self.symbol })
    }
}

/// Watchlist removal tool.
pub struct DeleteFromWatchListTool;

impl DeleteFromWatchListTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_from_watch_list";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Remove a symbol from user's watchlist";

    /// Execute the tool logic.
    pub async fn execute(
        params: &DeleteFromWatchListParams,
        client: &ExchangeClient,
    ) -> CallToolResult {
        info!("Removing {} from watchlist", params.symbol);

        match client
            .delete("/v1/asset/deleteFromWatchList", &params.body())
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
            input_schema: cached_schema_for_type::<DeleteFromWatchListParams>(),
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
                let params: DeleteFromWatchListParams =
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
    fn test_body_uses_symbol_not_id() {
        let params = DeleteFromWatchListParams {
            symbol: "DOGE".to_string(),
        };
        assert_eq!(params.body(), json!({"symbol": "DOGE"}));
    }
}
