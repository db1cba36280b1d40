//! Watchlist listing tool.

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

/// Parameters for the watchlist listing tool (none).
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetWatchListParams {}

/// Watchlist listing tool.
pub struct GetWatchListTool;

impl GetWatchListTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_watch_list";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch user's watchlist symbols";

    /// Execute the tool logic.
    pub async fn execute(_params: &GetWatchListParams, client: &ExchangeClient) -> CallToolResult {
        info!("Fetching watchlist");

        match client.get("/v1/asset/getWatchList", &[]).await {
            Ok(body) => success_result(body),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetWatchListParams>(),
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
                let params: GetWatchListParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}
