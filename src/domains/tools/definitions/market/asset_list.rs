//! Asset listing tool with optional market-type filter.

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

/// Parameters for the asset listing tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAssetListParams {
    /// Market type the listing is filtered by.
    #[schemars(description = "Asset type filter (e.g., 'spot', 'futures')")]
    #[serde(rename = "type", default = "default_asset_type")]
    pub asset_type: String,
}

fn default_asset_type() -> String {
    "spot".to_string()
}

impl GetAssetListParams {
    /// Query pairs for the outbound request.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![("type", self.asset_type.clone())]
    }
}

/// Asset listing tool.
pub struct GetAssetListTool;

impl GetAssetListTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_asset_list";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Fetch asset list with optional type filter (spot, futures, etc.)";

    /// Execute the tool logic.
    pub async fn execute(params: &GetAssetListParams, client: &ExchangeClient) -> CallToolResult {
        info!("Fetching asset list (type: {})", params.asset_type);

        match client.get("/v1/asset/index", &params.query()).await {
            Ok(body) => success_result(body),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetAssetListParams>(),
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
                let params: GetAssetListParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}
