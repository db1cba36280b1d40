//! Currency listing tool.
//!
//! Fetches the exchange-wide currency table. Takes no parameters; the
//! response body is passed through untouched so the client sees exactly what
//! the exchange published.

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

/// Parameters for the currency listing tool (none).
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCurrenciesParams {}

/// Currency listing tool.
pub struct GetCurrenciesTool;

impl GetCurrenciesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_currencies";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch cryptocurrency data from the currencies API";

    /// Execute the tool logic.
    pub async fn execute(_params: &GetCurrenciesParams, client: &ExchangeClient) -> CallToolResult {
        info!("Fetching currency table");

        match client.get("/currencies", &[]).await {
            Ok(body) => success_result(body),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetCurrenciesParams>(),
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
                let params: GetCurrenciesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}
