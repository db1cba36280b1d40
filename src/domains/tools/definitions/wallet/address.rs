//! Deposit address lookup tool.
//!
//! A POST on the exchange side even though it only reads state.

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

/// Parameters for the deposit address lookup tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetWalletAddressParams {
    /// Symbol to deposit.
    #[schemars(description = "Trading symbol")]
    pub symbol: String,

    /// Network the deposit will arrive on.
    #[schemars(description = "Network name")]
    pub network: String,
}

impl GetWalletAddressParams {
    /// Request body for the outbound lookup.
    pub fn body(&self) -> Value {
        json!({
            "symbol": self.symbol,
            "network": self.network,
        })
    }
}

/// Deposit address lookup tool.
pub struct GetWalletAddressTool;

impl GetWalletAddressTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_wallet_address";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get wallet address for a specific symbol and network to deposit crypto currency";

    /// Execute the tool logic.
    pub async fn execute(
        params: &GetWalletAddressParams,
        client: &ExchangeClient,
    ) -> CallToolResult {
        info!(
            "Fetching deposit address for {} on {}",
            params.symbol, params.network
        );

        match client
            .post("/v1/wallet/getWalletAddress", &params.body())
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
            input_schema: cached_schema_for_type::<GetWalletAddressParams>(),
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
                let params: GetWalletAddressParams =
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
    fn test_body_shape() {
        let params = GetWalletAddressParams {
            symbol: "USDT".to_string(),
            network: "TRC20".to_string(),
        };
        assert_eq!(
            params.body(),
            json!({"symbol": "USDT", "network": "TRC20"})
        );
    }

    #[test]
    fn test_network_is_required() {
        let result =
            serde_json::from_value::<GetWalletAddressParams>(json!({"symbol": "USDT"}));
        assert!(result.is_err());
    }
}
