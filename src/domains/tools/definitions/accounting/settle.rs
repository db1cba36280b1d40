//! Fiat settlement tool.
//!
//! Settlement moves fiat balance out to a registered bank card and requires
//! the account's two-factor secret on every call.

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

/// Parameters for the settlement tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SettleParams {
    /// Amount to settle.
    #[schemars(description = "Settlement amount")]
    pub amount: f64,

    /// Destination bank card.
    #[schemars(description = "Bank card ID for settlement")]
    pub card_id: i64,

    /// Two-factor code authorizing the settlement.
    #[schemars(description = "Two-factor authentication secret")]
    pub two_factor_secret: String,
}

impl SettleParams {
    /// Request body for the outbound settlement.
    pub fn body(&self) -> Value {
        json!({
            "amount": self.amount,
            "card_id": self.card_id,
            "two_factor_secret": self.two_factor_secret,
        })
    }
}

/// Fiat settlement tool.
pub struct SettleTool;

impl SettleTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "settle";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a settlement request";

    /// Execute the tool logic.
    pub async fn execute(params: &SettleParams, client: &ExchangeClient) -> CallToolResult {
        info!("Settling {} to card {}", params.amount, params.card_id);

        match client.post("/v1/accounting/settle", &params.body()).await {
            Ok(body) => success_result(body),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SettleParams>(),
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
                let params: SettleParams =
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
        let params = SettleParams {
            amount: 1500000.0,
            card_id: 2,
            two_factor_secret: "123456".to_string(),
        };
        assert_eq!(
            params.body(),
            json!({"amount": 1500000.0, "card_id": 2, "two_factor_secret": "123456"})
        );
    }

    #[test]
    fn test_two_factor_secret_is_required() {
        let result = serde_json::from_value::<SettleParams>(json!({
            "amount": 100,
            "card_id": 1
        }));
        assert!(result.is_err());
    }
}
