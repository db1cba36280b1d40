//! IRT charge tool.

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

/// Parameters for the IRT charge tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ChargeIrtParams {
    /// Amount of IRT to charge.
    #[schemars(description = "Amount to charge")]
    pub amount: f64,

    /// Bank card funding the charge.
    #[schemars(description = "Bank card ID to use for charging")]
    pub card_id: i64,
}

impl ChargeIrtParams {
    /// Request body for the outbound charge.
    pub fn body(&self) -> Value {
        json!({
            "amount": self.amount,
            "card_id": self.card_id,
        })
    }
}

/// IRT charge tool.
pub struct ChargeIrtTool;

impl ChargeIrtTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "charge_irt";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Charge IRT to account using bank card";

    /// Execute the tool logic.
    pub async fn execute(params: &ChargeIrtParams, client: &ExchangeClient) -> CallToolResult {
        info!("Charging {} IRT from card {}", params.amount, params.card_id);

        match client
            .post("/v1/accounting/chargeIrt", &params.body())
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
            input_schema: cached_schema_for_type::<ChargeIrtParams>(),
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
                let params: ChargeIrtParams =
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
        let params = ChargeIrtParams {
            amount: 500000.0,
            card_id: 1,
        };
        assert_eq!(params.body(), json!({"amount": 500000.0, "card_id": 1}));
    }
}
