//! Spot order creation tool.
//!
//! The order side and execution type are schema-level enums, so a malformed
//! call is rejected before any request leaves the process. The exchange
//! expects `price` as a string and `amount` as a number; the body builder
//! below owns that asymmetry.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

use crate::domains::tools::ExchangeClient;
use crate::domains::tools::definitions::common::{error_result, success_result};

/// Side of a spot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

/// Execution type of a spot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    Market,
    Limit,
}

/// Parameters for the spot order creation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateSpotOrderParams {
    /// Trading symbol.
    #[schemars(description = "Trading symbol (e.g., 'BTC')")]
    pub symbol: String,

    /// Trading pair.
    #[schemars(description = "Trading pair (e.g., 'IRT')")]
    pub pair: String,

    /// Order side.
    #[schemars(description = "Order type ('buy' or 'sell')")]
    #[serde(rename = "type")]
    pub side: OrderSide,

    /// Execution type.
    #[schemars(description = "Order execution type ('market' or 'limit')")]
    pub order_type: OrderKind,

    /// Order price. Required for limit orders; 0 for market orders.
    #[schemars(description = "Order price (required for limit orders) - 0 for market orders")]
    pub price: f64,

    /// Order amount in pair currency.
    #[schemars(
        description = "Order amount in pair currency (e.g., for ETH/USDT, amount should be in USDT - if you want $10 worth of ETH, enter 10)"
    )]
    pub amount: f64,
}

impl CreateSpotOrderParams {
    /// Request body for the outbound order.
    ///
    /// `price` is stringified, `amount` stays numeric.
    pub fn body(&self) -> Value {
        json!({
            "symbol": self.symbol,
            "pair": self.pair,
            "type": self.side,
            "order_type": self.order_type,
            "price": self.price.to_string(),
            "amount": self.amount,
        })
    }
}

/// Spot order creation tool.
pub struct CreateSpotOrderTool;

impl CreateSpotOrderTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_spot_order";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new spot trading order";

    /// Execute the tool logic.
    pub async fn execute(
        params: &CreateSpotOrderParams,
        client: &ExchangeClient,
    ) -> CallToolResult {
        info!(
            "Placing {:?} {:?} order: {}/{}",
            params.side, params.order_type, params.symbol, params.pair
        );

        match client.post("/v1/order/spot", &params.body()).await {
            Ok(body) => success_result(body),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateSpotOrderParams>(),
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
                let params: CreateSpotOrderParams =
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
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn market_buy() -> CreateSpotOrderParams {
        serde_json::from_value(json!({
            "symbol": "ETH",
            "pair": "USDT",
            "type": "buy",
            "order_type": "market",
            "price": 0,
            "amount": 10
        }))
        .unwrap()
    }

    #[test]
    fn test_price_is_stringified_amount_stays_numeric() {
        let body = market_buy().body();
        assert_eq!(body["price"], json!("0"));
        assert_eq!(body["amount"], json!(10.0));
    }

    #[test]
    fn test_limit_price_keeps_decimals() {
        let params: CreateSpotOrderParams = serde_json::from_value(json!({
            "symbol": "BTC",
            "pair": "IRT",
            "type": "sell",
            "order_type": "limit",
            "price": 4200000.5,
            "amount": 0.01
        }))
        .unwrap();
        assert_eq!(params.body()["price"], json!("4200000.5"));
    }

    #[test]
    fn test_enums_use_wire_names() {
        let body = market_buy().body();
        assert_eq!(body["type"], json!("buy"));
        assert_eq!(body["order_type"], json!("market"));
    }

    #[test]
    fn test_invalid_side_rejected() {
        let result = serde_json::from_value::<CreateSpotOrderParams>(json!({
            "symbol": "BTC",
            "pair": "IRT",
            "type": "hold",
            "order_type": "market",
            "price": 0,
            "amount": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_required_param_rejected() {
        let result = serde_json::from_value::<CreateSpotOrderParams>(json!({
            "symbol": "BTC",
            "type": "buy",
            "order_type": "market",
            "price": 0,
            "amount": 1
        }));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_invalid_params_never_reach_the_exchange() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/order/spot"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        // Deserialization is the validation gate; a rejected call stops here.
        let result = serde_json::from_value::<CreateSpotOrderParams>(json!({"symbol": "BTC"}));
        assert!(result.is_err());
        // MockServer verifies the zero-request expectation on drop.
    }

    #[tokio::test]
    async fn test_execute_posts_expected_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/order/spot"))
            .and(body_json(json!({
                "symbol": "ETH",
                "pair": "USDT",
                "type": "buy",
                "order_type": "market",
                "price": "0",
                "amount": 10.0
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"order_id\":1}"))
            .expect(1)
            .mount(&server)
            .await;

        let client = ExchangeClient::with_endpoint(server.uri(), "tok");
        let result = CreateSpotOrderTool::execute(&market_buy(), &client).await;
        assert_eq!(result.is_error, Some(false));
    }
}
