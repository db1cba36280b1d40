//! Order history tool.
//!
//! The exchange treats `symbol` and `pair` as optional filters: they are
//! appended only when non-empty. `order_type`, `active`, `convert` and
//! `page` are always present, defaults included, because the endpoint
//! expects them on every request.

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

/// Parameters for the order history tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetOrderHistoryParams {
    /// Symbol filter.
    #[schemars(description = "Trading symbol filter")]
    #[serde(default)]
    pub symbol: Option<String>,

    /// Pair filter.
    #[schemars(description = "Trading pair filter")]
    #[serde(default)]
    pub pair: Option<String>,

    /// Order type filter; empty string means "all".
    #[schemars(description = "Order type filter")]
    #[serde(default)]
    pub order_type: String,

    /// Active status filter.
    #[schemars(description = "Active status filter (0 or 1)")]
    #[serde(default = "default_active")]
    pub active: i64,

    /// Include convert currency.
    #[schemars(description = "Include convert currency (0 or 1)")]
    #[serde(default)]
    pub convert: i64,

    /// Page number.
    #[schemars(description = "Page number for pagination")]
    pub page: i64,
}

fn default_active() -> i64 {
    1
}

impl GetOrderHistoryParams {
    /// Query pairs for the outbound request.
    ///
    /// `symbol`/`pair` only when provided and non-empty; the rest always.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();

        if let Some(symbol) = self.symbol.as_deref().filter(|s| !s.is_empty()) {
            query.push(("symbol", symbol.to_string()));
        }
        if let Some(pair) = self.pair.as_deref().filter(|p| !p.is_empty()) {
            query.push(("pair", pair.to_string()));
        }
        query.push(("order_type", self.order_type.clone()));
        query.push(("active", self.active.to_string()));
        query.push(("convert", self.convert.to_string()));
        query.push(("page", self.page.to_string()));

        query
    }
}

/// Order history tool.
pub struct GetOrderHistoryTool;

impl GetOrderHistoryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_order_history";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch order history with optional filters";

    /// Execute the tool logic.
    pub async fn execute(
        params: &GetOrderHistoryParams,
        client: &ExchangeClient,
    ) -> CallToolResult {
        info!("Fetching order history (page {})", params.page);

        match client.get("/v1/order/orderHistory", &params.query()).await {
            Ok(body) => success_result(body),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetOrderHistoryParams>(),
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
                let params: GetOrderHistoryParams =
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
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_page_is_required() {
        assert!(serde_json::from_str::<GetOrderHistoryParams>("{}").is_err());
    }

    #[test]
    fn test_defaults_with_only_page() {
        let params: GetOrderHistoryParams = serde_json::from_str(r#"{"page": 2}"#).unwrap();
        assert_eq!(
            params.query(),
            vec![
                ("order_type", "".to_string()),
                ("active", "1".to_string()),
                ("convert", "0".to_string()),
                ("page", "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_filters_included_when_non_empty() {
        let params: GetOrderHistoryParams =
            serde_json::from_str(r#"{"page": 1, "symbol": "BTC", "pair": "IRT"}"#).unwrap();
        let query = params.query();
        assert_eq!(query[0], ("symbol", "BTC".to_string()));
        assert_eq!(query[1], ("pair", "IRT".to_string()));
    }

    #[test]
    fn test_empty_filters_dropped() {
        let params: GetOrderHistoryParams =
            serde_json::from_str(r#"{"page": 1, "symbol": "", "pair": ""}"#).unwrap();
        let keys: Vec<_> = params.query().into_iter().map(|(k, _)| k).collect();
        assert!(!keys.contains(&"symbol"));
        assert!(!keys.contains(&"pair"));
    }

    #[tokio::test]
    async fn test_execute_sends_expected_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/order/orderHistory"))
            .and(query_param("order_type", ""))
            .and(query_param("active", "1"))
            .and(query_param("convert", "0"))
            .and(query_param("page", "2"))
            .and(query_param_is_missing("symbol"))
            .and(query_param_is_missing("pair"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let params: GetOrderHistoryParams = serde_json::from_str(r#"{"page": 2}"#).unwrap();
        let client = ExchangeClient::with_endpoint(server.uri(), "tok");
        let result = GetOrderHistoryTool::execute(&params, &client).await;
        assert_eq!(result.is_error, Some(false));
    }
}
