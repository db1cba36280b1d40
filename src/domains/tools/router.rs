//! Tool Router - builds the rmcp ToolRouter from the definitions.
//!
//! Each tool knows how to create its own route; this module only wires them
//! together around the shared [`ExchangeClient`].

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::ExchangeClient;
use super::definitions::{
    AddToWatchListTool, AddUserBankTool, ChargeIrtTool, CreateSpotOrderTool,
    DeleteFromWatchListTool, DeleteOrderTool, DeleteUserCardTool, GetAssetListTool,
    GetCurrenciesTool, GetOrderHistoryTool, GetUserCardsTool, GetWalletAddressTool,
    GetWatchListTool, SettleTool, WithdrawTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<ExchangeClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetCurrenciesTool::create_route(client.clone()))
        .with_route(GetAssetListTool::create_route(client.clone()))
        .with_route(CreateSpotOrderTool::create_route(client.clone()))
        .with_route(DeleteOrderTool::create_route(client.clone()))
        .with_route(GetOrderHistoryTool::create_route(client.clone()))
        .with_route(GetUserCardsTool::create_route(client.clone()))
        .with_route(AddUserBankTool::create_route(client.clone()))
        .with_route(DeleteUserCardTool::create_route(client.clone()))
        .with_route(GetWatchListTool::create_route(client.clone()))
        .with_route(AddToWatchListTool::create_route(client.clone()))
        .with_route(DeleteFromWatchListTool::create_route(client.clone()))
        .with_route(WithdrawTool::create_route(client.clone()))
        .with_route(SettleTool::create_route(client.clone()))
        .with_route(GetWalletAddressTool::create_route(client.clone()))
        .with_route(ChargeIrtTool::create_route(client))
}
