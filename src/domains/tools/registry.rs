//! Tool Registry - central catalog metadata for all tools.
//!
//! The registry is the single source of truth for which tools exist; the
//! router tests assert it never drifts from the routes actually served.

use rmcp::model::Tool;

use super::definitions::{
    AddToWatchListTool, AddUserBankTool, ChargeIrtTool, CreateSpotOrderTool,
    DeleteFromWatchListTool, DeleteOrderTool, DeleteUserCardTool, GetAssetListTool,
    GetCurrenciesTool, GetOrderHistoryTool, GetUserCardsTool, GetWalletAddressTool,
    GetWatchListTool, SettleTool, WithdrawTool,
};

/// Tool registry - catalog of all available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            GetCurrenciesTool::NAME,
            GetAssetListTool::NAME,
            CreateSpotOrderTool::NAME,
            DeleteOrderTool::NAME,
            GetOrderHistoryTool::NAME,
            GetUserCardsTool::NAME,
            AddUserBankTool::NAME,
            DeleteUserCardTool::NAME,
            GetWatchListTool::NAME,
            AddToWatchListTool::NAME,
            DeleteFromWatchListTool::NAME,
            WithdrawTool::NAME,
            SettleTool::NAME,
            GetWalletAddressTool::NAME,
            ChargeIrtTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetCurrenciesTool::to_tool(),
            GetAssetListTool::to_tool(),
            CreateSpotOrderTool::to_tool(),
            DeleteOrderTool::to_tool(),
            GetOrderHistoryTool::to_tool(),
            GetUserCardsTool::to_tool(),
            AddUserBankTool::to_tool(),
            DeleteUserCardTool::to_tool(),
            GetWatchListTool::to_tool(),
            AddToWatchListTool::to_tool(),
            DeleteFromWatchListTool::to_tool(),
            WithdrawTool::to_tool(),
            SettleTool::to_tool(),
            GetWalletAddressTool::to_tool(),
            ChargeIrtTool::to_tool(),
        ]
    }
}
