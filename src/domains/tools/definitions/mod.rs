//! Tool definitions module.
//!
//! Each tool lives in its own file, grouped by exchange API area. All of
//! them share the same shape: a schemars-validated params struct and an
//! `execute()` that performs exactly one request through the
//! [`ExchangeClient`](super::ExchangeClient).

pub mod accounting;
pub mod bank;
pub mod common;
pub mod market;
pub mod orders;
pub mod wallet;
pub mod watchlist;

pub use accounting::{ChargeIrtTool, SettleTool, WithdrawTool};
pub use bank::{AddUserBankTool, DeleteUserCardTool, GetUserCardsTool};
pub use market::{GetAssetListTool, GetCurrenciesTool};
pub use orders::{CreateSpotOrderTool, DeleteOrderTool, GetOrderHistoryTool};
pub use wallet::GetWalletAddressTool;
pub use watchlist::{AddToWatchListTool, DeleteFromWatchListTool, GetWatchListTool};
