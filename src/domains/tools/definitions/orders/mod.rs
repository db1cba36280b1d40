//! Spot order tools.

mod create_spot;
mod delete;
mod history;

pub use create_spot::{CreateSpotOrderParams, CreateSpotOrderTool, OrderKind, OrderSide};
pub use delete::{DeleteOrderParams, DeleteOrderTool};
pub use history::{GetOrderHistoryParams, GetOrderHistoryTool};
