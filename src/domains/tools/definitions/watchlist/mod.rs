//! Watchlist tools.

mod add;
mod list;
mod remove;

pub use add::{AddToWatchListParams, AddToWatchListTool};
pub use list::{GetWatchListParams, GetWatchListTool};
pub use remove::{DeleteFromWatchListParams, DeleteFromWatchListTool};
