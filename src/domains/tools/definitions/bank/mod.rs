//! Bank card tools.

mod add;
mod cards;
mod delete_card;

pub use add::{AddUserBankParams, AddUserBankTool};
pub use cards::{GetUserCardsParams, GetUserCardsTool};
pub use delete_card::{DeleteUserCardParams, DeleteUserCardTool};
