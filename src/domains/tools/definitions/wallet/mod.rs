//! Wallet tools.

mod address;

pub use address::{GetWalletAddressParams, GetWalletAddressTool};
