//! Accounting tools: withdrawals, settlements and IRT charges.

mod charge_irt;
mod settle;
mod withdraw;

pub use charge_irt::{ChargeIrtParams, ChargeIrtTool};
pub use settle::{SettleParams, SettleTool};
pub use withdraw::{WithdrawParams, WithdrawTool};
