pub mod codec;
pub mod contract;
pub mod dispatch;
mod error;
pub mod ledger;
pub mod msg;
pub mod state;
pub mod store;

pub use crate::error::ContractError;
