pub mod contract;
mod error;
pub mod guards;
pub mod helpers;
#[cfg(test)]
mod integration_tests;
pub mod ledger;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
pub use helpers::RevealMinterContract;
