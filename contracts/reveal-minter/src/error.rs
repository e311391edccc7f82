use cosmwasm_std::{OverflowError, StdError};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Ledger(#[from] cw721_base::ContractError),

    #[error("Ownable: caller is not the owner")]
    Unauthorized {},

    #[error("Sale is not presale")]
    NotPresale {},

    #[error("Sale is not public")]
    NotPublic {},

    // Both quota causes share one message for client compatibility
    #[error("Exceeds allowed mint amount")]
    ExceedsAllowList { requested: u32, remaining: u32 },

    #[error("Exceeds allowed mint amount")]
    ExceedsMaxPerCall { requested: u32, max: u32 },

    #[error("Insufficient supply")]
    InsufficientSupply {},

    #[error("Insufficient funds")]
    InsufficientFunds { got: u128, expected: u128 },

    #[error("Mint amount must be greater than zero")]
    InvalidAmount {},
}
