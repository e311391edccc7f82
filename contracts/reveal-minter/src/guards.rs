use cosmwasm_std::{Addr, Deps, Uint128};
use sg_reveal::SaleState;

use crate::state::{MintParams, OWNER};
use crate::ContractError;

pub fn only_owner(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    if !OWNER.is_admin(deps, sender)? {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

pub fn is_owner(deps: Deps, sender: &Addr) -> Result<bool, ContractError> {
    Ok(OWNER.is_admin(deps, sender)?)
}

pub fn assert_presale(sale_state: SaleState) -> Result<(), ContractError> {
    match sale_state {
        SaleState::Presale => Ok(()),
        _ => Err(ContractError::NotPresale {}),
    }
}

pub fn assert_public(sale_state: SaleState) -> Result<(), ContractError> {
    match sale_state {
        SaleState::Public => Ok(()),
        _ => Err(ContractError::NotPublic {}),
    }
}

/// Returns the allocation left after minting `amount`
pub fn check_allowance(remaining: u32, amount: u32) -> Result<u32, ContractError> {
    remaining
        .checked_sub(amount)
        .ok_or(ContractError::ExceedsAllowList {
            requested: amount,
            remaining,
        })
}

pub fn check_per_call(params: &MintParams, amount: u32) -> Result<(), ContractError> {
    if amount == 0 {
        return Err(ContractError::InvalidAmount {});
    }
    if amount > params.max_per_call {
        return Err(ContractError::ExceedsMaxPerCall {
            requested: amount,
            max: params.max_per_call,
        });
    }
    Ok(())
}

pub fn check_payment(
    params: &MintParams,
    amount: u32,
    payment: Uint128,
) -> Result<(), ContractError> {
    let expected = params.unit_price.checked_mul(Uint128::from(amount))?;
    if payment < expected {
        return Err(ContractError::InsufficientFunds {
            got: payment.u128(),
            expected: expected.u128(),
        });
    }
    Ok(())
}
