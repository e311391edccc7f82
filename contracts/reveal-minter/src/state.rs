use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};
use sg_reveal::{RevealState, SaleState};
use std::ops::Range;

use crate::ContractError;

/// Owner adjustable mint parameters
#[cw_serde]
pub struct MintParams {
    /// Price per token in the native denom, waived for the owner
    pub unit_price: Uint128,
    /// Applies to every mint path, the owner included
    pub max_per_call: u32,
}

pub const MINT_PARAMS: Item<MintParams> = Item::new("mint-params");

#[cw_serde]
pub struct Supply {
    pub total_issued: u64,
    /// Fixed at instantiation
    pub max_supply: u64,
}

impl Supply {
    pub fn remaining(&self) -> u64 {
        self.max_supply.saturating_sub(self.total_issued)
    }

    /// Reserves `amount` ids and returns them. Ids start at 1 and are never reused.
    pub fn issue(&mut self, amount: u32) -> Result<Range<u64>, ContractError> {
        let amount = u64::from(amount);
        if amount > self.remaining() {
            return Err(ContractError::InsufficientSupply {});
        }
        let first_id = self.total_issued + 1;
        self.total_issued += amount;

        Ok(first_id..first_id + amount)
    }

    pub fn is_issued(&self, token_id: u64) -> bool {
        (1..=self.total_issued).contains(&token_id)
    }
}

pub const SUPPLY: Item<Supply> = Item::new("supply");

pub const SALE_STATE: Item<SaleState> = Item::new("sale-state");

pub const REVEAL: Item<RevealState> = Item::new("reveal");

/// Informational only, nothing reads it during minting
pub const PROVENANCE: Item<String> = Item::new("provenance");

/// Address -> remaining presale allocation
pub const ALLOW_LIST: Map<&Addr, u32> = Map::new("al");

/// Fixed at instantiation, no update message exists
pub const OWNER: Admin = Admin::new("owner");
