use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coins, to_binary, Addr, QuerierWrapper, QueryRequest, StdResult, Uint128, WasmMsg, WasmQuery,
};
use serde::de::DeserializeOwned;
use sg_reveal::{ConfigResponse, SaleState};
use sg_std::{CosmosMsg, NATIVE_DENOM};

use crate::msg::{ExecuteMsg, QueryMsg};

/// RevealMinterContract is a wrapper around Addr that provides a lot of helpers
#[cw_serde]
pub struct RevealMinterContract(pub Addr);

impl RevealMinterContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ExecuteMsg>>(&self, msg: T) -> StdResult<CosmosMsg> {
        let msg = to_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds: vec![],
        }
        .into())
    }

    /// Public mint paying `unit_price * amount` in the native denom
    pub fn mint(&self, amount: u32, unit_price: Uint128) -> StdResult<CosmosMsg> {
        let msg = to_binary(&ExecuteMsg::Mint { amount })?;
        let total = unit_price.checked_mul(Uint128::from(amount))?;
        let funds = if total.is_zero() {
            vec![]
        } else {
            coins(total.u128(), NATIVE_DENOM)
        };
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds,
        }
        .into())
    }

    fn query<T: DeserializeOwned>(&self, querier: &QuerierWrapper, msg: QueryMsg) -> StdResult<T> {
        querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(&msg)?,
        }))
    }

    pub fn config(&self, querier: &QuerierWrapper) -> StdResult<ConfigResponse> {
        self.query(querier, QueryMsg::Config {})
    }

    pub fn sale_state(&self, querier: &QuerierWrapper) -> StdResult<SaleState> {
        self.query(querier, QueryMsg::SaleState {})
    }

    pub fn allowed_mint_count(&self, querier: &QuerierWrapper, address: &str) -> StdResult<u32> {
        self.query(
            querier,
            QueryMsg::AllowedMintCount {
                address: address.to_string(),
            },
        )
    }

    pub fn token_uri(&self, querier: &QuerierWrapper, token_id: u64) -> StdResult<String> {
        self.query(querier, QueryMsg::TokenUri { token_id })
    }

    /// Every token id held by `owner`, walked by index
    pub fn tokens_of(&self, querier: &QuerierWrapper, owner: &str) -> StdResult<Vec<u64>> {
        let balance: u64 = self.query(
            querier,
            QueryMsg::BalanceOf {
                owner: owner.to_string(),
            },
        )?;
        (0..balance)
            .map(|index| {
                self.query(
                    querier,
                    QueryMsg::TokenOfOwnerByIndex {
                        owner: owner.to_string(),
                        index,
                    },
                )
            })
            .collect()
    }
}
