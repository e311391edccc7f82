#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, Empty, Env, StdError, StdResult, Uint128};
use cw721::{ContractInfoResponse, Cw721Query, NftInfoResponse, OwnerOfResponse};
use sg_reveal::{ConfigResponse, SaleState};

use crate::{
    ledger::{Cw721Ledger, TokenLedger},
    msg::QueryMsg,
    state::{ALLOW_LIST, MINT_PARAMS, OWNER, PROVENANCE, REVEAL, SALE_STATE, SUPPLY},
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Name {} => to_binary(&query_contract_info(deps)?.name),
        QueryMsg::Symbol {} => to_binary(&query_contract_info(deps)?.symbol),
        QueryMsg::Cost {} => to_binary(&query_cost(deps)?),
        QueryMsg::MaxSupply {} => to_binary(&SUPPLY.load(deps.storage)?.max_supply),
        QueryMsg::MaxMintAmount {} => to_binary(&MINT_PARAMS.load(deps.storage)?.max_per_call),
        QueryMsg::SaleState {} => to_binary(&query_sale_state(deps)?),
        QueryMsg::IsRevealed {} => to_binary(&REVEAL.load(deps.storage)?.revealed),
        QueryMsg::BaseUri {} => to_binary(&REVEAL.load(deps.storage)?.base_uri),
        QueryMsg::Provenance {} => to_binary(&PROVENANCE.may_load(deps.storage)?),
        QueryMsg::AllowedMintCount { address } => {
            to_binary(&query_allowed_mint_count(deps, address)?)
        }
        QueryMsg::BalanceOf { owner } => to_binary(&query_balance_of(deps, owner)?),
        QueryMsg::TokenOfOwnerByIndex { owner, index } => {
            to_binary(&query_token_of_owner_by_index(deps, owner, index)?)
        }
        QueryMsg::TokenUri { token_id } => to_binary(&query_token_uri(deps, token_id)?),
        QueryMsg::Owner {} => to_binary(&query_owner(deps)?),
        QueryMsg::TotalSupply {} => to_binary(&SUPPLY.load(deps.storage)?.total_issued),
        QueryMsg::OwnerOf { token_id } => to_binary(&query_owner_of(deps, env, token_id)?),
        QueryMsg::NftInfo { token_id } => to_binary(&query_nft_info(deps, token_id)?),
        QueryMsg::ContractInfo {} => to_binary(&query_contract_info(deps)?),
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
    }
}

fn query_contract_info(deps: Deps) -> StdResult<ContractInfoResponse> {
    Cw721Ledger::default().load_contract_info(deps.storage)
}

fn query_cost(deps: Deps) -> StdResult<Uint128> {
    Ok(MINT_PARAMS.load(deps.storage)?.unit_price)
}

fn query_sale_state(deps: Deps) -> StdResult<SaleState> {
    SALE_STATE.load(deps.storage)
}

pub fn query_allowed_mint_count(deps: Deps, address: String) -> StdResult<u32> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(ALLOW_LIST
        .may_load(deps.storage, &addr)?
        .unwrap_or_default())
}

pub fn query_balance_of(deps: Deps, owner: String) -> StdResult<u64> {
    let owner = deps.api.addr_validate(&owner)?;
    Cw721Ledger::default().balance_of(deps.storage, &owner)
}

pub fn query_token_of_owner_by_index(deps: Deps, owner: String, index: u64) -> StdResult<u64> {
    let owner = deps.api.addr_validate(&owner)?;
    Cw721Ledger::default().token_of_owner_by_index(deps.storage, &owner, index)
}

pub fn query_token_uri(deps: Deps, token_id: u64) -> StdResult<String> {
    let supply = SUPPLY.load(deps.storage)?;
    if !supply.is_issued(token_id) {
        return Err(StdError::generic_err("URI query for nonexistent token"));
    }
    Ok(REVEAL.load(deps.storage)?.token_uri(token_id))
}

fn query_owner(deps: Deps) -> StdResult<String> {
    OWNER
        .get(deps)?
        .map(|owner| owner.to_string())
        .ok_or_else(|| StdError::not_found("owner"))
}

fn query_owner_of(deps: Deps, env: Env, token_id: u64) -> StdResult<OwnerOfResponse> {
    Cw721Ledger::default()
        .0
        .owner_of(deps, env, token_id.to_string(), false)
}

fn query_nft_info(deps: Deps, token_id: u64) -> StdResult<NftInfoResponse<Empty>> {
    Ok(NftInfoResponse {
        token_uri: Some(query_token_uri(deps, token_id)?),
        extension: Empty {},
    })
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let info = query_contract_info(deps)?;
    let params = MINT_PARAMS.load(deps.storage)?;
    let supply = SUPPLY.load(deps.storage)?;
    let reveal = REVEAL.load(deps.storage)?;

    Ok(ConfigResponse {
        owner: query_owner(deps)?,
        name: info.name,
        symbol: info.symbol,
        sale_state: SALE_STATE.load(deps.storage)?,
        unit_price: params.unit_price,
        max_mint_amount: params.max_per_call,
        max_supply: supply.max_supply,
        total_supply: supply.total_issued,
        revealed: reveal.revealed,
        base_uri: reveal.base_uri,
        provenance: PROVENANCE.may_load(deps.storage)?,
    })
}
