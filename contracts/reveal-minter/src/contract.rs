#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    Addr, BankMsg, DepsMut, Empty, Env, Event, MessageInfo, StdError, Storage, Uint128,
};
use cw2::set_contract_version;
use cw721_base::ExecuteMsg as Cw721ExecuteMsg;
use cw_utils::{maybe_addr, may_pay, nonpayable};
use semver::Version;
use sg_reveal::{RevealState, SaleState};
use sg_std::{Response, NATIVE_DENOM};

use crate::error::ContractError;
use crate::guards::{
    assert_presale, assert_public, check_allowance, check_payment, check_per_call, is_owner,
    only_owner,
};
use crate::ledger::{Cw721Ledger, TokenLedger};
use crate::msg::{ExecuteMsg, InstantiateMsg};
use crate::state::{
    MintParams, Supply, ALLOW_LIST, MINT_PARAMS, OWNER, PROVENANCE, REVEAL, SALE_STATE, SUPPLY,
};

// version info for migration info
pub const CONTRACT_NAME: &str = "crates.io:reveal-minter";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sender recorded on the transfer event of a freshly minted token
pub const NONE_ADDRESS: &str = "none";

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    OWNER.set(deps.branch(), Some(info.sender.clone()))?;

    Cw721Ledger::default().save_contract_info(deps.storage, msg.name, msg.symbol)?;

    MINT_PARAMS.save(
        deps.storage,
        &MintParams {
            unit_price: msg.unit_price,
            max_per_call: msg.max_mint_amount,
        },
    )?;
    SUPPLY.save(
        deps.storage,
        &Supply {
            total_issued: 0,
            max_supply: msg.max_supply,
        },
    )?;
    SALE_STATE.save(deps.storage, &SaleState::Paused)?;
    REVEAL.save(deps.storage, &RevealState::new(msg.base_uri))?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("max_supply", msg.max_supply.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::MintPresale { amount } => execute_mint_presale(deps, info, amount),
        ExecuteMsg::Mint { amount } => execute_mint(deps, info, amount),
        ExecuteMsg::Reserve { amount, recipient } => {
            execute_reserve(deps, info, amount, recipient)
        }
        ExecuteMsg::SetSaleState { sale_state } => {
            execute_set_sale_state(deps, info, sale_state)
        }
        ExecuteMsg::SetAllowList { addresses, quota } => {
            execute_set_allow_list(deps, info, addresses, quota)
        }
        ExecuteMsg::SetBaseUri { base_uri } => execute_set_base_uri(deps, info, base_uri),
        ExecuteMsg::SetMaxMintAmount { amount } => {
            execute_set_max_mint_amount(deps, info, amount)
        }
        ExecuteMsg::SetCost { unit_price } => execute_set_cost(deps, info, unit_price),
        ExecuteMsg::SetProvenance { provenance } => {
            execute_set_provenance(deps, info, provenance)
        }
        ExecuteMsg::Reveal {} => execute_reveal(deps, info),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
        ExecuteMsg::TransferNft {
            recipient,
            token_id,
        } => execute_cw721(
            deps,
            env,
            info,
            Cw721ExecuteMsg::TransferNft {
                recipient,
                token_id,
            },
        ),
        ExecuteMsg::SendNft {
            contract,
            token_id,
            msg,
        } => execute_cw721(
            deps,
            env,
            info,
            Cw721ExecuteMsg::SendNft {
                contract,
                token_id,
                msg,
            },
        ),
        ExecuteMsg::Approve {
            spender,
            token_id,
            expires,
        } => execute_cw721(
            deps,
            env,
            info,
            Cw721ExecuteMsg::Approve {
                spender,
                token_id,
                expires,
            },
        ),
        ExecuteMsg::Revoke { spender, token_id } => execute_cw721(
            deps,
            env,
            info,
            Cw721ExecuteMsg::Revoke { spender, token_id },
        ),
        ExecuteMsg::ApproveAll { operator, expires } => execute_cw721(
            deps,
            env,
            info,
            Cw721ExecuteMsg::ApproveAll { operator, expires },
        ),
        ExecuteMsg::RevokeAll { operator } => execute_cw721(
            deps,
            env,
            info,
            Cw721ExecuteMsg::RevokeAll { operator },
        ),
    }
}

/// Presale mint. Payment is not required, the allow list allocation is the gate.
pub fn execute_mint_presale(
    deps: DepsMut,
    info: MessageInfo,
    amount: u32,
) -> Result<Response, ContractError> {
    assert_presale(SALE_STATE.load(deps.storage)?)?;
    may_pay(&info, NATIVE_DENOM)?;

    let remaining = ALLOW_LIST
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    let remaining = check_allowance(remaining, amount)?;

    let params = MINT_PARAMS.load(deps.storage)?;
    check_per_call(&params, amount)?;

    let mut supply = SUPPLY.load(deps.storage)?;
    let token_ids = supply.issue(amount)?;

    ALLOW_LIST.save(deps.storage, &info.sender, &remaining)?;
    let events = issue_tokens(deps.storage, &supply, token_ids, &info.sender)?;

    Ok(Response::new()
        .add_attribute("action", "mint_presale")
        .add_attribute("sender", info.sender)
        .add_attribute("amount", amount.to_string())
        .add_attribute("remaining_allowance", remaining.to_string())
        .add_events(events))
}

/// Public mint. The owner mints for free, everyone else pays `unit_price` per token.
pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    amount: u32,
) -> Result<Response, ContractError> {
    assert_public(SALE_STATE.load(deps.storage)?)?;

    let params = MINT_PARAMS.load(deps.storage)?;
    check_per_call(&params, amount)?;

    let mut supply = SUPPLY.load(deps.storage)?;
    let token_ids = supply.issue(amount)?;

    let payment = may_pay(&info, NATIVE_DENOM)?;
    if !is_owner(deps.as_ref(), &info.sender)? {
        check_payment(&params, amount, payment)?;
    }

    let events = issue_tokens(deps.storage, &supply, token_ids, &info.sender)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("sender", info.sender)
        .add_attribute("amount", amount.to_string())
        .add_attribute("payment", payment.to_string())
        .add_events(events))
}

/// Owner mint ignoring sale state and price. Still bound by supply and the per call cap.
pub fn execute_reserve(
    deps: DepsMut,
    info: MessageInfo,
    amount: u32,
    recipient: Option<String>,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info.sender)?;
    nonpayable(&info)?;
    let recipient = maybe_addr(deps.api, recipient)?;

    let params = MINT_PARAMS.load(deps.storage)?;
    check_per_call(&params, amount)?;

    let mut supply = SUPPLY.load(deps.storage)?;
    let token_ids = supply.issue(amount)?;

    let recipient = recipient.unwrap_or_else(|| info.sender.clone());
    let events = issue_tokens(deps.storage, &supply, token_ids, &recipient)?;

    Ok(Response::new()
        .add_attribute("action", "reserve")
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string())
        .add_events(events))
}

/// Commits the new supply, then records every id with the ledger.
/// Callers must have run every check before this.
fn issue_tokens(
    storage: &mut dyn Storage,
    supply: &Supply,
    token_ids: std::ops::Range<u64>,
    recipient: &Addr,
) -> Result<Vec<Event>, ContractError> {
    SUPPLY.save(storage, supply)?;

    let ledger = Cw721Ledger::default();
    let mut events = Vec::with_capacity((token_ids.end - token_ids.start) as usize);
    for token_id in token_ids {
        ledger.issue(storage, token_id, recipient)?;
        events.push(
            Event::new("transfer")
                .add_attribute("from", NONE_ADDRESS)
                .add_attribute("to", recipient.to_string())
                .add_attribute("token_id", token_id.to_string()),
        );
    }

    Ok(events)
}

pub fn execute_set_sale_state(
    deps: DepsMut,
    info: MessageInfo,
    sale_state: SaleState,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info.sender)?;

    SALE_STATE.save(deps.storage, &sale_state)?;

    let event = Event::new("set_sale_state")
        .add_attribute("sale_state", sale_state.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_allow_list(
    deps: DepsMut,
    info: MessageInfo,
    mut addresses: Vec<String>,
    quota: u32,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info.sender)?;

    // dedupe
    addresses.sort_unstable();
    addresses.dedup();

    // validate everything before the first write
    let addrs = addresses
        .iter()
        .map(|address| deps.api.addr_validate(address))
        .collect::<Result<Vec<_>, StdError>>()?;

    for addr in addrs.iter() {
        ALLOW_LIST.save(deps.storage, addr, &quota)?;
    }

    let event = Event::new("set_allow_list")
        .add_attribute("count", addrs.len().to_string())
        .add_attribute("quota", quota.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_base_uri(
    deps: DepsMut,
    info: MessageInfo,
    base_uri: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info.sender)?;

    let mut reveal = REVEAL.load(deps.storage)?;
    reveal.base_uri = base_uri;
    REVEAL.save(deps.storage, &reveal)?;

    let event = Event::new("set_base_uri")
        .add_attribute("base_uri", reveal.base_uri)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_max_mint_amount(
    deps: DepsMut,
    info: MessageInfo,
    amount: u32,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info.sender)?;

    let mut params = MINT_PARAMS.load(deps.storage)?;
    params.max_per_call = amount;
    MINT_PARAMS.save(deps.storage, &params)?;

    let event = Event::new("set_max_mint_amount")
        .add_attribute("max_mint_amount", amount.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_cost(
    deps: DepsMut,
    info: MessageInfo,
    unit_price: Uint128,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info.sender)?;

    let mut params = MINT_PARAMS.load(deps.storage)?;
    params.unit_price = unit_price;
    MINT_PARAMS.save(deps.storage, &params)?;

    let event = Event::new("set_cost")
        .add_attribute("unit_price", unit_price.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_provenance(
    deps: DepsMut,
    info: MessageInfo,
    provenance: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info.sender)?;

    PROVENANCE.save(deps.storage, &provenance)?;

    let event = Event::new("set_provenance")
        .add_attribute("provenance", provenance)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

/// Revealing twice is a no-op
pub fn execute_reveal(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info.sender)?;

    let mut reveal = REVEAL.load(deps.storage)?;
    if reveal.revealed {
        return Ok(Response::new().add_attribute("action", "reveal"));
    }
    reveal.reveal();
    REVEAL.save(deps.storage, &reveal)?;

    let event = Event::new("reveal")
        .add_attribute("base_uri", reveal.base_uri)
        .add_attribute("sender", info.sender);
    Ok(Response::new()
        .add_attribute("action", "reveal")
        .add_event(event))
}

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info.sender)?;
    nonpayable(&info)?;

    let balance = deps
        .querier
        .query_balance(env.contract.address.to_string(), NATIVE_DENOM)?;

    let event = Event::new("withdraw")
        .add_attribute("amount", balance.amount.to_string())
        .add_attribute("recipient", info.sender.to_string());
    let res = Response::new()
        .add_attribute("action", "withdraw")
        .add_event(event);

    if balance.amount.is_zero() {
        return Ok(res);
    }

    Ok(res.add_message(BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: vec![balance],
    }))
}

fn execute_cw721(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: Cw721ExecuteMsg<Empty, Empty>,
) -> Result<Response, ContractError> {
    Ok(Cw721Ledger::default().execute(deps, env, info, msg)?)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: Empty) -> Result<Response, ContractError> {
    let current_version = cw2::get_contract_version(deps.storage)?;
    if current_version.contract != CONTRACT_NAME {
        return Err(StdError::generic_err("Cannot upgrade to a different contract").into());
    }
    let version: Version = current_version
        .version
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;
    let new_version: Version = CONTRACT_VERSION
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;

    if version > new_version {
        return Err(
            StdError::generic_err("Cannot upgrade to a previous contract version").into(),
        );
    }
    // if same version return
    if version == new_version {
        return Ok(Response::new());
    }

    // set new contract version
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let event = Event::new("migrate")
        .add_attribute("from_version", version.to_string())
        .add_attribute("to_version", CONTRACT_VERSION);
    Ok(Response::new().add_event(event))
}
