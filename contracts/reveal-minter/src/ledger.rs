use cosmwasm_std::{Addr, DepsMut, Empty, Env, MessageInfo, Order, StdError, StdResult, Storage};
use cw721::ContractInfoResponse;
use cw721_base::state::TokenInfo;
use cw721_base::ContractError as Cw721ContractError;
use sg_std::{Response, StargazeMsgWrapper};

pub type Cw721BaseContract<'a> =
    cw721_base::Cw721Contract<'a, Empty, StargazeMsgWrapper, Empty, Empty>;

/// Ownership bookkeeping the minter relies on but does not implement itself.
pub trait TokenLedger {
    /// Record `recipient` as the owner of a fresh token id
    fn issue(
        &self,
        storage: &mut dyn Storage,
        token_id: u64,
        recipient: &Addr,
    ) -> Result<(), Cw721ContractError>;

    fn owner_of(&self, storage: &dyn Storage, token_id: u64) -> StdResult<Addr>;

    fn balance_of(&self, storage: &dyn Storage, owner: &Addr) -> StdResult<u64>;

    /// Token ids held by `owner`, ascending by numeric id
    fn tokens_of(&self, storage: &dyn Storage, owner: &Addr) -> StdResult<Vec<u64>>;

    fn token_of_owner_by_index(
        &self,
        storage: &dyn Storage,
        owner: &Addr,
        index: u64,
    ) -> StdResult<u64> {
        self.tokens_of(storage, owner)?
            .get(index as usize)
            .copied()
            .ok_or_else(|| StdError::generic_err("owner index out of bounds"))
    }

    fn num_tokens(&self, storage: &dyn Storage) -> StdResult<u64>;
}

/// Token ledger backed by cw721-base storage, so transfers and approvals
/// handled by cw721-base see the same records.
pub struct Cw721Ledger(pub Cw721BaseContract<'static>);

impl Default for Cw721Ledger {
    fn default() -> Self {
        Cw721Ledger(Cw721BaseContract::default())
    }
}

impl Cw721Ledger {
    pub fn save_contract_info(
        &self,
        storage: &mut dyn Storage,
        name: String,
        symbol: String,
    ) -> StdResult<()> {
        self.0
            .contract_info
            .save(storage, &ContractInfoResponse { name, symbol })
    }

    pub fn load_contract_info(&self, storage: &dyn Storage) -> StdResult<ContractInfoResponse> {
        self.0.contract_info.load(storage)
    }

    /// Transfers and approvals run through cw721-base unchanged
    pub fn execute(
        &self,
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: cw721_base::ExecuteMsg<Empty, Empty>,
    ) -> Result<Response, Cw721ContractError> {
        self.0.execute(deps, env, info, msg)
    }
}

impl TokenLedger for Cw721Ledger {
    fn issue(
        &self,
        storage: &mut dyn Storage,
        token_id: u64,
        recipient: &Addr,
    ) -> Result<(), Cw721ContractError> {
        let token = TokenInfo {
            owner: recipient.clone(),
            approvals: vec![],
            // resolved at query time from the reveal state
            token_uri: None,
            extension: Empty {},
        };
        self.0
            .tokens
            .update(storage, &token_id.to_string(), |old| match old {
                Some(_) => Err(Cw721ContractError::Claimed {}),
                None => Ok(token),
            })?;
        self.0.increment_tokens(storage)?;

        Ok(())
    }

    fn owner_of(&self, storage: &dyn Storage, token_id: u64) -> StdResult<Addr> {
        let token = self.0.tokens.load(storage, &token_id.to_string())?;
        Ok(token.owner)
    }

    fn balance_of(&self, storage: &dyn Storage, owner: &Addr) -> StdResult<u64> {
        let count = self
            .0
            .tokens
            .idx
            .owner
            .prefix(owner.clone())
            .keys(storage, None, None, Order::Ascending)
            .count();
        Ok(count as u64)
    }

    fn tokens_of(&self, storage: &dyn Storage, owner: &Addr) -> StdResult<Vec<u64>> {
        // keys are decimal strings, so storage order is lexicographic
        let mut ids = self
            .0
            .tokens
            .idx
            .owner
            .prefix(owner.clone())
            .keys(storage, None, None, Order::Ascending)
            .map(|key| {
                key.and_then(|id| {
                    id.parse::<u64>()
                        .map_err(|_| StdError::parse_err("u64", format!("token id {}", id)))
                })
            })
            .collect::<StdResult<Vec<_>>>()?;
        ids.sort_unstable();
        Ok(ids)
    }

    fn num_tokens(&self, storage: &dyn Storage) -> StdResult<u64> {
        self.0.token_count(storage)
    }
}
