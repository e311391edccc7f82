use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Empty, Uint128};
use cw721::{ContractInfoResponse, Expiration, NftInfoResponse, OwnerOfResponse};
use sg_reveal::{ConfigResponse, SaleState};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    /// Placeholder uri served until reveal
    pub base_uri: String,
    pub max_supply: u64,
    pub max_mint_amount: u32,
    /// Price per token in the native denom
    pub unit_price: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint during presale against the sender's allow list allocation
    MintPresale { amount: u32 },
    /// Mint during the public sale, funds must cover `amount` tokens
    Mint { amount: u32 },
    /// Owner mint that skips the sale state and payment checks
    Reserve {
        amount: u32,
        recipient: Option<String>,
    },
    SetSaleState { sale_state: SaleState },
    /// Overwrites the remaining allocation of every address with `quota`
    SetAllowList {
        addresses: Vec<String>,
        quota: u32,
    },
    SetBaseUri { base_uri: String },
    SetMaxMintAmount { amount: u32 },
    SetCost { unit_price: Uint128 },
    SetProvenance { provenance: String },
    /// One way, switches token uris from the placeholder to `base_uri + id`
    Reveal {},
    /// Send the whole contract balance to the owner
    Withdraw {},
    /// Transfer is a base message to move a token to another account without triggering actions
    TransferNft { recipient: String, token_id: String },
    /// Send is a base message to transfer a token to a contract and trigger an action
    /// on the receiving contract.
    SendNft {
        contract: String,
        token_id: String,
        msg: Binary,
    },
    /// Allows operator to transfer / send the token from the owner's account.
    /// If expiration is set, then this allowance has a time/height limit
    Approve {
        spender: String,
        token_id: String,
        expires: Option<Expiration>,
    },
    /// Remove previously granted Approval
    Revoke { spender: String, token_id: String },
    /// Allows operator to transfer / send any token from the owner's account.
    /// If expiration is set, then this allowance has a time/height limit
    ApproveAll {
        operator: String,
        expires: Option<Expiration>,
    },
    /// Remove previously granted ApproveAll permission
    RevokeAll { operator: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(String)]
    Name {},
    #[returns(String)]
    Symbol {},
    /// Price per token
    #[returns(Uint128)]
    Cost {},
    #[returns(u64)]
    MaxSupply {},
    #[returns(u32)]
    MaxMintAmount {},
    #[returns(SaleState)]
    SaleState {},
    #[returns(bool)]
    IsRevealed {},
    #[returns(String)]
    BaseUri {},
    #[returns(Option<String>)]
    Provenance {},
    /// Remaining presale allocation, 0 if never listed
    #[returns(u32)]
    AllowedMintCount { address: String },
    #[returns(u64)]
    BalanceOf { owner: String },
    #[returns(u64)]
    TokenOfOwnerByIndex { owner: String, index: u64 },
    #[returns(String)]
    TokenUri { token_id: u64 },
    #[returns(String)]
    Owner {},
    #[returns(u64)]
    TotalSupply {},
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },
    #[returns(NftInfoResponse<Empty>)]
    NftInfo { token_id: u64 },
    #[returns(ContractInfoResponse)]
    ContractInfo {},
    #[returns(ConfigResponse)]
    Config {},
}
