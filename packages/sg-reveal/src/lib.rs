use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

/// Controls which mint entry point is open
#[cw_serde]
#[derive(Copy, Eq, Default)]
pub enum SaleState {
    #[default]
    Paused,
    /// Only allow-listed addresses, up to their remaining allocation
    Presale,
    Public,
}

impl std::fmt::Display for SaleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaleState::Paused => write!(f, "paused"),
            SaleState::Presale => write!(f, "presale"),
            SaleState::Public => write!(f, "public"),
        }
    }
}

/// Decides what metadata reference an issued token resolves to.
/// `revealed` only ever goes from false to true.
#[cw_serde]
pub struct RevealState {
    pub revealed: bool,
    /// Placeholder uri before reveal, prefix of every token uri after
    pub base_uri: String,
}

impl RevealState {
    pub fn new(base_uri: impl Into<String>) -> Self {
        RevealState {
            revealed: false,
            base_uri: base_uri.into(),
        }
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn token_uri(&self, token_id: u64) -> String {
        if self.revealed {
            format!("{}{}", self.base_uri, token_id)
        } else {
            self.base_uri.clone()
        }
    }
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: String,
    pub name: String,
    pub symbol: String,
    pub sale_state: SaleState,
    pub unit_price: Uint128,
    pub max_mint_amount: u32,
    pub max_supply: u64,
    pub total_supply: u64,
    pub revealed: bool,
    pub base_uri: String,
    pub provenance: Option<String>,
}
