use crate::contract::{execute, instantiate, migrate, NONE_ADDRESS};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query::query;
use crate::RevealMinterContract;
use anyhow::Result as AnyResult;
use cosmwasm_std::{coins, Addr, Coin, Uint128};
use cw_multi_test::{AppResponse, BankSudo, Contract, ContractWrapper, Executor, SudoMsg as CwSudoMsg};
use sg_multi_test::StargazeApp;
use sg_reveal::SaleState;
use sg_std::{StargazeMsgWrapper, NATIVE_DENOM};

pub fn contract_minter() -> Box<dyn Contract<StargazeMsgWrapper>> {
    let contract = ContractWrapper::new(execute, instantiate, query).with_migrate(migrate);
    Box::new(contract)
}

const OWNER: &str = "owner";
const USER: &str = "user";
const USER2: &str = "user2";
const USER3: &str = "user3";

const BASE_URI: &str = "ipfs://initial_base_uri/";
const UNIT_PRICE: u128 = 50_000_000;

fn custom_mock_app() -> StargazeApp {
    StargazeApp::default()
}

fn instantiate_minter(app: &mut StargazeApp) -> RevealMinterContract {
    let minter_id = app.store_code(contract_minter());

    let msg = InstantiateMsg {
        name: "NFT".to_string(),
        symbol: "NFT".to_string(),
        base_uri: BASE_URI.to_string(),
        max_supply: 100,
        max_mint_amount: 20,
        unit_price: Uint128::from(UNIT_PRICE),
    };
    let minter = app
        .instantiate_contract(
            minter_id,
            Addr::unchecked(OWNER),
            &msg,
            &[],
            "Reveal-Minter",
            Some(OWNER.to_string()),
        )
        .unwrap();

    RevealMinterContract(minter)
}

fn fund(app: &mut StargazeApp, address: &str, amount: u128) {
    app.sudo(CwSudoMsg::Bank({
        BankSudo::Mint {
            to_address: address.to_string(),
            amount: coins(amount, NATIVE_DENOM),
        }
    }))
    .map_err(|err| println!("{:?}", err))
    .ok();
}

fn balance(app: &StargazeApp, address: &str) -> Uint128 {
    app.wrap()
        .query_balance(address.to_string(), NATIVE_DENOM)
        .unwrap()
        .amount
}

fn exec(
    app: &mut StargazeApp,
    minter: &RevealMinterContract,
    sender: &str,
    msg: &ExecuteMsg,
    funds: &[Coin],
) -> AnyResult<AppResponse> {
    app.execute_contract(Addr::unchecked(sender), minter.addr(), msg, funds)
}

fn set_sale_state(app: &mut StargazeApp, minter: &RevealMinterContract, sale_state: SaleState) {
    let res = exec(
        app,
        minter,
        OWNER,
        &ExecuteMsg::SetSaleState { sale_state },
        &[],
    );
    assert!(res.is_ok());
}

fn set_allow_list(app: &mut StargazeApp, minter: &RevealMinterContract, addrs: &[&str], quota: u32) {
    let msg = ExecuteMsg::SetAllowList {
        addresses: addrs.iter().map(|a| a.to_string()).collect(),
        quota,
    };
    let res = exec(app, minter, OWNER, &msg, &[]);
    assert!(res.is_ok());
}

fn paid_mint(
    app: &mut StargazeApp,
    minter: &RevealMinterContract,
    sender: &str,
    amount: u32,
) -> AnyResult<AppResponse> {
    let total = UNIT_PRICE * amount as u128;
    fund(app, sender, total);
    let msg = minter.mint(amount, Uint128::from(total / amount as u128))?;
    app.execute(Addr::unchecked(sender), msg)
}

/// (from, to, token_id) of every transfer event, in emission order
fn transfers(res: &AppResponse) -> Vec<(String, String, String)> {
    res.events
        .iter()
        .filter(|e| e.ty == "wasm-transfer")
        .map(|e| {
            let get = |key: &str| {
                e.attributes
                    .iter()
                    .find(|a| a.key == key)
                    .map(|a| a.value.clone())
                    .unwrap()
            };
            (get("from"), get("to"), get("token_id"))
        })
        .collect()
}

fn minted(to: &str, ids: &[u64]) -> Vec<(String, String, String)> {
    ids.iter()
        .map(|id| (NONE_ADDRESS.to_string(), to.to_string(), id.to_string()))
        .collect()
}

mod execute {
    use super::*;

    #[test]
    fn init() {
        let mut app = custom_mock_app();
        let minter = instantiate_minter(&mut app);

        let config = minter.config(&app.wrap()).unwrap();
        assert_eq!(config.owner, OWNER);
        assert_eq!(config.name, "NFT");
        assert_eq!(config.symbol, "NFT");
        assert_eq!(config.unit_price, Uint128::from(UNIT_PRICE));
        assert_eq!(config.max_supply, 100);
        assert_eq!(config.max_mint_amount, 20);
        assert_eq!(config.sale_state, SaleState::Paused);
        assert!(!config.revealed);
        assert_eq!(config.base_uri, BASE_URI);
    }

    #[test]
    fn paused() {
        let mut app = custom_mock_app();
        let minter = instantiate_minter(&mut app);
        set_allow_list(&mut app, &minter, &[USER], 1);

        let err = exec(&mut app, &minter, USER, &ExecuteMsg::MintPresale { amount: 1 }, &[])
            .unwrap_err();
        assert_eq!(err.root_cause().to_string(), "Sale is not presale");

        let err = paid_mint(&mut app, &minter, USER, 1).unwrap_err();
        assert_eq!(err.root_cause().to_string(), "Sale is not public");
    }

    #[test]
    fn presale() {
        let mut app = custom_mock_app();
        let minter = instantiate_minter(&mut app);
        set_sale_state(&mut app, &minter, SaleState::Presale);
        set_allow_list(&mut app, &minter, &[USER, USER2], 3);

        assert_eq!(minter.allowed_mint_count(&app.wrap(), USER).unwrap(), 3);
        assert_eq!(minter.allowed_mint_count(&app.wrap(), USER3).unwrap(), 0);

        let res = exec(&mut app, &minter, USER, &ExecuteMsg::MintPresale { amount: 2 }, &[])
            .unwrap();
        assert_eq!(transfers(&res), minted(USER, &[1, 2]));

        let res = exec(&mut app, &minter, USER2, &ExecuteMsg::MintPresale { amount: 1 }, &[])
            .unwrap();
        assert_eq!(transfers(&res), minted(USER2, &[3]));

        let err = exec(&mut app, &minter, USER, &ExecuteMsg::MintPresale { amount: 2 }, &[])
            .unwrap_err();
        assert_eq!(err.root_cause().to_string(), "Exceeds allowed mint amount");
        assert_eq!(minter.allowed_mint_count(&app.wrap(), USER).unwrap(), 1);

        let err = exec(&mut app, &minter, USER3, &ExecuteMsg::MintPresale { amount: 1 }, &[])
            .unwrap_err();
        assert_eq!(err.root_cause().to_string(), "Exceeds allowed mint amount");
    }

    #[test]
    fn public_unrevealed() {
        let mut app = custom_mock_app();
        let minter = instantiate_minter(&mut app);
        set_sale_state(&mut app, &minter, SaleState::Public);

        let res = exec(&mut app, &minter, OWNER, &ExecuteMsg::Mint { amount: 2 }, &[]).unwrap();
        assert_eq!(transfers(&res), minted(OWNER, &[1, 2]));

        let res = paid_mint(&mut app, &minter, USER, 2).unwrap();
        assert_eq!(transfers(&res), minted(USER, &[3, 4]));

        for token_id in 1..=4 {
            assert_eq!(minter.token_uri(&app.wrap(), token_id).unwrap(), BASE_URI);
        }
    }

    #[test]
    fn public_revealed() {
        let mut app = custom_mock_app();
        let minter = instantiate_minter(&mut app);
        set_sale_state(&mut app, &minter, SaleState::Public);
        let msg = ExecuteMsg::SetBaseUri {
            base_uri: "ipfs://base_uri/".to_string(),
        };
        exec(&mut app, &minter, OWNER, &msg, &[]).unwrap();
        exec(&mut app, &minter, OWNER, &ExecuteMsg::Reveal {}, &[]).unwrap();

        // underpaying fails and keeps the funds with the sender
        fund(&mut app, USER, 10_000_000);
        let err = exec(
            &mut app,
            &minter,
            USER,
            &ExecuteMsg::Mint { amount: 1 },
            &coins(10_000_000, NATIVE_DENOM),
        )
        .unwrap_err();
        assert_eq!(err.root_cause().to_string(), "Insufficient funds");
        assert_eq!(balance(&app, USER), Uint128::from(10_000_000u128));
        assert_eq!(minter.config(&app.wrap()).unwrap().total_supply, 0);

        let res = paid_mint(&mut app, &minter, USER, 1).unwrap();
        assert_eq!(transfers(&res), minted(USER, &[1]));
        assert_eq!(minter.token_uri(&app.wrap(), 1).unwrap(), "ipfs://base_uri/1");
    }

    #[test]
    fn max_supply() {
        let mut app = custom_mock_app();
        let minter = instantiate_minter(&mut app);
        set_sale_state(&mut app, &minter, SaleState::Public);

        for amount in [20, 20, 20, 20, 19] {
            let res = exec(&mut app, &minter, OWNER, &ExecuteMsg::Mint { amount }, &[]);
            assert!(res.is_ok());
        }

        let err = paid_mint(&mut app, &minter, USER, 2).unwrap_err();
        assert_eq!(err.root_cause().to_string(), "Insufficient supply");

        let res = paid_mint(&mut app, &minter, USER, 1).unwrap();
        assert_eq!(transfers(&res), minted(USER, &[100]));

        let config = minter.config(&app.wrap()).unwrap();
        assert_eq!(config.total_supply, config.max_supply);
    }

    #[test]
    fn token_enumeration() {
        let mut app = custom_mock_app();
        let minter = instantiate_minter(&mut app);
        exec(&mut app, &minter, OWNER, &ExecuteMsg::Reveal {}, &[]).unwrap();
        set_sale_state(&mut app, &minter, SaleState::Public);

        exec(&mut app, &minter, OWNER, &ExecuteMsg::Mint { amount: 2 }, &[]).unwrap();
        assert_eq!(minter.tokens_of(&app.wrap(), OWNER).unwrap(), vec![1, 2]);

        paid_mint(&mut app, &minter, USER, 1).unwrap();
        paid_mint(&mut app, &minter, USER, 2).unwrap();
        assert_eq!(minter.tokens_of(&app.wrap(), USER).unwrap(), vec![3, 4, 5]);
    }

    #[test]
    fn reserve() {
        let mut app = custom_mock_app();
        let minter = instantiate_minter(&mut app);

        let msg = ExecuteMsg::Reserve {
            amount: 3,
            recipient: None,
        };
        let err = exec(&mut app, &minter, USER, &msg, &[]).unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            "Ownable: caller is not the owner"
        );

        let res = exec(&mut app, &minter, OWNER, &msg, &[]).unwrap();
        assert_eq!(transfers(&res), minted(OWNER, &[1, 2, 3]));
        assert_eq!(minter.tokens_of(&app.wrap(), OWNER).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn withdraw() {
        let mut app = custom_mock_app();
        let minter = instantiate_minter(&mut app);
        set_sale_state(&mut app, &minter, SaleState::Public);

        // overpaying is accepted, the surplus stays in the treasury
        let paid = 1_200_000_000u128;
        fund(&mut app, USER, paid);
        let res = exec(
            &mut app,
            &minter,
            USER,
            &ExecuteMsg::Mint { amount: 20 },
            &coins(paid, NATIVE_DENOM),
        );
        assert!(res.is_ok());
        assert_eq!(balance(&app, minter.addr().as_str()), Uint128::from(paid));

        let err = exec(&mut app, &minter, USER, &ExecuteMsg::Withdraw {}, &[]).unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            "Ownable: caller is not the owner"
        );

        let res = exec(&mut app, &minter, OWNER, &ExecuteMsg::Withdraw {}, &[]);
        assert!(res.is_ok());
        assert_eq!(balance(&app, OWNER), Uint128::from(paid));
        assert_eq!(balance(&app, minter.addr().as_str()), Uint128::zero());
    }

    #[test]
    fn sale_state_query() {
        let mut app = custom_mock_app();
        let minter = instantiate_minter(&mut app);

        assert_eq!(minter.sale_state(&app.wrap()).unwrap(), SaleState::Paused);
        set_sale_state(&mut app, &minter, SaleState::Presale);
        assert_eq!(minter.sale_state(&app.wrap()).unwrap(), SaleState::Presale);

        let res = exec(
            &mut app,
            &minter,
            USER,
            &ExecuteMsg::SetSaleState {
                sale_state: SaleState::Public,
            },
            &[],
        );
        assert!(res.is_err());
        assert_eq!(minter.sale_state(&app.wrap()).unwrap(), SaleState::Presale);

        let total: u64 = app
            .wrap()
            .query_wasm_smart(minter.addr(), &QueryMsg::TotalSupply {})
            .unwrap();
        assert_eq!(total, 0);
    }
}
