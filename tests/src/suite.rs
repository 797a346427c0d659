use anyhow::Result as AnyResult;
use cosmwasm_std::{Addr, BlockInfo, StdResult, Timestamp, Uint128};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse};
use cw20_base::msg::InstantiateMsg as Cw20InstantiateMsg;
use cw_multi_test::{App, AppBuilder, AppResponse, ContractWrapper, Executor};

use faucet_base::faucet::{
    msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, UnlockTimeResponse},
    state::{DEFAULT_WAIT_TIME, DEFAULT_WITHDRAWAL_AMOUNT},
    types::Config,
};
use faucet_client::{
    error::{ClientError, ClientResult},
    host::{FaucetHost, TxHandle},
    testing::ManualClock,
};

pub const ADMIN: &str = "admin";
pub const ALICE: &str = "alice";
pub const BOB: &str = "bob";
pub const ATTACKER: &str = "attacker";

pub const GENESIS_TIME: u64 = 1_700_000_000;
pub const CHAIN_ID: &str = "cw-multitest-1";

pub const WITHDRAWAL_AMOUNT: u128 = DEFAULT_WITHDRAWAL_AMOUNT;
pub const WAIT_TIME: u64 = DEFAULT_WAIT_TIME;
pub const FAUCET_SUPPLY: u128 = 1_000_000_000;

fn store_token(app: &mut App) -> u64 {
    let contract = Box::new(ContractWrapper::new_with_empty(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    ));

    app.store_code(contract)
}

fn store_faucet(app: &mut App) -> u64 {
    let contract = Box::new(
        ContractWrapper::new_with_empty(
            faucet_mocks::contract::execute,
            faucet_mocks::contract::instantiate,
            faucet_mocks::contract::query,
        )
        .with_migrate(faucet_mocks::contract::migrate),
    );

    app.store_code(contract)
}

#[derive(Debug)]
pub struct SuiteBuilder {
    pub withdrawal_amount: u128,
    pub wait_time: u64,
    pub faucet_supply: u128,
}

impl SuiteBuilder {
    pub fn new() -> Self {
        Self {
            withdrawal_amount: WITHDRAWAL_AMOUNT,
            wait_time: WAIT_TIME,
            faucet_supply: FAUCET_SUPPLY,
        }
    }

    pub fn with_withdrawal_amount(mut self, withdrawal_amount: u128) -> Self {
        self.withdrawal_amount = withdrawal_amount;
        self
    }

    pub fn with_wait_time(mut self, wait_time: u64) -> Self {
        self.wait_time = wait_time;
        self
    }

    pub fn with_faucet_supply(mut self, faucet_supply: u128) -> Self {
        self.faucet_supply = faucet_supply;
        self
    }

    #[track_caller]
    pub fn build(self) -> Suite {
        let admin = Addr::unchecked(ADMIN);

        let mut app = AppBuilder::new()
            .with_block(BlockInfo {
                height: 1,
                time: Timestamp::from_seconds(GENESIS_TIME),
                chain_id: CHAIN_ID.to_string(),
            })
            .build(|_, _, _| {});

        let token_code_id = store_token(&mut app);
        let faucet_code_id = store_faucet(&mut app);

        let token = app
            .instantiate_contract(
                token_code_id,
                admin.clone(),
                &Cw20InstantiateMsg {
                    name: "Test Token".to_owned(),
                    symbol: "TEST".to_owned(),
                    decimals: 6,
                    initial_balances: vec![],
                    mint: Some(MinterResponse {
                        minter: ADMIN.to_owned(),
                        cap: None,
                    }),
                    marketing: None,
                },
                &[],
                "test token",
                None,
            )
            .unwrap();

        let faucet = app
            .instantiate_contract(
                faucet_code_id,
                admin.clone(),
                &InstantiateMsg {
                    token: token.to_string(),
                    withdrawal_amount: Uint128::from(self.withdrawal_amount),
                    wait_time: self.wait_time,
                },
                &[],
                "test token faucet",
                Some(ADMIN.to_owned()),
            )
            .unwrap();

        if self.faucet_supply != 0 {
            app.execute_contract(
                admin.clone(),
                token.clone(),
                &Cw20ExecuteMsg::Mint {
                    recipient: faucet.to_string(),
                    amount: Uint128::from(self.faucet_supply),
                },
                &[],
            )
            .unwrap();
        }

        let clock = ManualClock::new(GENESIS_TIME);

        Suite {
            app,
            admin,
            token,
            faucet,
            faucet_code_id,
            clock,
            tx_counter: 0,
        }
    }
}

pub struct Suite {
    pub app: App,
    pub admin: Addr,
    pub token: Addr,
    pub faucet: Addr,
    faucet_code_id: u64,
    pub clock: ManualClock,
    tx_counter: u64,
}

impl Suite {
    // update block's time and the client clock to simulate passage of time
    pub fn wait(&mut self, seconds: u64) {
        let mut block = self.app.block_info();
        block.time = block.time.plus_seconds(seconds);
        self.app.set_block(block);

        self.clock.advance(seconds);
    }

    // get block's time
    pub fn get_time(&self) -> u64 {
        self.app.block_info().time.seconds()
    }

    pub fn claim(&mut self, sender: &str) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.faucet.clone(),
            &ExecuteMsg::Mint {},
            &[],
        )
    }

    pub fn set_withdrawal_amount(&mut self, sender: &str, amount: u128) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.faucet.clone(),
            &ExecuteMsg::SetWithdrawalAmount {
                amount: Uint128::from(amount),
            },
            &[],
        )
    }

    pub fn set_wait_time(&mut self, sender: &str, wait_time: u64) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.faucet.clone(),
            &ExecuteMsg::SetWaitTime { wait_time },
            &[],
        )
    }

    pub fn update_owner(&mut self, sender: &str, owner: &str) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.faucet.clone(),
            &ExecuteMsg::UpdateOwner {
                owner: Addr::unchecked(owner),
            },
            &[],
        )
    }

    pub fn withdraw_all_balance(&mut self, sender: &str, recipient: &str) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.faucet.clone(),
            &ExecuteMsg::WithdrawAllBalance {
                recipient: recipient.to_owned(),
            },
            &[],
        )
    }

    pub fn migrate(&mut self, sender: &str, version: &str) -> AnyResult<AppResponse> {
        self.app.migrate_contract(
            Addr::unchecked(sender),
            self.faucet.clone(),
            &MigrateMsg {
                version: version.to_owned(),
            },
            self.faucet_code_id,
        )
    }

    pub fn query_faucet_config(&self) -> StdResult<Config> {
        self.app
            .wrap()
            .query_wasm_smart(self.faucet.clone(), &QueryMsg::Config {})
    }

    pub fn query_unlock_time(&self, user: &str) -> StdResult<u64> {
        let UnlockTimeResponse { unlock_time } = self.app.wrap().query_wasm_smart(
            self.faucet.clone(),
            &QueryMsg::UnlockTime {
                user: user.to_owned(),
            },
        )?;

        Ok(unlock_time)
    }

    pub fn query_owner(&self) -> StdResult<Addr> {
        self.app
            .wrap()
            .query_wasm_smart(self.faucet.clone(), &QueryMsg::Owner {})
    }

    pub fn query_token_balance(&self, address: &str) -> StdResult<u128> {
        let BalanceResponse { balance } = self.app.wrap().query_wasm_smart(
            self.token.clone(),
            &Cw20QueryMsg::Balance {
                address: address.to_owned(),
            },
        )?;

        Ok(balance.u128())
    }
}

fn read_err(err: impl ToString) -> ClientError {
    ClientError::Read {
        reason: err.to_string(),
    }
}

/// The client under test talks to the mock faucet through the same query
/// and execute calls the suite helpers use.
impl FaucetHost for Suite {
    fn query_withdrawal_amount(&self) -> ClientResult<Uint128> {
        self.app
            .wrap()
            .query_wasm_smart(self.faucet.clone(), &QueryMsg::WithdrawalAmount {})
            .map_err(read_err)
    }

    fn query_wait_time(&self) -> ClientResult<u64> {
        self.app
            .wrap()
            .query_wasm_smart(self.faucet.clone(), &QueryMsg::WaitTime {})
            .map_err(read_err)
    }

    fn query_unlock_time(&self, user: &Addr) -> ClientResult<u64> {
        let UnlockTimeResponse { unlock_time } = self
            .app
            .wrap()
            .query_wasm_smart(
                self.faucet.clone(),
                &QueryMsg::UnlockTime {
                    user: user.to_string(),
                },
            )
            .map_err(read_err)?;

        Ok(unlock_time)
    }

    fn query_faucet_balance(&self) -> ClientResult<Uint128> {
        self.app
            .wrap()
            .query_wasm_smart(self.faucet.clone(), &QueryMsg::FaucetBalance {})
            .map_err(read_err)
    }

    fn query_token_address(&self) -> ClientResult<Addr> {
        self.app
            .wrap()
            .query_wasm_smart(self.faucet.clone(), &QueryMsg::TokenAddress {})
            .map_err(read_err)
    }

    fn submit_mint(&mut self, sender: &Addr) -> ClientResult<TxHandle> {
        let sender = sender.to_string();

        match self.claim(&sender) {
            Ok(_) => {
                self.tx_counter += 1;

                Ok(TxHandle {
                    tx_hash: format!("{:064x}", self.tx_counter),
                })
            }
            Err(err) => Err(ClientError::Submit {
                reason: err.root_cause().to_string(),
            }),
        }
    }
}
