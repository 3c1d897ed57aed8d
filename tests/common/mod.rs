#![allow(dead_code)]

use multiversx_sc_scenario::imports::*;
use multiversx_sc_scenario::num_bigint::BigUint as RustBigUint;
use multiversx_sc_scenario::scenario_model::Log;

use pooled_vault::pooled_vault_proxy::PooledVaultProxy;
use pooled_vault::types::{Proposal, Vault};

pub const CODE_PATH: MxscPath = MxscPath::new("output/pooled-vault.mxsc.json");
pub const SC_ADDRESS: TestSCAddress = TestSCAddress::new("pooled-vault");

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const P1: TestAddress = TestAddress::new("p1");
pub const P2: TestAddress = TestAddress::new("p2");
pub const P3: TestAddress = TestAddress::new("p3");
pub const P4: TestAddress = TestAddress::new("p4");

pub const UNIT: u64 = 1_000_000;
pub const MIN_CONTRIBUTION: u64 = 1_000;
pub const STARTING_BALANCE: u64 = 100 * UNIT;

pub const START_TIMESTAMP: u64 = 1_700_000_000;
pub const DURATION_DAYS: u64 = 30;
pub const DEADLINE: u64 = START_TIMESTAMP + DURATION_DAYS * 86_400;

pub const VAULT_NAME: &str = "Vacation Fund";

pub fn big(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount)
}

/// Event topic or data bytes for an id, timestamp or amount.
pub fn encoded(value: u64) -> Vec<u8> {
    top_encode_to_vec_u8_or_panic(&value)
}

pub fn encoded_bool(value: bool) -> Vec<u8> {
    top_encode_to_vec_u8_or_panic(&value)
}

pub fn encoded_address(address: TestAddress) -> Vec<u8> {
    address.to_address().to_vec()
}

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(CODE_PATH, pooled_vault::ContractBuilder);
    blockchain
}

pub struct PooledVaultTestState {
    pub world: ScenarioWorld,
    /// Logs of the last successful transaction sent through a helper.
    pub last_logs: Vec<Log>,
}

impl PooledVaultTestState {
    pub fn new() -> Self {
        let mut world = world();

        world.account(OWNER).nonce(1).balance(STARTING_BALANCE);
        world.account(P1).nonce(1).balance(STARTING_BALANCE);
        world.account(P2).nonce(1).balance(STARTING_BALANCE);
        world.account(P3).nonce(1).balance(STARTING_BALANCE);
        world.account(P4).nonce(1).balance(STARTING_BALANCE);

        world.current_block().block_timestamp(START_TIMESTAMP);

        world
            .tx()
            .from(OWNER)
            .typed(PooledVaultProxy)
            .init(big(MIN_CONTRIBUTION))
            .code(CODE_PATH)
            .new_address(SC_ADDRESS)
            .run();

        Self {
            world,
            last_logs: Vec::new(),
        }
    }

    /// Vault with goal 10 units where P1, P2, P3 put in 5, 3 and 2 units.
    pub fn new_with_funded_vault() -> (Self, u64) {
        let mut state = Self::new();
        let vault_id = state.create_vault(OWNER, 10 * UNIT, DURATION_DAYS);
        state.contribute(P1, vault_id, 5 * UNIT);
        state.contribute(P2, vault_id, 3 * UNIT);
        state.contribute(P3, vault_id, 2 * UNIT);
        (state, vault_id)
    }

    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    /// Logs of the last transaction whose first topic is `identifier`.
    pub fn events(&self, identifier: &str) -> Vec<Log> {
        self.last_logs
            .iter()
            .filter(|log| {
                log.topics
                    .first()
                    .is_some_and(|topic| topic.as_slice() == identifier.as_bytes())
            })
            .cloned()
            .collect()
    }

    /// The single log emitted under `identifier` by the last transaction.
    pub fn single_event(&self, identifier: &str) -> Log {
        let mut logs = self.events(identifier);
        assert_eq!(logs.len(), 1, "expected exactly one {identifier} event");
        logs.remove(0)
    }

    // ── Vault ledger ──

    pub fn create_vault(&mut self, creator: TestAddress, goal: u64, duration_days: u64) -> u64 {
        let (vault_id, logs) = self
            .world
            .tx()
            .from(creator)
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .create_vault(VAULT_NAME, "Saving for group vacation", big(goal), duration_days)
            .returns(ReturnsResult)
            .returns(ReturnsLogs)
            .run();
        self.last_logs = logs;
        vault_id
    }

    pub fn create_vault_expect_err(
        &mut self,
        creator: TestAddress,
        goal: u64,
        duration_days: u64,
        err_message: &str,
    ) {
        self.world
            .tx()
            .from(creator)
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .create_vault(VAULT_NAME, "Saving for group vacation", big(goal), duration_days)
            .returns(ExpectError(4, err_message))
            .run();
    }

    pub fn contribute(&mut self, contributor: TestAddress, vault_id: u64, amount: u64) {
        self.last_logs = self
            .world
            .tx()
            .from(contributor)
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .contribute(vault_id)
            .egld(big(amount))
            .returns(ReturnsLogs)
            .run();
    }

    pub fn contribute_expect_err(
        &mut self,
        contributor: TestAddress,
        vault_id: u64,
        amount: u64,
        err_message: &str,
    ) {
        self.world
            .tx()
            .from(contributor)
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .contribute(vault_id)
            .egld(big(amount))
            .returns(ExpectError(4, err_message))
            .run();
    }

    pub fn emergency_withdraw(&mut self, contributor: TestAddress, vault_id: u64) {
        self.last_logs = self
            .world
            .tx()
            .from(contributor)
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .emergency_withdraw(vault_id)
            .returns(ReturnsLogs)
            .run();
    }

    pub fn emergency_withdraw_expect_err(
        &mut self,
        contributor: TestAddress,
        vault_id: u64,
        err_message: &str,
    ) {
        self.world
            .tx()
            .from(contributor)
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .emergency_withdraw(vault_id)
            .returns(ExpectError(4, err_message))
            .run();
    }

    pub fn close_vault(&mut self, caller: TestAddress, vault_id: u64) {
        self.last_logs = self
            .world
            .tx()
            .from(caller)
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .close_vault(vault_id)
            .returns(ReturnsLogs)
            .run();
    }

    pub fn close_vault_expect_err(&mut self, caller: TestAddress, vault_id: u64, err_message: &str) {
        self.world
            .tx()
            .from(caller)
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .close_vault(vault_id)
            .returns(ExpectError(4, err_message))
            .run();
    }

    pub fn vault(&mut self, vault_id: u64) -> Vault<StaticApi> {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .get_vault(vault_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn contribution(&mut self, vault_id: u64, contributor: TestAddress) -> RustBigUint {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .get_contribution(vault_id, contributor)
            .returns(ReturnsResultUnmanaged)
            .run()
    }

    pub fn contributors(&mut self, vault_id: u64) -> Vec<Address> {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .get_vault_contributors(vault_id)
            .returns(ReturnsResultUnmanaged)
            .run()
            .into_vec()
    }

    pub fn vault_progress(&mut self, vault_id: u64) -> u64 {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .get_vault_progress(vault_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_vaults(&mut self) -> u64 {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .get_total_vaults()
            .returns(ReturnsResult)
            .run()
    }

    /// Sum of every live contribution, for checking it against `current_amount`.
    pub fn sum_of_contributions(&mut self, vault_id: u64) -> RustBigUint {
        let mut total = RustBigUint::from(0u64);
        for participant in [P1, P2, P3, P4] {
            total += self.contribution(vault_id, participant);
        }
        total
    }

    // ── Proposal engine ──

    pub fn create_proposal(
        &mut self,
        proposer: TestAddress,
        vault_id: u64,
        recipient: TestAddress,
        amount: u64,
    ) -> u64 {
        let (proposal_id, logs) = self
            .world
            .tx()
            .from(proposer)
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .create_proposal(vault_id, recipient, big(amount), "Payment for services")
            .returns(ReturnsResult)
            .returns(ReturnsLogs)
            .run();
        self.last_logs = logs;
        proposal_id
    }

    pub fn create_proposal_expect_err(
        &mut self,
        proposer: TestAddress,
        vault_id: u64,
        recipient: ManagedAddress<StaticApi>,
        amount: u64,
        err_message: &str,
    ) {
        self.world
            .tx()
            .from(proposer)
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .create_proposal(vault_id, recipient, big(amount), "Payment for services")
            .returns(ExpectError(4, err_message))
            .run();
    }

    pub fn vote(&mut self, voter: TestAddress, proposal_id: u64, support: bool) {
        self.last_logs = self
            .world
            .tx()
            .from(voter)
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .vote(proposal_id, support)
            .returns(ReturnsLogs)
            .run();
    }

    pub fn vote_expect_err(
        &mut self,
        voter: TestAddress,
        proposal_id: u64,
        support: bool,
        err_message: &str,
    ) {
        self.world
            .tx()
            .from(voter)
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .vote(proposal_id, support)
            .returns(ExpectError(4, err_message))
            .run();
    }

    pub fn execute_proposal(&mut self, caller: TestAddress, proposal_id: u64) {
        self.last_logs = self
            .world
            .tx()
            .from(caller)
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .execute_proposal(proposal_id)
            .returns(ReturnsLogs)
            .run();
    }

    pub fn execute_proposal_expect_err(
        &mut self,
        caller: TestAddress,
        proposal_id: u64,
        err_message: &str,
    ) {
        self.world
            .tx()
            .from(caller)
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .execute_proposal(proposal_id)
            .returns(ExpectError(4, err_message))
            .run();
    }

    pub fn proposal(&mut self, proposal_id: u64) -> Proposal<StaticApi> {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .get_proposal(proposal_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn proposal_progress(&mut self, proposal_id: u64) -> (u64, u64, u64) {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .get_proposal_progress(proposal_id)
            .returns(ReturnsResult)
            .run()
            .into_tuple()
    }

    pub fn has_user_voted(&mut self, proposal_id: u64, participant: TestAddress) -> bool {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .has_user_voted(proposal_id, participant)
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_proposals(&mut self) -> u64 {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .get_total_proposals()
            .returns(ReturnsResult)
            .run()
    }

    pub fn vault_proposals(&mut self, vault_id: u64) -> Vec<u64> {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(PooledVaultProxy)
            .get_vault_proposals(vault_id)
            .returns(ReturnsResultUnmanaged)
            .run()
            .into_vec()
    }
}
