#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod events;
pub mod pooled_vault_proxy;
pub mod proposal_engine;
pub mod types;
pub mod vault_ledger;

use errors::ERR_INVALID_MIN_CONTRIBUTION;
use proposal_engine::APPROVAL_THRESHOLD;
use vault_ledger::SECONDS_PER_DAY;

// ============================================================
// Contract
// Shared-custody savings vaults: contributors pool EGLD toward a
// goal and decide payouts by contribution-weighted vote.
// ============================================================

#[multiversx_sc::contract]
pub trait PooledVault:
    vault_ledger::VaultLedgerModule + proposal_engine::ProposalEngineModule + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, min_contribution: BigUint) {
        require!(min_contribution > 0u64, ERR_INVALID_MIN_CONTRIBUTION);
        self.min_contribution().set(&min_contribution);
    }

    /// Vault and proposal counters carry over untouched.
    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue3<BigUint, u64, u64> {
        let min_contribution = self.min_contribution().get();
        (min_contribution, APPROVAL_THRESHOLD, SECONDS_PER_DAY).into()
    }
}
