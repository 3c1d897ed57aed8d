multiversx_sc::imports!();

use crate::errors::{
    ERR_DEADLINE_NOT_REACHED, ERR_DEADLINE_PASSED, ERR_INSUFFICIENT_CONTRIBUTION,
    ERR_INSUFFICIENT_VAULT_BALANCE, ERR_INVALID_DEADLINE, ERR_INVALID_GOAL,
    ERR_NOT_A_CONTRIBUTOR, ERR_VAULT_CLOSED, ERR_VAULT_NOT_EMPTY, ERR_VAULT_NOT_FOUND,
};
use crate::types::{Vault, VaultStatus};

// ============================================================
// Constants
// ============================================================

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Progress and vote percentages are whole numbers out of 100.
pub const MAX_PERCENTAGE: u64 = 100;

/// floor(part * 100 / total), or 0 when total is 0.
pub fn percentage_of<M: ManagedTypeApi>(part: &BigUint<M>, total: &BigUint<M>) -> u64 {
    if *total == 0u64 {
        return 0;
    }
    let scaled = (part * MAX_PERCENTAGE) / total;
    scaled.to_u64().unwrap_or(u64::MAX)
}

// ============================================================
// Vault Ledger — vaults, contributions and the contributor sets
// ============================================================

#[multiversx_sc::module]
pub trait VaultLedgerModule: crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: createVault
    // ========================================================

    #[endpoint(createVault)]
    fn create_vault(
        &self,
        name: ManagedBuffer,
        description: ManagedBuffer,
        goal: BigUint,
        duration_days: u64,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        self.open_vault(&caller, name, description, goal, duration_days)
    }

    // ========================================================
    // ENDPOINT: contribute
    // The attached EGLD is the contribution.
    // ========================================================

    #[endpoint(contribute)]
    #[payable("EGLD")]
    fn contribute(&self, vault_id: u64) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        self.record_contribution(vault_id, &caller, &amount);
    }

    // ========================================================
    // ENDPOINT: emergencyWithdraw
    // Post-deadline refund of the caller's whole live balance.
    // ========================================================

    #[endpoint(emergencyWithdraw)]
    fn emergency_withdraw(&self, vault_id: u64) {
        let caller = self.blockchain().get_caller();
        let refund = self.refund_contributor(vault_id, &caller);

        // Balance is already zeroed, a re-entrant withdraw finds nothing.
        self.send().direct_egld(&caller, &refund);
    }

    // ========================================================
    // ENDPOINT: closeVault
    // ========================================================

    #[endpoint(closeVault)]
    fn close_vault(&self, vault_id: u64) {
        let caller = self.blockchain().get_caller();
        self.seal_vault(vault_id, &caller);
    }

    // ========================================================
    // INTERNAL: state transitions, caller passed explicitly
    // ========================================================

    fn open_vault(
        &self,
        creator: &ManagedAddress,
        name: ManagedBuffer,
        description: ManagedBuffer,
        goal: BigUint,
        duration_days: u64,
    ) -> u64 {
        require!(goal > 0u64, ERR_INVALID_GOAL);
        require!(duration_days > 0, ERR_INVALID_DEADLINE);

        let now = self.blockchain().get_block_timestamp();
        let deadline = match duration_days
            .checked_mul(SECONDS_PER_DAY)
            .and_then(|duration| now.checked_add(duration))
        {
            Some(deadline) => deadline,
            None => sc_panic!(ERR_INVALID_DEADLINE),
        };

        let vault_id = self.vault_count().get();
        let vault = Vault {
            id: vault_id,
            name,
            description,
            creator: creator.clone(),
            goal,
            current_amount: BigUint::zero(),
            deadline,
            status: VaultStatus::Active,
            contributors_count: 0,
            created_at: now,
        };

        self.vaults(vault_id).set(&vault);
        self.vault_count().set(vault_id + 1);

        self.vault_created_event(vault_id, creator, &vault.goal, deadline, &vault.name);

        vault_id
    }

    fn record_contribution(&self, vault_id: u64, contributor: &ManagedAddress, amount: &BigUint) {
        let mut vault = self.require_vault(vault_id);

        let now = self.blockchain().get_block_timestamp();
        require!(now <= vault.deadline, ERR_DEADLINE_PASSED);
        require!(
            *amount > 0u64 && *amount >= self.min_contribution().get(),
            ERR_INSUFFICIENT_CONTRIBUTION
        );
        require!(vault.status != VaultStatus::Closed, ERR_VAULT_CLOSED);

        let previous = self.contributions(vault_id, contributor).get();
        if previous == 0u64 {
            self.contributors(vault_id).insert(contributor.clone());
            vault.contributors_count += 1;
        }

        let new_total = &previous + amount;
        self.contributions(vault_id, contributor).set(&new_total);
        vault.current_amount += amount;

        // Active always means below goal, so this fires on the crossing only.
        let goal_reached =
            vault.status == VaultStatus::Active && vault.current_amount >= vault.goal;
        if goal_reached {
            vault.status = VaultStatus::GoalReached;
        }

        self.vaults(vault_id).set(&vault);

        self.contribution_made_event(vault_id, contributor, amount, &new_total);
        if goal_reached {
            self.goal_reached_event(vault_id, &vault.current_amount);
        }
    }

    /// Zeroes the contributor's balance and returns the amount still owed to them.
    fn refund_contributor(&self, vault_id: u64, contributor: &ManagedAddress) -> BigUint {
        let mut vault = self.require_vault(vault_id);

        let now = self.blockchain().get_block_timestamp();
        require!(now > vault.deadline, ERR_DEADLINE_NOT_REACHED);

        let refund = self.contributions(vault_id, contributor).get();
        require!(refund > 0u64, ERR_NOT_A_CONTRIBUTOR);

        self.contributions(vault_id, contributor).clear();
        self.contributors(vault_id).remove(contributor);
        vault.contributors_count -= 1;
        vault.current_amount -= &refund;
        self.vaults(vault_id).set(&vault);

        self.emergency_withdrawn_event(vault_id, contributor, &refund);

        refund
    }

    fn seal_vault(&self, vault_id: u64, caller: &ManagedAddress) {
        let mut vault = self.require_vault(vault_id);

        // Non-creators are refused with NotAContributor.
        require!(*caller == vault.creator, ERR_NOT_A_CONTRIBUTOR);
        require!(vault.current_amount == 0u64, ERR_VAULT_NOT_EMPTY);
        require!(vault.status != VaultStatus::Closed, ERR_VAULT_CLOSED);

        vault.status = VaultStatus::Closed;
        self.vaults(vault_id).set(&vault);

        let now = self.blockchain().get_block_timestamp();
        self.vault_closed_event(vault_id, now);
    }

    /// Removes `amount` from the vault pool, charging contributors pro-rata
    /// to their live balance so the pool always equals the sum of balances.
    ///
    /// Floor division leaves fewer leftover units than there are
    /// contributors; those are charged one each in contributor order.
    /// Contributors charged down to zero leave the contributor set.
    fn debit_vault(&self, vault_id: u64, amount: &BigUint) {
        let mut vault = self.require_vault(vault_id);
        require!(*amount <= vault.current_amount, ERR_INSUFFICIENT_VAULT_BALANCE);
        if *amount == 0u64 {
            return;
        }

        let pooled = vault.current_amount.clone();

        let mut floor_total = BigUint::zero();
        for contributor in self.contributors(vault_id).iter() {
            let balance = self.contributions(vault_id, &contributor).get();
            floor_total += (&balance * amount) / &pooled;
        }

        let one = BigUint::from(1u64);
        let mut leftover = amount - &floor_total;
        let mut emptied = ManagedVec::<Self::Api, ManagedAddress<Self::Api>>::new();
        for contributor in self.contributors(vault_id).iter() {
            let balance = self.contributions(vault_id, &contributor).get();
            let mut charge = (&balance * amount) / &pooled;
            if leftover > 0u64 && charge < balance {
                charge += &one;
                leftover -= &one;
            }

            let remaining = balance - charge;
            if remaining == 0u64 {
                self.contributions(vault_id, &contributor).clear();
                emptied.push(contributor);
            } else {
                self.contributions(vault_id, &contributor).set(&remaining);
            }
        }

        for contributor in emptied.iter() {
            self.contributors(vault_id).remove(&contributor);
        }

        vault.contributors_count -= emptied.len() as u64;
        vault.current_amount -= amount;
        self.vaults(vault_id).set(&vault);
    }

    fn require_vault(&self, vault_id: u64) -> Vault<Self::Api> {
        require!(vault_id < self.vault_count().get(), ERR_VAULT_NOT_FOUND);
        self.vaults(vault_id).get()
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getVault)]
    fn get_vault(&self, vault_id: u64) -> Vault<Self::Api> {
        self.require_vault(vault_id)
    }

    #[view(getContribution)]
    fn get_contribution(&self, vault_id: u64, contributor: ManagedAddress) -> BigUint {
        require!(vault_id < self.vault_count().get(), ERR_VAULT_NOT_FOUND);
        self.contributions(vault_id, &contributor).get()
    }

    #[view(getVaultContributors)]
    fn get_vault_contributors(&self, vault_id: u64) -> MultiValueEncoded<ManagedAddress> {
        require!(vault_id < self.vault_count().get(), ERR_VAULT_NOT_FOUND);
        let mut result = MultiValueEncoded::new();
        for contributor in self.contributors(vault_id).iter() {
            result.push(contributor);
        }
        result
    }

    #[view(getVaultProgress)]
    fn get_vault_progress(&self, vault_id: u64) -> u64 {
        let vault = self.require_vault(vault_id);
        core::cmp::min(
            MAX_PERCENTAGE,
            percentage_of(&vault.current_amount, &vault.goal),
        )
    }

    #[view(getTotalVaults)]
    fn get_total_vaults(&self) -> u64 {
        self.vault_count().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("minContribution")]
    fn min_contribution(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("vaultCount")]
    fn vault_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("vaults")]
    fn vaults(&self, vault_id: u64) -> SingleValueMapper<Vault<Self::Api>>;

    #[storage_mapper("contributions")]
    fn contributions(
        &self,
        vault_id: u64,
        contributor: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    /// Live contributors in first-contribution order.
    #[storage_mapper("contributors")]
    fn contributors(&self, vault_id: u64) -> SetMapper<ManagedAddress>;
}
