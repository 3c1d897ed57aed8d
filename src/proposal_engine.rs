multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_VOTED, ERR_INVALID_AMOUNT, ERR_INVALID_RECIPIENT, ERR_NOT_A_CONTRIBUTOR,
    ERR_PROPOSAL_NOT_ACTIVE, ERR_PROPOSAL_NOT_APPROVED, ERR_PROPOSAL_NOT_FOUND,
};
use crate::types::{Proposal, ProposalStatus, VoteDirection, VoteRecord};
use crate::vault_ledger::percentage_of;

// ============================================================
// Constants
// ============================================================

/// Share of the snapshotted voting power that must vote for, once fully voted.
pub const APPROVAL_THRESHOLD: u64 = 60;

// ============================================================
// Proposal Engine — payout proposals and weighted voting
// Vault balances are only touched through the ledger module.
// ============================================================

#[multiversx_sc::module]
pub trait ProposalEngineModule:
    crate::vault_ledger::VaultLedgerModule + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: createProposal
    // Any live contributor can propose paying part of the pool out.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        vault_id: u64,
        recipient: ManagedAddress,
        amount: BigUint,
        reason: ManagedBuffer,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        self.submit_proposal(&caller, vault_id, recipient, amount, reason)
    }

    // ========================================================
    // ENDPOINT: vote
    // Weight is the voter's live contribution at voting time.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        let caller = self.blockchain().get_caller();
        self.cast_vote(&caller, proposal_id, support);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Anyone can trigger payout of an Approved proposal.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) {
        let proposal = self.settle_proposal(proposal_id);

        // State is committed before the transfer leaves the contract.
        self.send().direct_egld(&proposal.recipient, &proposal.amount);
    }

    // ========================================================
    // INTERNAL: state transitions, caller passed explicitly
    // ========================================================

    fn submit_proposal(
        &self,
        proposer: &ManagedAddress,
        vault_id: u64,
        recipient: ManagedAddress,
        amount: BigUint,
        reason: ManagedBuffer,
    ) -> u64 {
        let vault = self.require_vault(vault_id);
        require!(
            self.contributions(vault_id, proposer).get() > 0u64,
            ERR_NOT_A_CONTRIBUTOR
        );
        require!(!recipient.is_zero(), ERR_INVALID_RECIPIENT);
        require!(
            amount > 0u64 && amount <= vault.current_amount,
            ERR_INVALID_AMOUNT
        );

        let proposal_id = self.proposal_count().get();
        let timestamp = self.blockchain().get_block_timestamp();

        let proposal = Proposal {
            id: proposal_id,
            vault_id,
            proposer: proposer.clone(),
            recipient,
            amount,
            reason,
            votes_for: BigUint::zero(),
            votes_against: BigUint::zero(),
            total_voting_power: vault.current_amount,
            status: ProposalStatus::Active,
            created_at: timestamp,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id + 1);
        self.vault_proposals(vault_id).push(&proposal_id);

        self.proposal_created_event(
            proposal_id,
            vault_id,
            proposer,
            &proposal.recipient,
            &proposal.amount,
            &proposal.reason,
        );

        proposal_id
    }

    fn cast_vote(&self, voter: &ManagedAddress, proposal_id: u64, support: bool) {
        let mut proposal = self.require_proposal(proposal_id);

        let weight = self.contributions(proposal.vault_id, voter).get();
        require!(weight > 0u64, ERR_NOT_A_CONTRIBUTOR);
        require!(
            !self.voters(proposal_id).contains(voter),
            ERR_ALREADY_VOTED
        );
        require!(
            proposal.status == ProposalStatus::Active,
            ERR_PROPOSAL_NOT_ACTIVE
        );

        let direction = if support {
            proposal.votes_for += &weight;
            VoteDirection::For
        } else {
            proposal.votes_against += &weight;
            VoteDirection::Against
        };

        self.voters(proposal_id).insert(voter.clone());
        self.vote_records(proposal_id).push(&VoteRecord {
            voter: voter.clone(),
            direction,
            weight: weight.clone(),
        });

        let resolution = self.resolve(&proposal);
        if let Some(status) = resolution {
            proposal.status = status;
        }
        self.proposals(proposal_id).set(&proposal);

        self.vote_cast_event(proposal_id, voter, support, &weight);
        match resolution {
            Some(ProposalStatus::Approved) => {
                self.proposal_approved_event(proposal_id, &proposal.votes_for)
            },
            Some(ProposalStatus::Rejected) => {
                self.proposal_rejected_event(proposal_id, &proposal.votes_against)
            },
            _ => {},
        }
    }

    /// Outcome once every unit of the snapshotted voting power has voted.
    /// `None` while the tally is still short of the snapshot.
    fn resolve(&self, proposal: &Proposal<Self::Api>) -> Option<ProposalStatus> {
        let total_voted = &proposal.votes_for + &proposal.votes_against;
        if total_voted < proposal.total_voting_power {
            return None;
        }

        let for_percentage = percentage_of(&proposal.votes_for, &proposal.total_voting_power);
        if for_percentage >= APPROVAL_THRESHOLD {
            Some(ProposalStatus::Approved)
        } else {
            Some(ProposalStatus::Rejected)
        }
    }

    /// Debits the vault and marks the proposal Executed. The caller sends the funds.
    fn settle_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        let mut proposal = self.require_proposal(proposal_id);
        require!(
            proposal.status == ProposalStatus::Approved,
            ERR_PROPOSAL_NOT_APPROVED
        );

        self.debit_vault(proposal.vault_id, &proposal.amount);

        proposal.status = ProposalStatus::Executed;
        self.proposals(proposal_id).set(&proposal);

        self.proposal_executed_event(
            proposal_id,
            proposal.vault_id,
            &proposal.recipient,
            &proposal.amount,
        );

        proposal
    }

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            proposal_id < self.proposal_count().get(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal(proposal_id)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        if count == 0 || from >= total {
            return result;
        }
        let end = core::cmp::min(from.saturating_add(count), total);

        for id in from..end {
            result.push(self.proposals(id).get());
        }
        result
    }

    #[view(getVaultProposals)]
    fn get_vault_proposals(&self, vault_id: u64) -> MultiValueEncoded<u64> {
        self.require_vault(vault_id);
        let mut result = MultiValueEncoded::new();
        for proposal_id in self.vault_proposals(vault_id).iter() {
            result.push(proposal_id);
        }
        result
    }

    /// (for %, against %, voted %) of the snapshotted voting power, floored.
    #[view(getProposalProgress)]
    fn get_proposal_progress(&self, proposal_id: u64) -> MultiValue3<u64, u64, u64> {
        let proposal = self.require_proposal(proposal_id);
        let power = &proposal.total_voting_power;
        let total_voted = &proposal.votes_for + &proposal.votes_against;

        (
            percentage_of(&proposal.votes_for, power),
            percentage_of(&proposal.votes_against, power),
            percentage_of(&total_voted, power),
        )
            .into()
    }

    #[view(getVoteRecords)]
    fn get_vote_records(&self, proposal_id: u64) -> MultiValueEncoded<VoteRecord<Self::Api>> {
        self.require_proposal(proposal_id);
        let mut result = MultiValueEncoded::new();
        for record in self.vote_records(proposal_id).iter() {
            result.push(record);
        }
        result
    }

    #[view(hasUserVoted)]
    fn has_user_voted(&self, proposal_id: u64, participant: ManagedAddress) -> bool {
        self.require_proposal(proposal_id);
        self.voters(proposal_id).contains(&participant)
    }

    #[view(getTotalProposals)]
    fn get_total_proposals(&self) -> u64 {
        self.proposal_count().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("vaultProposals")]
    fn vault_proposals(&self, vault_id: u64) -> VecMapper<u64>;

    #[storage_mapper("voters")]
    fn voters(&self, proposal_id: u64) -> SetMapper<ManagedAddress>;

    #[storage_mapper("voteRecords")]
    fn vote_records(&self, proposal_id: u64) -> VecMapper<VoteRecord<Self::Api>>;
}
