multiversx_sc::imports!();

// ============================================================
// EVENTS — append-only log consumed by off-chain observers
// ============================================================

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("vaultCreated")]
    fn vault_created_event(
        &self,
        #[indexed] vault_id: u64,
        #[indexed] creator: &ManagedAddress,
        #[indexed] goal: &BigUint,
        #[indexed] deadline: u64,
        name: &ManagedBuffer,
    );

    #[event("contributionMade")]
    fn contribution_made_event(
        &self,
        #[indexed] vault_id: u64,
        #[indexed] contributor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        new_total: &BigUint,
    );

    #[event("goalReached")]
    fn goal_reached_event(&self, #[indexed] vault_id: u64, current_amount: &BigUint);

    #[event("emergencyWithdrawn")]
    fn emergency_withdrawn_event(
        &self,
        #[indexed] vault_id: u64,
        #[indexed] contributor: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("vaultClosed")]
    fn vault_closed_event(&self, #[indexed] vault_id: u64, timestamp: u64);

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] vault_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] amount: &BigUint,
        reason: &ManagedBuffer,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        weight: &BigUint,
    );

    #[event("proposalApproved")]
    fn proposal_approved_event(&self, #[indexed] proposal_id: u64, votes_for: &BigUint);

    #[event("proposalRejected")]
    fn proposal_rejected_event(&self, #[indexed] proposal_id: u64, votes_against: &BigUint);

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] vault_id: u64,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );
}
