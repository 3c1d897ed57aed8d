multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Vault Status — Active → GoalReached → Closed, or Active → Closed
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VaultStatus {
    /// Accepting contributions, goal not yet met.
    Active,
    /// Goal met at least once. One-way flag; contributions are still accepted.
    GoalReached,
    /// Emptied and closed by the creator. Terminal state.
    Closed,
}

// ============================================================
// Vault — a pooled savings goal with a deadline
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Vault<M: ManagedTypeApi> {
    pub id: u64,
    pub name: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub creator: ManagedAddress<M>,
    pub goal: BigUint<M>,
    /// Sum of all live contributions.
    pub current_amount: BigUint<M>,
    /// Block timestamp after which contributions stop and withdrawal opens.
    pub deadline: u64,
    pub status: VaultStatus,
    /// Number of participants holding a nonzero live contribution.
    pub contributors_count: u64,
    pub created_at: u64,
}

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Voting is open until the snapshotted voting power has fully voted.
    Active,
    /// At least 60% of the snapshot voted for. Awaiting execution.
    Approved,
    /// Fully voted with less than 60% for. Terminal state.
    Rejected,
    /// Funds sent to the recipient. Terminal state.
    Executed,
}

// ============================================================
// Proposal — a request to pay out part of a vault
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub vault_id: u64,
    pub proposer: ManagedAddress<M>,
    pub recipient: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub reason: ManagedBuffer<M>,
    pub votes_for: BigUint<M>,
    pub votes_against: BigUint<M>,
    /// Vault balance at creation time. Fixed denominator for every tally.
    pub total_voting_power: BigUint<M>,
    pub status: ProposalStatus,
    pub created_at: u64,
}

// ============================================================
// Vote Record — ordered vote history per proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoteDirection {
    For,
    Against,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub voter: ManagedAddress<M>,
    pub direction: VoteDirection,
    pub weight: BigUint<M>,
}
