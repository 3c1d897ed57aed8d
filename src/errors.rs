// Error kinds surfaced to callers. The abort message is the kind name itself
// so clients can match on it.

pub const ERR_INVALID_GOAL: &str = "InvalidGoal";
pub const ERR_INVALID_DEADLINE: &str = "InvalidDeadline";
pub const ERR_VAULT_NOT_FOUND: &str = "VaultNotFound";
pub const ERR_DEADLINE_PASSED: &str = "DeadlinePassed";
pub const ERR_INSUFFICIENT_CONTRIBUTION: &str = "InsufficientContribution";
pub const ERR_NOT_A_CONTRIBUTOR: &str = "NotAContributor";
pub const ERR_INVALID_AMOUNT: &str = "InvalidAmount";
pub const ERR_INVALID_RECIPIENT: &str = "InvalidRecipient";
pub const ERR_ALREADY_VOTED: &str = "AlreadyVoted";
pub const ERR_PROPOSAL_NOT_APPROVED: &str = "ProposalNotApproved";
pub const ERR_DEADLINE_NOT_REACHED: &str = "DeadlineNotReached";
pub const ERR_VAULT_NOT_EMPTY: &str = "VaultNotEmpty";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "ProposalNotFound";

pub const ERR_PROPOSAL_NOT_ACTIVE: &str = "ProposalNotActive";
pub const ERR_VAULT_CLOSED: &str = "VaultClosed";
pub const ERR_INSUFFICIENT_VAULT_BALANCE: &str = "InsufficientVaultBalance";
pub const ERR_INVALID_MIN_CONTRIBUTION: &str = "InvalidMinContribution";
