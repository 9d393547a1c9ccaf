use crate::WorkflowStatus;
use soroban_sdk::{symbol_short, Address, Env};

/// Event published when the contract is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Event published when the admin registers a voter.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterRegisteredEvent {
    pub voter: Address,
    pub timestamp: u64,
}

/// Event published when a voter submits a proposal.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalRegisteredEvent {
    pub proposal_id: u32,
    pub timestamp: u64,
}

/// Event published when a voter casts their vote.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCastEvent {
    pub voter: Address,
    pub proposal_id: u32,
    pub timestamp: u64,
}

/// Event published on every workflow transition.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WorkflowStatusChangedEvent {
    pub previous: WorkflowStatus,
    pub next: WorkflowStatus,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_voter_registered(env: &Env, voter: Address) {
    let topics = (symbol_short!("VTR_REG"), voter.clone());
    let data = VoterRegisteredEvent {
        voter,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_proposal_registered(env: &Env, proposal_id: u32) {
    let topics = (symbol_short!("PROP_REG"),);
    let data = ProposalRegisteredEvent {
        proposal_id,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_vote_cast(env: &Env, voter: Address, proposal_id: u32) {
    let topics = (symbol_short!("VOTE"), voter.clone());
    let data = VoteCastEvent {
        voter,
        proposal_id,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_workflow_status_changed(env: &Env, previous: WorkflowStatus, next: WorkflowStatus) {
    let topics = (symbol_short!("WF_STATUS"),);
    let data = WorkflowStatusChangedEvent {
        previous,
        next,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
