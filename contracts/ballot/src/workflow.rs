use soroban_sdk::{contracttype, Env};

use crate::{BallotError, DataKey};

/// The six ballot phases, in the only order they can be traversed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

impl WorkflowStatus {
    /// Successor in the fixed forward order, or None at the terminal status.
    pub fn next(&self) -> Option<WorkflowStatus> {
        match self {
            WorkflowStatus::RegisteringVoters => Some(WorkflowStatus::ProposalsRegistrationStarted),
            WorkflowStatus::ProposalsRegistrationStarted => {
                Some(WorkflowStatus::ProposalsRegistrationEnded)
            }
            WorkflowStatus::ProposalsRegistrationEnded => {
                Some(WorkflowStatus::VotingSessionStarted)
            }
            WorkflowStatus::VotingSessionStarted => Some(WorkflowStatus::VotingSessionEnded),
            WorkflowStatus::VotingSessionEnded => Some(WorkflowStatus::VotesTallied),
            WorkflowStatus::VotesTallied => None,
        }
    }
}

pub fn status(env: &Env) -> WorkflowStatus {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(WorkflowStatus::RegisteringVoters)
}

pub fn set_status(env: &Env, status: &WorkflowStatus) {
    env.storage().instance().set(&DataKey::Status, status);
}

/// Phase gate for operations that are only legal in a single status.
pub fn require_status(
    env: &Env,
    expected: &WorkflowStatus,
    error: BallotError,
) -> Result<(), BallotError> {
    if status(env) != *expected {
        return Err(error);
    }
    Ok(())
}

/// Move the workflow one step forward and return `(previous, next)`. The
/// caller names the status it expects to leave; any other current status is a
/// step violation and the status is left untouched.
pub fn advance(
    env: &Env,
    expected: &WorkflowStatus,
) -> Result<(WorkflowStatus, WorkflowStatus), BallotError> {
    let current = status(env);
    if current != *expected {
        return Err(BallotError::WorkflowStepViolation);
    }
    let next = current.next().ok_or(BallotError::WorkflowStepViolation)?;
    set_status(env, &next);
    Ok((current, next))
}
