#![no_std]
mod events;
pub mod tally;
pub mod workflow;

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env, String};

pub use workflow::WorkflowStatus;

/// Storage keys for the contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Status,
    Winner,
    ProposalCount,
    Voter(Address),
    Proposal(u32),
}

/// Per-address voter state. Addresses without an entry are unregistered.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    pub voted_proposal_id: u32,
}

/// A submitted proposal. Proposals are append-only and addressed by index;
/// index 0 is the GENESIS placeholder seeded when proposal registration opens.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u32,
}

/// Contract errors
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum BallotError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    WorkflowStepViolation = 4,
    RegistrationNotOpen = 5,
    ProposalRegistrationNotOpen = 6,
    VotingSessionNotOpen = 7,
    AlreadyRegistered = 8,
    AlreadyVoted = 9,
    InvalidProposal = 10,
    EmptyProposal = 11,
}

// ── Helpers ────────────────────────────────────────────────────────────────────

fn require_admin(env: &Env, caller: &Address) -> Result<(), BallotError> {
    let admin: Address = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(BallotError::NotInitialized)?;
    if *caller != admin {
        return Err(BallotError::Unauthorized);
    }
    Ok(())
}

fn require_voter(env: &Env, caller: &Address) -> Result<(), BallotError> {
    if !voter_state(env, caller).is_registered {
        return Err(BallotError::Unauthorized);
    }
    Ok(())
}

fn voter_state(env: &Env, voter: &Address) -> Voter {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(voter.clone()))
        .unwrap_or(Voter {
            is_registered: false,
            has_voted: false,
            voted_proposal_id: 0,
        })
}

fn proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

fn push_proposal(env: &Env, description: String) -> u32 {
    let proposal_id = proposal_count(env);
    let proposal = Proposal {
        description,
        vote_count: 0,
    };
    env.storage()
        .persistent()
        .set(&DataKey::Proposal(proposal_id), &proposal);
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &proposal_id.saturating_add(1));
    proposal_id
}

// ── Contract ───────────────────────────────────────────────────────────────────

#[contract]
pub struct BallotContract;

#[contractimpl]
impl BallotContract {
    /// Initialize the ballot with the governing admin address. The workflow
    /// starts in `RegisteringVoters`.
    pub fn initialize(env: Env, admin: Address) -> Result<(), BallotError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(BallotError::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Admin, &admin);
        workflow::set_status(&env, &WorkflowStatus::RegisteringVoters);

        events::publish_initialized(&env, admin);

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, BallotError> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(BallotError::NotInitialized)
    }

    // ── Registration ──────────────────────────────────────────────────────────

    /// Register a voter. Admin-only, and only while voter registration is open.
    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), BallotError> {
        caller.require_auth();
        require_admin(&env, &caller)?;
        workflow::require_status(
            &env,
            &WorkflowStatus::RegisteringVoters,
            BallotError::RegistrationNotOpen,
        )?;

        let mut state = voter_state(&env, &voter);
        if state.is_registered {
            return Err(BallotError::AlreadyRegistered);
        }
        state.is_registered = true;
        env.storage()
            .persistent()
            .set(&DataKey::Voter(voter.clone()), &state);

        events::publish_voter_registered(&env, voter);

        Ok(())
    }

    // ── Proposals ─────────────────────────────────────────────────────────────

    /// Submit a proposal and return its index. Restricted to registered
    /// voters while proposal registration is open.
    pub fn add_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<u32, BallotError> {
        caller.require_auth();
        require_voter(&env, &caller)?;
        workflow::require_status(
            &env,
            &WorkflowStatus::ProposalsRegistrationStarted,
            BallotError::ProposalRegistrationNotOpen,
        )?;

        if description.is_empty() {
            return Err(BallotError::EmptyProposal);
        }

        let proposal_id = push_proposal(&env, description);

        events::publish_proposal_registered(&env, proposal_id);

        Ok(proposal_id)
    }

    /// Get a proposal by index
    pub fn get_one_proposal(env: Env, proposal_id: u32) -> Result<Proposal, BallotError> {
        env.storage()
            .persistent()
            .get(&DataKey::Proposal(proposal_id))
            .ok_or(BallotError::InvalidProposal)
    }

    /// Get the total number of proposals, the GENESIS placeholder included
    pub fn get_proposal_count(env: Env) -> u32 {
        proposal_count(&env)
    }

    // ── Voting ────────────────────────────────────────────────────────────────

    /// Cast the caller's single vote for a proposal. The voter record and the
    /// proposal's vote count are updated together.
    pub fn cast_vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), BallotError> {
        caller.require_auth();
        require_voter(&env, &caller)?;
        workflow::require_status(
            &env,
            &WorkflowStatus::VotingSessionStarted,
            BallotError::VotingSessionNotOpen,
        )?;

        let mut state = voter_state(&env, &caller);
        if state.has_voted {
            return Err(BallotError::AlreadyVoted);
        }

        let key = DataKey::Proposal(proposal_id);
        let mut proposal: Proposal = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(BallotError::InvalidProposal)?;

        state.has_voted = true;
        state.voted_proposal_id = proposal_id;
        proposal.vote_count = proposal.vote_count.saturating_add(1);

        env.storage()
            .persistent()
            .set(&DataKey::Voter(caller.clone()), &state);
        env.storage().persistent().set(&key, &proposal);

        events::publish_vote_cast(&env, caller, proposal_id);

        Ok(())
    }

    /// Get a voter record. Restricted to registered voters.
    pub fn get_voter(env: Env, caller: Address, voter: Address) -> Result<Voter, BallotError> {
        caller.require_auth();
        require_voter(&env, &caller)?;
        Ok(voter_state(&env, &voter))
    }

    pub fn is_registered(env: Env, voter: Address) -> bool {
        voter_state(&env, &voter).is_registered
    }

    pub fn has_voted(env: Env, voter: Address) -> bool {
        voter_state(&env, &voter).has_voted
    }

    // ── Workflow ──────────────────────────────────────────────────────────────

    /// Open proposal registration and seed the GENESIS placeholder at index 0.
    pub fn start_proposals_registering(env: Env, caller: Address) -> Result<(), BallotError> {
        caller.require_auth();
        require_admin(&env, &caller)?;
        let (previous, next) = workflow::advance(&env, &WorkflowStatus::RegisteringVoters)?;

        push_proposal(&env, String::from_str(&env, "GENESIS"));

        events::publish_workflow_status_changed(&env, previous, next);
        Ok(())
    }

    /// Close proposal registration.
    pub fn end_proposals_registering(env: Env, caller: Address) -> Result<(), BallotError> {
        caller.require_auth();
        require_admin(&env, &caller)?;
        let (previous, next) =
            workflow::advance(&env, &WorkflowStatus::ProposalsRegistrationStarted)?;

        events::publish_workflow_status_changed(&env, previous, next);
        Ok(())
    }

    /// Open the voting session.
    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), BallotError> {
        caller.require_auth();
        require_admin(&env, &caller)?;
        let (previous, next) =
            workflow::advance(&env, &WorkflowStatus::ProposalsRegistrationEnded)?;

        events::publish_workflow_status_changed(&env, previous, next);
        Ok(())
    }

    /// Close the voting session.
    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), BallotError> {
        caller.require_auth();
        require_admin(&env, &caller)?;
        let (previous, next) = workflow::advance(&env, &WorkflowStatus::VotingSessionStarted)?;

        events::publish_workflow_status_changed(&env, previous, next);
        Ok(())
    }

    /// Tally the votes and return the winning proposal index. Moves the
    /// workflow to its terminal status, so a ballot is tallied exactly once.
    pub fn tally_votes(env: Env, caller: Address) -> Result<u32, BallotError> {
        caller.require_auth();
        require_admin(&env, &caller)?;
        let (previous, next) = workflow::advance(&env, &WorkflowStatus::VotingSessionEnded)?;

        let mut proposals = soroban_sdk::Vec::new(&env);
        for proposal_id in 0..proposal_count(&env) {
            if let Some(proposal) = env
                .storage()
                .persistent()
                .get::<_, Proposal>(&DataKey::Proposal(proposal_id))
            {
                proposals.push_back(proposal);
            }
        }
        let winner = tally::winning_proposal(&proposals);
        env.storage().instance().set(&DataKey::Winner, &winner);

        events::publish_workflow_status_changed(&env, previous, next);
        Ok(winner)
    }

    /// Get the winning proposal index, 0 until the votes have been tallied
    pub fn get_winner(env: Env) -> u32 {
        env.storage().instance().get(&DataKey::Winner).unwrap_or(0)
    }

    pub fn get_workflow_status(env: Env) -> WorkflowStatus {
        workflow::status(&env)
    }
}
