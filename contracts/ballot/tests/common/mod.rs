// Shared harness for the ballot integration tests.
#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use ballot::{BallotContract, BallotContractClient, WorkflowStatus};
use soroban_sdk::testutils::ContractEvents;
use soroban_sdk::xdr::{ContractEventBody, ScAddress};
use soroban_sdk::{testutils::Address as _, Address, Env, TryFromVal, Val, Vec};

/// Re-express the captured events in the legacy `(contract, topics, data)`
/// tuple form the assertions index into.
pub fn events_as_tuples(env: &Env, events: ContractEvents) -> Vec<(Address, Vec<Val>, Val)> {
    let mut out = Vec::new(env);
    for event in events.events() {
        let contract_id = match event.contract_id.as_ref() {
            Some(contract_id) => contract_id,
            None => continue,
        };
        let address =
            Address::try_from_val(env, &ScAddress::Contract(contract_id.clone())).unwrap();
        let ContractEventBody::V0(body) = &event.body;
        let mut topics = Vec::new(env);
        for topic in body.topics.iter() {
            topics.push_back(Val::try_from_val(env, topic).unwrap());
        }
        let data = Val::try_from_val(env, &body.data).unwrap();
        out.push_back((address, topics, data));
    }
    out
}

pub struct TestContext {
    pub env: Env,
    pub client: BallotContractClient<'static>,
    pub admin: Address,
}

/// Deploy and initialize a fresh ballot with a generated admin.
pub fn setup_test_env() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(BallotContract, ());
    let client = BallotContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    TestContext { env, client, admin }
}

/// Register a fresh voter. Only valid while voter registration is open.
pub fn register_voter(ctx: &TestContext) -> Address {
    let voter = Address::generate(&ctx.env);
    ctx.client.add_voter(&ctx.admin, &voter);
    voter
}

/// Drive the workflow forward until it reaches `target`.
pub fn advance_to(ctx: &TestContext, target: &WorkflowStatus) {
    loop {
        let current = ctx.client.get_workflow_status();
        if current == *target {
            return;
        }
        match current {
            WorkflowStatus::RegisteringVoters => {
                ctx.client.start_proposals_registering(&ctx.admin);
            }
            WorkflowStatus::ProposalsRegistrationStarted => {
                ctx.client.end_proposals_registering(&ctx.admin);
            }
            WorkflowStatus::ProposalsRegistrationEnded => {
                ctx.client.start_voting_session(&ctx.admin);
            }
            WorkflowStatus::VotingSessionStarted => {
                ctx.client.end_voting_session(&ctx.admin);
            }
            WorkflowStatus::VotingSessionEnded => {
                ctx.client.tally_votes(&ctx.admin);
            }
            WorkflowStatus::VotesTallied => panic!("cannot advance past the terminal status"),
        }
    }
}
