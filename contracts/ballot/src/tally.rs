use soroban_sdk::Vec;

use crate::Proposal;

/// Index of the proposal with the strictly greatest vote count. Ties resolve
/// to the lowest index; an empty sequence resolves to 0.
pub fn winning_proposal(proposals: &Vec<Proposal>) -> u32 {
    let mut winning_id = 0u32;
    let mut highest_count = 0u32;
    let mut proposal_id = 0u32;
    for proposal in proposals.iter() {
        if proposal.vote_count > highest_count {
            highest_count = proposal.vote_count;
            winning_id = proposal_id;
        }
        proposal_id = proposal_id.saturating_add(1);
    }
    winning_id
}
