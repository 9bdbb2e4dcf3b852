//! Confluence scoring: four votes in, direction and strength out.

use crate::models::{Direction, Vote, VoteSet};
use std::cmp::Ordering;

pub struct ConfluenceScorer;

impl ConfluenceScorer {
    /// Combine the four core votes.
    ///
    /// The majority of CALL vs PUT counts wins; a tie always resolves to
    /// ESPERAR, never an arbitrary pick. A majority below `threshold`
    /// agreeing votes is also downgraded to ESPERAR. Strength is the
    /// winning count, or 0 for ESPERAR.
    pub fn score(votes: &VoteSet, threshold: u8) -> (Direction, u8) {
        let calls = votes.count(Vote::Call);
        let puts = votes.count(Vote::Put);

        let (direction, winning) = match calls.cmp(&puts) {
            Ordering::Greater => (Direction::Call, calls),
            Ordering::Less => (Direction::Put, puts),
            Ordering::Equal => return (Direction::Esperar, 0),
        };

        if winning < threshold {
            return (Direction::Esperar, 0);
        }

        (direction, winning)
    }
}
