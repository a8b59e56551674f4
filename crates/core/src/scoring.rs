//! Vote tallying and score-based ranking.
//!
//! A score is always derived from the current list of vote types, never
//! stored, so it cannot drift from the displayed up/down counts.

use std::cmp::Reverse;

use serde::Serialize;

/// Up/down vote counts for one video.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteTally {
    pub upvotes: i64,
    pub downvotes: i64,
}

impl VoteTally {
    /// Count vote types (`true` = up, `false` = down).
    pub fn from_votes<I>(votes: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        votes.into_iter().fold(Self::default(), |mut tally, up| {
            if up {
                tally.upvotes += 1;
            } else {
                tally.downvotes += 1;
            }
            tally
        })
    }

    /// `upvotes - downvotes`.
    pub fn score(&self) -> i64 {
        self.upvotes - self.downvotes
    }
}

/// Serialisable vote counts with the derived score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteSummary {
    pub upvotes: i64,
    pub downvotes: i64,
    pub score: i64,
}

impl From<VoteTally> for VoteSummary {
    fn from(tally: VoteTally) -> Self {
        Self {
            upvotes: tally.upvotes,
            downvotes: tally.downvotes,
            score: tally.score(),
        }
    }
}

/// Sort items by descending score.
///
/// The sort is stable: items with equal scores keep their input order.
pub fn rank_by_score<T, F>(mut items: Vec<T>, score: F) -> Vec<T>
where
    F: Fn(&T) -> i64,
{
    items.sort_by_key(|item| Reverse(score(item)));
    items
}
