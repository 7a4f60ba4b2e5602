//! Random population of a [`SocialGraph`].
//!
//! Replaces the whole graph with `num_users` users and approximately
//! `num_users * avg_friendships / 2` randomly chosen friendships. Two
//! selection strategies are provided; [`PopulateStrategy::ExhaustiveShuffle`]
//! is the default because it terminates deterministically and hits the
//! target count exactly whenever enough pairs exist.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::graph::SocialGraph;
use crate::user::UserId;

/// How [`SocialGraph::populate_with`] selects random friendships.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PopulateStrategy {
    /// Enumerate every unordered pair, shuffle, take the target prefix.
    /// Exact friendship count and guaranteed termination; O(n^2) pair
    /// enumeration.
    #[default]
    ExhaustiveShuffle,
    /// Draw two uniformly random IDs per attempt and retry on self-pick or
    /// duplicate, within a bounded retry budget. Approximate count when the
    /// budget runs out; cheap for sparse graphs.
    RandomRetry,
}

/// Retry attempts allowed per requested friendship under
/// [`PopulateStrategy::RandomRetry`].
const RETRY_BUDGET_FACTOR: usize = 20;

impl SocialGraph {
    /// Reset the graph and rebuild it with random friendships.
    ///
    /// Uses the thread-local RNG and the default strategy. The previous
    /// users and friendships are discarded entirely.
    pub fn populate(&mut self, num_users: u32, avg_friendships: u32) {
        self.populate_with(
            num_users,
            avg_friendships,
            PopulateStrategy::default(),
            &mut rand::thread_rng(),
        );
    }

    /// Reset the graph and rebuild it with random friendships, using an
    /// explicit strategy and RNG.
    ///
    /// Creates users named `user_1` through `user_{num_users}`, then aims
    /// for `num_users * avg_friendships / 2` friendships (the average
    /// counts both endpoints of every pair). A seeded RNG makes the result
    /// fully deterministic. `avg_friendships` should stay below
    /// `num_users`; asking for more than the graph can hold is clamped,
    /// not an error.
    pub fn populate_with(
        &mut self,
        num_users: u32,
        avg_friendships: u32,
        strategy: PopulateStrategy,
        rng: &mut impl Rng,
    ) {
        self.last_id = 0;
        self.users.clear();
        self.friendships.clear();

        for i in 1..=num_users {
            self.add_user(format!("user_{i}"));
        }

        let target = (num_users as usize * avg_friendships as usize) / 2;
        match strategy {
            PopulateStrategy::ExhaustiveShuffle => self.exhaustive_shuffle(target, rng),
            PopulateStrategy::RandomRetry => self.random_retry(num_users, target, rng),
        }
        debug!(
            users = num_users,
            friendships = self.friendship_count(),
            ?strategy,
            "populated graph"
        );
    }

    /// Shuffle all possible unordered pairs and insert a prefix of them.
    fn exhaustive_shuffle(&mut self, target: usize, rng: &mut impl Rng) {
        let mut pairs: Vec<(UserId, UserId)> = Vec::new();
        for a in 1..=self.last_id {
            for b in (a + 1)..=self.last_id {
                pairs.push((a, b));
            }
        }
        if target > pairs.len() {
            warn!(
                target,
                possible = pairs.len(),
                "friendship target exceeds possible pairs; clamping"
            );
        }

        pairs.shuffle(rng);
        for &(a, b) in pairs.iter().take(target) {
            if let Err(err) = self.add_friendship(a, b) {
                // Pairs are distinct and non-reflexive; this cannot trigger.
                warn!(%err, a, b, "skipped friendship during population");
            }
        }
    }

    /// Draw random pairs until the target is met or the budget is spent.
    fn random_retry(&mut self, num_users: u32, target: usize, rng: &mut impl Rng) {
        let mut created = 0usize;
        let mut budget = target.saturating_mul(RETRY_BUDGET_FACTOR);

        while created < target && budget > 0 {
            budget -= 1;
            let a = rng.gen_range(1..=num_users);
            let b = rng.gen_range(1..=num_users);
            // Self-picks and duplicates are expected rejections; draw again.
            if self.add_friendship(a, b).is_ok() {
                created += 1;
            }
        }

        if created < target {
            warn!(
                created,
                target, "retry budget exhausted before reaching friendship target"
            );
        }
    }
}
