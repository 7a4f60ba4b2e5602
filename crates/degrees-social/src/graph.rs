//! The social graph structure and its traversal query.
//!
//! [`SocialGraph`] keeps two maps: user records keyed by ID, and a
//! friendship adjacency keyed by ID. Every user has an adjacency entry,
//! created together with the record.
//!
//! # Invariants
//!
//! - User IDs are assigned sequentially starting at 1 and never reused.
//! - Friendships are symmetric: `b` is in `a`'s set iff `a` is in `b`'s.
//! - No user is their own friend, and no pair is stored twice.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SocialError, SocialResult};
use crate::user::{User, UserId};

/// An in-memory social graph: users plus symmetric friendship adjacency.
///
/// Grows only through [`add_user`] and [`add_friendship`];
/// [`populate`](SocialGraph::populate) resets and rebuilds it wholesale.
///
/// [`add_user`]: SocialGraph::add_user
/// [`add_friendship`]: SocialGraph::add_friendship
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialGraph {
    /// The most recently assigned user ID. 0 means no users yet.
    pub(crate) last_id: UserId,
    /// All users, keyed by their ID.
    pub(crate) users: HashMap<UserId, User>,
    /// Friendship adjacency: user -> set of friend IDs.
    pub(crate) friendships: HashMap<UserId, HashSet<UserId>>,
}

impl SocialGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users in the graph.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` if the graph has no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    // ---------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------

    /// Create a user with the next sequential ID and an empty friend set.
    ///
    /// Returns the assigned ID. Names are not checked for uniqueness.
    pub fn add_user(&mut self, name: impl Into<String>) -> UserId {
        self.last_id += 1;
        let id = self.last_id;
        self.users.insert(id, User::new(name));
        self.friendships.insert(id, HashSet::new());
        debug!(user = id, "added user");
        id
    }

    /// Create a bidirectional friendship between two existing users.
    ///
    /// Rejects self-friendship, unknown IDs, and pairs that already exist
    /// in either direction. On success both directions are inserted as one
    /// logical operation; no half-added pair is ever observable.
    pub fn add_friendship(&mut self, a: UserId, b: UserId) -> SocialResult<()> {
        if a == b {
            return Err(SocialError::SelfFriendship(a));
        }
        for id in [a, b] {
            if !self.users.contains_key(&id) {
                return Err(SocialError::UnknownUser(id));
            }
        }
        let exists = self.friendships.get(&a).is_some_and(|set| set.contains(&b))
            || self.friendships.get(&b).is_some_and(|set| set.contains(&a));
        if exists {
            return Err(SocialError::DuplicateFriendship { a, b });
        }

        self.friendships.entry(a).or_default().insert(b);
        self.friendships.entry(b).or_default().insert(a);
        debug!(a, b, "added friendship");
        Ok(())
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    /// Retrieve a user record by ID.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// Iterate over all users as (ID, record) pairs, in no fixed order.
    pub fn users(&self) -> impl Iterator<Item = (UserId, &User)> {
        self.users.iter().map(|(&id, user)| (id, user))
    }

    /// The friend set of a user, or `None` for an unknown ID.
    pub fn friends_of(&self, id: UserId) -> Option<&HashSet<UserId>> {
        self.friendships.get(&id)
    }

    /// Total number of friendships (each symmetric pair counted once).
    pub fn friendship_count(&self) -> usize {
        self.friendships.values().map(HashSet::len).sum::<usize>() / 2
    }

    // ---------------------------------------------------------------
    // Traversal
    // ---------------------------------------------------------------

    /// Shortest friendship path from `start` to every reachable user.
    ///
    /// Breadth-first traversal: the first time a user is dequeued, the path
    /// that carried them is the shortest (the graph is unweighted). The
    /// result maps each reachable ID to the full path from `start`,
    /// inclusive of both endpoints, with `start` itself mapped to
    /// `[start]`. Unreached users are absent from the map. An unknown
    /// `start` yields an empty map.
    pub fn all_social_paths(&self, start: UserId) -> HashMap<UserId, Vec<UserId>> {
        let mut paths: HashMap<UserId, Vec<UserId>> = HashMap::new();
        if !self.users.contains_key(&start) {
            return paths;
        }

        let mut queue: VecDeque<(UserId, Vec<UserId>)> = VecDeque::new();
        queue.push_back((start, vec![start]));

        while let Some((user, path)) = queue.pop_front() {
            if paths.contains_key(&user) {
                continue;
            }
            if let Some(friends) = self.friendships.get(&user) {
                for &friend in friends {
                    if !paths.contains_key(&friend) {
                        let mut extended = path.clone();
                        extended.push(friend);
                        queue.push_back((friend, extended));
                    }
                }
            }
            paths.insert(user, path);
        }

        debug!(start, reachable = paths.len(), "computed social paths");
        paths
    }
}
