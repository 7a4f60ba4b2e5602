//! Randomized invariants for the BFS shortest-path query.

use std::collections::{HashMap, VecDeque};

use proptest::prelude::*;

use degrees_social::{SocialGraph, UserId};

/// Distance-only BFS used as an independent reference.
fn reference_distances(graph: &SocialGraph, start: UserId) -> HashMap<UserId, usize> {
    let mut dist = HashMap::new();
    dist.insert(start, 0usize);
    let mut queue = VecDeque::new();
    queue.push_back(start);
    while let Some(user) = queue.pop_front() {
        let d = dist[&user];
        if let Some(friends) = graph.friends_of(user) {
            for &friend in friends {
                if !dist.contains_key(&friend) {
                    dist.insert(friend, d + 1);
                    queue.push_back(friend);
                }
            }
        }
    }
    dist
}

/// Build a graph of `num_users` users and whatever subset of `raw_edges`
/// the mutation rules accept.
fn build_graph(num_users: u32, raw_edges: &[(u32, u32)]) -> SocialGraph {
    let mut graph = SocialGraph::new();
    for i in 1..=num_users {
        graph.add_user(format!("user_{i}"));
    }
    for &(a, b) in raw_edges {
        let (a, b) = (a % num_users + 1, b % num_users + 1);
        // Self-picks and duplicates are expected rejections.
        let _ = graph.add_friendship(a, b);
    }
    graph
}

proptest! {
    #[test]
    fn paths_match_reference_distances(
        num_users in 2u32..16,
        raw_edges in prop::collection::vec((0u32..64, 0u32..64), 0..48),
    ) {
        let graph = build_graph(num_users, &raw_edges);
        let paths = graph.all_social_paths(1);
        let dist = reference_distances(&graph, 1);

        prop_assert_eq!(paths.len(), dist.len());
        for (user, path) in &paths {
            prop_assert_eq!(path.first(), Some(&1));
            prop_assert_eq!(path.last(), Some(user));
            prop_assert_eq!(path.len() - 1, dist[user]);
        }
    }

    #[test]
    fn every_hop_is_a_friendship(
        num_users in 2u32..16,
        raw_edges in prop::collection::vec((0u32..64, 0u32..64), 0..48),
    ) {
        let graph = build_graph(num_users, &raw_edges);
        for path in graph.all_social_paths(1).values() {
            for hop in path.windows(2) {
                prop_assert!(
                    graph.friends_of(hop[0]).is_some_and(|f| f.contains(&hop[1]))
                );
            }
        }
    }

    #[test]
    fn friendships_stay_symmetric(
        num_users in 2u32..16,
        raw_edges in prop::collection::vec((0u32..64, 0u32..64), 0..48),
    ) {
        let graph = build_graph(num_users, &raw_edges);
        for (id, _) in graph.users() {
            let friends = graph.friends_of(id).unwrap();
            prop_assert!(!friends.contains(&id));
            for &friend in friends {
                prop_assert!(
                    graph.friends_of(friend).is_some_and(|f| f.contains(&id))
                );
            }
        }
    }
}
