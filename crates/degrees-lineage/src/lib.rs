//! Earliest-ancestor search over directed parent/child edge lists.
//!
//! Given a static list of (parent, child) edges, finds the ancestor of a
//! node at maximum depth, tie-broken by smallest identifier. Supports
//! one-shot queries via [`earliest_ancestor`] and repeated queries via
//! [`AncestryGraph`], which indexes the edge list once.

pub mod graph;

pub use graph::{earliest_ancestor, AncestryGraph, NodeId};
