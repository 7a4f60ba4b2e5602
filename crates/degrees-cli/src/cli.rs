use clap::{Args, Parser, Subcommand};

use degrees_lineage::NodeId;
use degrees_social::UserId;

#[derive(Parser)]
#[command(
    name = "degrees",
    about = "Graph exercises: ancestry search and social pathfinding",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Populate a random social graph and report shortest-path statistics
    Demo(DemoArgs),
    /// Find the earliest ancestor of a node in a parent/child edge list
    Ancestor(AncestorArgs),
}

#[derive(Args)]
pub struct DemoArgs {
    /// Number of users to create
    #[arg(long, default_value = "1000")]
    pub users: u32,

    /// Average number of friendships per user
    #[arg(long, default_value = "5")]
    pub avg_friendships: u32,

    /// RNG seed for a reproducible graph; omitted means a fresh one
    #[arg(long)]
    pub seed: Option<u64>,

    /// Friendship selection strategy
    #[arg(long, default_value = "exhaustive-shuffle")]
    pub strategy: Strategy,

    /// User to compute paths from
    #[arg(long, default_value = "1")]
    pub start: UserId,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum Strategy {
    ExhaustiveShuffle,
    RandomRetry,
}

#[derive(Args)]
pub struct AncestorArgs {
    /// The node whose earliest ancestor to find
    pub start: NodeId,

    /// Parent/child edge as `parent:child`; repeatable
    #[arg(short, long = "edge", value_name = "PARENT:CHILD", value_parser = parse_edge)]
    pub edges: Vec<(NodeId, NodeId)>,
}

/// Parse a `parent:child` pair of node IDs.
fn parse_edge(raw: &str) -> Result<(NodeId, NodeId), String> {
    let (parent, child) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected `parent:child`, got `{raw}`"))?;
    let parent = parent
        .trim()
        .parse()
        .map_err(|_| format!("invalid parent id `{parent}`"))?;
    let child = child
        .trim()
        .parse()
        .map_err(|_| format!("invalid child id `{child}`"))?;
    Ok((parent, child))
}
