use std::time::Instant;

use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use degrees_lineage::AncestryGraph;
use degrees_social::{PopulateStrategy, SocialGraph};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Demo(args) => cmd_demo(args),
        Command::Ancestor(args) => cmd_ancestor(args),
    }
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let strategy = match args.strategy {
        Strategy::ExhaustiveShuffle => PopulateStrategy::ExhaustiveShuffle,
        Strategy::RandomRetry => PopulateStrategy::RandomRetry,
    };

    let mut graph = SocialGraph::new();
    let started = Instant::now();
    match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            graph.populate_with(args.users, args.avg_friendships, strategy, &mut rng);
        }
        None => {
            graph.populate_with(
                args.users,
                args.avg_friendships,
                strategy,
                &mut rand::thread_rng(),
            );
        }
    }
    let elapsed = started.elapsed();

    println!(
        "{} Populated {} users with {} friendships in {:.2?}",
        "✓".green().bold(),
        graph.len().to_string().bold(),
        graph.friendship_count().to_string().bold(),
        elapsed,
    );

    let paths = graph.all_social_paths(args.start);
    if paths.is_empty() {
        println!("User {} does not exist.", args.start.to_string().yellow());
        return Ok(());
    }

    let total_len: usize = paths.values().map(Vec::len).sum();
    let mean_len = total_len as f64 / paths.len() as f64;
    println!(
        "  Reachable from user {}: {}",
        args.start.to_string().yellow(),
        paths.len().to_string().bold(),
    );
    println!("  Mean path length: {}", format!("{mean_len:.2}").cyan());
    Ok(())
}

fn cmd_ancestor(args: AncestorArgs) -> anyhow::Result<()> {
    let graph = AncestryGraph::from_edges(&args.edges);
    match graph.earliest_ancestor(args.start) {
        Some(ancestor) => println!(
            "{} Earliest ancestor of {}: {}",
            "✓".green(),
            args.start.to_string().yellow(),
            ancestor.to_string().bold(),
        ),
        None => println!("Node {} has no ancestors.", args.start.to_string().yellow()),
    }
    Ok(())
}
