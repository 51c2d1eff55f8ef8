use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use ordered_tree::{OrderedBinaryTree, Traversal};

/// Builds a tree, removes some of its elements and prints what is left.
///
/// The defaults walk through every removal case: three leaves, a node left childless by those
/// removals, and finally a node with two children.
#[derive(Parser, Debug)]
#[command(name = "ordered-tree", version)]
struct Cli {
    /// Element stored in the root.
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    root: i64,

    /// Elements inserted after the root, in order.
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "5,20,9,8,2,18,21,22",
        allow_negative_numbers = true
    )]
    insert: Vec<i64>,

    /// Elements removed once everything is inserted, in order.
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "2,8,22,9,20",
        allow_negative_numbers = true
    )]
    remove: Vec<i64>,

    /// Traversals to print: pre, in, post or level.
    #[arg(long, value_delimiter = ',', default_value = "level")]
    order: Vec<Traversal>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut tree = OrderedBinaryTree::new(cli.root);
    for x in &cli.insert {
        tree.insert(*x)
            .with_context(|| format!("failed to insert {x}"))?;
    }
    tracing::info!(len = tree.len(), height = tree.height(), "tree built");

    for x in &cli.remove {
        tree.remove(x)
            .with_context(|| format!("failed to remove {x}"))?;
    }
    tracing::info!(len = tree.len(), height = tree.height(), "removals done");

    for order in &cli.order {
        let elements = tree
            .traverse(*order)
            .with_context(|| format!("failed to traverse in {order} order"))?;
        let line = elements
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!("{order}: {line}");
    }

    Ok(())
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
