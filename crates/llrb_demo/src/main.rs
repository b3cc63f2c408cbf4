//! Builds a left-leaning red-black tree from the command line and prints its
//! traversals.

use anyhow::{Result, ensure};
use clap::{Parser, ValueEnum};
use llrb::{Node, Tree};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "llrb-demo")]
#[command(about = "Build a left-leaning red-black tree and print its traversals", long_about = None)]
struct Cli {
    /// Key of the initial root node
    #[arg(default_value_t = 1.0)]
    root: f64,

    /// Keys inserted after the root, in order
    #[arg(short, long, value_delimiter = ',', default_values_t = [3.0, 9.0, 13.0])]
    keys: Vec<f64>,

    /// Traversal to print
    #[arg(short, long, value_enum, default_value_t = Order::All)]
    order: Order,

    /// Print the bracketed structure dump
    #[arg(long)]
    dump: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Order {
    Pre,
    In,
    Post,
    Level,
    All,
}

impl Order {
    const EACH: [Order; 4] = [Order::Pre, Order::In, Order::Post, Order::Level];

    fn label(self) -> &'static str {
        match self {
            Order::Pre => "PreOrder",
            Order::In => "InOrder",
            Order::Post => "PostOrder",
            Order::Level => "LevelOrder",
            Order::All => "All",
        }
    }
}

fn render(tree: &Tree<f64>, order: Order) -> String {
    let keys: Vec<String> = match order {
        Order::Pre => tree.pre_order().map(f64::to_string).collect(),
        Order::In => tree.in_order().map(f64::to_string).collect(),
        Order::Post => tree.post_order().map(f64::to_string).collect(),
        Order::Level => tree
            .level_order()
            .into_iter()
            .map(|n| n.key().to_string())
            .collect(),
        Order::All => {
            return Order::EACH
                .iter()
                .map(|&o| render(tree, o))
                .collect::<Vec<_>>()
                .join("\n");
        }
    };
    format!("{}: {}", order.label(), keys.join(" "))
}

fn build(root: f64, keys: &[f64]) -> Result<Tree<f64>> {
    for key in std::iter::once(&root).chain(keys) {
        ensure!(!key.is_nan(), "NaN has no place in a total order");
    }
    let mut tree = Tree::new(root);
    for &key in keys {
        tree.insert(Node::new(key));
        debug!(key, len = tree.len(), "inserted");
    }
    let black_height = tree.validate()?;
    info!(
        len = tree.len(),
        height = tree.height(),
        black_height,
        "tree built"
    );
    Ok(tree)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let tree = build(cli.root, &cli.keys)?;
    println!("{}", render(&tree, cli.order));
    if cli.dump {
        println!("{tree}");
    }
    Ok(())
}
