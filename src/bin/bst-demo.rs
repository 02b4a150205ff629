//! Builds a tree from the given keys and prints its metrics and traversals.

use std::io::{self, Write};
use std::process::ExitCode;

use bst::{Node, Tree};
use clap::Parser;
use thiserror::Error;

/// Insert keys into a binary search tree and report on its shape.
#[derive(Parser, Debug)]
#[command(name = "bst-demo")]
#[command(about = "Insert keys into a binary search tree and report on its shape")]
struct Args {
    /// Capacity of the queue used for the level-order traversal
    #[arg(short = 'c', long = "capacity", default_value_t = 20)]
    capacity: usize,

    /// Keys to insert, in order
    #[arg(
        allow_negative_numbers = true,
        default_values_t = [10, 5, 500, -500, 20, -600]
    )]
    keys: Vec<i32>,
}

/// Anything that stops the report partway through.
#[derive(Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Tree(#[from] bst::Error),
    #[error("writing report: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let args = Args::parse();
    let stdout = io::stdout();

    match run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[bst-demo] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, out: &mut impl Write) -> Result<(), DemoError> {
    let mut tree = Tree::new();
    let (first, rest) = args.keys.split_at(args.keys.len().min(3));

    tree.extend(first.iter().copied());
    writeln!(
        out,
        "{}, {}, {}",
        describe(tree.root()),
        describe(tree.root().and_then(|n| n.left().root())),
        describe(tree.root().and_then(|n| n.right().root())),
    )?;
    tree.extend(rest.iter().copied());

    writeln!(out, "Max element is: {}", tree.maximum()?)?;
    writeln!(out, "Height of tree is: {}", tree.height())?;
    writeln!(out, "Size of tree is: {}", tree.size())?;
    writeln!(out, "Is tree balanced (0/1): {}", u8::from(tree.is_balanced()))?;

    write_keys(out, "In-order traversal", tree.in_order())?;
    write_keys(out, "Pre-order traversal", tree.pre_order())?;
    write_keys(out, "Post-order traversal", tree.post_order())?;
    write_keys(out, "Level-order traversal", tree.level_order(args.capacity)?)?;

    writeln!(out, "Is BST?: {}", u8::from(tree.is_valid_bst()))?;

    Ok(())
}

fn describe(node: Option<&Node>) -> String {
    node.map_or_else(|| "-".to_string(), |n| n.key().to_string())
}

fn write_keys(
    out: &mut impl Write,
    title: &str,
    keys: impl IntoIterator<Item = i32>,
) -> io::Result<()> {
    writeln!(out, "{}:", title)?;
    for key in keys {
        writeln!(out, "{}", key)?;
    }
    Ok(())
}
