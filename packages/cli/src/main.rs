mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    check, drag, flatten, init, move_node, resolve, validate, CheckArgs, DragArgs, FlattenArgs, InitArgs, MoveArgs,
    ResolveArgs, ValidateArgs,
};

/// Sitecraft CLI - inspect and edit page component trees
#[derive(Parser, Debug)]
#[command(name = "sitecraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a config file and an example page
    Init(InitArgs),

    /// Print a tree as a flat sortable list
    Flatten(FlattenArgs),

    /// Check whether a move is structurally legal
    Check(CheckArgs),

    /// Move a node and print the new tree
    Move(MoveArgs),

    /// Resolve a pointer position to before/after/inside
    Resolve(ResolveArgs),

    /// Replay a drag gesture through the drag state machine
    Drag(DragArgs),

    /// Check tree invariants and the flatten/rebuild round trip
    Validate(ValidateArgs),
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Flatten(args) => flatten(args, &cwd),
        Command::Check(args) => check(args, &cwd),
        Command::Move(args) => move_node(args, &cwd),
        Command::Resolve(args) => resolve(args, &cwd),
        Command::Drag(args) => drag(args, &cwd),
        Command::Validate(args) => validate(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
