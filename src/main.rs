use std::fs::File;
use std::sync::Arc;

use clap::{Parser, Subcommand};

mod layout;
mod render;
mod search;
mod svg;
mod trace;
mod trie;

/// A prefix-tree visualizer for your terminal.
#[derive(Parser, Debug)]
#[command(version, about = "Builds a trie from words and visualizes it.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay the trie out and emit it as SVG or JSON draw commands.
    Render(render::RenderArgs),
    /// Search the trie, tracing the descent node by node.
    Search(search::SearchArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let file = File::create("log.txt")?;
    tracing_subscriber::fmt().with_writer(Arc::new(file)).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Render(args) => render::execute_render(args).await,
        Command::Search(args) => search::execute_search(args).await,
    }
}
