use std::io::IsTerminal;

use clap::{Args, ValueEnum};
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use crate::layout;
use crate::svg;
use crate::trie::Trie;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Words to insert into the trie.
    #[arg(short, long = "word")]
    words: Vec<String>,
    /// Words to delete again after insertion.
    #[arg(short, long = "delete")]
    deletes: Vec<String>,
    /// Output format: the rendered SVG, or the raw draw commands as JSON.
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,
    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Format {
    Svg,
    Json,
}

pub async fn execute_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut words = args.words;

    // Piped input is treated as extra words, one per whitespace run.
    let mut stdin = tokio::io::stdin();
    if !std::io::stdin().is_terminal() {
        let mut buf = Vec::with_capacity(256);
        stdin.read_to_end(&mut buf).await?;
        words.extend(
            String::from_utf8_lossy(&buf)
                .split_whitespace()
                .map(str::to_string),
        );
    }

    let mut trie = Trie::new();
    for word in &words {
        trie.insert(word)?;
        info!("Word inserted: {}", word);
    }
    for word in &args.deletes {
        if trie.remove(word)? {
            info!("Word deleted: {}", word);
        } else {
            info!("Word not found: {}", word);
        }
    }

    let commands = layout::layout(&mut trie);
    debug!("Layout produced {} draw commands", commands.len());

    let rendered = match args.format {
        Format::Svg => svg::render_svg(&commands),
        Format::Json => serde_json::to_string_pretty(&commands)?,
    };

    match args.output {
        Some(path) => tokio::fs::write(path, rendered).await?,
        None => println!("{}", rendered),
    }

    Ok(())
}
