use std::time::Duration;

use clap::Args;
use tokio::time::Instant;
use tracing::debug;

use crate::layout;
use crate::trace::{trace_search, DelayPacer, TraceEvent};
use crate::trie::Trie;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Words to insert into the trie before searching.
    #[arg(short, long = "word")]
    words: Vec<String>,
    /// Milliseconds each visited node stays highlighted.
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,
    /// The word to search for.
    #[arg(name = "QUERY")]
    query: String,
}

pub async fn execute_search(args: SearchArgs) -> anyhow::Result<()> {
    let mut trie = Trie::new();
    for word in &args.words {
        trie.insert(word)?;
    }

    // A layout pass assigns the display indices the trace reports.
    let commands = layout::layout(&mut trie);
    debug!("Laid out {} draw commands before tracing", commands.len());

    let pacer = DelayPacer {
        delay: Duration::from_millis(args.delay_ms),
    };

    let found = {
        let start = Instant::now();
        let found = trace_search(&trie, &args.query, &pacer, &mut print_step).await?;
        let end = Instant::now();
        debug!("Trace took {} ms", (end - start).as_millis());
        found
    };

    if found {
        println!("Word found: {}", args.query);
    } else {
        println!("Word not found: {}", args.query);
    }

    Ok(())
}

fn print_step(event: TraceEvent) {
    match event {
        TraceEvent::Highlight {
            display_index: Some(index),
        } => println!("=> node {}", index),
        TraceEvent::Restore {
            display_index: Some(index),
            is_end_of_word: true,
        } => println!("   node {} ends a word", index),
        _ => {}
    }
}
