use std::time::Duration;

use serde::Serialize;

use crate::trie::{word_offsets, Trie, TrieError};

/// Pacing between trace steps. The search command pauses on every node it
/// visits so a renderer (or a watching human) can keep up; tests inject an
/// instant pacer instead.
#[async_trait::async_trait]
pub trait Pacer {
    async fn pause(&self);
}

/// Pauses for a fixed delay between steps.
#[derive(Debug, Clone, Copy)]
pub struct DelayPacer {
    pub delay: Duration,
}

#[async_trait::async_trait]
impl Pacer for DelayPacer {
    async fn pause(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// One step of a traced search, for the renderer to mirror.
///
/// `display_index` is the value assigned by the most recent layout pass,
/// or `None` if the node has never been laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// The descent reached this node; it stays highlighted until the pacer
    /// releases the step.
    Highlight { display_index: Option<usize> },
    /// The pause elapsed; the node goes back to its normal appearance,
    /// which depends on its current end-of-word state.
    Restore {
        display_index: Option<usize>,
        is_end_of_word: bool,
    },
}

/// Runs the same descent as [`Trie::search`], but paced, emitting a
/// highlight/restore event pair for every node on the path (the root and
/// the final node included).
///
/// If a required child is absent the trace halts and reports `false`
/// without emitting anything further. Each step always completes its pause
/// before the next is considered.
pub async fn trace_search(
    trie: &Trie,
    word: &str,
    pacer: &dyn Pacer,
    on_event: &mut dyn FnMut(TraceEvent),
) -> Result<bool, TrieError> {
    let offsets = word_offsets(word)?;

    let mut current = &trie.root;
    let mut remaining = offsets.into_iter();
    loop {
        on_event(TraceEvent::Highlight {
            display_index: current.display_index,
        });
        pacer.pause().await;
        on_event(TraceEvent::Restore {
            display_index: current.display_index,
            is_end_of_word: current.is_end_of_word,
        });

        match remaining.next() {
            None => return Ok(current.is_end_of_word),
            Some(index) => match current.children[index].as_deref() {
                Some(child) => current = child,
                None => return Ok(false),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout;

    /// A pacer that never sleeps, so traces run to completion instantly.
    struct InstantPacer;

    #[async_trait::async_trait]
    impl Pacer for InstantPacer {
        async fn pause(&self) {}
    }

    async fn collect(trie: &Trie, word: &str) -> (Result<bool, TrieError>, Vec<TraceEvent>) {
        let mut events = Vec::new();
        let outcome = trace_search(trie, word, &InstantPacer, &mut |event| {
            events.push(event)
        })
        .await;
        (outcome, events)
    }

    #[tokio::test]
    async fn traces_every_node_on_a_found_path() {
        let mut trie = Trie::new();
        trie.insert("cat").unwrap();
        layout(&mut trie);

        let (outcome, events) = collect(&trie, "cat").await;
        assert_eq!(outcome, Ok(true));

        // Root, c, ca, cat: a highlight/restore pair each.
        assert_eq!(events.len(), 8);
        assert_eq!(
            events[0],
            TraceEvent::Highlight {
                display_index: Some(0)
            }
        );
        assert_eq!(
            events[7],
            TraceEvent::Restore {
                display_index: Some(3),
                is_end_of_word: true
            }
        );
    }

    #[tokio::test]
    async fn highlight_order_follows_the_descent() {
        let mut trie = Trie::new();
        trie.insert("cat").unwrap();
        trie.insert("car").unwrap();
        trie.insert("dog").unwrap();
        layout(&mut trie);

        let (outcome, events) = collect(&trie, "cat").await;
        assert_eq!(outcome, Ok(true));

        let highlighted: Vec<Option<usize>> = events
            .iter()
            .filter_map(|event| match event {
                TraceEvent::Highlight { display_index } => Some(*display_index),
                _ => None,
            })
            .collect();
        // Pre-order indices: root 0, c 1, ca 2, car 3, cat 4.
        assert_eq!(highlighted, vec![Some(0), Some(1), Some(2), Some(4)]);
    }

    #[tokio::test]
    async fn halts_silently_when_a_child_is_missing() {
        let mut trie = Trie::new();
        trie.insert("cat").unwrap();
        layout(&mut trie);

        let (outcome, events) = collect(&trie, "dog").await;
        assert_eq!(outcome, Ok(false));

        // Only the root was visited.
        assert_eq!(events.len(), 2);
    }

    #[tokio::test]
    async fn prefix_of_a_word_traces_fully_but_is_not_found() {
        let mut trie = Trie::new();
        trie.insert("cat").unwrap();
        layout(&mut trie);

        let (outcome, events) = collect(&trie, "ca").await;
        assert_eq!(outcome, Ok(false));
        assert_eq!(events.len(), 6);
        assert_eq!(
            events[5],
            TraceEvent::Restore {
                display_index: Some(2),
                is_end_of_word: false
            }
        );
    }

    #[tokio::test]
    async fn empty_query_reports_the_root() {
        let mut trie = Trie::new();
        layout(&mut trie);

        let (outcome, events) = collect(&trie, "").await;
        assert_eq!(outcome, Ok(false));
        assert_eq!(events.len(), 2);

        let mut trie = Trie::new();
        trie.insert("").unwrap();
        let (outcome, _) = collect(&trie, "").await;
        assert_eq!(outcome, Ok(true));
    }

    #[tokio::test]
    async fn invalid_characters_error_before_any_event() {
        let trie = Trie::new();
        let (outcome, events) = collect(&trie, "caT").await;
        assert_eq!(outcome, Err(TrieError::InvalidCharacter('T')));
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn unlaid_out_nodes_trace_without_display_indices() {
        let mut trie = Trie::new();
        trie.insert("a").unwrap();

        let (outcome, events) = collect(&trie, "a").await;
        assert_eq!(outcome, Ok(true));
        assert_eq!(
            events[0],
            TraceEvent::Highlight {
                display_index: None
            }
        );
    }

    #[tokio::test]
    async fn restore_reflects_a_removal_since_layout() {
        let mut trie = Trie::new();
        trie.insert("a").unwrap();
        layout(&mut trie);
        trie.remove("a").unwrap();

        let (outcome, events) = collect(&trie, "a").await;
        assert_eq!(outcome, Ok(false));
        assert_eq!(
            events[3],
            TraceEvent::Restore {
                display_index: Some(1),
                is_end_of_word: false
            }
        );
    }
}
