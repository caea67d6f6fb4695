use serde::{Deserialize, Serialize};

use crate::trie::{letter_at, Trie, TrieNode};

/// Fixed canvas width in pixels.
pub const CANVAS_WIDTH: f64 = 800.0;
/// Canvas pixels allotted per level of the trie.
pub const LEVEL_HEIGHT: f64 = 70.0;
/// Vertical position of the root's center.
pub const TOP_MARGIN: f64 = 20.0;
/// Radius of a rendered node; edges start at the parent's bottom anchor.
pub const NODE_RADIUS: f64 = 20.0;
/// Vertical distance between a parent's center and its children's centers.
pub const LEVEL_SPACING: f64 = 60.0;

/// One step of a layout pass, consumed in order by a renderer.
///
/// `Canvas` always comes first and doubles as the clear signal: display
/// indices from any earlier pass are invalid once it is seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Canvas {
        width: f64,
        height: f64,
    },
    Node {
        display_index: usize,
        x: f64,
        y: f64,
        is_end_of_word: bool,
        /// The character on the edge leading here; `None` for the root.
        label: Option<char>,
    },
    Edge {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
}

/// Runs a layout pass over the trie.
///
/// Performs a pre-order depth-first traversal, assigning each node a fresh
/// sequential display index (the counter restarts at 0 every pass) and a
/// position. The root sits at the horizontal midpoint; each node's present
/// children split their parent's allotted width into equal slots, in
/// ascending letter order, one level further down. Subtree size does not
/// weight the slots.
pub fn layout(trie: &mut Trie) -> Vec<DrawCommand> {
    let height = trie.height();

    let mut commands = vec![DrawCommand::Canvas {
        width: CANVAS_WIDTH,
        height: height as f64 * LEVEL_HEIGHT,
    }];

    let mut counter = 0;
    place_node(
        &mut trie.root,
        CANVAS_WIDTH / 2.0,
        TOP_MARGIN,
        CANVAS_WIDTH / 2.0,
        None,
        &mut counter,
        &mut commands,
    );

    commands
}

fn place_node(
    node: &mut TrieNode,
    x: f64,
    y: f64,
    width: f64,
    label: Option<char>,
    counter: &mut usize,
    commands: &mut Vec<DrawCommand>,
) {
    let display_index = *counter;
    *counter += 1;
    node.display_index = Some(display_index);

    commands.push(DrawCommand::Node {
        display_index,
        x,
        y,
        is_end_of_word: node.is_end_of_word,
        label,
    });

    let present: Vec<(usize, &mut TrieNode)> = node
        .children
        .iter_mut()
        .enumerate()
        .filter_map(|(i, child)| child.as_deref_mut().map(|child| (i, child)))
        .collect();

    let count = present.len();
    if count == 0 {
        return;
    }

    let slot = width / count as f64;
    let left = x - width / 2.0;
    for (position, (offset, child)) in present.into_iter().enumerate() {
        let child_x = left + (position as f64 + 0.5) * slot;
        let child_y = y + LEVEL_SPACING;

        commands.push(DrawCommand::Edge {
            x1: x,
            y1: y + NODE_RADIUS,
            x2: child_x,
            y2: child_y,
        });
        place_node(
            child,
            child_x,
            child_y,
            slot,
            Some(letter_at(offset)),
            counter,
            commands,
        );
    }
}
