use crate::layout::{DrawCommand, NODE_RADIUS};

/// Fill for a node where an inserted word terminates.
pub const END_OF_WORD_FILL: &str = "#ffcc00";
/// Fill for every other node.
pub const PLAIN_FILL: &str = "#f0f0f0";

/// Renders a layout pass as a standalone SVG document.
///
/// A `Canvas` command discards everything rendered so far and opens a fresh
/// document, so a stream containing several passes yields only the last one.
/// Each node carries a `data-index` attribute holding its display index, the
/// correlation key for updating its fill later.
pub fn render_svg(commands: &[DrawCommand]) -> String {
    let mut svg = String::new();

    for command in commands {
        match command {
            DrawCommand::Canvas { width, height } => {
                svg.clear();
                svg.push_str(&format!(
                    "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
                    width, height
                ));
            }
            DrawCommand::Node {
                display_index,
                x,
                y,
                is_end_of_word,
                label,
            } => {
                let fill = if *is_end_of_word {
                    END_OF_WORD_FILL
                } else {
                    PLAIN_FILL
                };
                svg.push_str(&format!(
                    "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"#000\" data-index=\"{}\"/>\n",
                    x, y, NODE_RADIUS, fill, display_index
                ));
                svg.push_str(&format!(
                    "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\">{}</text>\n",
                    x,
                    y + 5.0,
                    label.map(String::from).unwrap_or_default()
                ));
            }
            DrawCommand::Edge { x1, y1, x2, y2 } => {
                svg.push_str(&format!(
                    "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#000\"/>\n",
                    x1, y1, x2, y2
                ));
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}
