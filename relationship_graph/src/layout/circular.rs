//! Circular fallback layout.
//!
//! Deterministic and O(n): given the same node array (count, `is_center`
//! flags, order), the output coordinates are identical, so tests can assert
//! exact positions.

use std::f64::consts::PI;

use crate::graph_model::GraphNode;

use super::LayoutConfig;

/// Place every node on or around the configured anchor.
///
/// Center-flagged nodes sit exactly on the anchor (all of them, if a
/// malformed input carries several). Non-center nodes go on the circle of
/// `fallback_radius` around the anchor, equally spaced, starting straight up
/// at -90 degrees and proceeding clockwise in input order. The anchor is a
/// layout constant: peripherals are spaced the same way whether or not a
/// center node occupies it.
pub fn circular_layout(nodes: &[GraphNode], config: &LayoutConfig) -> Vec<GraphNode> {
    let peripheral_count = nodes.iter().filter(|node| !node.is_center).count();

    let mut placed = Vec::with_capacity(nodes.len());
    let mut index = 0usize;
    for node in nodes {
        let mut node = node.clone();
        if node.is_center {
            node.position = config.anchor;
        } else {
            let angle = -PI / 2.0 + index as f64 * (2.0 * PI / peripheral_count as f64);
            index += 1;
            node.position.x = config.anchor.x + config.fallback_radius * angle.cos();
            node.position.y = config.anchor.y + config.fallback_radius * angle.sin();
        }
        placed.push(node);
    }
    placed
}
