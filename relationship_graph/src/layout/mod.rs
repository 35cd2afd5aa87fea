//! Layout engine - assigns coordinates to every graph node.
//!
//! Two strategies, tried in order:
//! 1. **Layered**: Delegate to a [`LayeredLayoutProvider`] that stacks nodes
//!    into layers (top-down by default)
//! 2. **Circular fallback**: If the provider fails, place the center on a
//!    fixed anchor and spread the peripherals around it at equal angles
//!
//! The engine never surfaces a layout failure: `layout` always resolves with
//! positioned nodes, possibly arranged by the fallback. It holds no state
//! between calls, so concurrent invocations are independent and callers are
//! responsible for discarding stale results.

mod circular;
mod layered;

pub use circular::*;
pub use layered::*;

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::warn;

use crate::graph_model::{GraphEdge, GraphNode, Position};

/// Fixed box size for a node, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeSize {
    pub width: f64,
    pub height: f64,
}

impl NodeSize {
    /// Create a box size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Layout constants, passed explicitly so tests can vary them.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Direction the layered strategy stacks its layers in.
    pub direction: LayerDirection,

    /// Canvas point the fallback arranges everything around.
    pub anchor: Position,

    /// Radius of the fallback circle.
    pub fallback_radius: f64,

    /// Box size for the center node.
    pub center_size: NodeSize,

    /// Box size for peripheral nodes.
    pub peripheral_size: NodeSize,

    /// Vertical gap between layers in the layered strategy.
    pub layer_spacing: f64,

    /// Horizontal gap between neighbors within a layer.
    pub node_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: LayerDirection::TopDown,
            anchor: Position::new(400.0, 300.0),
            fallback_radius: 200.0,
            center_size: NodeSize::new(180.0, 70.0),
            peripheral_size: NodeSize::new(120.0, 50.0),
            layer_spacing: 120.0,
            node_spacing: 40.0,
        }
    }
}

/// Direction in which layers are stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerDirection {
    /// Layers stack downward; the focal character sits on top.
    #[default]
    TopDown,
    /// Layers stack rightward.
    LeftRight,
}

/// A node reduced to what a layered provider needs: its id and box size.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeExtent {
    pub id: String,
    pub size: NodeSize,
}

/// An edge reduced to its endpoints; layered providers get no weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRef {
    pub source: String,
    pub target: String,
}

/// Options forwarded to the layered provider.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredOptions {
    pub direction: LayerDirection,
    pub layer_spacing: f64,
    pub node_spacing: f64,
}

/// Failures a layered layout provider can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("edge references unknown node `{0}`")]
    UnknownNode(String),

    #[error("graph contains a cycle, cannot assign layers")]
    CyclicGraph,

    #[error("layout provider failed: {0}")]
    Provider(String),
}

/// The layered-layout seam.
///
/// Implementations position nodes as box centers, keyed by node id, and may
/// omit ids they could not place; the engine keeps the pre-layout position
/// for those. Any error routes the engine to the circular fallback.
#[async_trait]
pub trait LayeredLayoutProvider: Send + Sync {
    async fn compute_positions(
        &self,
        nodes: &[NodeExtent],
        edges: &[EdgeRef],
        options: &LayeredOptions,
    ) -> Result<HashMap<String, Position>, LayoutError>;
}

/// The two-strategy layout engine.
///
/// Stateless apart from its configuration; every `layout` call is an
/// independent invocation.
#[derive(Debug, Clone)]
pub struct LayoutEngine<P = LongestPathLayout> {
    provider: P,
    config: LayoutConfig,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LongestPathLayout, LayoutConfig::default())
    }
}

impl<P: LayeredLayoutProvider> LayoutEngine<P> {
    /// Create an engine with the given provider and constants.
    pub fn new(provider: P, config: LayoutConfig) -> Self {
        Self { provider, config }
    }

    /// The engine's layout constants.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Assign a position to every node.
    ///
    /// Always resolves: on provider failure the error is logged once and the
    /// deterministic circular fallback supplies the positions instead. All
    /// non-position fields pass through untouched, in input order.
    pub async fn layout(&self, nodes: &[GraphNode], edges: &[GraphEdge]) -> Vec<GraphNode> {
        if nodes.is_empty() {
            return Vec::new();
        }

        let extents: Vec<NodeExtent> = nodes
            .iter()
            .map(|node| NodeExtent {
                id: node.id.clone(),
                size: if node.is_center {
                    self.config.center_size
                } else {
                    self.config.peripheral_size
                },
            })
            .collect();
        let links: Vec<EdgeRef> = edges
            .iter()
            .map(|edge| EdgeRef {
                source: edge.source_id.clone(),
                target: edge.target_id.clone(),
            })
            .collect();
        let options = LayeredOptions {
            direction: self.config.direction,
            layer_spacing: self.config.layer_spacing,
            node_spacing: self.config.node_spacing,
        };

        match self.provider.compute_positions(&extents, &links, &options).await {
            Ok(positions) => nodes
                .iter()
                .map(|node| {
                    let mut node = node.clone();
                    if let Some(position) = positions.get(&node.id) {
                        node.position = *position;
                    }
                    node
                })
                .collect(),
            Err(err) => {
                warn!(%err, "layered layout failed, falling back to circular placement");
                circular_layout(nodes, &self.config)
            }
        }
    }
}
