//! # Relationship Graph (Constellation)
//!
//! The graph engine behind the character relationship visualizations. This
//! crate consumes validated content from `character_data`, builds the
//! star-topology graph around a focal character, and assigns coordinates to
//! every node.
//!
//! ## Core Components
//!
//! - **graph_model**: Unpositioned nodes/edges and the star-graph builder
//! - **layout**: The two-strategy layout engine (layered placement with a
//!   deterministic circular fallback)
//!
//! ## Design Philosophy
//!
//! - **Pure rebuilds**: Every graph is recomputed from scratch; there is no
//!   persisted or mutable graph state between builds
//! - **Always renderable**: Malformed records and layout failures degrade to
//!   an empty graph or a fallback arrangement, never to an error the
//!   renderer has to handle
//! - **Star topology only**: One center node connected to its peripherals;
//!   arbitrary topologies are out of scope

pub mod graph_model;
pub mod layout;

pub use graph_model::*;
pub use layout::*;
