//! Graph model - the unpositioned star graph around a focal character.
//!
//! The model consists of:
//! - **Nodes**: One center node for the focal character plus one peripheral
//!   node per distinct relationship target
//! - **Edges**: One directed edge per relationship, always center to
//!   peripheral
//!
//! Positions on these types are placeholders until the layout engine runs.

mod builder;
mod node;

pub use builder::*;
pub use node::*;
