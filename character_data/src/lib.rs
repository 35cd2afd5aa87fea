//! # Character Data
//!
//! The "Content Bible" crate - character identities, display metadata, and
//! declared relationships for the Constellation graph. This crate is the
//! single source of truth for character content and does not contain any
//! layout logic.
//!
//! ## Core Components
//!
//! - **characters**: Character identifiers and the display-metadata directory
//! - **relationships**: The relationship data model and the record validator
//! - **store**: File-backed loading of character summaries and relationship records

pub mod characters;
pub mod relationships;
pub mod store;

pub use characters::*;
pub use relationships::*;
pub use store::*;
