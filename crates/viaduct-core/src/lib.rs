//! Viaduct Core Types and Definitions
//!
//! This crate provides the foundational types for viaduct transit-map
//! diagrams. It includes:
//!
//! - **Identifiers**: String-interned element ids ([`identifier::Id`])
//! - **Colors and themes**: Line color schemes ([`color::Color`], [`theme::Theme`])
//! - **Element types**: Station, line, and decoration attribute shapes
//!   ([`station`], [`line`], [`misc_node`] modules)
//! - **Registry**: The type-tag capability table ([`registry::ElementRegistry`])
//! - **Graph**: The diagram multigraph ([`graph::DiagramGraph`])

pub mod color;
pub mod error;
pub mod field;
pub mod graph;
pub mod identifier;
pub mod line;
pub mod misc_node;
pub mod registry;
pub mod station;
pub mod theme;
