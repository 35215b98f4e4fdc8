//! Relationship graph builder.

mod builder;

pub use builder::{build_graph, ColorGraph, Edge, Node, SIMILAR_EDGE_LABEL};
