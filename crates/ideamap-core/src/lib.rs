#![forbid(unsafe_code)]

//! Mind-map semantic model (headless).
//!
//! Design goals:
//! - node identity decoupled from display labels (arena ids, no silent
//!   label-collision merging)
//! - one immutable [`MapRequest`] per render, no ambient state
//! - deterministic, testable graph construction

pub mod error;
pub mod graph;
pub mod request;
pub mod style;

pub use error::{Error, Result};
pub use graph::{Edge, MindmapGraph, Node, NodeId, NodeKind};
pub use request::MapRequest;
pub use style::{LayoutStyle, NodeShape, StyleConfig};
