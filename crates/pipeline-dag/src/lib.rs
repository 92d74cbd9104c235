//! Pipeline DAG - structural analysis for node-and-edge pipelines.
//!
//! A pipeline is a list of nodes and a list of directed edges, as produced by
//! a visual pipeline editor. This crate counts them and decides whether the
//! pipeline is acyclic, using an iterative depth-first search that is safe
//! for arbitrarily deep graphs.
//!
//! ```
//! use pipeline_dag::graph::analyze;
//!
//! let summary = analyze(["a", "b", "c"], [("a", "b"), ("b", "c"), ("c", "a")]);
//! assert_eq!(summary.num_nodes, 3);
//! assert!(!summary.is_dag);
//! ```

#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod graph;
pub mod load;
pub mod schema;

// Public CLI module (needed by binary)
pub mod cli;
pub mod output;

pub use domain::{Edge, Node, NodeId, Pipeline, PipelineSummary};
pub use error::{Error, Result};
