//! Cycle detection for submitted pipelines.
//!
//! The graph is rebuilt from scratch for every analysis: an adjacency mapping
//! keyed by node identifier, borrowed from the caller's data, and two local
//! sets tracking the depth-first search. Nothing outlives the call.
//!
//! # Edge Leniency
//!
//! - An edge whose source is not a submitted node is dropped.
//! - An edge whose target is not a submitted node is kept; the target is
//!   reached as a leaf and never expanded.
//! - Duplicate node identifiers share one successor list.

use crate::domain::{Pipeline, PipelineSummary};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// Successor lists for one submitted graph.
#[derive(Debug, Clone)]
pub struct Adjacency<'a> {
    /// Node identifiers in submission order (DFS roots)
    order: Vec<&'a str>,
    successors: HashMap<&'a str, Vec<&'a str>>,
    edge_count: usize,
    dropped_edges: usize,
}

impl<'a> Adjacency<'a> {
    /// Build the adjacency mapping from node identifiers and `(source, target)` pairs.
    pub fn build<N, E>(nodes: N, edges: E) -> Self
    where
        N: IntoIterator<Item = &'a str>,
        E: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let order: Vec<&'a str> = nodes.into_iter().collect();
        let mut successors: HashMap<&'a str, Vec<&'a str>> =
            order.iter().map(|&id| (id, Vec::new())).collect();

        let mut edge_count = 0;
        let mut dropped_edges = 0;
        for (source, target) in edges {
            edge_count += 1;
            match successors.get_mut(source) {
                Some(targets) => targets.push(target),
                None => dropped_edges += 1,
            }
        }

        if dropped_edges > 0 {
            trace!(dropped_edges, "Ignoring edges whose source is not a node");
        }

        Self {
            order,
            successors,
            edge_count,
            dropped_edges,
        }
    }

    /// Build the adjacency mapping for a typed pipeline.
    #[must_use]
    pub fn from_pipeline(pipeline: &'a Pipeline) -> Self {
        Self::build(
            pipeline.nodes.iter().map(|node| node.id.as_str()),
            pipeline
                .edges
                .iter()
                .map(|edge| (edge.source.as_str(), edge.target.as_str())),
        )
    }

    /// Number of node identifiers supplied, duplicates included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of edges supplied, dropped edges included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of edges ignored because their source is unknown.
    #[must_use]
    pub fn dropped_edges(&self) -> usize {
        self.dropped_edges
    }

    /// Ordered successors of `id`; empty for unknown identifiers.
    #[must_use]
    pub fn successors(&self, id: &str) -> &[&'a str] {
        self.successors
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Check whether the graph has no directed cycle.
    ///
    /// Depth-first search from every node in submission order, with an
    /// explicit stack of `(node, next successor index)` frames so that long
    /// chains cannot exhaust the call stack.
    ///
    /// `visited` holds nodes that are in progress or finished; `on_stack`
    /// holds the active path. Reaching a successor that is on the active path
    /// is a back edge. Reaching a finished node is a shared descendant, which
    /// is allowed.
    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        let mut visited: HashSet<&str> = HashSet::with_capacity(self.order.len());
        let mut on_stack: HashSet<&str> = HashSet::new();
        let mut stack: Vec<(&str, usize)> = Vec::new();

        for &root in &self.order {
            if !visited.insert(root) {
                continue;
            }
            on_stack.insert(root);
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let node = frame.0;
                let Some(&next) = self.successors(node).get(frame.1) else {
                    on_stack.remove(node);
                    stack.pop();
                    continue;
                };
                frame.1 += 1;

                if visited.insert(next) {
                    on_stack.insert(next);
                    stack.push((next, 0));
                } else if on_stack.contains(next) {
                    trace!(from = node, to = next, "Back edge found");
                    return false;
                }
            }
        }

        true
    }

    /// Summarize the graph: literal counts plus acyclicity.
    #[must_use]
    pub fn summary(&self) -> PipelineSummary {
        PipelineSummary {
            num_nodes: self.node_count(),
            num_edges: self.edge_count(),
            is_dag: self.is_acyclic(),
        }
    }
}

/// Analyze a graph given as node identifiers and `(source, target)` pairs.
///
/// Counts are the literal lengths of the inputs regardless of structure.
pub fn analyze<'a, N, E>(nodes: N, edges: E) -> PipelineSummary
where
    N: IntoIterator<Item = &'a str>,
    E: IntoIterator<Item = (&'a str, &'a str)>,
{
    let summary = Adjacency::build(nodes, edges).summary();
    debug!(
        num_nodes = summary.num_nodes,
        num_edges = summary.num_edges,
        is_dag = summary.is_dag,
        "Analyzed graph"
    );
    summary
}

impl Pipeline {
    /// Count nodes and edges and check the pipeline for cycles.
    #[must_use]
    pub fn summarize(&self) -> PipelineSummary {
        analyze(
            self.nodes.iter().map(|node| node.id.as_str()),
            self.edges
                .iter()
                .map(|edge| (edge.source.as_str(), edge.target.as_str())),
        )
    }
}
