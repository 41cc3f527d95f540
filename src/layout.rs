//src/layout.rs

use ahash::AHashSet;

use crate::graph::OverlapGraph;
use crate::types::Overlap;

/// Calculates a layout path for the overlap graph.
///
/// The walk starts at the source sequence (no predecessor); when none
/// exists the layout is empty. At each step the successor edge with the
/// greatest overlap length whose destination is still unvisited is taken.
/// Ties go to the first edge in the successor list, which is discovery
/// order, so the result is deterministic for a given ingestion order. One
/// pass, no backtracking: the walk stops at the first node with no
/// unvisited successor and makes no claim of covering every sequence.
///
/// The returned edges chain: each edge's destination is the next edge's
/// source, and no sequence appears as a destination twice. The start node
/// is marked visited up front, so a back-edge can never re-enter it.
pub fn layout_path(graph: &OverlapGraph) -> Vec<Overlap> {
    let mut layout = Vec::new();
    let Some(start) = graph.find_source_id() else {
        return layout;
    };

    let mut visited: AHashSet<usize> = AHashSet::new();
    visited.insert(start);
    let mut current = start;

    loop {
        // Strictly-greater comparison keeps the first edge on ties.
        let mut best: Option<(usize, usize)> = None;
        for &(dest, len) in &graph.record(current).successors {
            if visited.contains(&dest) {
                continue;
            }
            if best.map_or(true, |(_, best_len)| len > best_len) {
                best = Some((dest, len));
            }
        }
        let Some((dest, len)) = best else {
            break;
        };

        layout.push(Overlap {
            source: graph.record(current).sequence.clone(),
            destination: graph.record(dest).sequence.clone(),
            length: len,
        });
        visited.insert(dest);
        current = dest;
    }

    log::debug!(
        "layout path covers {} of {} distinct sequences",
        visited.len(),
        graph.distinct_count()
    );
    layout
}

/// Predicts an assembly consistent with the overlap graph.
///
/// The assembly starts with the first edge's full source sequence; every
/// edge then contributes the part of its destination to the right of the
/// overlap. With a zero-edge layout the assembly is the source sequence
/// itself when one exists (a single isolated read assembles to itself) and
/// the empty string otherwise (empty graph, or a cycle with no source).
pub fn assemble(graph: &OverlapGraph) -> String {
    let layout = layout_path(graph);
    assemble_layout(graph, &layout)
}

/// Same as [`assemble`], for callers that already hold the layout path.
pub fn assemble_layout(graph: &OverlapGraph, layout: &[Overlap]) -> String {
    if layout.is_empty() {
        return graph.find_source_sequence().unwrap_or("").to_string();
    }

    let mut assembly = String::with_capacity(
        layout[0].source.len()
            + layout
                .iter()
                .map(|edge| edge.destination.len() - edge.length)
                .sum::<usize>(),
    );
    assembly.push_str(&layout[0].source);
    for edge in layout {
        assembly.push_str(&edge.destination[edge.length..]);
    }
    assembly
}
