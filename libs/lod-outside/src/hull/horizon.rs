//! Horizon extraction over undirected edges.

use crate::mesh::VertexIndex;

/// Undirected edge stored with the smaller vertex index first.
pub type Edge = (VertexIndex, VertexIndex);

/// Returns the canonical form of the edge between `a` and `b`.
#[inline]
pub fn canonical_edge(a: VertexIndex, b: VertexIndex) -> Edge {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Sorts `edges` and keeps only those that occur exactly once.
///
/// Edges shared by two visible triangles are interior to the visible region;
/// the survivors form the horizon loop.
pub fn retain_boundary_edges(edges: &mut Vec<Edge>) {
    edges.sort_unstable();

    let mut write = 0;
    let mut run_start = 0;
    while run_start < edges.len() {
        let mut run_end = run_start + 1;
        while run_end < edges.len() && edges[run_end] == edges[run_start] {
            run_end += 1;
        }
        if run_end - run_start == 1 {
            edges[write] = edges[run_start];
            write += 1;
        }
        run_start = run_end;
    }
    edges.truncate(write);
}

/// Returns true if every edge occurs exactly twice.
pub fn all_edges_paired(edges: &mut [Edge]) -> bool {
    edges.sort_unstable();
    edges
        .chunk_by(|a, b| a == b)
        .all(|run| run.len() == 2)
}
