use crate::model::network::{Edge, EdgeProfileId, Graph, Vertex};

/// a straight chain of `n` vertices spaced `spacing_degrees` apart along
/// longitude, connected by edges of `edge_distance_meters` each, all under
/// `edge_profile_id`. handy for directional and shortest-path tests where
/// the exact geometry doesn't matter.
pub fn line_graph(n: usize, edge_distance_meters: f64, edge_profile_id: EdgeProfileId) -> Graph {
    let vertices: Vec<Vertex> = (0..n).map(|i| Vertex::new(i, i as f64 * 0.01, 0.0)).collect();
    let edges: Vec<Edge> = (0..n.saturating_sub(1))
        .map(|i| Edge::new(i, i, i + 1, edge_distance_meters, edge_profile_id, vec![]))
        .collect();
    Graph::new(vertices, edges).expect("line_graph is internally consistent")
}

/// a `rows` x `cols` grid graph with unit spacing, axis-aligned edges only,
/// each `edge_distance_meters` long. vertex ids are row-major
/// (`row * cols + col`).
pub fn grid_graph(rows: usize, cols: usize, edge_distance_meters: f64, edge_profile_id: EdgeProfileId) -> Graph {
    let vertex_id = |row: usize, col: usize| row * cols + col;
    let vertices: Vec<Vertex> = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .map(|(row, col)| Vertex::new(vertex_id(row, col), col as f64 * 0.01, row as f64 * 0.01))
        .collect();

    let mut edges = Vec::new();
    let mut next_edge_id = 0;
    for row in 0..rows {
        for col in 0..cols {
            if col + 1 < cols {
                edges.push(Edge::new(
                    next_edge_id,
                    vertex_id(row, col),
                    vertex_id(row, col + 1),
                    edge_distance_meters,
                    edge_profile_id,
                    vec![],
                ));
                next_edge_id += 1;
            }
            if row + 1 < rows {
                edges.push(Edge::new(
                    next_edge_id,
                    vertex_id(row, col),
                    vertex_id(row + 1, col),
                    edge_distance_meters,
                    edge_profile_id,
                    vec![],
                ));
                next_edge_id += 1;
            }
        }
    }
    Graph::new(vertices, edges).expect("grid_graph is internally consistent")
}
