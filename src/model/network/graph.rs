use super::edge::Edge;
use super::edge_id::EdgeId;
use super::network_error::NetworkError;
use super::orientation::Orientation;
use super::vertex::Vertex;
use super::vertex_id::VertexId;

/// an adjacency entry reachable from some vertex: the edge used, the vertex
/// on the other end, and which way along the edge's stored orientation the
/// traversal goes.
pub type Adjacency = (EdgeId, VertexId, Orientation);

/// the geometric road network: vertices, edges, and the adjacency derived
/// from them. storage is immutable once built; queries borrow a `Graph`
/// for their lifetime rather than mutating it. keeps a flat vertex and
/// edge list plus precomputed forward/reverse adjacency rather than an
/// edge-list scan per query.
#[derive(Debug)]
pub struct Graph {
    vertices: Box<[Vertex]>,
    edges: Box<[Edge]>,
    /// `out_adjacency[v]` lists every edge usable when leaving `v`, along
    /// with which orientation of the edge that use represents.
    out_adjacency: Vec<Vec<Adjacency>>,
    /// `in_adjacency[v]` lists every edge usable when arriving at `v`.
    in_adjacency: Vec<Vec<Adjacency>>,
}

impl Graph {
    /// build a graph from a vertex and edge list. vertices must be indexed
    /// by position (`vertices[i].vertex_id == VertexId(i)`) and every edge
    /// endpoint must reference a vertex within range.
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Result<Graph, NetworkError> {
        let mut out_adjacency: Vec<Vec<Adjacency>> = vec![Vec::new(); vertices.len()];
        let mut in_adjacency: Vec<Vec<Adjacency>> = vec![Vec::new(); vertices.len()];

        for edge in &edges {
            let src = edge.src_vertex_id.0;
            let dst = edge.dst_vertex_id.0;
            if src >= vertices.len() {
                return Err(NetworkError::DanglingEdgeEndpoint {
                    edge_id: edge.edge_id,
                    vertex_id: edge.src_vertex_id,
                });
            }
            if dst >= vertices.len() {
                return Err(NetworkError::DanglingEdgeEndpoint {
                    edge_id: edge.edge_id,
                    vertex_id: edge.dst_vertex_id,
                });
            }

            out_adjacency[src].push((edge.edge_id, edge.dst_vertex_id, Orientation::Forward));
            out_adjacency[dst].push((edge.edge_id, edge.src_vertex_id, Orientation::Backward));
            in_adjacency[dst].push((edge.edge_id, edge.src_vertex_id, Orientation::Forward));
            in_adjacency[src].push((edge.edge_id, edge.dst_vertex_id, Orientation::Backward));
        }

        Ok(Graph {
            vertices: vertices.into_boxed_slice(),
            edges: edges.into_boxed_slice(),
            out_adjacency,
            in_adjacency,
        })
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn get_vertex(&self, vertex_id: VertexId) -> Result<&Vertex, NetworkError> {
        self.vertices
            .get(vertex_id.0)
            .ok_or(NetworkError::VertexNotFound(vertex_id))
    }

    pub fn get_edge(&self, edge_id: EdgeId) -> Result<&Edge, NetworkError> {
        self.edges
            .get(edge_id.0)
            .ok_or(NetworkError::EdgeNotFound(edge_id))
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// adjacency entries usable when a search leaves `vertex_id`.
    pub fn out_edges(&self, vertex_id: VertexId) -> Result<&[Adjacency], NetworkError> {
        self.out_adjacency
            .get(vertex_id.0)
            .map(Vec::as_slice)
            .ok_or(NetworkError::VertexNotFound(vertex_id))
    }

    /// adjacency entries usable when a search arrives at `vertex_id`, for
    /// the reverse half of a bidirectional search.
    pub fn in_edges(&self, vertex_id: VertexId) -> Result<&[Adjacency], NetworkError> {
        self.in_adjacency
            .get(vertex_id.0)
            .map(Vec::as_slice)
            .ok_or(NetworkError::VertexNotFound(vertex_id))
    }

    /// the `(src, dst)` vertex pair an edge connects, in its stored
    /// orientation, regardless of which direction a search traversed it.
    pub fn edge_endpoints(&self, edge_id: EdgeId) -> Result<(VertexId, VertexId), NetworkError> {
        let edge = self.get_edge(edge_id)?;
        Ok((edge.src_vertex_id, edge.dst_vertex_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::edge_profile_id::EdgeProfileId;

    fn line_graph() -> Graph {
        let vertices = vec![
            Vertex::new(0, 0.0, 0.0),
            Vertex::new(1, 1.0, 0.0),
            Vertex::new(2, 2.0, 0.0),
        ];
        let edges = vec![
            Edge::new(0, 0, 1, 100.0, EdgeProfileId(0), vec![]),
            Edge::new(1, 1, 2, 150.0, EdgeProfileId(0), vec![]),
        ];
        Graph::new(vertices, edges).unwrap()
    }

    #[test]
    fn test_out_and_in_edges_are_symmetric() {
        let graph = line_graph();
        let out0 = graph.out_edges(VertexId(0)).unwrap();
        assert_eq!(out0, &[(EdgeId(0), VertexId(1), Orientation::Forward)]);

        let in1 = graph.in_edges(VertexId(1)).unwrap();
        assert_eq!(in1.len(), 2);
        assert!(in1.contains(&(EdgeId(0), VertexId(0), Orientation::Forward)));
        assert!(in1.contains(&(EdgeId(1), VertexId(2), Orientation::Backward)));
    }

    #[test]
    fn test_dangling_edge_endpoint_rejected() {
        let vertices = vec![Vertex::new(0, 0.0, 0.0)];
        let edges = vec![Edge::new(0, 0, 5, 1.0, EdgeProfileId(0), vec![])];
        let err = Graph::new(vertices, edges).unwrap_err();
        assert_eq!(
            err,
            NetworkError::DanglingEdgeEndpoint {
                edge_id: EdgeId(0),
                vertex_id: VertexId(5)
            }
        );
    }

    #[test]
    fn test_unknown_vertex_lookup() {
        let graph = line_graph();
        assert!(matches!(
            graph.get_vertex(VertexId(99)),
            Err(NetworkError::VertexNotFound(VertexId(99)))
        ));
    }
}
