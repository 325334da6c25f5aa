use crate::error::GraphError;
use crate::graph::{PersonId, StarGraph};
use crate::search::Path;
use serde::Serialize;

/// One rendered hop: who connects to whom through which movie. This is the
/// input contract for any presentation layer; how the line is printed is the
/// caller's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    pub step: usize,
    pub left_id: PersonId,
    pub left_name: String,
    pub right_id: PersonId,
    pub right_name: String,
    pub movie_title: String,
}

/// Expand a raw (movie, person) path into named connections, one per hop.
/// An id the graph cannot resolve means the path was produced against a
/// different graph, which is a caller defect.
pub fn describe_path(
    graph: &StarGraph,
    source: PersonId,
    path: &Path,
) -> Result<Vec<Connection>, GraphError> {
    let mut connections = Vec::with_capacity(path.len());
    let mut left = graph.person(source)?;

    for (index, &(movie_id, person_id)) in path.iter().enumerate() {
        let movie = graph.movie(movie_id)?;
        let right = graph.person(person_id)?;
        connections.push(Connection {
            step: index + 1,
            left_id: left.id,
            left_name: left.name.clone(),
            right_id: right.id,
            right_name: right.name.clone(),
            movie_title: movie.title.clone(),
        });
        left = right;
    }

    Ok(connections)
}
