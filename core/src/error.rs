use crate::graph::{MovieId, PersonId};
use thiserror::Error;

/// Internal invariant violations.
///
/// A name that resolves to nobody is data ([`Resolution::NotFound`]) and an
/// exhausted search is a plain `None` result; neither goes through this type.
/// Hitting one of these variants means the caller handed the engine an id it
/// never resolved, or broke the frontier discipline.
///
/// [`Resolution::NotFound`]: crate::resolver::Resolution::NotFound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("person {0} is not in the graph")]
    UnknownPerson(PersonId),

    #[error("movie {0} is not in the graph")]
    UnknownMovie(MovieId),

    #[error("frontier is empty")]
    FrontierEmpty,
}
