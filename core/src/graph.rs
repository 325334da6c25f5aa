use crate::error::GraphError;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u32);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<u16>,
    pub movies: FxHashSet<MovieId>,
}

#[derive(Debug, Clone)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: Option<u16>,
    pub stars: FxHashSet<PersonId>,
}

/// One row of the people table, as handed over by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonRecord {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<u16>,
}

/// One row of the movies table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    pub year: Option<u16>,
}

/// One row of the credits table linking a person to a movie's cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CreditRecord {
    pub person_id: PersonId,
    pub movie_id: MovieId,
}

/// What to do with a credit row whose person or movie id is unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkPolicy {
    /// Drop the row and keep loading.
    #[default]
    Skip,
    /// Reject the dataset with the offending id.
    Strict,
}

/// Read-only co-appearance index: person -> movie memberships and
/// movie -> cast. Built once from the three dataset tables and never
/// mutated afterwards, so independent searches can share a reference.
#[derive(Debug)]
pub struct StarGraph {
    people: FxHashMap<PersonId, Person>,
    movies: FxHashMap<MovieId, Movie>,
}

impl StarGraph {
    pub fn from_tables(
        people: Vec<PersonRecord>,
        movies: Vec<MovieRecord>,
        credits: Vec<CreditRecord>,
        policy: LinkPolicy,
    ) -> Result<Self, GraphError> {
        let mut people_map: FxHashMap<PersonId, Person> =
            FxHashMap::with_capacity_and_hasher(people.len(), Default::default());
        for record in people {
            people_map.insert(
                record.id,
                Person {
                    id: record.id,
                    name: record.name,
                    birth: record.birth,
                    movies: FxHashSet::default(),
                },
            );
        }

        let mut movies_map: FxHashMap<MovieId, Movie> =
            FxHashMap::with_capacity_and_hasher(movies.len(), Default::default());
        for record in movies {
            movies_map.insert(
                record.id,
                Movie {
                    id: record.id,
                    title: record.title,
                    year: record.year,
                    stars: FxHashSet::default(),
                },
            );
        }

        for credit in credits {
            if !people_map.contains_key(&credit.person_id) {
                match policy {
                    LinkPolicy::Skip => continue,
                    LinkPolicy::Strict => return Err(GraphError::UnknownPerson(credit.person_id)),
                }
            }
            if !movies_map.contains_key(&credit.movie_id) {
                match policy {
                    LinkPolicy::Skip => continue,
                    LinkPolicy::Strict => return Err(GraphError::UnknownMovie(credit.movie_id)),
                }
            }
            if let Some(person) = people_map.get_mut(&credit.person_id) {
                person.movies.insert(credit.movie_id);
            }
            if let Some(movie) = movies_map.get_mut(&credit.movie_id) {
                movie.stars.insert(credit.person_id);
            }
        }

        Ok(Self {
            people: people_map,
            movies: movies_map,
        })
    }

    pub fn person(&self, id: PersonId) -> Result<&Person, GraphError> {
        self.people.get(&id).ok_or(GraphError::UnknownPerson(id))
    }

    pub fn movie(&self, id: MovieId) -> Result<&Movie, GraphError> {
        self.movies.get(&id).ok_or(GraphError::UnknownMovie(id))
    }

    pub fn contains_person(&self, id: PersonId) -> bool {
        self.people.contains_key(&id)
    }

    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Every (movie, co-star) pair reachable from `id` in one hop. Pairs
    /// where the co-star is `id` itself are kept; they are harmless
    /// self-loops and the search skips them through its explored check.
    ///
    /// Pairs come back sorted so repeated searches expand neighbors in the
    /// same order and return the same path among equal-length alternatives.
    pub fn neighbors_for_person(
        &self,
        id: PersonId,
    ) -> Result<Vec<(MovieId, PersonId)>, GraphError> {
        let person = self.person(id)?;
        let mut neighbors = Vec::new();
        for &movie_id in &person.movies {
            let movie = self.movie(movie_id)?;
            for &costar in &movie.stars {
                neighbors.push((movie_id, costar));
            }
        }
        neighbors.sort_unstable();
        Ok(neighbors)
    }
}
