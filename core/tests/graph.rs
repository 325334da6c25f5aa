use degrees_core::{
    CreditRecord, GraphError, LinkPolicy, MovieId, MovieRecord, PersonId, PersonRecord, StarGraph,
};

fn person(id: u32, name: &str) -> PersonRecord {
    PersonRecord {
        id: PersonId(id),
        name: name.to_string(),
        birth: None,
    }
}

fn movie(id: u32, title: &str) -> MovieRecord {
    MovieRecord {
        id: MovieId(id),
        title: title.to_string(),
        year: Some(1999),
    }
}

fn credit(person_id: u32, movie_id: u32) -> CreditRecord {
    CreditRecord {
        person_id: PersonId(person_id),
        movie_id: MovieId(movie_id),
    }
}

#[test]
fn test_neighbors_cover_every_shared_movie() {
    let graph = StarGraph::from_tables(
        vec![person(1, "Alice"), person(2, "Bob"), person(3, "Carol")],
        vec![movie(10, "M1"), movie(11, "M2")],
        vec![credit(1, 10), credit(2, 10), credit(1, 11), credit(3, 11)],
        LinkPolicy::Skip,
    )
    .unwrap();

    let neighbors = graph.neighbors_for_person(PersonId(1)).unwrap();
    // Self pairs are tolerated, and output is sorted by (movie, person).
    assert_eq!(
        neighbors,
        vec![
            (MovieId(10), PersonId(1)),
            (MovieId(10), PersonId(2)),
            (MovieId(11), PersonId(1)),
            (MovieId(11), PersonId(3)),
        ]
    );
}

#[test]
fn test_neighbors_of_unknown_person_fail() {
    let graph = StarGraph::from_tables(
        vec![person(1, "Alice")],
        vec![movie(10, "M1")],
        vec![credit(1, 10)],
        LinkPolicy::Skip,
    )
    .unwrap();

    assert_eq!(
        graph.neighbors_for_person(PersonId(42)).unwrap_err(),
        GraphError::UnknownPerson(PersonId(42))
    );
}

#[test]
fn test_skip_policy_drops_dangling_credits() {
    let graph = StarGraph::from_tables(
        vec![person(1, "Alice"), person(2, "Bob")],
        vec![movie(10, "M1")],
        vec![
            credit(1, 10),
            credit(2, 10),
            credit(99, 10), // unknown person
            credit(1, 77),  // unknown movie
        ],
        LinkPolicy::Skip,
    )
    .unwrap();

    assert_eq!(graph.person_count(), 2);
    assert_eq!(graph.movie(MovieId(10)).unwrap().stars.len(), 2);
    assert_eq!(graph.person(PersonId(1)).unwrap().movies.len(), 1);
}

#[test]
fn test_strict_policy_rejects_unknown_person_link() {
    let result = StarGraph::from_tables(
        vec![person(1, "Alice")],
        vec![movie(10, "M1")],
        vec![credit(99, 10)],
        LinkPolicy::Strict,
    );

    assert_eq!(result.unwrap_err(), GraphError::UnknownPerson(PersonId(99)));
}

#[test]
fn test_strict_policy_rejects_unknown_movie_link() {
    let result = StarGraph::from_tables(
        vec![person(1, "Alice")],
        vec![movie(10, "M1")],
        vec![credit(1, 77)],
        LinkPolicy::Strict,
    );

    assert_eq!(result.unwrap_err(), GraphError::UnknownMovie(MovieId(77)));
}

#[test]
fn test_duplicate_credits_collapse() {
    let graph = StarGraph::from_tables(
        vec![person(1, "Alice")],
        vec![movie(10, "M1")],
        vec![credit(1, 10), credit(1, 10)],
        LinkPolicy::Skip,
    )
    .unwrap();

    assert_eq!(graph.person(PersonId(1)).unwrap().movies.len(), 1);
    assert_eq!(graph.movie(MovieId(10)).unwrap().stars.len(), 1);
}
