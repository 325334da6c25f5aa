use degrees::DegreesApp;
use degrees::load_tables;
use degrees_core::{GraphError, LinkPolicy, MovieId, PersonId, StarGraph};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_dataset(dir: &Path, people: &str, movies: &str, stars: &str) {
    fs::write(dir.join("people.csv"), people).unwrap();
    fs::write(dir.join("movies.csv"), movies).unwrap();
    fs::write(dir.join("stars.csv"), stars).unwrap();
}

fn sample_dataset(dir: &Path) {
    write_dataset(
        dir,
        "id,name,birth\n1,Alice Adams,1970\n2,Bob Brown,\n3,Carol Clark,1985\n",
        "id,title,year\n10,\"One, Two, Three\",1996\n11,Second Movie,\n",
        "person_id,movie_id\n1,10\n2,10\n2,11\n3,11\n",
    );
}

#[test]
fn test_load_tables_reads_all_rows() {
    let dir = TempDir::new().unwrap();
    sample_dataset(dir.path());

    let (people, movies, credits) = load_tables(
        &dir.path().join("people.csv"),
        &dir.path().join("movies.csv"),
        &dir.path().join("stars.csv"),
    )
    .unwrap();

    assert_eq!(people.len(), 3);
    assert_eq!(movies.len(), 2);
    assert_eq!(credits.len(), 4);
}

#[test]
fn test_empty_fields_parse_as_none() {
    let dir = TempDir::new().unwrap();
    sample_dataset(dir.path());

    let (people, movies, _) = load_tables(
        &dir.path().join("people.csv"),
        &dir.path().join("movies.csv"),
        &dir.path().join("stars.csv"),
    )
    .unwrap();

    let bob = people.iter().find(|p| p.id == PersonId(2)).unwrap();
    assert_eq!(bob.birth, None);
    let second = movies.iter().find(|m| m.id == MovieId(11)).unwrap();
    assert_eq!(second.year, None);
}

#[test]
fn test_quoted_titles_keep_their_commas() {
    let dir = TempDir::new().unwrap();
    sample_dataset(dir.path());

    let (_, movies, _) = load_tables(
        &dir.path().join("people.csv"),
        &dir.path().join("movies.csv"),
        &dir.path().join("stars.csv"),
    )
    .unwrap();

    let first = movies.iter().find(|m| m.id == MovieId(10)).unwrap();
    assert_eq!(first.title, "One, Two, Three");
}

#[test]
fn test_app_rejects_missing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");

    assert!(DegreesApp::new(&missing).is_err());
}

#[test]
fn test_app_rejects_missing_data_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("people.csv"), "id,name,birth\n").unwrap();
    fs::write(dir.path().join("movies.csv"), "id,title,year\n").unwrap();
    // stars.csv deliberately absent

    assert!(DegreesApp::new(dir.path()).is_err());
}

#[test]
fn test_loaded_graph_answers_searches() {
    let dir = TempDir::new().unwrap();
    sample_dataset(dir.path());
    let app = DegreesApp::new(dir.path()).unwrap();

    let (graph, index) = app.load(LinkPolicy::Skip).unwrap();
    assert_eq!(graph.person_count(), 3);
    assert_eq!(graph.movie_count(), 2);

    let resolved = index.resolve("alice adams");
    assert_eq!(
        resolved,
        degrees_core::Resolution::Unique(PersonId(1))
    );

    let path = degrees_core::shortest_path(&graph, PersonId(1), PersonId(3))
        .unwrap()
        .unwrap();
    assert_eq!(path.len(), 2);
}

#[test]
fn test_dangling_credit_rows_follow_link_policy() {
    let dir = TempDir::new().unwrap();
    write_dataset(
        dir.path(),
        "id,name,birth\n1,Alice Adams,1970\n",
        "id,title,year\n10,Only Movie,1996\n",
        "person_id,movie_id\n1,10\n99,10\n",
    );
    let app = DegreesApp::new(dir.path()).unwrap();

    let graph = app.load_graph(LinkPolicy::Skip).unwrap();
    assert_eq!(graph.movie(MovieId(10)).unwrap().stars.len(), 1);

    let (people, movies, credits) = load_tables(
        &dir.path().join("people.csv"),
        &dir.path().join("movies.csv"),
        &dir.path().join("stars.csv"),
    )
    .unwrap();
    let strict = StarGraph::from_tables(people, movies, credits, LinkPolicy::Strict);
    assert_eq!(
        strict.unwrap_err(),
        GraphError::UnknownPerson(PersonId(99))
    );
}
