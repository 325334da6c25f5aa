use degrees_core::{CreditRecord, MovieRecord, PersonRecord};
use serde::de::DeserializeOwned;
use std::{error::Error, path::Path};

/// Read the three dataset CSVs into the tables the graph is built from.
/// Row validation beyond field shape (dangling credit ids) is the graph
/// builder's link policy, not the loader's.
pub fn load_tables(
    people_path: &Path,
    movies_path: &Path,
    stars_path: &Path,
) -> Result<(Vec<PersonRecord>, Vec<MovieRecord>, Vec<CreditRecord>), Box<dyn Error>> {
    let people = read_rows(people_path)?;
    let movies = read_rows(movies_path)?;
    let credits = read_rows(stars_path)?;
    Ok((people, movies, credits))
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
