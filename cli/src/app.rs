use crate::loading::load_tables;
use degrees_core::{LinkPolicy, NameIndex, StarGraph};
use std::{
    error::Error,
    path::{Path, PathBuf},
};

pub struct DegreesApp {
    pub people_path: PathBuf,
    pub movies_path: PathBuf,
    pub stars_path: PathBuf,
}

impl DegreesApp {
    pub fn new(data_dir: &Path) -> Result<Self, Box<dyn Error>> {
        if !data_dir.is_dir() {
            return Err(format!("Data directory does not exist: {}", data_dir.display()).into());
        }

        let people_path = data_dir.join("people.csv");
        let movies_path = data_dir.join("movies.csv");
        let stars_path = data_dir.join("stars.csv");
        for path in [&people_path, &movies_path, &stars_path] {
            if !path.exists() {
                return Err(format!("Data file not found: {}", path.display()).into());
            }
        }

        Ok(Self {
            people_path,
            movies_path,
            stars_path,
        })
    }

    pub fn load_graph(&self, policy: LinkPolicy) -> Result<StarGraph, Box<dyn Error>> {
        let (people, movies, credits) =
            load_tables(&self.people_path, &self.movies_path, &self.stars_path)?;
        let graph = StarGraph::from_tables(people, movies, credits, policy)?;
        Ok(graph)
    }

    pub fn load(&self, policy: LinkPolicy) -> Result<(StarGraph, NameIndex), Box<dyn Error>> {
        let graph = self.load_graph(policy)?;
        let index = NameIndex::build(&graph);
        Ok((graph, index))
    }
}
