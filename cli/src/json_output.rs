use degrees_core::{Connection, SearchStats};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degrees: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connections: Option<Vec<JsonConnection>>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonConnection {
    pub left: String,
    pub right: String,
    pub movie: String,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub people_explored: usize,
}

pub fn create_json_output(
    connections: Option<&[Connection]>,
    stats: &SearchStats,
    from_name: String,
    to_name: String,
) -> JsonOutput {
    let json_connections = connections.map(|connections| {
        connections
            .iter()
            .map(|connection| JsonConnection {
                left: connection.left_name.clone(),
                right: connection.right_name.clone(),
                movie: connection.movie_title.clone(),
            })
            .collect()
    });

    JsonOutput {
        query: JsonQuery {
            from: from_name,
            to: to_name,
        },
        result: JsonResult {
            connected: connections.is_some(),
            degrees: connections.map(|connections| connections.len()),
            connections: json_connections,
        },
        stats: JsonStats {
            search_time_ms: (stats.duration_secs * 1000.0) as u64,
            people_explored: stats.people_visited,
        },
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{json_string}"),
        Err(err) => eprintln!("Error serializing to JSON: {err}"),
    }
}
