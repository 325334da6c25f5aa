use crate::colors::ColorScheme;
use degrees_core::{Candidate, NameIndex, PersonId, Resolution, confirm_selection};
use std::io::{self, BufRead, Write};

pub fn read_line(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Resolve one query to a person id, asking the user to pick when several
/// people share the name. An invalid pick means "not found", never a guess.
pub fn resolve_interactively(
    query: &str,
    index: &NameIndex,
    colors: &ColorScheme,
) -> io::Result<Option<PersonId>> {
    match index.resolve(query) {
        Resolution::NotFound => Ok(None),
        Resolution::Unique(id) => Ok(Some(id)),
        Resolution::Ambiguous(candidates) => {
            println!("Which '{}'?", colors.person_name(query));
            print_candidates(&candidates, colors);
            let raw = read_line("Intended Person ID")?;
            Ok(confirm_selection(&candidates, &raw))
        }
    }
}

fn print_candidates(candidates: &[Candidate], colors: &ColorScheme) {
    for candidate in candidates {
        let birth = candidate
            .birth
            .map_or_else(|| "unknown".to_string(), |year| year.to_string());
        println!(
            "ID: {}, Name: {}, Birth: {}",
            colors.number(&candidate.id.to_string()),
            colors.person_name(&candidate.name),
            birth
        );
    }
}
