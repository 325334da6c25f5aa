use crate::args::Args;
use crate::colors::ColorScheme;
use crate::utils::format_number;
use degrees_core::{Connection, SearchStats};

pub fn display_search_info(from_name: &str, to_name: &str, args: &Args, colors: &ColorScheme) {
    if !args.verbose {
        return;
    }
    println!(
        "🎬 Finding connection from {} to {}",
        colors.person_name(&format!("\"{from_name}\"")),
        colors.person_name(&format!("\"{to_name}\""))
    );
    println!("🔍 Searching...");
}

pub fn display_connected(connections: &[Connection], args: &Args, colors: &ColorScheme) {
    if args.quiet {
        display_chain_flow(connections, colors);
        return;
    }

    let degrees = connections.len();
    println!(
        "{} {}",
        colors.number(&degrees.to_string()),
        colors.success("degrees of separation.")
    );

    println!();
    for connection in connections {
        let mut line = format!(
            "{} {} and {} starred in {}",
            colors.step_number(&format!("{}:", connection.step)),
            colors.person_name(&connection.left_name),
            colors.person_name(&connection.right_name),
            colors.movie_title(&connection.movie_title)
        );
        if args.show_ids {
            line.push_str(&format!(
                " [{} -> {}]",
                connection.left_id, connection.right_id
            ));
        }
        println!("{line}");
    }
}

pub fn display_not_connected(from_name: &str, to_name: &str, colors: &ColorScheme) {
    println!(
        "{} {} and {}",
        colors.error("❌ Not connected:"),
        colors.person_name(&format!("\"{from_name}\"")),
        colors.person_name(&format!("\"{to_name}\""))
    );
}

pub fn display_search_statistics(stats: &SearchStats, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} people in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(stats.people_visited)),
        colors.number(&format!("{:.3}", stats.duration_secs))
    );
}

/// One-line flow for quiet mode: A → B → C.
fn display_chain_flow(connections: &[Connection], colors: &ColorScheme) {
    if connections.is_empty() {
        return;
    }
    let mut names = vec![connections[0].left_name.clone()];
    names.extend(
        connections
            .iter()
            .map(|connection| connection.right_name.clone()),
    );
    let flow = names
        .iter()
        .map(|name| colors.person_name(&format!("\"{name}\"")).to_string())
        .collect::<Vec<_>>()
        .join(" → ");
    println!("{flow}");
}
