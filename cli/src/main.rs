use clap::Parser;
use degrees::args::Args;
use degrees::colors::ColorScheme;
use degrees::display::{
    display_connected, display_not_connected, display_search_info, display_search_statistics,
};
use degrees::json_output::{create_json_output, print_json_output};
use degrees::prompt::{read_line, resolve_interactively};
use degrees::DegreesApp;
use degrees_core::{LinkPolicy, NameIndex, PersonId, StarGraph, bfs_search, describe_path};

fn main() {
    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color);

    let app = match DegreesApp::new(&args.data) {
        Ok(app) => app,
        Err(err) => exit_with_error(&err.to_string(), &colors),
    };

    if !args.json {
        println!("Loading data...");
    }
    let policy = if args.strict_links {
        LinkPolicy::Strict
    } else {
        LinkPolicy::Skip
    };
    let (graph, index) = match app.load(policy) {
        Ok(loaded) => loaded,
        Err(err) => exit_with_error(&err.to_string(), &colors),
    };
    if !args.json {
        println!("Data loaded.");
    }

    let source = resolve_endpoint(args.name1.as_deref(), &index, &colors);
    let target = resolve_endpoint(args.name2.as_deref(), &index, &colors);

    let from_name = person_name(&graph, source, &colors);
    let to_name = person_name(&graph, target, &colors);
    if !args.json {
        display_search_info(&from_name, &to_name, &args, &colors);
    }

    let (path, stats) = match bfs_search(&graph, source, target) {
        Ok(outcome) => outcome,
        Err(err) => exit_with_error(&err.to_string(), &colors),
    };

    let connections = match &path {
        Some(path) => match describe_path(&graph, source, path) {
            Ok(connections) => Some(connections),
            Err(err) => exit_with_error(&err.to_string(), &colors),
        },
        None => None,
    };

    if args.json {
        let output = create_json_output(connections.as_deref(), &stats, from_name, to_name);
        print_json_output(&output);
        return;
    }

    match &connections {
        Some(connections) => display_connected(connections, &args, &colors),
        None => display_not_connected(&from_name, &to_name, &colors),
    }
    if args.verbose {
        display_search_statistics(&stats, &colors);
    }
}

/// Take the name from the command line or prompt for it, then resolve it.
/// Any failure to land on a concrete person ends the process.
fn resolve_endpoint(arg: Option<&str>, index: &NameIndex, colors: &ColorScheme) -> PersonId {
    let query = match arg {
        Some(name) => name.to_string(),
        None => match read_line("Name") {
            Ok(line) => line,
            Err(err) => exit_with_error(&err.to_string(), colors),
        },
    };

    match resolve_interactively(&query, index, colors) {
        Ok(Some(id)) => id,
        Ok(None) => {
            eprintln!("{}", colors.error("Person not found."));
            std::process::exit(1);
        }
        Err(err) => exit_with_error(&err.to_string(), colors),
    }
}

fn person_name(graph: &StarGraph, id: PersonId, colors: &ColorScheme) -> String {
    match graph.person(id) {
        Ok(person) => person.name.clone(),
        Err(err) => exit_with_error(&err.to_string(), colors),
    }
}

fn exit_with_error(message: &str, colors: &ColorScheme) -> ! {
    eprintln!("{} {}", colors.error("❌ Error:"), message);
    std::process::exit(1);
}
