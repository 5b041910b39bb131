use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use primtrace::{load_graph, Graph, SimulationReport, SimulationRunner};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Step-by-step simulator of Prim's minimum-spanning-tree algorithm"
)]
struct Cli {
    /// Path to the graph document (JSON, YAML, or TOML).
    #[arg(long, short = 'g', default_value = "graphs/example_graph.json")]
    graph: PathBuf,
    /// Start vertex token; defaults to the first vertex in load order.
    #[arg(long, short = 's')]
    start: Option<String>,
    /// Target vertex for a path lookup inside the resulting MST.
    #[arg(long, short = 't')]
    target: Option<String>,
    /// Pause after each step (press Enter to continue).
    #[arg(long, short = 'p', default_value_t = false)]
    pause: bool,
    /// Execution mode.
    #[arg(long, short = 'm', value_enum, default_value_t = Mode::Demo)]
    mode: Mode,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Run Prim over the graph given on the command line.
    Demo,
    /// List available graph documents and select vertices interactively.
    Interactive,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.mode {
        Mode::Demo => run_demo(&cli),
        Mode::Interactive => run_interactive(&cli),
    };
    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run_demo(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let graph = load_graph(&cli.graph)?;

    println!("Using graph: {}", cli.graph.display());
    if let Some(start) = &cli.start {
        println!("Start vertex: {start}\n");
    } else if let Some(first) = graph.first_vertex() {
        println!("Start vertex: {first} (default)\n");
    }

    let target = resolve_target(&graph, cli.target.clone());

    let mut builder = SimulationRunner::builder(graph).pause(cli.pause);
    if let Some(start) = &cli.start {
        builder = builder.start(start.clone());
    }
    if let Some(target) = target {
        builder = builder.target(target);
    }
    let report = builder.run()?;
    print_path_outcome(&report);
    Ok(())
}

fn run_interactive(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let chosen = if cli.graph.exists() {
        cli.graph.clone()
    } else {
        choose_graph_document()?
    };
    let graph = load_graph(&chosen)?;

    println!("\nGraph edges:");
    for (u, v, w) in graph.edge_pairs() {
        println!("  {u} - {v} (weight {w})");
    }

    let mut vertices: Vec<&str> = graph.vertices().collect();
    vertices.sort();
    println!("\nAvailable vertices:");
    println!("{}", vertices.join(", "));

    let start = loop {
        let input = prompt("Enter start vertex: ")?;
        if graph.contains(&input) {
            break input;
        }
        println!("Vertex not found. Try again.");
    };

    let target = {
        let input = prompt("Enter target vertex (optional, Enter to skip): ")?;
        if input.is_empty() {
            None
        } else if graph.contains(&input) {
            Some(input)
        } else {
            println!("Target vertex not found. Skipping path lookup.");
            None
        }
    };

    println!("\nLoading graph: {}", chosen.display());
    println!("Start: {start}");
    if let Some(target) = &target {
        println!("Target: {target}");
    }
    println!();

    let mut builder = SimulationRunner::builder(graph)
        .start(start)
        .pause(cli.pause);
    if let Some(target) = target {
        builder = builder.target(target);
    }
    let report = builder.run()?;
    print_path_outcome(&report);
    Ok(())
}

/// List graph documents in the working directory and prompt for one.
/// Free-form input is treated as a path.
fn choose_graph_document() -> Result<PathBuf, Box<dyn Error>> {
    let mut documents: Vec<PathBuf> = std::fs::read_dir(".")?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("json") | Some("yaml") | Some("yml") | Some("toml")
            )
        })
        .collect();
    documents.sort();

    if documents.is_empty() {
        return Err("no graph documents found in the current directory".into());
    }

    println!("Available graphs:");
    for (i, doc) in documents.iter().enumerate() {
        println!("  {}) {}", i + 1, doc.display());
    }

    let selection = prompt("Choose a graph number (or type a path): ")?;
    if let Ok(number) = selection.parse::<usize>() {
        let index = number
            .checked_sub(1)
            .filter(|i| *i < documents.len())
            .ok_or("invalid selection")?;
        Ok(documents[index].clone())
    } else {
        Ok(PathBuf::from(selection))
    }
}

/// Drop an unknown target with a warning; path lookup is optional and never
/// aborts the run.
fn resolve_target(graph: &Graph, target: Option<String>) -> Option<String> {
    let target = target?;
    if graph.contains(&target) {
        Some(target)
    } else {
        tracing::warn!(vertex = %target, "target vertex not found in graph; skipping path lookup");
        None
    }
}

fn print_path_outcome(report: &SimulationReport) {
    let Some(target) = &report.target else {
        return;
    };
    match &report.path {
        Some(path) => {
            println!(
                "Path in the MST from {} to {}: [{}]",
                report.start,
                target,
                path.vertices.join(", ")
            );
            println!("Path weight in the MST: {}", path.weight);
        }
        None => {
            println!(
                "No path between {} and {} in the MST.",
                report.start, target
            );
        }
    }
}

fn prompt(message: &str) -> Result<String, Box<dyn Error>> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
