use demo_stats::data_loading::event_loader::load_events;
use demo_stats::data_processing::data_processor::process_events;
use demo_stats::data_summary::data_summarizer::summarize;
use demo_stats::data_summary::stats_report::player_menu;
use demo_stats::file_creation::file_creator::{create_json_file, export_file_name};

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line configuration.
///
/// # Fields
///
/// * `events_path` - JSON dump of the decoded replay events.
/// * `selection` - Player number or name; asked interactively when absent.
/// * `output_path` - Export destination; when absent the user is asked whether to export.
struct Config {
    events_path: PathBuf,
    selection: Option<String>,
    output_path: Option<PathBuf>,
}

/// Parses command-line arguments.
///
/// # Returns
///
/// * `Ok(Config)` - The parsed configuration.
/// * `Err(String)` - A usage message if the arguments are missing or too many.
fn parse_args() -> Result<Config, String> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        return Err("Usage: cargo run <events-file> [player] [output-file]".into());
    }

    Ok(Config {
        events_path: PathBuf::from(&args[1]),
        selection: args.get(2).cloned(),
        output_path: args.get(3).map(PathBuf::from),
    })
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "demo_stats=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Prints `message` and reads one trimmed line from stdin.
fn prompt(message: &str) -> Result<String, String> {
    print!("{}", message);
    io::stdout().flush().map_err(|err| err.to_string())?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|err| format!("Failed to read input: {}", err))?;
    Ok(line.trim().to_owned())
}

fn main() -> Result<(), String> {
    init_tracing();
    let config = parse_args()?;

    let events = load_events(&config.events_path).map_err(|err| err.to_string())?;
    let roster = process_events(events).map_err(|err| err.to_string())?;

    let selection = match config.selection {
        Some(selection) => selection,
        None => {
            println!("\n{}", player_menu(&roster.names()));
            prompt("Enter player number OR exact name: ")?
        }
    };
    let (player, stats) = roster.select(&selection).map_err(|err| err.to_string())?;

    let summary = summarize(player, stats);
    println!("\n{}", summary);

    let output_path = match config.output_path {
        Some(path) => path,
        None => {
            let answer = prompt("\nExport this player's stats to JSON? (y/n): ")?;
            if !answer.eq_ignore_ascii_case("y") {
                return Ok(());
            }
            PathBuf::from(export_file_name(player))
        }
    };

    create_json_file(&output_path, &summary)
        .map_err(|err| format!("Failed to create file: {}", err))?;
    println!("Stats exported to {}", output_path.display());

    Ok(())
}
