//! Ansilog Headless Runner
//!
//! Feeds captured terminal output through the model and prints the
//! result. Reads input from stdin or a file and outputs HTML, plain
//! text, or a JSON snapshot. `--chunk` feeds the model in fixed-size
//! pieces, which exercises the mid-escape resumption path the same way
//! an incremental log stream would.

use std::io::{self, Read};
use std::process::ExitCode;

use ansilog::{html, LineDiscipline, Model, Snapshot};

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Error, Debug)]
enum RunError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Html,
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut discipline = LineDiscipline::Cooked;
    let mut input_file: Option<String> = None;
    let mut output_format = OutputFormat::Html;
    let mut chunk_size: Option<usize> = None;
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-f" | "--file" => {
                i += 1;
                if i < args.len() {
                    input_file = Some(args[i].clone());
                }
            }
            "-r" | "--raw" => {
                discipline = LineDiscipline::Raw;
            }
            "--chunk" => {
                i += 1;
                if i < args.len() {
                    chunk_size = args[i].parse().ok().filter(|&n| n > 0);
                }
            }
            "--html" => {
                output_format = OutputFormat::Html;
            }
            "-t" | "--text" => {
                output_format = OutputFormat::Text;
            }
            "-j" | "--json" => {
                output_format = OutputFormat::Json;
            }
            "-h" | "--help" => {
                show_help = true;
            }
            _ => {
                if input_file.is_none() && !args[i].starts_with('-') {
                    input_file = Some(args[i].clone());
                }
            }
        }
        i += 1;
    }

    if show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    match run(discipline, input_file.as_deref(), chunk_size, output_format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ansilog-headless: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(
    discipline: LineDiscipline,
    input_file: Option<&str>,
    chunk_size: Option<usize>,
    output_format: OutputFormat,
) -> Result<(), RunError> {
    let data = match input_file {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut data = Vec::new();
            io::stdin().read_to_end(&mut data)?;
            data
        }
    };
    let input = String::from_utf8_lossy(&data);

    let mut model = Model::new(discipline);
    match chunk_size {
        Some(size) => {
            let units: Vec<char> = input.chars().collect();
            for piece in units.chunks(size) {
                let piece: String = piece.iter().collect();
                model.update(&piece);
            }
        }
        None => model.update(&input),
    }

    match output_format {
        OutputFormat::Html => {
            println!("{}", html::render(&model));
        }
        OutputFormat::Text => {
            let snapshot = Snapshot::from_model(&model);
            print!("{}", snapshot.to_debug_string());
        }
        OutputFormat::Json => {
            let snapshot = Snapshot::from_model(&model);
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }

    Ok(())
}

fn print_help() {
    println!("Ansilog Headless Runner");
    println!();
    println!("Usage: ansilog-headless [OPTIONS] [INPUT_FILE]");
    println!();
    println!("Options:");
    println!("  -f, --file <PATH>  Read input from file");
    println!("  -r, --raw          Raw line discipline (\\n keeps the column)");
    println!("      --chunk <N>    Feed the model N code units at a time");
    println!("      --html         Output HTML (default)");
    println!("  -t, --text         Output a text dump with cursor marker");
    println!("  -j, --json         Output a JSON snapshot");
    println!("  -h, --help         Show this help message");
    println!();
    println!("If no input file is specified, reads from stdin.");
    println!();
    println!("Examples:");
    println!("  printf 'ok: \\x1b[32mpass\\x1b[0m\\n' | ansilog-headless");
    println!("  ansilog-headless --chunk 7 -t build.log");
    println!("  ansilog-headless --json < capture.bin > snapshot.json");
}
