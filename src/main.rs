// structscope: structure scanner with grid visualization and step playback

use std::fs;
use std::path::Path;
use std::process;

use tracing::Level;

use structscope::{analyze_with_seed, GridConfig, DEFAULT_SEED};

struct Args {
    file: String,
    seed: u64,
    width: usize,
    height: usize,
    steps_only: bool,
}

fn usage(program_name: &str) -> ! {
    eprintln!("Usage: {} <file> [options]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --seed <n>    RNG seed (default {})", DEFAULT_SEED);
    eprintln!("  --width <n>   grid width (default 12)");
    eprintln!("  --height <n>  grid height (default 8)");
    eprintln!("  --steps       print only the execution steps");
    process::exit(1);
}

fn parse_args() -> Args {
    let argv: Vec<String> = std::env::args().collect();
    let program_name = argv.first().map(|s| s.as_str()).unwrap_or("structscope");

    let defaults = GridConfig::default();
    let mut args = Args {
        file: String::new(),
        seed: DEFAULT_SEED,
        width: defaults.width,
        height: defaults.height,
        steps_only: false,
    };

    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--steps" => args.steps_only = true,
            "--seed" | "--width" | "--height" => {
                let flag = argv[i].clone();
                i += 1;
                let value = match argv.get(i) {
                    Some(v) => v,
                    None => {
                        eprintln!("Error: {} needs a value", flag);
                        usage(program_name);
                    }
                };
                let parsed: u64 = match value.parse() {
                    Ok(n) => n,
                    Err(_) => {
                        eprintln!("Error: invalid value '{}' for {}", value, flag);
                        usage(program_name);
                    }
                };
                match flag.as_str() {
                    "--seed" => args.seed = parsed,
                    "--width" => args.width = parsed as usize,
                    _ => args.height = parsed as usize,
                }
            }
            other if args.file.is_empty() && !other.starts_with("--") => {
                args.file = other.to_string();
            }
            other => {
                eprintln!("Error: unknown argument '{}'", other);
                usage(program_name);
            }
        }
        i += 1;
    }

    if args.file.is_empty() {
        eprintln!("Error: no input file provided");
        usage(program_name);
    }

    args
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();

    if !Path::new(&args.file).exists() {
        eprintln!("Error: file '{}' not found", args.file);
        process::exit(1);
    }

    let source = fs::read_to_string(&args.file)?;

    let config = GridConfig {
        width: args.width,
        height: args.height,
        ..GridConfig::default()
    };

    let report = analyze_with_seed(&source, &config, args.seed);
    tracing::info!(
        structures = report.structures.len(),
        steps = report.steps.len(),
        "analyzed {}",
        args.file
    );

    if args.steps_only {
        println!("{}", serde_json::to_string_pretty(&report.steps)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
