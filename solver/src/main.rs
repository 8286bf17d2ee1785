use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use gogen::Puzzle;

/// Solve a Gogen letter-grid puzzle
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the puzzle file: five board rows using '?' for blanks, a separator line,
    /// the remaining letters, another separator line, then one word per line
    file: PathBuf,

    /// Log how the constraint model is built
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, if verbose { LevelFilter::Debug } else { LevelFilter::Warn })
        .format_timestamp(None)
        .format_target(false);

    // let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let puzzle = Puzzle::load_from_path(&cli.file)?;
    log::info!("loaded {}", cli.file.display());
    print!("{}", puzzle);

    println!("Solving the Gogen...");
    let solved = puzzle.solve()?;
    println!("Gogen solved.");

    print!("{}", solved);
    Ok(())
}
