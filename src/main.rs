use std::env;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use rand::{rngs::StdRng, SeedableRng};

use word_grid::{place_message, Difficulty, GridConfig, WordSearch};

/// Generate a word search grid hiding the given words.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Words to hide in the grid
    words: Vec<String>,

    /// Difficulty level for the grid
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Number of rows
    #[arg(short, long, default_value_t = word_grid::config::DEFAULT_ROWS)]
    rows: usize,

    /// Number of columns
    #[arg(short, long, default_value_t = word_grid::config::DEFAULT_COLUMNS)]
    columns: usize,

    /// Seed to regenerate a grid
    #[arg(short, long)]
    seed: Option<u64>,

    /// Secret message to stamp across the finished grid
    #[arg(short, long)]
    message: Option<String>,

    /// Print the cells on a single line instead of one row per line
    #[arg(long, default_value_t = false)]
    flat: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.debug {
        env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();

    let config = match GridConfig::new(args.rows, args.columns) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(1);
        }
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    debug!(
        "Generating a {} x {} {} grid for {:?}",
        config.num_rows, config.num_columns, args.difficulty, args.words
    );

    let mut grid =
        WordSearch::new(config, args.difficulty).create_grid(args.words.as_slice(), &mut rng);

    if let Some(message) = &args.message {
        if place_message(&mut grid, message, &mut rng) == 0 {
            eprintln!("Message does not fit in the grid, ignoring it");
        }
    }

    if args.flat {
        println!("{}", grid.flatten().concat());
    } else {
        print!("{grid}");
    }

    ExitCode::SUCCESS
}
