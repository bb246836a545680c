//! Game of Life CLI - Run a grid for a number of generations.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use life_communities::{
    compute::{GameOfLife, GenerationStats},
    schema::{Pattern, Seed, SimulationConfig},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let (config, steps_arg) = if args[1] == "--grid" {
        let Some(path) = args.get(2) else {
            print_usage(&args[0]);
            process::exit(1);
        };
        let config = SimulationConfig {
            seed: Seed {
                pattern: Pattern::File {
                    path: PathBuf::from(path),
                },
            },
            ..Default::default()
        };
        (config, args.get(3))
    } else {
        (load_config(Path::new(&args[1])), args.get(2))
    };

    let generations = steps_arg
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.generations);

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        process::exit(1);
    }

    let mut game = GameOfLife::from_seed(&config.seed).unwrap_or_else(|e| {
        eprintln!("Error creating grid: {}", e);
        process::exit(1);
    });

    println!("Game of Life");
    println!("============");
    println!("Grid: {}x{}", game.grid().rows(), game.grid().cols());
    println!("Generations: {}", generations);
    println!();

    let initial = game.stats();
    println!("Initial state:");
    print_stats(&initial);
    print!("{}", game.grid());
    println!();

    let start = Instant::now();
    for i in 0..generations {
        game.next_generation();

        if (i + 1) % config.report_interval == 0 {
            let stats = game.stats();
            println!(
                "  Generation {}/{}: alive={}, communities={}",
                stats.generation, generations, stats.alive_cells, stats.communities
            );
        }

        if !game.is_alive() {
            println!("  All cells dead after {} generations", game.generation());
            break;
        }
    }
    let elapsed = start.elapsed();

    println!();
    println!("Final state:");
    print_stats(&game.stats());
    print!("{}", game.grid());
    println!();
    println!("Time: {:.3}s", elapsed.as_secs_f32());
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <config.json> [generations]", program);
    eprintln!("       {} --grid <grid.txt> [generations]", program);
    eprintln!("       {} --example", program);
    eprintln!();
    eprintln!("Run Conway's Game of Life on a toroidal grid and count communities.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  config.json  Path to simulation configuration file");
    eprintln!("  grid.txt     Grid file: rows, cols, then rows*cols true/false values");
    eprintln!("  generations  Number of generations (overrides the configuration)");
}

fn load_config(path: &Path) -> SimulationConfig {
    let config_str = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        process::exit(1);
    });

    serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        process::exit(1);
    })
}

fn print_stats(stats: &GenerationStats) {
    println!("  Generation: {}", stats.generation);
    println!("  Alive cells: {}", stats.alive_cells);
    println!(
        "  Communities: {} (largest: {})",
        stats.communities, stats.largest_community
    );
}

fn print_example_config() {
    let config = SimulationConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing example: {}", e),
    }
}
