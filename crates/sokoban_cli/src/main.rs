//! Native host for the Sokoban rules.
//!
//! Examples:
//!   sokoban-cli show
//!   sokoban-cli show levels/example.txt
//!   sokoban-cli check levels/example.txt
//!   sokoban-cli play RRDL
//!   sokoban-cli play --level levels/example.txt RRDL
//!
//! Set `RUST_LOG=debug` to trace every move.

use std::process;

use tracing_subscriber::EnvFilter;

mod cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match cli::parse_args(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{}", cli::USAGE);
            process::exit(2);
        }
    };

    match cli::run(command) {
        Ok(report) => print!("{report}"),
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
