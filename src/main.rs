use clap::Parser;
use std::process;
use topo::cli::{Cli, Commands};
use topo::cli_handlers;

fn main() {
    // Logs go to stderr so stdout only carries the order
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sort {
            file,
            json,
            separator,
        } => cli_handlers::handle_sort(file.as_deref(), json, &separator),
        Commands::Check { file } => cli_handlers::handle_check(file.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
