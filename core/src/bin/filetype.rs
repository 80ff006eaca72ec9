//! filetype binary - classifies data URIs from arguments or stdin.

use clap::Parser;
use filetype::cli::{run, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
