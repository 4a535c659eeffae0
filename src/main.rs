use clap::Parser;

use gsf_sensor::cli::{self, Args};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    cli::run(args)
}
