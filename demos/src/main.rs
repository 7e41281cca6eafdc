//! Terminal A* demo.
//!
//! Run: cargo run --bin pathfind -- --seed 42 --width 30 --height 15

use std::io;

use clap::Parser;
use gridstar_demos::{Args, run};

fn main() {
    let args = Args::parse();
    init_logging(&args.log_level);

    let result = args.resolve().and_then(|config| {
        let mut out = io::stdout().lock();
        run(&config, &mut out)
    });
    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn init_logging(level: &str) {
    env_logger::Builder::new()
        .parse_filters(level)
        .format_timestamp(None)
        .init();
}
