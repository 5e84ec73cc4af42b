use clap::Parser;
use extract_window::{Args, Config, extract_window};
use log::info;
use simple_logger::init_with_level;

fn main() {
    let args = Args::parse();

    init_with_level(args.level).unwrap_or_else(|e| panic!("{}", e));
    info!("Starting extract_window with args: {}", args);

    let config = Config::from(args);
    if let Err(err) = extract_window(&config) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }

    info!("~ DONE ~");
}
