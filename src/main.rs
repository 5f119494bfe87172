use clap::Parser;
use colored::Colorize;
use judge_mock::cli::{self, Cli};
use judge_mock::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging();
    if let Err(err) = cli::run(cli) {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
