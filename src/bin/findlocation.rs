//! findlocation: print the location stored for a 10-digit number.

use clap::Parser;
use findlocation::present::write_location;
use findlocation::{find_location, Input, LookupConfig, Strategy};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "findlocation")]
#[command(author = "Kaitu.io")]
#[command(version = "0.1.0")]
#[command(about = "Find the location for a 10-digit number in a fixed-width record file", long_about = None)]
struct Cli {
    /// 10-digit number; its first six digits select the record
    number: String,

    /// Record file (reads standard input when omitted)
    filename: Option<PathBuf>,

    /// Search strategy: auto, binary or linear
    #[arg(long, default_value = "auto")]
    strategy: Strategy,

    /// Check that records are sorted before a binary search
    #[arg(long)]
    verify_sorted: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            eprintln!("Usage: findlocation <10-digit-number> [filename]");
            std::process::exit(1);
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(0);
        }
    };

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = LookupConfig {
        strategy: cli.strategy,
        verify_sorted: cli.verify_sorted,
        ..LookupConfig::default()
    };
    let input = Input::from_arg(cli.filename);

    let payload = match find_location(&cli.number, &input, &config) {
        Ok(payload) => payload,
        Err(e) => {
            log::debug!("lookup failed: {:?}", e);
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    };

    let stdout = std::io::stdout();
    if let Err(e) = write_location(&mut stdout.lock(), &payload) {
        eprintln!("Error writing to file: {}", e);
        std::process::exit(1);
    }
}
