//! head-lines: print the first N lines of a file or standard input.

use clap::Parser;
use findlocation::lines::{head, parse_count, DEFAULT_LINES};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "head-lines")]
#[command(version = "0.1.0")]
#[command(about = "Print the first N lines of a file", long_about = None)]
struct Cli {
    /// Number of lines to print
    #[arg(short = 'n', value_parser = parse_count, default_value_t = DEFAULT_LINES)]
    lines: usize,

    /// Input file (reads standard input when omitted)
    filename: Option<PathBuf>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match &cli.filename {
        Some(path) => match File::open(path) {
            Ok(file) => head(BufReader::new(file), &mut out, cli.lines),
            Err(e) => {
                log::debug!("open {:?}: {}", path, e);
                eprintln!("Error opening file");
                std::process::exit(1);
            }
        },
        None => head(io::stdin().lock(), &mut out, cli.lines),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
