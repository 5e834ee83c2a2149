//! tail-lines: print the last N lines of a file or standard input.

use clap::Parser;
use findlocation::lines::{parse_count, tail, DEFAULT_LINES};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tail-lines")]
#[command(version = "0.1.0")]
#[command(about = "Print the last N lines of a file", long_about = None)]
struct Cli {
    /// Number of lines to print
    #[arg(short = 'n', value_parser = parse_positive, default_value_t = DEFAULT_LINES)]
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
            Ok(file) => tail(BufReader::new(file), &mut out, cli.lines),
            Err(e) => {
                log::debug!("open {:?}: {}", path, e);
                eprintln!("Error opening file");
                std::process::exit(1);
            }
        },
        None => tail(io::stdin().lock(), &mut out, cli.lines),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn parse_positive(s: &str) -> findlocation::Result<usize> {
    match parse_count(s)? {
        0 => Err(findlocation::Error::InvalidLineCount(s.to_string())),
        n => Ok(n),
    }
}
