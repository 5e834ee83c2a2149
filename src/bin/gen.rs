//! findlocation-gen: build a sorted record file from a text location list.

use clap::Parser;
use findlocation::converter::TextParser;
use findlocation::record::RECORD_SIZE;
use findlocation::search::verify_sorted;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "findlocation-gen")]
#[command(author = "Kaitu.io")]
#[command(version = "0.1.0")]
#[command(about = "Generate fixed-width record files from text location lists", long_about = None)]
struct Cli {
    /// Input text file (PREFIX<TAB>LOCATION per line)
    #[arg(short, long)]
    input: PathBuf,

    /// Output record file
    #[arg(short, long)]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = convert_file(&cli.input, &cli.output) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn convert_file(input: &PathBuf, output: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("Reading input file: {:?}", input);

    let file = fs::File::open(input)?;
    let mut writer = TextParser::parse(file)?;
    log::debug!("Parsed {} entries", writer.len());

    let data = writer.write();
    verify_sorted(&data)?;

    log::debug!(
        "Writing output file: {:?} ({} bytes, {} records)",
        output,
        data.len(),
        data.len() / RECORD_SIZE
    );

    let mut file = fs::File::create(output)?;
    file.write_all(&data)?;

    log::info!("Successfully converted {:?} -> {:?}", input, output);
    Ok(())
}
