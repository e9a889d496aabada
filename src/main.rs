mod logging;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use weather_report::{generate_daily_summary, generate_summary, load_data_from_csv};

/// Summarise daily weather records.
#[derive(Parser)]
#[command(
    name = "weather-report",
    version,
    about = "Overview and daily report from a CSV of Fahrenheit min/max readings"
)]
struct Cli {
    /// CSV file: a header row, then `date,min,max` rows.
    file: PathBuf,

    /// Which report to print.
    #[arg(short, long, value_enum, default_value_t = Report::Both)]
    report: Report,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Report {
    Overview,
    Daily,
    Both,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let records = load_data_from_csv(&cli.file)?;
    tracing::info!(file = %cli.file.display(), records = records.len(), "loaded");

    match cli.report {
        Report::Overview => print!("{}", generate_summary(&records)?),
        Report::Daily => print!("{}", generate_daily_summary(&records)?),
        Report::Both => {
            print!("{}", generate_summary(&records)?);
            println!();
            print!("{}", generate_daily_summary(&records)?);
        }
    }

    Ok(())
}
