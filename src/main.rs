use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paystation::application::session::StationSession;
use paystation::domain::pay_station::CoinPayStation;
use paystation::domain::ports::PayStationBox;
use paystation::interfaces::csv::event_reader::EventReader;
use paystation::interfaces::csv::outcome_writer::{OutcomeFormat, OutcomeWriter};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input events CSV file (`action,coin`)
    input: PathBuf,

    /// Output format for the per-event outcomes
    #[arg(long, value_enum, default_value_t = OutcomeFormat::Csv)]
    format: OutcomeFormat,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let station: PayStationBox = Box::new(CoinPayStation::new());
    let mut session = StationSession::new(station);

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = EventReader::new(file);

    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock(), cli.format).into_diagnostic()?;

    for (index, event) in reader.events().enumerate() {
        let row = index + 1;
        match event {
            Ok(event) => match session.process_event(event) {
                Ok(outcome) => writer.write_outcome(&outcome).into_diagnostic()?,
                Err(e) => warn!(row, "Error processing event: {}", e),
            },
            Err(e) => warn!(row, "Error reading event: {}", e),
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
