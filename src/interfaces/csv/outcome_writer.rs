use crate::application::session::Outcome;
use crate::domain::coin::CoinReturn;
use crate::domain::event::Action;
use crate::error::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

const HEADER: [&str; 5] = ["action", "display", "receipt", "refund", "collected"];

/// Output format for session outcomes, also accepted as `--format` by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutcomeFormat {
    #[default]
    Csv,
    /// One JSON object per line.
    Json,
}

/// Flat CSV view of an [`Outcome`].
#[derive(Serialize)]
struct OutcomeRecord {
    action: Action,
    display: u32,
    receipt: Option<u32>,
    refund: Option<String>,
    collected: Option<u32>,
}

impl From<&Outcome> for OutcomeRecord {
    fn from(outcome: &Outcome) -> Self {
        Self {
            action: outcome.action,
            display: outcome.display,
            receipt: outcome.receipt,
            refund: outcome.refund.as_ref().map(format_refund),
            collected: outcome.collected,
        }
    }
}

/// Renders refunded coins largest first, e.g. `25x1;5x1`.
pub fn format_refund(coins: &CoinReturn) -> String {
    coins
        .iter()
        .rev()
        .map(|(coin, count)| format!("{coin}x{count}"))
        .collect::<Vec<_>>()
        .join(";")
}

enum Sink<W: Write> {
    Csv(csv::Writer<W>),
    Json(W),
}

/// Writes session outcomes as CSV or JSON lines.
pub struct OutcomeWriter<W: Write> {
    sink: Sink<W>,
}

impl<W: Write> OutcomeWriter<W> {
    /// Creates a writer. In CSV format the header row is written immediately.
    pub fn new(destination: W, format: OutcomeFormat) -> Result<Self> {
        let sink = match format {
            OutcomeFormat::Csv => {
                let mut writer = csv::WriterBuilder::new()
                    .has_headers(false)
                    .from_writer(destination);
                writer.write_record(HEADER)?;
                Sink::Csv(writer)
            }
            OutcomeFormat::Json => Sink::Json(destination),
        };
        Ok(Self { sink })
    }

    pub fn write_outcome(&mut self, outcome: &Outcome) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(writer) => writer.serialize(OutcomeRecord::from(outcome))?,
            Sink::Json(writer) => {
                serde_json::to_writer(&mut *writer, outcome)?;
                writer.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(writer) => writer.flush()?,
            Sink::Json(writer) => writer.flush()?,
        }
        Ok(())
    }
}
