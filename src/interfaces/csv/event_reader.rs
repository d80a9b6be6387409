use crate::domain::event::StationEvent;
use crate::error::{PayStationError, Result};
use std::io::Read;

/// Reads station events from a CSV source with an `action,coin` header.
///
/// Whitespace around fields is trimmed and rows may omit the `coin` column.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes events.
    ///
    /// A malformed row yields an error for that row only; iteration continues.
    pub fn events(self) -> impl Iterator<Item = Result<StationEvent>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PayStationError::from))
    }
}
