use crate::domain::coin::{CoinReturn, coin_return_total};
use crate::domain::event::{Action, StationEvent};
use crate::domain::ports::PayStationBox;
use crate::error::{PayStationError, Result};
use serde::Serialize;
use tracing::{debug, info};

/// What the station did in response to one event.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Outcome {
    pub action: Action,
    /// Minutes shown on the display after the event.
    pub display: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund: Option<CoinReturn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collected: Option<u32>,
}

impl Outcome {
    fn new(action: Action, display: u32) -> Self {
        Self {
            action,
            display,
            receipt: None,
            refund: None,
            collected: None,
        }
    }
}

/// Replays station events against a pay station.
///
/// `StationSession` owns the station and applies events in the order they
/// are submitted. Rejected events leave the station untouched.
pub struct StationSession {
    station: PayStationBox,
}

impl StationSession {
    pub fn new(station: PayStationBox) -> Self {
        Self { station }
    }

    /// Applies one event and reports the resulting outcome.
    ///
    /// Fails with `InvalidCoin`, `MissingCoin` or `CashBoxFull` for a bad
    /// insert.
    pub fn process_event(&mut self, event: StationEvent) -> Result<Outcome> {
        let outcome = match event.action {
            Action::Insert => {
                let coin = event.coin.ok_or(PayStationError::MissingCoin)?;
                self.station.add_payment(coin)?;
                let minutes = self.station.read_display();
                debug!(coin, minutes, "coin accepted");
                Outcome::new(Action::Insert, minutes)
            }
            Action::Display => Outcome::new(Action::Display, self.station.read_display()),
            Action::Buy => {
                let receipt = self.station.buy();
                info!(minutes = receipt.value(), "receipt issued");
                Outcome {
                    receipt: Some(receipt.value()),
                    ..Outcome::new(Action::Buy, self.station.read_display())
                }
            }
            Action::Cancel => {
                let refund = self.station.cancel();
                info!(cents = coin_return_total(&refund), "transaction cancelled");
                Outcome {
                    refund: Some(refund),
                    ..Outcome::new(Action::Cancel, self.station.read_display())
                }
            }
            Action::Empty => {
                let collected = self.station.empty();
                info!(cents = collected, "station emptied");
                Outcome {
                    collected: Some(collected),
                    ..Outcome::new(Action::Empty, self.station.read_display())
                }
            }
        };
        Ok(outcome)
    }

    /// Consumes the session and hands back the station.
    pub fn into_station(self) -> PayStationBox {
        self.station
    }
}
