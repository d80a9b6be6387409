use super::coin::{Coin, CoinReturn};
use super::ports::PayStation;
use super::receipt::Receipt;
use crate::error::{PayStationError, Result};

/// Cents that buy one unit of parking time.
pub const CENTS_PER_UNIT: u32 = 5;
/// Minutes of parking bought by one unit.
pub const MINUTES_PER_UNIT: u32 = 2;

/// Converts an inserted amount to parking minutes.
///
/// Partial units buy nothing: 7 cents buy the same 2 minutes as 5 cents.
pub fn minutes_for(cents: u32) -> u32 {
    cents / CENTS_PER_UNIT * MINUTES_PER_UNIT
}

/// Coin-operated pay station holding a single transaction.
///
/// Not synchronised: share it through
/// [`SharedPayStation`](crate::application::shared::SharedPayStation).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoinPayStation {
    inserted_so_far: u32,
    time_bought: u32,
}

impl CoinPayStation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cents inserted in the current transaction.
    pub fn inserted_so_far(&self) -> u32 {
        self.inserted_so_far
    }

    fn reset(&mut self) {
        self.inserted_so_far = 0;
        self.time_bought = 0;
    }
}

impl PayStation for CoinPayStation {
    fn add_payment(&mut self, coin_value: u32) -> Result<()> {
        let coin = Coin::try_from(coin_value)?;
        self.inserted_so_far = self.inserted_so_far.checked_add(coin.value()).ok_or(
            PayStationError::CashBoxFull {
                inserted: self.inserted_so_far,
                coin: coin.value(),
            },
        )?;
        self.time_bought = minutes_for(self.inserted_so_far);
        Ok(())
    }

    fn read_display(&self) -> u32 {
        self.time_bought
    }

    fn buy(&mut self) -> Receipt {
        let receipt = Receipt::new(self.time_bought);
        self.reset();
        receipt
    }

    fn cancel(&mut self) -> CoinReturn {
        let mut coins = CoinReturn::new();
        let mut remaining = self.inserted_so_far;
        for coin in Coin::DESCENDING {
            let count = remaining / coin.value();
            if count > 0 {
                coins.insert(coin, count);
                remaining -= count * coin.value();
            }
        }
        // Accepted coins always sum to a multiple of the smallest denomination.
        debug_assert_eq!(remaining, 0, "{remaining} cents left undispensed");
        self.reset();
        coins
    }

    fn empty(&mut self) -> u32 {
        let collected = self.inserted_so_far;
        self.reset();
        collected
    }
}
