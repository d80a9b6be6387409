use crate::error::PayStationError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A coin accepted by the pay station.
///
/// The discriminant is the coin's value in cents. Variants are declared in
/// ascending value so the derived ordering matches the face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u32")]
pub enum Coin {
    Nickel = 5,
    Dime = 10,
    Quarter = 25,
}

impl Coin {
    /// Denominations from largest to smallest, the order used for refunds.
    pub const DESCENDING: [Coin; 3] = [Coin::Quarter, Coin::Dime, Coin::Nickel];

    pub fn value(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for Coin {
    type Error = PayStationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(Coin::Nickel),
            10 => Ok(Coin::Dime),
            25 => Ok(Coin::Quarter),
            other => Err(PayStationError::InvalidCoin(other)),
        }
    }
}

impl From<Coin> for u32 {
    fn from(coin: Coin) -> Self {
        coin.value()
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Coins handed back by a cancelled transaction, keyed by denomination.
///
/// Only denominations that were actually dispensed are present.
pub type CoinReturn = BTreeMap<Coin, u32>;

/// Total value in cents of a coin return.
pub fn coin_return_total(coins: &CoinReturn) -> u32 {
    coins.iter().map(|(coin, count)| coin.value() * count).sum()
}
