use super::coin::CoinReturn;
use super::receipt::Receipt;
use crate::error::Result;

/// Operations a parking pay station offers to its callers.
///
/// Implementations hold one transaction at a time. `buy`, `cancel` and
/// `empty` settle it and leave the station ready for the next one.
pub trait PayStation {
    /// Inserts a coin worth `coin_value` cents.
    fn add_payment(&mut self, coin_value: u32) -> Result<()>;
    /// Minutes of parking bought so far.
    fn read_display(&self) -> u32;
    fn buy(&mut self) -> Receipt;
    fn cancel(&mut self) -> CoinReturn;
    /// Hands the inserted cash to the operator, in cents.
    fn empty(&mut self) -> u32;
}

pub type PayStationBox = Box<dyn PayStation + Send>;
