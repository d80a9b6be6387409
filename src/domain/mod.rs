//! Domain layer: coins, receipts and the pay station state machine.

pub mod coin;
pub mod event;
pub mod pay_station;
pub mod ports;
pub mod receipt;
