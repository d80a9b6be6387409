use serde::Serialize;

/// Proof of purchase issued by a pay station.
///
/// Carries the parking minutes bought. Once issued it is detached from the
/// station that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Receipt {
    minutes: u32,
}

impl Receipt {
    pub fn new(minutes: u32) -> Self {
        Self { minutes }
    }

    /// Parking minutes printed on the receipt.
    pub fn value(&self) -> u32 {
        self.minutes
    }
}
