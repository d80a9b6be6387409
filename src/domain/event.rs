use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Insert,
    Display,
    Buy,
    Cancel,
    Empty,
}

/// One interaction with the pay station, as read from an event file.
///
/// `coin` is only meaningful for [`Action::Insert`].
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
pub struct StationEvent {
    pub action: Action,
    pub coin: Option<u32>,
}

impl StationEvent {
    pub fn insert(coin: u32) -> Self {
        Self {
            action: Action::Insert,
            coin: Some(coin),
        }
    }

    pub fn of(action: Action) -> Self {
        Self { action, coin: None }
    }
}
