use crate::domain::coin::CoinReturn;
use crate::domain::pay_station::CoinPayStation;
use crate::domain::ports::PayStation;
use crate::domain::receipt::Receipt;
use crate::error::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A pay station that can be shared between tasks.
///
/// Each operation holds the lock for its own duration. Callers that need a
/// whole insert/settle cycle without interleaving use [`transaction`].
///
/// [`transaction`]: SharedPayStation::transaction
pub struct SharedPayStation<P: PayStation = CoinPayStation> {
    station: Arc<Mutex<P>>,
}

impl<P: PayStation> Clone for SharedPayStation<P> {
    fn clone(&self) -> Self {
        Self {
            station: Arc::clone(&self.station),
        }
    }
}

impl Default for SharedPayStation {
    fn default() -> Self {
        Self::new(CoinPayStation::new())
    }
}

impl<P: PayStation> SharedPayStation<P> {
    pub fn new(station: P) -> Self {
        Self {
            station: Arc::new(Mutex::new(station)),
        }
    }

    pub async fn add_payment(&self, coin_value: u32) -> Result<()> {
        self.station.lock().await.add_payment(coin_value)
    }

    pub async fn read_display(&self) -> u32 {
        self.station.lock().await.read_display()
    }

    pub async fn buy(&self) -> Receipt {
        self.station.lock().await.buy()
    }

    pub async fn cancel(&self) -> CoinReturn {
        self.station.lock().await.cancel()
    }

    pub async fn empty(&self) -> u32 {
        self.station.lock().await.empty()
    }

    /// Runs `f` with exclusive access to the station.
    pub async fn transaction<T>(&self, f: impl FnOnce(&mut P) -> T) -> T {
        let mut station = self.station.lock().await;
        f(&mut station)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coin::{Coin, coin_return_total};

    #[tokio::test]
    async fn test_shared_station_operations() {
        let station: SharedPayStation = SharedPayStation::default();
        station.add_payment(10).await.unwrap();
        station.add_payment(25).await.unwrap();
        assert_eq!(station.read_display().await, 14);

        assert!(station.add_payment(17).await.is_err());
        assert_eq!(station.read_display().await, 14);

        assert_eq!(station.buy().await.value(), 14);
        assert_eq!(station.read_display().await, 0);
    }

    #[tokio::test]
    async fn test_shared_station_cancel_and_empty() {
        let station: SharedPayStation = SharedPayStation::default();
        for _ in 0..3 {
            station.add_payment(10).await.unwrap();
        }
        let coins = station.cancel().await;
        assert_eq!(coins.get(&Coin::Quarter), Some(&1));
        assert_eq!(coins.get(&Coin::Nickel), Some(&1));

        station.add_payment(10).await.unwrap();
        station.add_payment(5).await.unwrap();
        assert_eq!(station.empty().await, 15);
        assert_eq!(station.read_display().await, 0);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_are_all_counted() {
        let station: SharedPayStation = SharedPayStation::default();
        let mut handles = Vec::new();
        for _ in 0..50 {
            let station = station.clone();
            handles.push(tokio::spawn(async move {
                station.add_payment(25).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(station.empty().await, 50 * 25);
    }

    #[tokio::test]
    async fn test_transactions_do_not_interleave() {
        let station: SharedPayStation = SharedPayStation::default();
        let mut handles = Vec::new();
        for _ in 0..20 {
            let station = station.clone();
            handles.push(tokio::spawn(async move {
                station
                    .transaction(|s| {
                        s.add_payment(25).unwrap();
                        s.add_payment(10).unwrap();
                        s.cancel()
                    })
                    .await
            }));
        }
        for handle in handles {
            let coins = handle.await.unwrap();
            assert_eq!(coin_return_total(&coins), 35);
        }
        assert_eq!(station.read_display().await, 0);
    }
}
