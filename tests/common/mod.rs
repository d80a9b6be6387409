#![allow(dead_code)]

use paystation::domain::coin::{Coin, CoinReturn};
use rand::Rng;
use rand::seq::SliceRandom;
use std::io::{Error, Write};

pub const VALID_COINS: [u32; 3] = [5, 10, 25];

/// Random valid coins for one transaction.
pub fn random_coins(rng: &mut impl Rng, max_len: usize) -> Vec<u32> {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| *VALID_COINS.choose(rng).unwrap())
        .collect()
}

/// Writes an events CSV inserting `coins` and settling with `settle`.
pub fn write_events<W: Write>(destination: W, coins: &[u32], settle: &str) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_writer(destination);
    wtr.write_record(["action", "coin"])?;
    for coin in coins {
        wtr.write_record(["insert", &coin.to_string()])?;
    }
    wtr.write_record([settle, ""])?;
    wtr.flush()?;
    Ok(())
}

/// Refund built one coin at a time, largest coin that still fits first.
pub fn greedy_refund(mut cents: u32) -> CoinReturn {
    let mut coins = CoinReturn::new();
    while let Some(coin) = Coin::DESCENDING
        .into_iter()
        .find(|coin| coin.value() <= cents)
    {
        *coins.entry(coin).or_insert(0) += 1;
        cents -= coin.value();
    }
    coins
}
