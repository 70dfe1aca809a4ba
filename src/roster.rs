use std::io::Read;

use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use rust_decimal::dec;
use serde::Deserialize;
use tracing::warn;

use crate::account::Account;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RosterEntry {
    pub id: u32,
    pub holder: String,
    pub balance: Decimal,
}

impl From<RosterEntry> for Account {
    fn from(entry: RosterEntry) -> Self {
        Account {
            id: entry.id,
            holder: entry.holder,
            balance: entry.balance,
        }
    }
}

/// Reads a `id,holder,balance` CSV roster, skipping rows that fail to parse.
pub fn read_roster(reader: impl Read) -> Vec<Account> {
    let mut binding = ReaderBuilder::new()
        .has_headers(true)
        .quoting(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    binding
        .deserialize()
        .inspect(|result: &Result<RosterEntry, csv::Error>| {
            if let Err(e) = result {
                warn!("skipping roster row: {}", e);
            }
        })
        .filter_map(Result::ok)
        .map(Account::from)
        .collect()
}

pub fn default_roster() -> Vec<Account> {
    vec![
        Account {
            id: 1,
            holder: "Alejandro".to_string(),
            balance: dec!(1500.0),
        },
        Account {
            id: 2,
            holder: "Maria".to_string(),
            balance: dec!(2500.0),
        },
        Account {
            id: 3,
            holder: "Carlos".to_string(),
            balance: dec!(800.0),
        },
    ]
}
