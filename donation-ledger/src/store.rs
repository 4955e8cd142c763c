//! Record store facade over the contract storage.
//!
//! Every ledger read and write goes through here with an explicit storage
//! handle. Values are the raw bytes produced by [`codec::encode`].

use cosmwasm_std::{Order, Storage};

use crate::codec;
use crate::error::ContractError;
use crate::state::{Donation, DONATIONS};

/// A record key with the raw encoded record stored under it.
pub type StoreEntry = (String, Vec<u8>);

pub fn put(storage: &mut dyn Storage, key: &str, donation: &Donation) -> Result<(), ContractError> {
    let bytes = codec::encode(donation)?;
    storage.set(&DONATIONS.key(key), &bytes);
    Ok(())
}

/// Raw bytes under `key`. A key that was never written gives `None`.
pub fn get(storage: &dyn Storage, key: &str) -> Option<Vec<u8>> {
    storage.get(&DONATIONS.key(key))
}

pub fn load(storage: &dyn Storage, key: &str) -> Result<Option<Donation>, ContractError> {
    get(storage, key).map(|bytes| codec::decode(&bytes)).transpose()
}

/// Cursor over `[start, end)` in ascending key order, yielding raw values.
///
/// Values are not decoded here. The cursor borrows `storage` and is released
/// when dropped.
pub fn range<'a>(
    storage: &'a dyn Storage,
    start: &str,
    end: &str,
) -> impl Iterator<Item = Result<StoreEntry, ContractError>> + 'a {
    // a bare key is appended to the namespace without a length prefix
    let namespace_len = DONATIONS.key("").len();
    let start = DONATIONS.key(start).to_vec();
    let end = DONATIONS.key(end).to_vec();
    storage
        .range(Some(start.as_slice()), Some(end.as_slice()), Order::Ascending)
        .map(move |(full_key, value)| {
            let key = full_key
                .get(namespace_len..)
                .ok_or_else(|| ContractError::StoreScan {
                    msg: "scanned key is shorter than the ledger namespace".to_string(),
                })?;
            let key = String::from_utf8(key.to_vec()).map_err(|err| ContractError::StoreScan {
                msg: err.to_string(),
            })?;
            Ok((key, value))
        })
}

/// Writes `donations[i]` under `prefix` + `i`, overwriting, and returns the keys in order.
pub fn seed(
    storage: &mut dyn Storage,
    prefix: &str,
    donations: &[Donation],
) -> Result<Vec<String>, ContractError> {
    donations
        .iter()
        .enumerate()
        .map(|(index, donation)| {
            let key = format!("{}{}", prefix, index);
            put(storage, &key, donation)?;
            Ok(key)
        })
        .collect()
}
