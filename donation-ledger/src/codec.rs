//! JSON encoding of ledger records.
//!
//! Records are written as `{"donor":..,"amount":"<digits>","date":..,"cause":..}`.
//! Decoding reads fields by name, so the field order of stored bytes does not
//! matter. Amounts are parsed in a second step so that a well formed record
//! with a bad amount is reported as such.

use cosmwasm_std::{from_slice, to_vec, StdResult, Uint64};
use serde::Deserialize;

use crate::error::ContractError;
use crate::state::Donation;

// Text-level view of a stored record, before the amount is checked.
#[derive(Deserialize)]
struct RawDonation {
    donor: String,
    amount: String,
    date: String,
    cause: String,
}

pub fn encode(donation: &Donation) -> StdResult<Vec<u8>> {
    to_vec(donation)
}

pub fn decode(bytes: &[u8]) -> Result<Donation, ContractError> {
    let raw: RawDonation = from_slice(bytes).map_err(|err| ContractError::Decode {
        msg: err.to_string(),
    })?;

    Ok(Donation {
        donor: raw.donor,
        amount: parse_amount(&raw.amount)?,
        date: raw.date,
        cause: raw.cause,
    })
}

/// Parses a base-10 amount, as given to `createDonation` or found in a record.
pub fn parse_amount(text: &str) -> Result<Uint64, ContractError> {
    text.parse::<u64>()
        .map(Uint64::new)
        .map_err(|_| ContractError::MalformedAmount {
            value: text.to_string(),
        })
}
