//! Range listing and amount totals over ledger keys.

use cosmwasm_std::{to_binary, Binary, Deps, Uint64};

use crate::codec;
use crate::error::ContractError;
use crate::msg::{DonationEntry, TotalDonationsResp};
use crate::store;

/// Lists `[start, end)` as a JSON array of `{"Key", "Record"}` objects in key order.
pub fn list_range(deps: Deps, start: &str, end: &str) -> Result<Binary, ContractError> {
    let entries = store::range(deps.storage, start, end)
        .map(|entry| -> Result<_, ContractError> {
            let (key, raw) = entry?;
            Ok(DonationEntry {
                key,
                record: codec::decode(&raw)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let listing = to_binary(&entries)?;
    deps.api.debug(&format!(
        "- queryAllDonations:\n{}",
        String::from_utf8_lossy(listing.as_slice())
    ));
    Ok(listing)
}

/// Sums the amounts of every record in `[start, end)`.
///
/// Each record is decoded and its `amount` field read directly. Any record
/// that fails to decode fails the whole total.
pub fn total_amount(deps: Deps, start: &str, end: &str) -> Result<Uint64, ContractError> {
    let mut total = Uint64::zero();
    for entry in store::range(deps.storage, start, end) {
        let (_, raw) = entry?;
        total = total.checked_add(codec::decode(&raw)?.amount)?;
    }

    deps.api
        .debug(&format!("- totalDonationAmount:\n{}", TotalDonationsResp { total }));
    Ok(total)
}
