use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::Uint64;
use cw_storage_plus::{Item, Map};

pub const DEFAULT_KEY_PREFIX: &str = "DONATION";
// Unset scan bounds are the key prefix followed by these, i.e.
// ["DONATION0", "DONATION999") by default. Bounds compare as text:
// DONATION999 and every key extending it (DONATION9990, ...) fall outside.
pub const DEFAULT_RANGE_START_INDEX: &str = "0";
pub const DEFAULT_RANGE_END_INDEX: &str = "999";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub key_prefix: String,
    pub range_start: String,
    pub range_end: String,
}

/// A single donation as written to the ledger.
///
/// Field order is the encoding order. `amount` is a digit string on the wire.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Donation {
    pub donor: String,
    pub amount: Uint64,
    pub date: String,
    pub cause: String,
}

pub const CONFIG: Item<Config> = Item::new("config");

// record key -> encoded donation, written through `store` only
pub const DONATIONS: Map<&str, Donation> = Map::new("donations");
