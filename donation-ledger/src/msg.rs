use std::fmt;

use cosmwasm_std::Uint64;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{Config, Donation};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub struct InstantiateMsg {
    /// Prefix for seeded keys, `DONATION` when unset.
    pub key_prefix: Option<String>,
    /// Inclusive start of listings and totals, `<key_prefix>0` when unset.
    pub range_start: Option<String>,
    /// Exclusive end of listings and totals, `<key_prefix>999` when unset.
    pub range_end: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    InitLedger {},
    CreateDonation {
        key: String,
        donor: String,
        amount: Uint64,
        date: String,
        cause: String,
    },
    /// Runs an operation by name, e.g. `createDonation` with five arguments.
    Invoke { function: String, args: Vec<String> },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config {},
    Donation { key: String },
    AllDonations {},
    TotalDonationAmount {},
    /// Read-only operations by name, e.g. `queryDonation` with one argument.
    Invoke { function: String, args: Vec<String> },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct GetConfigResponse {
    pub config: Option<Config>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct DonationResp {
    pub donation: Option<Donation>,
}

// One element of the all-donations listing
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DonationEntry {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Record")]
    pub record: Donation,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct TotalDonationsResp {
    pub total: Uint64,
}

impl fmt::Display for TotalDonationsResp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total Donations: [{}]", self.total)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct MigrateMsg {}
