use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Incorrect number of arguments. Expecting {expected}")]
    InvalidArguments {
        function: String,
        expected: usize,
        got: usize,
    },

    #[error("Invalid Smart Contract function name: {name}")]
    UnknownOperation { name: String },

    #[error("Operation {name} writes to the ledger and cannot run as a query")]
    ReadOnlyOperation { name: String },

    #[error("Range scan failed: {msg}")]
    StoreScan { msg: String },

    #[error("Malformed donation amount: {value:?}")]
    MalformedAmount { value: String },

    #[error("Cannot decode donation record: {msg}")]
    Decode { msg: String },

    #[error("Invalid config: {msg}")]
    InvalidConfig { msg: String },

    #[error("Invalid migration: {msg}")]
    InvalidMigration { msg: String },
}
