//! Name based invocation: `function` plus positional string arguments,
//! resolved into a typed [`Call`] before any handler runs.

use crate::codec;
use crate::error::ContractError;
use crate::state::Donation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    QueryDonation,
    InitLedger,
    CreateDonation,
    QueryAllDonations,
    TotalDonationAmount,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::QueryDonation,
        Operation::InitLedger,
        Operation::CreateDonation,
        Operation::QueryAllDonations,
        Operation::TotalDonationAmount,
    ];

    fn index(self) -> usize {
        match self {
            Operation::QueryDonation => 0,
            Operation::InitLedger => 1,
            Operation::CreateDonation => 2,
            Operation::QueryAllDonations => 3,
            Operation::TotalDonationAmount => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::QueryDonation => "queryDonation",
            Operation::InitLedger => "initLedger",
            Operation::CreateDonation => "createDonation",
            Operation::QueryAllDonations => "queryAllDonations",
            Operation::TotalDonationAmount => "totalDonationAmount",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Operation::QueryDonation => 1,
            Operation::CreateDonation => 5,
            Operation::InitLedger
            | Operation::QueryAllDonations
            | Operation::TotalDonationAmount => 0,
        }
    }

    pub fn mutates(self) -> bool {
        matches!(self, Operation::InitLedger | Operation::CreateDonation)
    }

    pub fn from_name(name: &str) -> Option<Operation> {
        Operation::ALL.iter().copied().find(|op| op.name() == name)
    }
}

/// Checks that every operation sits at its own slot in [`Operation::ALL`] and
/// that every name resolves back to the operation it came from.
pub fn check_table() -> Result<(), ContractError> {
    for (slot, op) in Operation::ALL.iter().copied().enumerate() {
        if op.index() != slot || Operation::from_name(op.name()) != Some(op) {
            return Err(ContractError::InvalidConfig {
                msg: format!("operation table entry {} ({}) is inconsistent", slot, op.name()),
            });
        }
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    QueryDonation { key: String },
    InitLedger,
    CreateDonation { key: String, donation: Donation },
    QueryAllDonations,
    TotalDonationAmount,
}

impl Call {
    pub fn operation(&self) -> Operation {
        match self {
            Call::QueryDonation { .. } => Operation::QueryDonation,
            Call::InitLedger => Operation::InitLedger,
            Call::CreateDonation { .. } => Operation::CreateDonation,
            Call::QueryAllDonations => Operation::QueryAllDonations,
            Call::TotalDonationAmount => Operation::TotalDonationAmount,
        }
    }
}

pub fn resolve(function: &str, args: Vec<String>) -> Result<Call, ContractError> {
    let op = Operation::from_name(function).ok_or_else(|| ContractError::UnknownOperation {
        name: function.to_string(),
    })?;

    let call = match op {
        Operation::QueryDonation => {
            let [key] = take(op, args)?;
            Call::QueryDonation { key }
        }
        Operation::InitLedger => {
            let [] = take(op, args)?;
            Call::InitLedger
        }
        Operation::CreateDonation => {
            let [key, donor, amount, date, cause] = take(op, args)?;
            let amount = codec::parse_amount(&amount)?;
            Call::CreateDonation {
                key,
                donation: Donation {
                    donor,
                    amount,
                    date,
                    cause,
                },
            }
        }
        Operation::QueryAllDonations => {
            let [] = take(op, args)?;
            Call::QueryAllDonations
        }
        Operation::TotalDonationAmount => {
            let [] = take(op, args)?;
            Call::TotalDonationAmount
        }
    };
    Ok(call)
}

// `N` is the arity of `op`; `table_is_consistent` keeps it in step with `Operation::arity`.
fn take<const N: usize>(op: Operation, args: Vec<String>) -> Result<[String; N], ContractError> {
    args.try_into().map_err(|args: Vec<String>| ContractError::InvalidArguments {
        function: op.name().to_string(),
        expected: N,
        got: args.len(),
    })
}
