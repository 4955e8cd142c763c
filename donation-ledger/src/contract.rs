#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, Uint64};
use cw2::{get_contract_version, set_contract_version};

use crate::dispatch::{self, Call};
use crate::error::ContractError;
use crate::ledger;
use crate::msg::{
    DonationResp, ExecuteMsg, GetConfigResponse, InstantiateMsg, MigrateMsg, QueryMsg,
    TotalDonationsResp,
};
use crate::state::{
    Config, Donation, CONFIG, DEFAULT_KEY_PREFIX, DEFAULT_RANGE_END_INDEX,
    DEFAULT_RANGE_START_INDEX,
};
use crate::store;

const CONTRACT_NAME: &str = "crates.io:donation-ledger";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ////////////////////////////////////////INSTANTIATE///////////////////////////////////////////////
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    dispatch::check_table()?;

    let key_prefix = msg.key_prefix.unwrap_or_else(|| DEFAULT_KEY_PREFIX.to_string());
    if key_prefix.is_empty() {
        return Err(ContractError::InvalidConfig {
            msg: "key prefix must not be empty".to_string(),
        });
    }
    // unset bounds follow the prefix, so seeded keys stay visible
    let config = Config {
        range_start: msg
            .range_start
            .unwrap_or_else(|| format!("{}{}", key_prefix, DEFAULT_RANGE_START_INDEX)),
        range_end: msg
            .range_end
            .unwrap_or_else(|| format!("{}{}", key_prefix, DEFAULT_RANGE_END_INDEX)),
        key_prefix,
    };
    if config.range_start >= config.range_end {
        return Err(ContractError::InvalidConfig {
            msg: format!(
                "range start {} must sort before range end {}",
                config.range_start, config.range_end
            ),
        });
    }
    let first_seeded = format!("{}0", config.key_prefix);
    if first_seeded < config.range_start || first_seeded >= config.range_end {
        return Err(ContractError::InvalidConfig {
            msg: format!(
                "seeded key {} falls outside [{}, {})",
                first_seeded, config.range_start, config.range_end
            ),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "ledger-instantiated")
        .add_attribute("key_prefix", config.key_prefix)
        .add_attribute(
            "range",
            format!("[{}, {})", config.range_start, config.range_end),
        ))
}

// ////////////////////////////////////////EXECUTE//////////////////////////////////////////////////
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let resp = match msg {
        ExecuteMsg::InitLedger {} => init_ledger(deps)?,
        ExecuteMsg::CreateDonation {
            key,
            donor,
            amount,
            date,
            cause,
        } => create_donation(
            deps,
            &key,
            Donation {
                donor,
                amount,
                date,
                cause,
            },
        )?,
        ExecuteMsg::Invoke { function, args } => {
            invoke(deps, dispatch::resolve(&function, args)?)?
        }
    };
    Ok(resp.add_attribute("sender", info.sender.to_string()))
}

fn invoke(deps: DepsMut, call: Call) -> Result<Response, ContractError> {
    match call {
        Call::InitLedger => init_ledger(deps),
        Call::CreateDonation { key, donation } => create_donation(deps, &key, donation),
        read => {
            let action = read.operation().name();
            // reads through execute hand their payload back as response data
            let data = answer(deps.as_ref(), read)?;
            Ok(Response::new().set_data(data).add_attribute("action", action))
        }
    }
}

fn init_ledger(deps: DepsMut) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let keys = store::seed(deps.storage, &config.key_prefix, &initial_donations())?;

    for key in &keys {
        deps.api.debug(&format!("Added {}", key));
    }

    Ok(Response::new()
        .add_attribute("action", "init_ledger")
        .add_attribute("count", keys.len().to_string()))
}

fn create_donation(
    deps: DepsMut,
    key: &str,
    donation: Donation,
) -> Result<Response, ContractError> {
    store::put(deps.storage, key, &donation)?;

    Ok(Response::new()
        .add_attribute("action", "create_donation")
        .add_attribute("key", key)
        .add_attribute("donor", donation.donor)
        .add_attribute("amount", donation.amount.to_string()))
}

fn initial_donations() -> Vec<Donation> {
    [
        ("Yvens Pinto", 30000, "13/12/2017", "23ed Birthday"),
        ("Lerisa Gomes", 20000, "04/11/2017", "1st Salary"),
        ("Vishal Robertson", 10000, "24/08/2017", "Anniversary"),
        ("Asif Muhamad", 60000, "01/01/2017", "New Year"),
        ("Elon Musk", 30000, "31/05/2017", "Company Bonus"),
    ]
    .into_iter()
    .map(|(donor, amount, date, cause)| Donation {
        donor: donor.to_string(),
        amount: Uint64::new(amount),
        date: date.to_string(),
        cause: cause.to_string(),
    })
    .collect()
}

// ////////////////////////////////////////QUERY////////////////////////////////////////////////////
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Config {} => query_config(deps),
        QueryMsg::Donation { key } => answer(deps, Call::QueryDonation { key }),
        QueryMsg::AllDonations {} => answer(deps, Call::QueryAllDonations),
        QueryMsg::TotalDonationAmount {} => answer(deps, Call::TotalDonationAmount),
        QueryMsg::Invoke { function, args } => answer(deps, dispatch::resolve(&function, args)?),
    }
}

/// Runs a read-only call. Calls that write are rejected before touching storage.
fn answer(deps: Deps, call: Call) -> Result<Binary, ContractError> {
    match call {
        Call::QueryDonation { key } => Ok(to_binary(&query_donation(deps, &key)?)?),
        Call::QueryAllDonations => {
            let config = CONFIG.load(deps.storage)?;
            ledger::list_range(deps, &config.range_start, &config.range_end)
        }
        Call::TotalDonationAmount => {
            let config = CONFIG.load(deps.storage)?;
            let total = ledger::total_amount(deps, &config.range_start, &config.range_end)?;
            Ok(to_binary(&TotalDonationsResp { total })?)
        }
        write => Err(ContractError::ReadOnlyOperation {
            name: write.operation().name().to_string(),
        }),
    }
}

pub fn query_config(deps: Deps) -> Result<Binary, ContractError> {
    let config = CONFIG.may_load(deps.storage)?;
    Ok(to_binary(&GetConfigResponse { config })?)
}

pub fn query_donation(deps: Deps, key: &str) -> Result<DonationResp, ContractError> {
    let donation = store::load(deps.storage, key)?;
    Ok(DonationResp { donation })
}

// ////////////////////////////////////////MIGRATE//////////////////////////////////////////////////
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigration {
            msg: format!("cannot migrate from contract {}", stored.contract),
        });
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
