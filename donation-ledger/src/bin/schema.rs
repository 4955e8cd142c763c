use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use donation_ledger::msg::{
    DonationEntry, DonationResp, ExecuteMsg, GetConfigResponse, InstantiateMsg, MigrateMsg,
    QueryMsg, TotalDonationsResp,
};
use donation_ledger::state::{Config, Donation};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(MigrateMsg), &out_dir);
    export_schema(&schema_for!(Config), &out_dir);
    export_schema(&schema_for!(Donation), &out_dir);
    export_schema(&schema_for!(GetConfigResponse), &out_dir);
    export_schema(&schema_for!(DonationResp), &out_dir);
    export_schema(&schema_for!(DonationEntry), &out_dir);
    export_schema(&schema_for!(TotalDonationsResp), &out_dir);
}
