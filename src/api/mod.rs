mod generate_config;
mod json_contract;
mod row_generator;
mod row_store;

pub use generate_config::{
    DEFAULT_MAX_BARS, DEFAULT_MIN_BARS, DEFAULT_ROW_COUNT, DurationPolicy, GenerateConfig,
};
pub use json_contract::{
    ROW_SET_JSON_SCHEMA_V1, RowSetJsonContractV1, rows_from_json_compat_str,
    rows_to_json_contract_v1_pretty, rows_to_json_pretty,
};
pub use row_generator::{RowGenerator, generate_rows};
pub use row_store::{RowSetSummary, RowStore};
