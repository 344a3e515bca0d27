use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::GanttRow;
use crate::error::{GanttError, GanttResult};

use super::RowStore;

pub const ROW_SET_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSetJsonContractV1 {
    pub schema_version: u32,
    pub rows: Vec<GanttRow>,
}

/// Serializes rows in the bare shape the chart widget binds to.
pub fn rows_to_json_pretty(rows: &[GanttRow]) -> GanttResult<String> {
    serde_json::to_string_pretty(rows)
        .map_err(|e| GanttError::InvalidData(format!("failed to serialize rows json: {e}")))
}

pub fn rows_to_json_contract_v1_pretty(rows: &[GanttRow]) -> GanttResult<String> {
    let payload = RowSetJsonContractV1 {
        schema_version: ROW_SET_JSON_SCHEMA_V1,
        rows: rows.to_vec(),
    };
    serde_json::to_string_pretty(&payload).map_err(|e| {
        GanttError::InvalidData(format!("failed to serialize row set contract v1: {e}"))
    })
}

/// Parses either a bare row array or a versioned contract payload.
///
/// Every bar is re-validated and bar ids must be unique across the set.
pub fn rows_from_json_compat_str(input: &str) -> GanttResult<Vec<GanttRow>> {
    let rows = match serde_json::from_str::<Vec<GanttRow>>(input) {
        Ok(rows) => rows,
        Err(_) => {
            let payload: RowSetJsonContractV1 = serde_json::from_str(input).map_err(|e| {
                GanttError::InvalidData(format!("failed to parse row set json payload: {e}"))
            })?;
            if payload.schema_version != ROW_SET_JSON_SCHEMA_V1 {
                return Err(GanttError::InvalidData(format!(
                    "unsupported row set schema version: {}",
                    payload.schema_version
                )));
            }
            payload.rows
        }
    };
    validate_rows(&rows)?;
    Ok(rows)
}

fn validate_rows(rows: &[GanttRow]) -> GanttResult<()> {
    let mut seen_ids = HashSet::new();
    for bar in rows.iter().flat_map(|row| row.bars.iter()) {
        bar.validate()?;
        if !seen_ids.insert(bar.id()) {
            return Err(GanttError::InvalidData(format!(
                "duplicate bar id `{}`",
                bar.id()
            )));
        }
    }
    Ok(())
}

impl RowStore {
    pub fn to_json_pretty(&self) -> GanttResult<String> {
        rows_to_json_pretty(self.rows())
    }

    pub fn to_json_contract_v1_pretty(&self) -> GanttResult<String> {
        rows_to_json_contract_v1_pretty(self.rows())
    }

    /// Loads rows from JSON, replacing the current set on success.
    pub fn load_json_compat_str(&mut self, input: &str) -> GanttResult<()> {
        let rows = rows_from_json_compat_str(input)?;
        self.replace(rows);
        Ok(())
    }
}
