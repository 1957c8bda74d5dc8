//! CSV and JSON output of projection rows
//!
//! Values are written unrounded; rounding belongs to whatever renders them.

use std::io::Write;

use crate::error::Result;
use crate::projection::ProjectionResult;
use crate::scenario::ScenarioSet;

/// Write `period,nominal,real` rows; `real` is empty when absent
pub fn write_csv<W: Write>(writer: W, result: &ProjectionResult) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in result.rows() {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Wide table: `period` followed by one nominal column per scenario rate
pub fn write_scenarios_csv<W: Write>(writer: W, set: &ScenarioSet) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["period".to_string()];
    header.extend(set.rates().iter().map(|rate| rate.to_string()));
    csv_writer.write_record(&header)?;

    for period in 0..set.trajectory_len().unwrap_or(0) {
        let mut record = Vec::with_capacity(set.len() + 1);
        record.push(period.to_string());
        record.extend(set.iter().map(|s| s.trajectory()[period].to_string()));
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Pretty-printed JSON of the full result (trajectories, goal, summary inputs)
///
/// Non-finite trajectory entries are written as `"inf"`, `"-inf"` or `"NaN"`.
pub fn write_json<W: Write>(writer: W, result: &ProjectionResult) -> Result<()> {
    serde_json::to_writer_pretty(writer, result)?;
    Ok(())
}
