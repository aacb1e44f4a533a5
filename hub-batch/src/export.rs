//! CSV export of batch rows

use hub_core::format_fixed;
use crate::processor::{BatchError, BatchRow};

/// Input as the shortest text that parses back to the same value
fn input_text(value: f64) -> String {
    if value == 0.0 {
        // Drops the sign of -0
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Render rows as `Input (<from>),Output (<to>)` CSV with `\n` line endings.
///
/// Inputs are written exactly; outputs are rounded to `precision` places.
pub fn write_csv(
    from_unit: &str,
    to_unit: &str,
    rows: &[BatchRow],
    precision: usize,
) -> Result<String, BatchError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record([format!("Input ({})", from_unit), format!("Output ({})", to_unit)])?;
    for row in rows {
        writer.write_record([
            input_text(row.input),
            format_fixed(row.output, precision),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| BatchError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| BatchError::Export(e.to_string()))
}
