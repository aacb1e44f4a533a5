//! Batch conversion tools

use hub_batch::{BatchProcessor, BatchReport, RangeSpec};
use hub_core::{format_fixed, HubError};
use serde_json::{json, Value as JsonValue};

use super::{require_numeric, require_str, tool_response, ArgMeta, ToolContext, ToolMeta, ToolPlugin};

fn processor(tool: &str, args: &JsonValue, ctx: &ToolContext) -> Result<BatchProcessor, HubError> {
    let category = require_str(tool, args, "category")?;
    let from = require_str(tool, args, "from")?;
    let to = require_str(tool, args, "to")?;
    let processor =
        BatchProcessor::resolve(ctx.registry, category, from, to, ctx.config.batch_options())?;
    Ok(processor)
}

/// Range bounds accept numbers or text; text that is not a number empties the range
fn bound(tool: &str, args: &JsonValue, name: &str) -> Result<f64, HubError> {
    Ok(require_numeric(tool, args, name)?.resolve().unwrap_or(f64::NAN))
}

fn report_response(report: &BatchReport) -> Result<JsonValue, HubError> {
    let precision = report.precision;
    let csv = report.to_csv()?;
    let rows: Vec<JsonValue> = report
        .rows
        .iter()
        .map(|r| {
            json!({
                "input": r.input,
                "output": r.output,
                "formattedOutput": format_fixed(r.output, precision),
            })
        })
        .collect();

    let summary = report.summary();
    let text = match &summary {
        Some(s) => format!(
            "Converted {} values from {} to {} (inputs: min {}, max {}, mean {})",
            s.count,
            report.from_unit,
            report.to_unit,
            format_fixed(s.min, precision),
            format_fixed(s.max, precision),
            format_fixed(s.mean, precision),
        ),
        None => format!("No values to convert from {} to {}", report.from_unit, report.to_unit),
    };

    Ok(tool_response(
        text,
        json!({
            "category": report.category,
            "fromUnit": report.from_unit,
            "toUnit": report.to_unit,
            "rows": rows,
            "summary": summary,
            "skipped": report.skipped,
            "rejected": report.rejected,
            "csv": csv,
        }),
    ))
}

pub struct BatchList;

static LIST_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("category", "string", "Category id"),
    ArgMeta::required("from", "string", "Source unit"),
    ArgMeta::required("to", "string", "Target unit"),
    ArgMeta::required("values", "string", "Numbers separated by commas, newlines or spaces"),
];

impl ToolPlugin for BatchList {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "batch_list",
            description: "Convert a list of values; non-numeric entries are dropped",
            args: &LIST_ARGS,
        }
    }

    fn call(&self, args: &JsonValue, ctx: &mut ToolContext) -> Result<JsonValue, HubError> {
        let name = "batch_list";
        let processor = processor(name, args, ctx)?;
        let values = require_str(name, args, "values")?;
        let report = processor.run_list(values)?;
        report_response(&report)
    }
}

pub struct BatchRange;

static RANGE_ARGS: [ArgMeta; 6] = [
    ArgMeta::required("category", "string", "Category id"),
    ArgMeta::required("from", "string", "Source unit"),
    ArgMeta::required("to", "string", "Target unit"),
    ArgMeta::required("start", "number|string", "First value"),
    ArgMeta::required("end", "number|string", "Last value (inclusive)"),
    ArgMeta::required("step", "number|string", "Increment, must be positive"),
];

impl ToolPlugin for BatchRange {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "batch_range",
            description: "Convert every value from start to end (inclusive) by step",
            args: &RANGE_ARGS,
        }
    }

    fn call(&self, args: &JsonValue, ctx: &mut ToolContext) -> Result<JsonValue, HubError> {
        let name = "batch_range";
        let processor = processor(name, args, ctx)?;
        let range = RangeSpec::new(
            bound(name, args, "start")?,
            bound(name, args, "end")?,
            bound(name, args, "step")?,
        );
        let report = processor.run_range(&range)?;
        report_response(&report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::tools::tests::context;
    use hub_core::codes;
    use hub_units::CategoryRegistry;

    #[test]
    fn test_batch_list() {
        let mut ctx = context();
        let out = BatchList
            .call(
                &json!({"category": "length", "from": "m", "to": "ft", "values": "1, abc, 3"}),
                &mut ctx,
            )
            .unwrap();
        let data = &out["data"];
        assert_eq!(data["rows"].as_array().unwrap().len(), 2);
        assert_eq!(data["rejected"], json!(["abc"]));
        assert_eq!(data["summary"]["count"], 2);
        assert_eq!(data["summary"]["mean"], 2.0);
        assert!(data["csv"].as_str().unwrap().starts_with("Input (m),Output (ft)\n1,3.28084\n"));
    }

    #[test]
    fn test_batch_range() {
        let mut ctx = context();
        let out = BatchRange
            .call(
                &json!({"category": "temperature", "from": "c", "to": "f",
                        "start": 0, "end": "100", "step": 50}),
                &mut ctx,
            )
            .unwrap();
        assert_eq!(
            out["data"]["csv"],
            "Input (c),Output (f)\n0,32\n50,122\n100,212\n"
        );
    }

    #[test]
    fn test_batch_range_invalid_step_is_empty() {
        let mut ctx = context();
        let out = BatchRange
            .call(
                &json!({"category": "length", "from": "m", "to": "ft",
                        "start": 0, "end": 10, "step": 0}),
                &mut ctx,
            )
            .unwrap();
        assert_eq!(out["data"]["rows"], json!([]));
        assert!(out["data"]["summary"].is_null());
    }

    #[test]
    fn test_batch_range_non_numeric_bound_is_empty() {
        let mut ctx = context();
        let out = BatchRange
            .call(
                &json!({"category": "length", "from": "m", "to": "ft",
                        "start": "zero", "end": 10, "step": 1}),
                &mut ctx,
            )
            .unwrap();
        assert_eq!(out["data"]["rows"], json!([]));

        let out = BatchRange
            .call(
                &json!({"category": "length", "from": "m", "to": "m",
                        "start": 0.1, "end": 0.3, "step": 0.1}),
                &mut ctx,
            )
            .unwrap();
        assert_eq!(out["data"]["rows"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_batch_range_too_large() {
        let config = ServerConfig { max_batch: 10, ..ServerConfig::default() };
        let mut ctx = ToolContext::new(CategoryRegistry::standard(), config);
        let err = BatchRange
            .call(
                &json!({"category": "length", "from": "m", "to": "ft",
                        "start": 0, "end": 100, "step": 1}),
                &mut ctx,
            )
            .unwrap_err();
        assert_eq!(err.code, codes::TOO_MANY_ENTRIES);
    }

    #[test]
    fn test_batch_unknown_unit_fails() {
        let mut ctx = context();
        let err = BatchList
            .call(
                &json!({"category": "length", "from": "m", "to": "cubit", "values": "1 2"}),
                &mut ctx,
            )
            .unwrap_err();
        assert_eq!(err.code, codes::UNIT_NOT_FOUND);
    }
}
