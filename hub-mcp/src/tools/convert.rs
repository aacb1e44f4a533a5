//! Single-value conversion tools

use hub_core::HubError;
use hub_units::ConversionRequest;
use serde_json::Value as JsonValue;

use super::{optional_str, require_numeric, require_str, ArgMeta, ToolContext, ToolMeta, ToolPlugin};

pub struct Convert;

static CONVERT_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("category", "string", "Category id, e.g. length or temperature"),
    ArgMeta::optional("from", "string", "Source unit (default: the category's default source)"),
    ArgMeta::optional("to", "string", "Target unit (default: the category's default target)"),
    ArgMeta::required("value", "number|string", "Value to convert"),
];

impl ToolPlugin for Convert {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "convert",
            description: "Convert a value between two units of one category",
            args: &CONVERT_ARGS,
        }
    }

    fn call(&self, args: &JsonValue, ctx: &mut ToolContext) -> Result<JsonValue, HubError> {
        let name = "convert";
        let category_id = require_str(name, args, "category")?;
        let value = require_numeric(name, args, "value")?;

        let category = ctx.registry.category(category_id)?;
        let (default_from, default_to) = category.default_pair();
        let from = optional_str(name, args, "from")?.unwrap_or(default_from);
        let to = optional_str(name, args, "to")?.unwrap_or(default_to);

        let request = ConversionRequest::new(&category.id, from, to, value);
        let result = ctx.converter().convert(&request)?;
        Ok(ctx.conversion_response(result))
    }
}

pub struct QuickConvert;

static QUICK_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("query", "string", "Free text such as \"5 km to mi\" or \"100 F -> C\""),
    ArgMeta::optional("category", "string", "Category to search when a unit is ambiguous"),
];

impl ToolPlugin for QuickConvert {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "quick_convert",
            description: "Convert a free-text query like \"5 km to mi\"",
            args: &QUICK_ARGS,
        }
    }

    fn call(&self, args: &JsonValue, ctx: &mut ToolContext) -> Result<JsonValue, HubError> {
        let name = "quick_convert";
        let query = require_str(name, args, "query")?;
        let category = optional_str(name, args, "category")?;

        let result = ctx.converter().quick(query, category)?;
        Ok(ctx.conversion_response(result))
    }
}
