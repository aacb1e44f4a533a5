//! Tool plugins exposed through `tools/call`

mod convert;
mod batch;
mod catalog;

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use hub_core::{HubError, NumericInput};
use hub_units::{CategoryRegistry, ConversionHistory, ConversionResult, Converter};
use serde::Serialize;
use serde_json::{json, Map, Value as JsonValue};

use crate::config::ServerConfig;

pub use batch::{BatchList, BatchRange};
pub use catalog::{History, ListCategories};
pub use convert::{Convert, QuickConvert};

/// Metadata about a tool argument
#[derive(Debug, Clone, Serialize)]
pub struct ArgMeta {
    pub name: &'static str,
    /// JSON schema type, or several joined by `|`
    pub typ: &'static str,
    pub description: &'static str,
    pub optional: bool,
}

impl ArgMeta {
    pub const fn required(name: &'static str, typ: &'static str, description: &'static str) -> Self {
        Self { name, typ, description, optional: false }
    }

    pub const fn optional(name: &'static str, typ: &'static str, description: &'static str) -> Self {
        Self { name, typ, description, optional: true }
    }
}

/// Metadata for a tool plugin
#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub args: &'static [ArgMeta],
}

impl ToolMeta {
    /// JSON schema for the `inputSchema` field of `tools/list`
    pub fn input_schema(&self) -> JsonValue {
        let mut properties = Map::new();
        for arg in self.args {
            let types: Vec<&str> = arg.typ.split('|').collect();
            let typ = match types.as_slice() {
                [single] => json!(single),
                many => json!(many),
            };
            properties.insert(
                arg.name.to_string(),
                json!({ "type": typ, "description": arg.description }),
            );
        }
        let required: Vec<&str> = self
            .args
            .iter()
            .filter(|a| !a.optional)
            .map(|a| a.name)
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    pub fn to_json(&self) -> JsonValue {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema(),
        })
    }
}

/// Mutable state shared by tools across one session
#[derive(Debug)]
pub struct ToolContext {
    pub registry: &'static CategoryRegistry,
    pub config: ServerConfig,
    pub history: ConversionHistory,
}

impl ToolContext {
    pub fn new(registry: &'static CategoryRegistry, config: ServerConfig) -> Self {
        ToolContext {
            registry,
            config,
            history: ConversionHistory::new(config.history_capacity),
        }
    }

    pub fn converter(&self) -> Converter<'static> {
        Converter::new(self.registry).with_precision(self.config.precision)
    }

    /// JSON for one conversion, recorded in history
    pub fn conversion_response(&mut self, result: ConversionResult) -> JsonValue {
        let output = self.converter().format(result.output_value);
        let text = format!(
            "{} {} = {} {}",
            hub_core::format_fixed(result.input_value, self.config.precision),
            result.from_unit,
            output.formatted_value,
            result.to_unit
        );
        let response = tool_response(
            text,
            json!({
                "category": result.category,
                "fromUnit": result.from_unit,
                "toUnit": result.to_unit,
                "inputValue": result.input_value,
                "formattedValue": output.formatted_value,
                "rawValue": output.raw_value,
            }),
        );
        self.history.record(result);
        response
    }
}

/// Tool callable over MCP
pub trait ToolPlugin: Send + Sync {
    fn meta(&self) -> ToolMeta;
    fn call(&self, args: &JsonValue, ctx: &mut ToolContext) -> Result<JsonValue, HubError>;
}

/// Tools by name
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn ToolPlugin>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tool<T: ToolPlugin + 'static>(mut self, tool: T) -> Self {
        let name = tool.meta().name.to_lowercase();
        self.tools.insert(name, Arc::new(tool));
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn ToolPlugin> {
        self.tools.get(&name.to_lowercase()).map(|t| t.as_ref())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Body of a `tools/list` response
    pub fn list_json(&self) -> JsonValue {
        let tools: Vec<JsonValue> = self.tools.values().map(|t| t.meta().to_json()).collect();
        json!({ "tools": tools })
    }

    pub fn call(
        &self,
        name: &str,
        args: &JsonValue,
        ctx: &mut ToolContext,
    ) -> Result<JsonValue, HubError> {
        match self.get(name) {
            Some(tool) => tool.call(args, ctx),
            None => {
                let similar = self.find_similar(name);
                let mut err = HubError::unknown_tool(name);
                if !similar.is_empty() {
                    err = err.with_suggestion(format!(
                        "Similar: {}. Use tools/list for the full list.",
                        similar.join(", ")
                    ));
                }
                Err(err)
            }
        }
    }

    /// Tool names resembling `name`, best first
    fn find_similar(&self, name: &str) -> Vec<String> {
        let name_lower = name.to_lowercase();
        let mut matches: Vec<(String, usize)> = self
            .tools
            .keys()
            .filter_map(|tool| {
                let score = similarity_score(&name_lower, tool);
                (score > 0).then(|| (tool.clone(), score))
            })
            .collect();

        matches.sort_by(|a, b| b.1.cmp(&a.1));
        matches.into_iter().take(3).map(|(name, _)| name).collect()
    }
}

fn similarity_score(query: &str, candidate: &str) -> usize {
    let mut score = 0;

    if candidate.starts_with(query) {
        score += 100;
    } else if candidate.contains(query) {
        score += 50;
    } else if query.contains(candidate) {
        score += 30;
    }

    let query_chars: HashSet<char> = query.chars().collect();
    let candidate_chars: HashSet<char> = candidate.chars().collect();
    score += query_chars.intersection(&candidate_chars).count() * 2;

    let len_diff = query.len().abs_diff(candidate.len());
    if len_diff < 5 && score > 0 {
        score += 5 - len_diff;
    }

    // Sharing a letter or two is noise
    if score < 10 {
        0
    } else {
        score
    }
}

/// Every tool the server offers
pub fn standard_tools() -> ToolRegistry {
    ToolRegistry::new()
        .with_tool(Convert)
        .with_tool(QuickConvert)
        .with_tool(BatchList)
        .with_tool(BatchRange)
        .with_tool(ListCategories)
        .with_tool(History)
}

/// MCP tool result: a text block for display plus structured data
pub fn tool_response(text: String, data: JsonValue) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": text }],
        "data": data,
        "isError": false,
    })
}

/// MCP tool result carrying a structured error
pub fn error_response(err: &HubError) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": err.to_string() }],
        "error": err,
        "isError": true,
    })
}

// ========== Argument helpers ==========

pub(crate) fn require_str<'a>(tool: &str, args: &'a JsonValue, name: &str) -> Result<&'a str, HubError> {
    match args.get(name) {
        None | Some(JsonValue::Null) => Err(HubError::arg_missing(tool, name)),
        Some(v) => v.as_str().ok_or_else(|| HubError::arg_type(tool, name, "string")),
    }
}

pub(crate) fn optional_str<'a>(
    tool: &str,
    args: &'a JsonValue,
    name: &str,
) -> Result<Option<&'a str>, HubError> {
    match args.get(name) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(v) => v
            .as_str()
            .map(Some)
            .ok_or_else(|| HubError::arg_type(tool, name, "string")),
    }
}

/// A number given either as a JSON number or as text
pub(crate) fn require_numeric(tool: &str, args: &JsonValue, name: &str) -> Result<NumericInput, HubError> {
    match args.get(name) {
        None | Some(JsonValue::Null) => Err(HubError::arg_missing(tool, name)),
        Some(JsonValue::Number(n)) => n
            .as_f64()
            .map(NumericInput::Number)
            .ok_or_else(|| HubError::arg_type(tool, name, "number")),
        Some(JsonValue::String(s)) => Ok(NumericInput::Text(s.clone())),
        Some(_) => Err(HubError::arg_type(tool, name, "number or string")),
    }
}

pub(crate) fn optional_usize(tool: &str, args: &JsonValue, name: &str) -> Result<Option<usize>, HubError> {
    match args.get(name) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(v) => v
            .as_u64()
            .map(|n| Some(n as usize))
            .ok_or_else(|| HubError::arg_type(tool, name, "non-negative integer")),
    }
}
