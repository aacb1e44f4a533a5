//! Read-only tools: the unit catalog and the session history

use hub_core::HubError;
use hub_units::{Category, CategoryKind};
use serde_json::{json, Value as JsonValue};

use super::{optional_str, optional_usize, tool_response, ArgMeta, ToolContext, ToolMeta, ToolPlugin};

fn category_json(category: &Category) -> JsonValue {
    let units: Vec<JsonValue> = category
        .units
        .iter()
        .map(|u| {
            json!({
                "id": u.id,
                "label": u.label,
                "aliases": u.aliases,
                "factor": u.factor(),
            })
        })
        .collect();
    let kind = match category.kind() {
        CategoryKind::Linear => "linear",
        CategoryKind::Temperature => "temperature",
    };
    let (default_from, default_to) = category.default_pair();

    json!({
        "id": category.id,
        "label": category.label,
        "kind": kind,
        "defaultFrom": default_from,
        "defaultTo": default_to,
        "units": units,
    })
}

pub struct ListCategories;

static LIST_CATEGORIES_ARGS: [ArgMeta; 1] = [ArgMeta::optional(
    "category",
    "string",
    "Category id. Omit to list every category.",
)];

impl ToolPlugin for ListCategories {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "list_categories",
            description: "List unit categories, or the units of one category",
            args: &LIST_CATEGORIES_ARGS,
        }
    }

    fn call(&self, args: &JsonValue, ctx: &mut ToolContext) -> Result<JsonValue, HubError> {
        match optional_str("list_categories", args, "category")? {
            Some(id) => {
                let category = ctx.registry.category(id)?;
                let ids: Vec<&str> = category.units.iter().map(|u| u.id.as_str()).collect();
                let text = format!("{}: {}", category.label, ids.join(", "));
                Ok(tool_response(text, category_json(category)))
            }
            None => {
                let categories: Vec<JsonValue> =
                    ctx.registry.categories().iter().map(category_json).collect();
                let text = format!("Categories: {}", ctx.registry.ids().join(", "));
                Ok(tool_response(text, json!({ "categories": categories })))
            }
        }
    }
}

pub struct History;

static HISTORY_ARGS: [ArgMeta; 1] = [ArgMeta::optional(
    "limit",
    "integer",
    "Most recent entries to return (default: all kept)",
)];

impl ToolPlugin for History {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "history",
            description: "Recent conversions from this session, newest first",
            args: &HISTORY_ARGS,
        }
    }

    fn call(&self, args: &JsonValue, ctx: &mut ToolContext) -> Result<JsonValue, HubError> {
        let limit = optional_usize("history", args, "limit")?.unwrap_or(ctx.history.len());
        let entries = ctx.history.recent(limit);
        let text = format!("{} of {} conversions", entries.len(), ctx.history.len());
        Ok(tool_response(text, json!({ "entries": entries })))
    }
}
