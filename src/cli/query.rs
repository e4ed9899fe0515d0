//! Query command implementation.
//!
//! Runs the writings filter over the embedded catalog and prints the
//! matching records as a JSON array, in catalog order.

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::cli::QueryArgs;
use crate::content::{Catalog, FilterCriteria, WritingRecord};
use crate::debug;
use crate::utils::plural_count;

/// Execute query command
pub fn run_query(args: &QueryArgs) -> Result<()> {
    let catalog = Catalog::load()?;
    let output = query_json(&catalog, args)?;

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{formatted}");
    Ok(())
}

/// Matching writings as JSON. An unknown category gives `[]`.
fn query_json(catalog: &Catalog, args: &QueryArgs) -> Result<JsonValue> {
    if args.category().is_none() {
        debug!("query"; "unknown category `{}`", args.category);
    }

    let criteria = FilterCriteria::new()
        .with_query(args.search.as_str())
        .with_tags(args.tags.iter().copied());
    let matches = criteria.apply(&catalog.writings, &args.category);
    debug!("query"; "found {}", plural_count(matches.len(), "writing"));

    let records = matches
        .into_iter()
        .map(|writing| format_record(writing, args.fields.as_deref()))
        .collect::<Result<Vec<_>>>()?;
    Ok(JsonValue::Array(records))
}

/// One record with `url` first, optionally narrowed to `fields` (in the
/// order requested; unknown names are skipped).
fn format_record(writing: &WritingRecord, fields: Option<&[String]>) -> Result<JsonValue> {
    let mut full = Map::new();
    full.insert("url".into(), JsonValue::String(writing.permalink()));
    if let JsonValue::Object(record) = serde_json::to_value(writing)? {
        full.extend(record);
    }

    let Some(fields) = fields else {
        return Ok(JsonValue::Object(full));
    };
    let narrowed = fields
        .iter()
        .filter_map(|name| full.get(name.trim()).map(|v| (name.trim().to_string(), v.clone())))
        .collect();
    Ok(JsonValue::Object(narrowed))
}
