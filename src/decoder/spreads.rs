//! Spread construction and validation from a decoded payload

use serde::Deserialize;
use serde_json::{Map, Value};
use crate::errors::{HookError, HookResult};
use crate::types::{FieldKind, FieldSpec, Spread, CHAIN_FIELDS, SPREAD_FIELDS};

pub const DATA_FIELD: &str = "data";

/// Builds one `Spread` per element of the envelope's `data` array.
///
/// A missing `data` field yields no spreads. Unknown fields are dropped; a missing
/// required field or a wrongly typed value rejects the whole batch.
pub fn build_spreads(payload: &Value) -> HookResult<Vec<Spread>> {
    let envelope = payload.as_object().ok_or_else(|| {
        HookError::validation(None, DATA_FIELD, format!("expected a JSON object, got {}", kind_name(payload)))
    })?;

    let elements = match envelope.get(DATA_FIELD) {
        None => return Ok(Vec::new()),
        Some(Value::Array(elements)) => elements,
        Some(other) => {
            return Err(HookError::validation(
                None,
                DATA_FIELD,
                format!("expected an array, got {}", kind_name(other)),
            ));
        }
    };

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| build_spread(index, element))
        .collect()
}

fn build_spread(index: usize, element: &Value) -> HookResult<Spread> {
    let object = element.as_object().ok_or_else(|| {
        HookError::validation(
            Some(index),
            DATA_FIELD,
            format!("expected a spread object, got {}", kind_name(element)),
        )
    })?;

    let spread = Value::Object(canonical_spread(object));
    Spread::deserialize(&spread).map_err(|e| {
        let field = spread
            .as_object()
            .and_then(|object| first_mismatch(object, SPREAD_FIELDS))
            .unwrap_or_else(|| "unknown".to_string());
        HookError::validation(Some(index), field, e.to_string())
    })
}

/// Copy of a spread where a wire name shadows its snake_case twin, in chains too.
fn canonical_spread(object: &Map<String, Value>) -> Map<String, Value> {
    let mut spread = object.clone();
    drop_shadowed(&mut spread, SPREAD_FIELDS);

    for (wire, snake, kind, _) in SPREAD_FIELDS {
        if *kind != FieldKind::ChainList {
            continue;
        }
        let key = if spread.contains_key(*wire) { *wire } else { *snake };
        if let Some(Value::Array(chains)) = spread.get_mut(key) {
            for chain in chains.iter_mut() {
                if let Value::Object(chain) = chain {
                    drop_shadowed(chain, CHAIN_FIELDS);
                }
            }
        }
    }
    spread
}

fn drop_shadowed(object: &mut Map<String, Value>, fields: &[FieldSpec]) {
    for (wire, snake, _, _) in fields {
        if wire != snake && object.contains_key(*wire) {
            object.remove(*snake);
        }
    }
}

/// First field, in declaration order, that is missing while required or has the wrong kind.
fn first_mismatch(object: &Map<String, Value>, fields: &[FieldSpec]) -> Option<String> {
    for (wire, snake, kind, optional) in fields {
        let Some(value) = object.get(*wire).or_else(|| object.get(*snake)) else {
            if *optional {
                continue;
            }
            return Some(wire.to_string());
        };

        if *kind == FieldKind::ChainList {
            if let Some(path) = chain_list_mismatch(wire, value) {
                return Some(path);
            }
        } else if !matches_kind(*kind, value) {
            return Some(wire.to_string());
        }
    }
    None
}

fn chain_list_mismatch(wire: &str, value: &Value) -> Option<String> {
    let Value::Array(chains) = value else {
        return Some(wire.to_string());
    };

    chains.iter().enumerate().find_map(|(position, chain)| match chain.as_object() {
        None => Some(format!("{wire}[{position}]")),
        Some(chain_object) => first_mismatch(chain_object, CHAIN_FIELDS)
            .map(|field| format!("{wire}[{position}].{field}")),
    })
}

fn matches_kind(kind: FieldKind, value: &Value) -> bool {
    match kind {
        FieldKind::Float => value.is_number(),
        FieldKind::Integer => value.as_i64().is_some(),
        FieldKind::Text => value.is_string(),
        FieldKind::Flag => value.is_boolean(),
        FieldKind::ChainList => value.is_array(),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
