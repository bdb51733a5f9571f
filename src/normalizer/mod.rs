//! Order normalization: turns an untyped JSON payload into a canonical
//! [`OrderDraft`] or a precise rejection reason.
//!
//! Pure and deterministic: normalizing the same value twice yields
//! structurally identical drafts. Identity and timestamps are the store's
//! responsibility.

use serde_json::{Map, Value};

use crate::domain::{OrderDraft, OrderItem};
use crate::error::OrderError;

/// Key alias policy for one logical item field: prefer the canonical
/// spelling, fall back to the alternate, then to the caller's default.
struct FieldKeys {
    canonical: &'static str,
    alias: &'static str,
}

const MENU_ITEM_ID: FieldKeys = FieldKeys {
    canonical: "menu_item_id",
    alias: "menuItemId",
};
const BASE_PRICE: FieldKeys = FieldKeys {
    canonical: "base_price",
    alias: "basePrice",
};
const FINAL_PRICE: FieldKeys = FieldKeys {
    canonical: "final_price",
    alias: "finalPrice",
};
const ITEM_INSTRUCTIONS: FieldKeys = FieldKeys {
    canonical: "special_instructions",
    alias: "specialInstructions",
};

impl FieldKeys {
    /// Resolves the field against a map, skipping explicit nulls.
    fn pick<'a>(&self, map: &'a Map<String, Value>) -> Option<&'a Value> {
        [self.canonical, self.alias]
            .iter()
            .filter_map(|key| map.get(*key))
            .find(|value| !value.is_null())
    }
}

/// JSON type name used in shape and coercion error messages.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// Scalar coercions. These mirror the loose conversions the storefront
// clients rely on: numeric strings parse, numbers and bools stringify.

fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn require_string(field: &str, value: &Value) -> Result<String, OrderError> {
    coerce_string(value).ok_or_else(|| {
        OrderError::TypeCoercion(format!(
            "Field `{field}` must be a string, got {}",
            type_name(value)
        ))
    })
}

fn require_f64(field: &str, value: &Value) -> Result<f64, OrderError> {
    coerce_f64(value).ok_or_else(|| {
        OrderError::TypeCoercion(format!(
            "Field `{field}` must be a number, got {}",
            type_name(value)
        ))
    })
}

fn require_i64(field: &str, value: &Value) -> Result<i64, OrderError> {
    coerce_i64(value).ok_or_else(|| {
        OrderError::TypeCoercion(format!(
            "Field `{field}` must be an integer, got {}",
            type_name(value)
        ))
    })
}

/// Falsy values count as missing for required fields: null, false,
/// zero, and empty strings or containers.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(entries) => entries.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Required customer field: `None` when absent or falsy.
fn required_string(map: &Map<String, Value>, field: &str) -> Result<Option<String>, OrderError> {
    match map.get(field).filter(|v| !is_falsy(v)) {
        Some(value) => require_string(field, value).map(Some),
        None => Ok(None),
    }
}

/// Optional top-level string: absent or null takes the default.
fn string_or(map: &Map<String, Value>, field: &str, default: &str) -> Result<String, OrderError> {
    match map.get(field).filter(|v| !v.is_null()) {
        Some(value) => require_string(field, value),
        None => Ok(default.to_string()),
    }
}

/// Optional top-level numeric: absent or null defaults to zero.
fn number_or_zero(map: &Map<String, Value>, field: &str) -> Result<f64, OrderError> {
    match map.get(field).filter(|v| !v.is_null()) {
        Some(value) => require_f64(field, value),
        None => Ok(0.0),
    }
}

/// Validates and normalizes a raw order payload into a draft.
///
/// Checks run in order and short-circuit: object shape, required
/// customer fields, optional scalars with defaults, items shape, then
/// each item in sequence. Any failure discards the whole draft.
pub fn normalize(input: &Value) -> Result<OrderDraft, OrderError> {
    let map = input.as_object().ok_or_else(|| {
        OrderError::InvalidShape(format!("Expected JSON object, got {}", type_name(input)))
    })?;

    let customer_name = required_string(map, "customer_name")?;
    let customer_phone = required_string(map, "customer_phone")?;
    let (customer_name, customer_phone) = match (customer_name, customer_phone) {
        (Some(name), Some(phone)) => (name, phone),
        _ => return Err(OrderError::MissingRequiredField),
    };

    let email = string_or(map, "email", "")?;
    let order_type = string_or(map, "order_type", "pickup")?;
    let payment_method = string_or(map, "payment_method", "cash")?;
    let special_instructions = string_or(map, "special_instructions", "")?;

    let subtotal = number_or_zero(map, "subtotal")?;
    let tax = number_or_zero(map, "tax")?;
    let delivery_fee = number_or_zero(map, "delivery_fee")?;
    let total = number_or_zero(map, "total")?;

    let raw_items = match map.get("items") {
        None => return Err(OrderError::EmptyItems),
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            return Err(OrderError::InvalidShape(format!(
                "Items must be an array, got {}",
                type_name(other)
            )))
        }
    };
    if raw_items.is_empty() {
        return Err(OrderError::EmptyItems);
    }

    let mut items = Vec::with_capacity(raw_items.len());
    for (index, raw) in raw_items.iter().enumerate() {
        items.push(normalize_item(index, raw)?);
    }

    Ok(OrderDraft {
        customer_name,
        customer_phone,
        email,
        order_type,
        payment_method,
        special_instructions,
        subtotal,
        tax,
        delivery_fee,
        total,
        items,
    })
}

fn normalize_item(index: usize, raw: &Value) -> Result<OrderItem, OrderError> {
    let map = raw.as_object().ok_or_else(|| {
        OrderError::InvalidShape(format!(
            "Item {index} must be an object, got {}",
            type_name(raw)
        ))
    })?;

    let menu_item_id = match MENU_ITEM_ID.pick(map) {
        Some(value) => require_string(&format!("items[{index}].menu_item_id"), value)?,
        None => format!("item_{index}"),
    };

    let name = match map.get("name").filter(|v| !v.is_null()) {
        Some(value) => require_string(&format!("items[{index}].name"), value)?,
        None => "Unknown Item".to_string(),
    };

    let quantity = match map.get("quantity").filter(|v| !v.is_null()) {
        Some(value) => require_i64(&format!("items[{index}].quantity"), value)?,
        None => 1,
    };

    let base_price = match BASE_PRICE.pick(map) {
        Some(value) => require_f64(&format!("items[{index}].base_price"), value)?,
        None => 0.0,
    };

    // Four-deep fallback: final_price, finalPrice, then the resolved base price.
    let final_price = match FINAL_PRICE.pick(map) {
        Some(value) => require_f64(&format!("items[{index}].final_price"), value)?,
        None => base_price,
    };

    let customizations = map
        .get("customizations")
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));

    let special_instructions = match ITEM_INSTRUCTIONS.pick(map) {
        Some(value) => require_string(&format!("items[{index}].special_instructions"), value)?,
        None => String::new(),
    };

    Ok(OrderItem {
        menu_item_id,
        name,
        quantity,
        base_price,
        final_price,
        customizations,
        special_instructions,
    })
}
