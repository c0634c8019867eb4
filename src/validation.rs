use serde_json::Value;
use std::collections::HashMap;

use crate::database::NewProduct;
use crate::error::ApiError;

const MISSING: &str = "Missing data for required field.";
const NOT_A_STRING: &str = "Not a valid string.";
const NOT_A_NUMBER: &str = "Not a valid number.";

/// Check an incoming payload against the product schema.
///
/// Collects every missing or mistyped field before returning, so a payload
/// failing on all three fields reports all three. Unknown extra fields are
/// ignored.
pub fn validate_product(payload: &Value) -> Result<NewProduct, ApiError> {
    let mut field_errors: HashMap<String, String> = HashMap::new();

    let title = match payload.get("title") {
        None | Some(Value::Null) => {
            field_errors.insert("title".to_string(), MISSING.to_string());
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            field_errors.insert("title".to_string(), NOT_A_STRING.to_string());
            None
        }
    };

    let description = match payload.get("description") {
        None | Some(Value::Null) => {
            field_errors.insert("description".to_string(), MISSING.to_string());
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            field_errors.insert("description".to_string(), NOT_A_STRING.to_string());
            None
        }
    };

    let price = match payload.get("price") {
        None | Some(Value::Null) => {
            field_errors.insert("price".to_string(), MISSING.to_string());
            None
        }
        Some(value) => match as_float(value) {
            Some(p) => Some(p),
            None => {
                field_errors.insert("price".to_string(), NOT_A_NUMBER.to_string());
                None
            }
        },
    };

    if !field_errors.is_empty() {
        return Err(ApiError::Validation(field_errors));
    }

    // All three are Some once field_errors is empty
    Ok(NewProduct {
        title: title.unwrap_or_default(),
        description: description.unwrap_or_default(),
        price: price.unwrap_or_default(),
    })
}

/// Accepts JSON numbers and numeric strings. No sign constraint is applied.
fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
