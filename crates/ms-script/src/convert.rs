//! Conversions between namespace values and Rhai values.

use ms_core::{Real, Value};
use rhai::{Array, Dynamic, FLOAT, INT};

pub fn to_dynamic(value: &Value) -> Dynamic {
    match value {
        Value::Int(i) => Dynamic::from_int(*i as INT),
        Value::Scalar(x) => Dynamic::from_float(*x as FLOAT),
        Value::Series(values) => {
            let array: Array = values.iter().map(|&x| Dynamic::from_float(x)).collect();
            Dynamic::from_array(array)
        }
    }
}

/// Numeric view of a script value.
///
/// Arrays become series when every element is a number (integers widen).
/// Anything else has no namespace representation.
pub fn from_dynamic(value: &Dynamic) -> Option<Value> {
    if let Ok(i) = value.as_int() {
        return Some(Value::Int(i as i64));
    }
    if let Ok(x) = value.as_float() {
        return Some(Value::Scalar(x as Real));
    }
    if value.is_array() {
        let array = value.clone().into_array().ok()?;
        let series = array
            .iter()
            .map(number)
            .collect::<Option<Vec<Real>>>()?;
        return Some(Value::Series(series));
    }
    None
}

fn number(value: &Dynamic) -> Option<Real> {
    value
        .as_float()
        .ok()
        .or_else(|| value.as_int().ok().map(|i| i as Real))
}
