use serde_json::{Map, Number, Value};

use crate::KeyOrder;

/// Deep equality over parsed values that agrees with comparing their
/// canonical JSON text.
///
/// Numbers are compared by value, so `1` equals `1.0`. With
/// [`KeyOrder::Significant`] two objects holding the same entries in a
/// different order are not equal.
pub fn values_equal(a: &Value, b: &Value, key_order: KeyOrder) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .zip(b)
                    .all(|(a, b)| values_equal(a, b, key_order))
        }
        (Value::Object(a), Value::Object(b)) => objects_equal(a, b, key_order),
        _ => false,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }
    if a.is_f64() || b.is_f64() {
        return a.as_f64() == b.as_f64();
    }
    // one negative integer, one integer above i64::MAX
    false
}

fn objects_equal(a: &Map<String, Value>, b: &Map<String, Value>, key_order: KeyOrder) -> bool {
    if a.len() != b.len() {
        return false;
    }

    match key_order {
        KeyOrder::Significant => a
            .iter()
            .zip(b)
            .all(|((ka, va), (kb, vb))| ka == kb && values_equal(va, vb, key_order)),
        KeyOrder::Ignored => a.iter().all(|(key, va)| {
            b.get(key)
                .map_or(false, |vb| values_equal(va, vb, key_order))
        }),
    }
}
