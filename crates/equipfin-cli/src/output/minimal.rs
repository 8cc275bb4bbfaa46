use serde_json::Value;

use super::result_body;

/// Print just the key answer value from the output.
///
/// Looks for the installment amount first, then totals, then falls back to
/// the first field in the result object.
pub fn print_minimal(value: &Value) {
    let result_obj = result_body(value);

    let priority_keys = ["monthly_payment", "payment", "total_amount", "total_paid", "overpayment"];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
