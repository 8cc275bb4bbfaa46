use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;
use tabled::{builder::Builder, Table};

use equipfin_core::format::round_money;

/// Decimal places shown for amounts in tables.
const DISPLAY_DP: u32 = 2;

/// Format output as tables: scalar fields first, then one table per schedule.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(Value::Object(result)) = map.get("result") {
                print_object(result);
                print_envelope_notes(map);
            } else {
                print_object(map);
            }
        }
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", value),
    }
}

fn print_object(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    let mut nested: Vec<(&str, &[Value])> = Vec::new();

    for (key, val) in map {
        match val {
            Value::Array(rows) if !rows.is_empty() && rows.iter().all(Value::is_object) => {
                nested.push((key.as_str(), rows.as_slice()));
            }
            Value::Object(inner) => {
                for (inner_key, inner_val) in inner {
                    builder.push_record([
                        format!("{key}.{inner_key}"),
                        format_field(inner_key, inner_val),
                    ]);
                }
            }
            _ => {
                builder.push_record([key.clone(), format_field(key, val)]);
            }
        }
    }
    println!("{}", Table::from(builder));

    for (name, rows) in nested {
        println!("\n{}:", name);
        print_array_table(rows);
    }
}

fn print_envelope_notes(envelope: &Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(headers.clone());

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(|v| format_field(h, v)).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

/// Rates keep their full precision; amounts are rounded.
fn format_field(key: &str, value: &Value) -> String {
    if key.ends_with("rate") || key.ends_with("_percent") {
        if let Value::String(s) = value {
            return s.clone();
        }
    }
    format_value(value)
}

fn format_value(value: &Value) -> String {
    match value {
        // Decimals arrive as strings; trim full-precision amounts for display.
        Value::String(s) => match Decimal::from_str(s) {
            Ok(d) if d.scale() > DISPLAY_DP => round_money(d, DISPLAY_DP).to_string(),
            _ => s.clone(),
        },
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
