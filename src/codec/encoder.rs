//! Encoder: State-Einträge → kompaktes URL-Token.

use super::framing::{frame, Compression};
use crate::core::StateEntry;
use serde_json::{Number, Value};

/// Größter Betrag, der in f64 noch exakt als Ganzzahl darstellbar ist (2^53).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Serialisiert die Einträge als Array-of-Arrays ohne Objekt-Keys.
///
/// Jeder Eintrag wird zu `[typeCode, lat, lng]` bzw. `[typeCode, lat, lng, note]`.
pub fn entries_to_json(entries: &[StateEntry]) -> String {
    let rows: Vec<Value> = entries.iter().map(entry_to_value).collect();
    Value::Array(rows).to_string()
}

/// Kodiert die Einträge als URL-Token.
///
/// Schlägt nie fehl: ohne (funktionierende) Kompression wird das
/// unkomprimierte JSON gerahmt.
pub fn encode_state(entries: &[StateEntry], compression: Compression) -> String {
    let json = entries_to_json(entries);
    frame(json.as_bytes(), compression)
}

fn entry_to_value(entry: &StateEntry) -> Value {
    let mut row = Vec::with_capacity(entry.arity());
    row.push(Value::from(entry.type_code));
    row.push(coordinate(entry.lat));
    row.push(coordinate(entry.lng));
    if let Some(note) = entry.note.as_deref() {
        row.push(Value::String(note.to_string()));
    }
    Value::Array(row)
}

/// Ganzzahlige Koordinaten ohne Nachkommastelle (`0` statt `0.0`).
fn coordinate(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INT {
        Value::Number(Number::from(value as i64))
    } else {
        Number::from_f64(value).map_or(Value::Null, Value::Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_to_json_is_compact_tuple_form() {
        let entries = vec![
            StateEntry::new(1, 12.5, 40.25),
            StateEntry::with_note(3, 0.0, -10.0, "watch corner"),
        ];
        assert_eq!(
            entries_to_json(&entries),
            r#"[[1,12.5,40.25],[3,0,-10,"watch corner"]]"#
        );
    }

    #[test]
    fn test_empty_state_serializes_to_empty_array() {
        assert_eq!(entries_to_json(&[]), "[]");
    }

    #[test]
    fn test_token_is_url_safe() {
        let entries: Vec<StateEntry> = (0..50u32)
            .map(|i| StateEntry::new(i % 14, f64::from(i) * 1.37, f64::from(i) * -2.11))
            .collect();
        let token = encode_state(&entries, Compression::Gzip);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }
}
