//! Strukturelle Schema-Erkennung (es wird keine Versionsnummer übertragen).
//!
//! Prüfreihenfolge: Objekt mit `m`/`p`/`r` zuerst, danach Array-of-Tuples
//! nach Arität. Neue Wire-Formate müssen von allen bisherigen strukturell
//! unterscheidbar bleiben.

use serde_json::{Map, Value};

/// Im Umlauf befindliche Wire-Schemata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireSchema {
    /// `{m: mapId, p: [[typeNameOrCode, lat, lng]], r: [[lat, lng]]}`
    LegacyObject,
    /// `[[typeCode, lat, lng], ...]`
    FlatTuples,
    /// `[[typeCode, lat, lng, note?], ...]` mit mindestens einem 4-Tupel
    FlatTuplesWithNotes,
}

/// Getaggte Zwischenform vor der Normalisierung.
#[derive(Debug)]
pub(super) enum RawState {
    Legacy {
        map_id: Option<String>,
        pins: Vec<Value>,
        route: Vec<Value>,
    },
    Flat {
        rows: Vec<Value>,
        has_notes: bool,
    },
}

impl RawState {
    pub(super) fn schema(&self) -> WireSchema {
        match self {
            Self::Legacy { .. } => WireSchema::LegacyObject,
            Self::Flat {
                has_notes: false, ..
            } => WireSchema::FlatTuples,
            Self::Flat {
                has_notes: true, ..
            } => WireSchema::FlatTuplesWithNotes,
        }
    }

    pub(super) fn map_id(&self) -> Option<&str> {
        match self {
            Self::Legacy { map_id, .. } => map_id.as_deref(),
            Self::Flat { .. } => None,
        }
    }
}

/// Ordnet einen geparsten JSON-Wert einem Schema zu.
///
/// `None` für Skalare, `null` und Objekte ohne eines der Legacy-Felder.
pub(super) fn detect(value: Value) -> Option<RawState> {
    match value {
        Value::Object(object) if is_legacy_object(&object) => Some(legacy(object)),
        Value::Array(rows) => {
            let has_notes = rows
                .iter()
                .any(|row| row.as_array().is_some_and(|items| items.len() == 4));
            Some(RawState::Flat { rows, has_notes })
        }
        _ => None,
    }
}

fn is_legacy_object(object: &Map<String, Value>) -> bool {
    ["m", "p", "r"].iter().any(|key| object.contains_key(*key))
}

fn legacy(mut object: Map<String, Value>) -> RawState {
    let map_id = match object.remove("m") {
        Some(Value::String(id)) => Some(id),
        _ => None,
    };
    RawState::Legacy {
        map_id,
        pins: take_array(&mut object, "p"),
        route: take_array(&mut object, "r"),
    }
}

fn take_array(object: &mut Map<String, Value>, key: &str) -> Vec<Value> {
    match object.remove(key) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            log::debug!("Legacy-Feld '{}' ist kein Array: {}", key, other);
            Vec::new()
        }
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_legacy_object() {
        let raw = detect(json!({"m": "spaceport", "p": [], "r": [[0, 0]]})).expect("Legacy");
        assert_eq!(raw.schema(), WireSchema::LegacyObject);
        assert_eq!(raw.map_id(), Some("spaceport"));
    }

    #[test]
    fn test_detect_flat_arities() {
        let plain = detect(json!([[1, 0, 0], [3, 1, 1]])).expect("Flat");
        assert_eq!(plain.schema(), WireSchema::FlatTuples);

        let noted = detect(json!([[1, 0, 0], [3, 1, 1, "hi"]])).expect("Flat");
        assert_eq!(noted.schema(), WireSchema::FlatTuplesWithNotes);
    }

    #[test]
    fn test_detect_rejects_unknown_shapes() {
        assert!(detect(json!(42)).is_none());
        assert!(detect(json!("state")).is_none());
        assert!(detect(json!(null)).is_none());
        assert!(detect(json!({"entries": []})).is_none());
    }

    #[test]
    fn test_legacy_non_string_map_id_is_ignored() {
        let raw = detect(json!({"m": 7, "p": "nope"})).expect("Legacy");
        assert_eq!(raw.map_id(), None);
        match raw {
            RawState::Legacy { pins, route, .. } => {
                assert!(pins.is_empty());
                assert!(route.is_empty());
            }
            RawState::Flat { .. } => panic!("Legacy erwartet"),
        }
    }
}
