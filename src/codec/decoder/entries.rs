//! Validierung einzelner Wire-Einträge (filter-map mit Verwurf-Zähler).

use super::schema::RawState;
use crate::core::state_entry::normalize_note;
use crate::core::{MarkerTypeRegistry, RouteChannel, StateEntry};
use serde_json::Value;

/// Normalisiert alle Schemata auf flache `StateEntry`s.
///
/// Liefert `(gueltige_eintraege, verworfen)`. Legacy: erst `p`, dann `r`.
pub(super) fn sanitize(raw: RawState, registry: &MarkerTypeRegistry) -> (Vec<StateEntry>, usize) {
    let mut entries = Vec::new();
    let mut dropped = 0usize;

    let mut keep = |candidate: Option<StateEntry>, row: &Value| match candidate {
        Some(entry) => entries.push(entry),
        None => {
            log::debug!("Eintrag verworfen: {}", row);
            dropped += 1;
        }
    };

    match raw {
        RawState::Flat { rows, .. } => {
            for row in &rows {
                keep(flat_row(row, registry), row);
            }
        }
        RawState::Legacy { pins, route, .. } => {
            for row in &pins {
                keep(legacy_pin(row, registry), row);
            }
            for row in &route {
                keep(legacy_route_pair(row), row);
            }
        }
    }

    (entries, dropped)
}

/// `[typeCode, lat, lng]` oder `[typeCode, lat, lng, note]`; nur numerische Codes.
fn flat_row(row: &Value, registry: &MarkerTypeRegistry) -> Option<StateEntry> {
    let items = row.as_array()?;
    match items.as_slice() {
        [code, lat, lng] => build(numeric_code(code, registry)?, lat, lng, None),
        [code, lat, lng, note] => build(numeric_code(code, registry)?, lat, lng, Some(note)),
        _ => None,
    }
}

/// Legacy-Pin: Code oder symbolischer Typname.
fn legacy_pin(row: &Value, registry: &MarkerTypeRegistry) -> Option<StateEntry> {
    let items = row.as_array()?;
    let (code, lat, lng, note) = match items.as_slice() {
        [code, lat, lng] => (code, lat, lng, None),
        [code, lat, lng, note] => (code, lat, lng, Some(note)),
        _ => return None,
    };
    let code = match code {
        Value::String(name) => registry.resolve_code(name)?,
        other => numeric_code(other, registry)?,
    };
    build(code, lat, lng, note)
}

/// Legacy-Routenpaar `[lat, lng]` → Node des Standard-Routenkanals.
fn legacy_route_pair(row: &Value) -> Option<StateEntry> {
    let items = row.as_array()?;
    let [lat, lng] = items.as_slice() else {
        return None;
    };
    build(RouteChannel::Primary.code(), lat, lng, None)
}

fn build(code: u32, lat: &Value, lng: &Value, note: Option<&Value>) -> Option<StateEntry> {
    let lat = finite(lat)?;
    let lng = finite(lng)?;
    let note = match note {
        None | Some(Value::Null) => None,
        // Whitespace-Notizen wie lokal behandeln: Eintrag bleibt, Notiz fällt weg
        Some(Value::String(text)) => normalize_note(text),
        Some(_) => return None,
    };
    Some(StateEntry {
        type_code: code,
        lat,
        lng,
        note,
    })
}

/// Numerischer Code, der in der Registry aufgelöst werden kann.
///
/// Ganzzahlige Floats (`1.0`) gelten als Code; Strings nicht.
fn numeric_code(value: &Value, registry: &MarkerTypeRegistry) -> Option<u32> {
    let code = match value.as_u64() {
        Some(code) => code,
        None => {
            let float = value.as_f64()?;
            if float.fract() != 0.0 || float < 0.0 || float > f64::from(u32::MAX) {
                return None;
            }
            float as u64
        }
    };
    let code = u32::try_from(code).ok()?;
    registry.contains_code(code).then_some(code)
}

fn finite(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite())
}
