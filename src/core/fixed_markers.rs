//! Feste Referenz-Marker je Map (Admin-Modus, statische JSON-Fixtures).
//!
//! Fixture-Format: Top-Level-Array aus `[typeCode, lat, lng]`-Tripeln.

use super::coords::quantize;
use super::marker_type::MarkerTypeRegistry;
use anyhow::{Context, Result};
use serde_json::Value;

/// Ein fester Marker (ohne Notiz, für Endnutzer nicht löschbar).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMarker {
    pub type_code: u32,
    pub lat: f64,
    pub lng: f64,
}

/// Ergebnis des Fixture-Parsings.
#[derive(Debug, Default)]
pub struct FixtureParseResult {
    pub markers: Vec<FixedMarker>,
    /// Verworfene Einträge (falsche Arität, Typen oder unbekannter Code)
    pub dropped: usize,
}

/// Geordnete Menge fester Marker einer Map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedMarkerSet {
    markers: Vec<FixedMarker>,
}

impl FixedMarkerSet {
    /// Erstellt eine leere Menge.
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
        }
    }

    /// Fügt einen Marker hinzu (Koordinaten quantisiert).
    pub fn add(&mut self, type_code: u32, lat: f64, lng: f64) {
        self.markers.push(FixedMarker {
            type_code,
            lat: quantize(lat),
            lng: quantize(lng),
        });
    }

    /// Entfernt den zuletzt gesetzten Marker (Admin-Undo).
    pub fn undo_last(&mut self) -> Option<FixedMarker> {
        self.markers.pop()
    }

    /// Ersetzt den Inhalt vollständig.
    pub fn replace_all(&mut self, markers: Vec<FixedMarker>) {
        self.markers = markers;
    }

    /// Leert die Menge.
    pub fn clear(&mut self) {
        self.markers.clear();
    }

    /// Read-only Zugriff.
    pub fn markers(&self) -> &[FixedMarker] {
        &self.markers
    }

    /// Anzahl der Marker.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Gibt `true` zurück, wenn keine Marker vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Serialisiert als formatiertes Fixture-JSON (2 Leerzeichen Einrückung).
    pub fn to_fixture_json(&self) -> Result<String> {
        let rows: Vec<Value> = self
            .markers
            .iter()
            .map(|m| Value::Array(vec![Value::from(m.type_code), Value::from(m.lat), Value::from(m.lng)]))
            .collect();
        serde_json::to_string_pretty(&rows).context("Fixture konnte nicht serialisiert werden")
    }
}

/// Liest ein Fixture. Ungültige Einträge werden einzeln verworfen.
///
/// Schlägt nur fehl, wenn das Dokument kein JSON-Array ist.
pub fn parse_fixture(json: &str, registry: &MarkerTypeRegistry) -> Result<FixtureParseResult> {
    let value: Value = serde_json::from_str(json).context("Fixture ist kein gueltiges JSON")?;
    let Value::Array(rows) = value else {
        anyhow::bail!("Fixture muss ein Array sein");
    };

    let mut result = FixtureParseResult::default();
    for row in &rows {
        match parse_fixture_row(row, registry) {
            Some(marker) => result.markers.push(marker),
            None => result.dropped += 1,
        }
    }

    if result.dropped > 0 {
        log::warn!(
            "Fixture: {} von {} Eintraegen verworfen",
            result.dropped,
            rows.len()
        );
    }
    Ok(result)
}

fn parse_fixture_row(row: &Value, registry: &MarkerTypeRegistry) -> Option<FixedMarker> {
    let items = row.as_array()?;
    let [code, lat, lng] = items.as_slice() else {
        return None;
    };
    let code = u32::try_from(code.as_u64()?).ok()?;
    let lat = lat.as_f64().filter(|v| v.is_finite())?;
    let lng = lng.as_f64().filter(|v| v.is_finite())?;
    if !registry.contains_code(code) {
        return None;
    }
    Some(FixedMarker {
        type_code: code,
        lat,
        lng,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixture_drops_invalid_rows() {
        let registry = MarkerTypeRegistry::with_default_catalog();
        let json = r#"[
            [1, 10.5, 20.25],
            [1, 10.5],
            ["spawn", 1, 2],
            [999, 1, 2],
            [5, -3, 4]
        ]"#;
        let result = parse_fixture(json, &registry).expect("Array erwartet");
        assert_eq!(result.markers.len(), 2);
        assert_eq!(result.dropped, 3);
        assert_eq!(result.markers[1].type_code, 5);
    }

    #[test]
    fn test_parse_fixture_rejects_non_array() {
        let registry = MarkerTypeRegistry::with_default_catalog();
        assert!(parse_fixture(r#"{"markers": []}"#, &registry).is_err());
    }

    #[test]
    fn test_fixture_export_roundtrip() {
        let registry = MarkerTypeRegistry::with_default_catalog();
        let mut set = FixedMarkerSet::new();
        set.add(1, 12.345, 6.789);
        set.add(8, -1.0, 2.0);

        let json = set.to_fixture_json().expect("Export erwartet");
        assert!(json.contains('\n'));

        let parsed = parse_fixture(&json, &registry).expect("Re-Parse erwartet");
        assert_eq!(parsed.dropped, 0);
        assert_eq!(parsed.markers, set.markers());
    }

    #[test]
    fn test_undo_last_pops_latest() {
        let mut set = FixedMarkerSet::new();
        set.add(1, 0.0, 0.0);
        set.add(2, 1.0, 1.0);
        assert_eq!(set.undo_last().map(|m| m.type_code), Some(2));
        assert_eq!(set.len(), 1);
    }
}
