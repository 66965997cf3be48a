//! Ein Eintrag des Karten-States: Marker oder Routen-Node.

use super::coords::LatLng;

/// `(typeCode, lat, lng, note?)`: Marker oder ein Node eines Routenkanals.
#[derive(Debug, Clone, PartialEq)]
pub struct StateEntry {
    /// Wire-Code des Marker-Typs
    pub type_code: u32,
    /// Y-Koordinate im Map-CRS
    pub lat: f64,
    /// X-Koordinate im Map-CRS
    pub lng: f64,
    /// Optionale Notiz (nie leer)
    pub note: Option<String>,
}

impl StateEntry {
    /// Erstellt einen Eintrag ohne Notiz.
    pub fn new(type_code: u32, lat: f64, lng: f64) -> Self {
        Self {
            type_code,
            lat,
            lng,
            note: None,
        }
    }

    /// Erstellt einen Eintrag mit Notiz; leere Notizen werden verworfen.
    pub fn with_note(type_code: u32, lat: f64, lng: f64, note: impl Into<String>) -> Self {
        let note = note.into();
        Self {
            type_code,
            lat,
            lng,
            note: normalize_note(&note),
        }
    }

    /// Position des Eintrags.
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// Tupel-Arität auf dem Wire (3 ohne, 4 mit Notiz).
    pub fn arity(&self) -> usize {
        if self.note.is_some() {
            4
        } else {
            3
        }
    }
}

/// Trimmt eine Notiz; nur Whitespace ergibt `None`.
pub fn normalize_note(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
