//! Koordinaten-Quantisierung für kompakte, deterministische Wire-Payloads.

/// Anzahl Nachkommastellen, auf die Kartenkoordinaten gerundet werden.
pub const COORD_DECIMALS: i32 = 2;

const COORD_SCALE: f64 = 100.0;

/// Rundet einen Koordinatenwert auf zwei Nachkommastellen.
///
/// Rundung "half away from zero" auf dem skalierten Wert (`x * 100`).
/// Werte, deren skalierte Form nicht mehr endlich ist, bleiben unverändert.
pub fn quantize(value: f64) -> f64 {
    let scaled = value * COORD_SCALE;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / COORD_SCALE;
    // -0.0 normalisieren, damit Encode-Ergebnisse bitgleich bleiben
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Kartenposition im CRS der Map (Leaflet `CRS.Simple`: lat = y, lng = x).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Erstellt eine Position ohne Rundung.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Liefert die auf Wire-Präzision gerundete Position.
    pub fn quantized(self) -> Self {
        Self {
            lat: quantize(self.lat),
            lng: quantize(self.lng),
        }
    }
}
