//! Handler für die Bearbeitung fester Marker im Admin-Modus.

use crate::app::use_cases;
use crate::app::AppState;
use std::path::Path;

/// Setzt einen festen Marker.
pub fn place_fixed_marker(
    state: &mut AppState,
    type_code: u32,
    lat: f64,
    lng: f64,
) -> anyhow::Result<()> {
    use_cases::fixed_markers::place_fixed_marker(state, type_code, lat, lng)
}

/// Entfernt den zuletzt gesetzten festen Marker.
pub fn undo_last_fixed_marker(state: &mut AppState) {
    use_cases::fixed_markers::undo_last_fixed_marker(state);
}

/// Exportiert die festen Marker der aktuellen Map.
pub fn export(state: &mut AppState, dir: &Path) -> anyhow::Result<()> {
    use_cases::fixed_markers::export_fixed_markers(state, dir).map(|_| ())
}
