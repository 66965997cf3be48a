//! Use-Cases für feste Marker (Laden, Admin-Bearbeitung, Export).

use crate::app::AppState;
use crate::core::parse_fixture;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Lädt die Fixture der aktuellen Map.
///
/// Fehlende oder ungültige Datei ergibt eine leere Menge.
pub fn load_for_current_map(state: &mut AppState) {
    let path = state.options.fixed_markers_path(&state.current_map);
    let markers = match std::fs::read_to_string(&path) {
        Ok(json) => match parse_fixture(&json, &state.registry) {
            Ok(result) => result.markers,
            Err(e) => {
                log::warn!("Fixture {} ungueltig: {:#}", path.display(), e);
                Vec::new()
            }
        },
        Err(e) => {
            log::warn!("Keine festen Marker fuer '{}' ({}): {}", state.current_map, path.display(), e);
            Vec::new()
        }
    };
    state.fixed_markers.replace_all(markers);
    state.mark_dirty();
}

/// Admin: setzt einen festen Marker. Nur nicht-reservierte, registrierte Typen.
pub fn place_fixed_marker(
    state: &mut AppState,
    type_code: u32,
    lat: f64,
    lng: f64,
) -> anyhow::Result<()> {
    let is_fixed_type = state
        .registry
        .get(type_code)
        .is_some_and(|t| !t.reserved);
    if !is_fixed_type {
        anyhow::bail!("Typ {} ist kein fester Marker-Typ", type_code);
    }
    state.fixed_markers.add(type_code, lat, lng);
    state.mark_dirty();
    Ok(())
}

/// Admin: entfernt den zuletzt gesetzten festen Marker.
pub fn undo_last_fixed_marker(state: &mut AppState) {
    if state.fixed_markers.undo_last().is_some() {
        state.mark_dirty();
    }
}

/// Admin: schreibt die festen Marker als `{map_id}.json` in `dir`.
pub fn export_fixed_markers(state: &mut AppState, dir: &Path) -> anyhow::Result<PathBuf> {
    let json = state.fixed_markers.to_fixture_json()?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Verzeichnis nicht anlegbar: {}", dir.display()))?;
    let path = dir.join(format!("{}.json", state.current_map));
    std::fs::write(&path, json)
        .with_context(|| format!("Fixture nicht schreibbar: {}", path.display()))?;
    log::info!(
        "{} feste Marker exportiert nach {}",
        state.fixed_markers.len(),
        path.display()
    );
    state.status_message = Some(format!("Exportiert: {}", path.display()));
    Ok(path)
}
