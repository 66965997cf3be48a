//! Use-Cases für den Map-Wechsel.

use super::fixed_markers;
use crate::app::AppState;
use crate::core::StateEntry;

/// Wechselt die Map. Marker und Routen der vorherigen Map werden verworfen.
pub fn select_map(state: &mut AppState, map_id: &str) -> anyhow::Result<()> {
    if !state.maps.contains(map_id) {
        anyhow::bail!("Unbekannte Map: '{}'", map_id);
    }
    activate_map(state, map_id, Vec::new());
    Ok(())
}

/// Aktiviert eine (bekannte) Map mit den übergebenen Einträgen.
///
/// Lädt die festen Marker der Map neu und setzt den Zeichenmodus zurück.
pub fn activate_map(state: &mut AppState, map_id: &str, entries: Vec<StateEntry>) {
    state.current_map = map_id.to_string();
    state.map_state.replace_all(entries);
    state.editor.draw_mode = Default::default();
    fixed_markers::load_for_current_map(state);
    state.mark_dirty();
    log::info!(
        "Map '{}' aktiv: {} Eintraege, {} feste Marker",
        map_id,
        state.map_state.len(),
        state.fixed_markers.len()
    );
}
