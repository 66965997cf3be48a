//! Use-Cases für Marker und Routen-Nodes des Nutzers.

use crate::app::state::DrawMode;
use crate::app::AppState;
use crate::core::{RouteChannel, StateEntry};

/// Setzt den Zeichenmodus.
pub fn set_draw_mode(state: &mut AppState, mode: DrawMode) {
    log::debug!("Zeichenmodus: {:?} -> {:?}", state.editor.draw_mode, mode);
    state.editor.draw_mode = mode;
}

/// Setzt einen Marker. Unbekannte Typ-Codes werden abgelehnt.
pub fn place_marker(state: &mut AppState, type_code: u32, lat: f64, lng: f64) -> anyhow::Result<()> {
    if !state.registry.contains_code(type_code) {
        anyhow::bail!("Unbekannter Marker-Typ: {}", type_code);
    }
    state.map_state.append(StateEntry::new(type_code, lat, lng));
    state.mark_dirty();
    Ok(())
}

/// Hängt einen Node an einen Routenkanal an.
pub fn append_route_node(state: &mut AppState, channel: RouteChannel, lat: f64, lng: f64) {
    state
        .map_state
        .append(StateEntry::new(channel.code(), lat, lng));
    state.mark_dirty();
}

/// Entfernt einen Eintrag per Index.
pub fn remove_entry(state: &mut AppState, index: usize) {
    match state.map_state.remove_at(index) {
        Some(entry) => {
            log::debug!("Eintrag {} entfernt (Typ {})", index, entry.type_code);
            state.mark_dirty();
        }
        None => log::warn!("Kein Eintrag an Index {}", index),
    }
}

/// Entfernt alle Nodes eines Routenkanals.
pub fn remove_route_channel(state: &mut AppState, channel: RouteChannel) {
    let removed = state.map_state.remove_all_of_type(channel.code());
    if removed > 0 {
        log::info!("Route {} geloescht ({} Nodes)", channel.type_name(), removed);
        state.mark_dirty();
    }
}

/// Entfernt den zuletzt hinzugefügten Eintrag.
pub fn undo_last_entry(state: &mut AppState) {
    if state.map_state.pop_last().is_some() {
        state.mark_dirty();
    }
}

/// Setzt oder entfernt die Notiz eines Eintrags.
pub fn set_note(state: &mut AppState, index: usize, text: &str) {
    if state.map_state.set_note(index, text) {
        state.mark_dirty();
    } else {
        log::warn!("Notiz nicht gesetzt: kein Eintrag an Index {}", index);
    }
}

/// Leert den State.
pub fn clear_state(state: &mut AppState) {
    state.map_state.clear();
    state.mark_dirty();
}
