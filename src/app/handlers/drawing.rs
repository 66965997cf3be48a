//! Handler für Zeichenmodus, Marker, Routen und Notizen.

use crate::app::state::DrawMode;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::RouteChannel;

/// Setzt den Zeichenmodus.
pub fn set_draw_mode(state: &mut AppState, mode: DrawMode) {
    use_cases::drawing::set_draw_mode(state, mode);
}

/// Setzt einen Nutzer-Marker.
pub fn place_marker(state: &mut AppState, type_code: u32, lat: f64, lng: f64) -> anyhow::Result<()> {
    use_cases::drawing::place_marker(state, type_code, lat, lng)
}

/// Hängt einen Routen-Node an.
pub fn append_route_node(state: &mut AppState, channel: RouteChannel, lat: f64, lng: f64) {
    use_cases::drawing::append_route_node(state, channel, lat, lng);
}

/// Entfernt einen Eintrag.
pub fn remove_entry(state: &mut AppState, index: usize) {
    use_cases::drawing::remove_entry(state, index);
}

/// Entfernt einen Routenkanal vollständig.
pub fn remove_route_channel(state: &mut AppState, channel: RouteChannel) {
    use_cases::drawing::remove_route_channel(state, channel);
}

/// Macht den letzten Eintrag rückgängig.
pub fn undo_last_entry(state: &mut AppState) {
    use_cases::drawing::undo_last_entry(state);
}

/// Setzt eine Notiz.
pub fn set_note(state: &mut AppState, index: usize, text: &str) {
    use_cases::drawing::set_note(state, index, text);
}

/// Leert den State.
pub fn clear_state(state: &mut AppState) {
    use_cases::drawing::clear_state(state);
}
