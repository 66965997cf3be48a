//! Use-Cases für Sichtbarkeit und Legende.

use crate::app::{AppState, MarkerLayer};

/// Klappt die Legende auf oder zu.
pub fn toggle_legend(state: &mut AppState) {
    state.view.legend_open = !state.view.legend_open;
    state.mark_dirty();
}

/// Schaltet die Sichtbarkeit eines Marker-Typs auf einer Ebene um.
///
/// Auf der festen Ebene gelten nur feste Typen, reservierte Codes werden ignoriert.
pub fn toggle_type_visibility(state: &mut AppState, layer: MarkerLayer, type_code: u32) {
    let known = match layer {
        MarkerLayer::User => state.registry.contains_code(type_code),
        MarkerLayer::Fixed => state
            .registry
            .fixed_marker_types()
            .any(|t| t.code == type_code),
    };
    if !known {
        log::warn!("Sichtbarkeit: Typ {} auf Ebene {:?} unbekannt", type_code, layer);
        return;
    }
    let visible = state.view.toggle(layer, type_code);
    log::debug!("Typ {} ({:?}) sichtbar: {}", type_code, layer, visible);
    state.mark_dirty();
}

/// Blendet alle festen Typen ein oder aus.
pub fn set_fixed_types_visible(state: &mut AppState, visible: bool) {
    let codes: Vec<u32> = state.registry.fixed_marker_types().map(|t| t.code).collect();
    state.view.set_visible(MarkerLayer::Fixed, codes, visible);
    state.mark_dirty();
}
