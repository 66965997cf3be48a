//! Handler für Legende und Sichtbarkeit.

use crate::app::use_cases;
use crate::app::{AppState, MarkerLayer};

/// Klappt die Legende um.
pub fn toggle_legend(state: &mut AppState) {
    use_cases::visibility::toggle_legend(state);
}

/// Schaltet die Sichtbarkeit eines Typs um.
pub fn toggle_type_visibility(state: &mut AppState, layer: MarkerLayer, type_code: u32) {
    use_cases::visibility::toggle_type_visibility(state, layer, type_code);
}

/// Blendet alle festen Typen ein oder aus.
pub fn set_fixed_types_visible(state: &mut AppState, visible: bool) {
    use_cases::visibility::set_fixed_types_visible(state, visible);
}
