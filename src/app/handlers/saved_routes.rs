//! Handler für gespeicherte Routen.

use crate::app::use_cases;
use crate::app::AppState;

/// Speichert den aktuellen State.
pub fn save(state: &mut AppState, name: &str) -> anyhow::Result<()> {
    use_cases::saved_routes::save_route(state, name).map(|_| ())
}

/// Lädt eine gespeicherte Route.
pub fn load(state: &mut AppState, id: &str) -> anyhow::Result<()> {
    use_cases::saved_routes::load_saved_route(state, id)
}

/// Löscht eine gespeicherte Route.
pub fn delete(state: &mut AppState, id: &str) -> anyhow::Result<()> {
    use_cases::saved_routes::delete_saved_route(state, id)
}
