//! Handler für Share-Links, URL-Parameter und Map-Wechsel.

use crate::app::use_cases;
use crate::app::AppState;

/// Erzeugt einen Share-Link.
pub fn share(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::sharing::share_state(state).map(|_| ())
}

/// Wendet eine geöffnete URL an.
pub fn open_url(state: &mut AppState, url: &str) {
    use_cases::sharing::open_url(state, url);
}

/// Wechselt die Map und propagiert Fehler an den Aufrufer.
pub fn select_map(state: &mut AppState, map_id: &str) -> anyhow::Result<()> {
    use_cases::map_select::select_map(state, map_id)
}
