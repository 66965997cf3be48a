//! Use-Cases für gespeicherte Routen.

use super::{map_select, sharing};
use crate::app::AppState;
use crate::codec;
use crate::core::SavedRoute;

/// Speichert den aktuellen State unter einem Namen.
pub fn save_route(state: &mut AppState, name: &str) -> anyhow::Result<SavedRoute> {
    let token = sharing::current_token(state);
    let route = state.saved_routes.save(name, &state.current_map, &token)?;
    state.status_message = Some(format!("Route '{}' gespeichert", route.name));
    Ok(route)
}

/// Lädt eine gespeicherte Route: wechselt die Map und ersetzt den State.
pub fn load_saved_route(state: &mut AppState, id: &str) -> anyhow::Result<()> {
    let Some(route) = state.saved_routes.get(id) else {
        anyhow::bail!("Gespeicherte Route {} nicht gefunden", id);
    };
    let Some(decoded) = codec::decode_state(&route.state, &state.registry) else {
        anyhow::bail!("Gespeicherte Route '{}' ist beschaedigt", route.name);
    };

    let map_id = match state.maps.find(&route.map_id) {
        Some(map) => map.id.clone(),
        None => {
            log::warn!(
                "Route '{}' verweist auf unbekannte Map '{}', verwende aktuelle Map",
                route.name,
                route.map_id
            );
            state.current_map.clone()
        }
    };

    map_select::activate_map(state, &map_id, decoded.entries);
    state.status_message = Some(format!("Route '{}' geladen", route.name));
    Ok(())
}

/// Löscht eine gespeicherte Route.
pub fn delete_saved_route(state: &mut AppState, id: &str) -> anyhow::Result<()> {
    if !state.saved_routes.delete(id)? {
        log::warn!("Gespeicherte Route {} existiert nicht", id);
    }
    Ok(())
}
