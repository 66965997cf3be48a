//! Use-Cases für Share-Links und das Öffnen von URLs.

use super::map_select;
use crate::app::AppState;
use crate::codec::{self, build_share_url, parse_url_params, resolve_map};

/// Aktuelles Wire-Token des States.
pub fn current_token(state: &AppState) -> String {
    codec::encode_state(state.map_state.entries(), state.options.compression)
}

/// Erzeugt einen Share-Link für State und Map.
pub fn share_state(state: &mut AppState) -> anyhow::Result<String> {
    if state.is_admin() {
        anyhow::bail!("Teilen ist im Admin-Modus deaktiviert");
    }
    let token = current_token(state);
    let url = build_share_url(&state.options.share_base_url, &state.current_map, &token)?;
    log::info!(
        "Share-Link erzeugt ({} Eintraege, {} Zeichen)",
        state.map_state.len(),
        url.len()
    );
    state.last_share_url = Some(url.clone());
    state.status_message = Some("Link erzeugt".to_string());
    Ok(url)
}

/// Wendet die Parameter einer URL an: Admin-Modus, Map und geteilten State.
///
/// Ein unlesbares Token ergibt einen leeren State. Im Admin-Modus wird
/// kein geteilter State übernommen.
pub fn open_url(state: &mut AppState, url: &str) {
    let params = parse_url_params(url);

    let admin = params.admin && state.options.allow_admin_mode;
    if params.admin && !admin {
        log::info!("admin=true ignoriert: Admin-Modus ist nicht freigeschaltet");
    }
    state.editor.admin_mode = admin;

    let decoded = match params.state.as_deref() {
        Some(_) if admin => {
            log::info!("Geteilter State wird im Admin-Modus ignoriert");
            None
        }
        Some(token) => {
            let decoded = codec::decode_state(token, &state.registry);
            if decoded.is_none() {
                state.status_message = Some("Geteilter Link ist beschaedigt".to_string());
            }
            decoded
        }
        None => None,
    };

    let map_id = resolve_map(
        &state.maps,
        params.map.as_deref(),
        decoded.as_ref(),
        state.options.default_map.as_deref(),
    )
    .map(|m| m.id.clone())
    .unwrap_or_else(|| state.current_map.clone());

    // Verworfene Einträge bleiben still; der Decoder loggt sie bereits
    let entries = decoded.map(|d| d.entries).unwrap_or_default();

    map_select::activate_map(state, &map_id, entries);
}
