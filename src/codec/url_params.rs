//! URL-Parameter `map`, `state`, `admin` und Share-Links.

use super::decoder::DecodedState;
use crate::core::{MapCatalog, MapDefinition};
use anyhow::{Context, Result};
use url::Url;

/// Query-Parameter für Map-ID.
pub const PARAM_MAP: &str = "map";
/// Query-Parameter für das Wire-Token.
pub const PARAM_STATE: &str = "state";
/// Query-Parameter für den Admin-Modus.
pub const PARAM_ADMIN: &str = "admin";

/// Geparste URL-Parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams {
    /// Map-ID (außerhalb des Tokens)
    pub map: Option<String>,
    /// Wire-Token; leerer Wert zählt als nicht vorhanden
    pub state: Option<String>,
    /// `admin=true`
    pub admin: bool,
}

/// Parst eine vollständige URL oder einen Query-String (`?a=b&c=d` bzw. `a=b`).
pub fn parse_url_params(input: &str) -> UrlParams {
    let input = input.trim();
    let query = match Url::parse(input) {
        Ok(url) => url.query().unwrap_or_default().to_string(),
        Err(_) => input.trim_start_matches('?').to_string(),
    };

    let mut params = UrlParams::default();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            PARAM_MAP if !value.is_empty() => params.map = Some(value.into_owned()),
            PARAM_STATE if !value.is_empty() => params.state = Some(value.into_owned()),
            PARAM_ADMIN => params.admin = value == "true",
            _ => {}
        }
    }
    params
}

/// Baut einen Share-Link: setzt `state` und `map` auf der Basis-URL.
///
/// Andere Parameter der Basis-URL bleiben erhalten.
pub fn build_share_url(base_url: &str, map_id: &str, token: &str) -> Result<String> {
    let mut url =
        Url::parse(base_url).with_context(|| format!("Ungueltige Basis-URL: '{}'", base_url))?;

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != PARAM_STATE && k != PARAM_MAP)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(PARAM_STATE, token)
        .append_pair(PARAM_MAP, map_id);

    Ok(url.into())
}

/// Ermittelt die effektive Map.
///
/// Reihenfolge: expliziter `map`-Parameter, In-Band-`m` eines Legacy-Tokens,
/// konfigurierte Standard-Map, erste Map des Katalogs. Unbekannte IDs werden
/// übersprungen.
pub fn resolve_map<'a>(
    catalog: &'a MapCatalog,
    param: Option<&str>,
    decoded: Option<&DecodedState>,
    default_map: Option<&str>,
) -> Option<&'a MapDefinition> {
    let in_band = decoded.and_then(|d| d.map_id.as_deref());
    [param, in_band, default_map]
        .into_iter()
        .flatten()
        .find_map(|id| catalog.find(id))
        .or_else(|| catalog.first())
}
