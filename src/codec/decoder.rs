//! Decoder: URL-Token → bereinigte State-Einträge.
//!
//! Ablauf: base64url → gzip (mit Klartext-Fallback) → JSON → Schema-Erkennung
//! → Validierung je Eintrag. Einzelne kaputte Einträge werden verworfen,
//! der Rest des Tokens bleibt nutzbar.

mod entries;
mod numbers;
mod schema;

pub use schema::WireSchema;

use super::framing::{base64url_decode, gzip_decompress};
use crate::core::{MarkerTypeRegistry, StateEntry};
use thiserror::Error;

/// Gründe, aus denen ein Token als Ganzes unlesbar ist.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Token ist kein gueltiges base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Payload ist kein gueltiges UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Payload ist kein gueltiges JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unbekannte Top-Level-Struktur im Payload")]
    UnrecognizedShape,

    #[error("Dekomprimierter Payload zu gross ({0} Bytes)")]
    TooLarge(usize),
}

/// Ergebnis eines Decodes, normalisiert auf das aktuelle Schema.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedState {
    /// Gültige Einträge in Original-Reihenfolge
    pub entries: Vec<StateEntry>,
    /// In-Band-Map-ID (nur Legacy-Objekt-Schema `m`)
    pub map_id: Option<String>,
    /// Strukturell erkanntes Schema
    pub schema: WireSchema,
    /// Anzahl verworfener Einträge
    pub dropped: usize,
}

/// Dekodiert ein Token; unlesbare Tokens ergeben `None`.
///
/// Der Fehlergrund wird als Warnung geloggt. Wer ihn selbst auswerten will,
/// nutzt [`try_decode_state`].
pub fn decode_state(token: &str, registry: &MarkerTypeRegistry) -> Option<DecodedState> {
    match try_decode_state(token, registry) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            log::warn!("State-Token konnte nicht dekodiert werden: {}", e);
            None
        }
    }
}

/// Dekodiert ein Token mit Fehlergrund.
pub fn try_decode_state(
    token: &str,
    registry: &MarkerTypeRegistry,
) -> Result<DecodedState, DecodeError> {
    let json = decode_payload(token)?;
    decode_json(&json, registry)
}

/// Dekodiert bereits entpackten JSON-Text (alle Schemata).
pub fn decode_json(json: &str, registry: &MarkerTypeRegistry) -> Result<DecodedState, DecodeError> {
    let value: serde_json::Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(e) => match numbers::non_finite_to_null(json) {
            Some(patched) => {
                log::debug!("Nicht-endliche Zahlen im Payload durch null ersetzt");
                serde_json::from_str(&patched).map_err(|_| DecodeError::Json(e))?
            }
            None => return Err(e.into()),
        },
    };
    let raw = schema::detect(value).ok_or(DecodeError::UnrecognizedShape)?;
    let schema = raw.schema();
    let map_id = raw.map_id().map(str::to_string);

    let (entries, dropped) = entries::sanitize(raw, registry);
    if dropped > 0 {
        log::warn!(
            "State-Token: {} Eintraege verworfen, {} uebernommen ({:?})",
            dropped,
            entries.len(),
            schema
        );
    }

    Ok(DecodedState {
        entries,
        map_id,
        schema,
        dropped,
    })
}

/// Token → JSON-Text. Komprimierte und unkomprimierte Tokens werden akzeptiert.
pub fn decode_payload(token: &str) -> Result<String, DecodeError> {
    let bytes = base64url_decode(token)?;
    let payload = match gzip_decompress(&bytes) {
        Some(Ok(decompressed)) => decompressed,
        Some(Err(size)) => return Err(DecodeError::TooLarge(size)),
        None => bytes,
    };
    Ok(String::from_utf8(payload)?)
}

#[cfg(test)]
mod tests;
