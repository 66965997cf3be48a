//! Persistierter Datensatz einer gespeicherten Route.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback-Name für Routen ohne (sinnvollen) Namen.
pub const UNNAMED_ROUTE: &str = "Unnamed route";

/// `{id, name, mapId, state, savedAt}`; `state` ist ein opakes Wire-Token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRoute {
    /// Eindeutige ID (Millisekunden-Zeitstempel als String)
    pub id: String,
    /// Anzeigename
    pub name: String,
    /// Fremdschlüssel in den Map-Katalog
    pub map_id: String,
    /// Wire-Token des States
    pub state: String,
    /// Speicherzeitpunkt (ISO-8601)
    pub saved_at: DateTime<Utc>,
}

impl SavedRoute {
    /// Erstellt einen Datensatz zum Zeitpunkt `saved_at`.
    pub fn new(name: &str, map_id: &str, state: String, saved_at: DateTime<Utc>) -> Self {
        let trimmed = name.trim();
        Self {
            id: saved_at.timestamp_millis().to_string(),
            name: if trimmed.is_empty() {
                UNNAMED_ROUTE.to_string()
            } else {
                trimmed.to_string()
            },
            map_id: map_id.to_string(),
            state,
            saved_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_blank_name_falls_back() {
        let at = Utc.with_ymd_and_hms(2025, 11, 2, 18, 30, 0).single().expect("Datum");
        let route = SavedRoute::new("   ", "spaceport", "abc".into(), at);
        assert_eq!(route.name, UNNAMED_ROUTE);
        assert_eq!(route.id, at.timestamp_millis().to_string());
    }

    #[test]
    fn test_serializes_camel_case_fields() {
        let at = Utc.with_ymd_and_hms(2025, 11, 2, 18, 30, 0).single().expect("Datum");
        let route = SavedRoute::new(" Loot run ", "blue-gate", "tok".into(), at);
        let json = serde_json::to_value(&route).expect("Serialisierung");
        assert_eq!(json["mapId"], "blue-gate");
        assert_eq!(json["name"], "Loot run");
        assert_eq!(json["savedAt"], "2025-11-02T18:30:00Z");
    }
}
