//! Verfügbare Maps (ID, Anzeigename, Bilddatei).

/// Eine auswählbare Map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapDefinition {
    /// Stabile ID (URL-Parameter `map`, Fremdschlüssel gespeicherter Routen)
    pub id: String,
    /// Anzeigename
    pub label: String,
    /// Relativer Pfad zum Kartenbild
    pub file: String,
}

impl MapDefinition {
    fn new(id: &str, label: &str, file: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            file: file.to_string(),
        }
    }
}

/// Geordnete Liste der Maps; der erste Eintrag ist der Fallback.
#[derive(Debug, Clone)]
pub struct MapCatalog {
    maps: Vec<MapDefinition>,
}

impl MapCatalog {
    /// Die fünf Maps des Spiels.
    pub fn builtin() -> Self {
        Self {
            maps: vec![
                MapDefinition::new("stella-montis", "Stella Montis", "maps/stella-montis.png"),
                MapDefinition::new("spaceport", "Spaceport", "maps/spaceport.png"),
                MapDefinition::new(
                    "dam-battlegrounds",
                    "Dam Battlegrounds",
                    "maps/dam-battlegrounds.png",
                ),
                MapDefinition::new("buried-city", "Buried City", "maps/buried-city.png"),
                MapDefinition::new("blue-gate", "Blue Gate", "maps/blue-gate.png"),
            ],
        }
    }

    /// Sucht eine Map per ID.
    pub fn find(&self, id: &str) -> Option<&MapDefinition> {
        self.maps.iter().find(|m| m.id == id)
    }

    /// Prüft, ob die ID bekannt ist.
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Fallback-Map (erster Eintrag).
    pub fn first(&self) -> Option<&MapDefinition> {
        self.maps.first()
    }

    /// Alle Maps in Anzeige-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &MapDefinition> {
        self.maps.iter()
    }

    /// Anzahl der Maps.
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Gibt `true` zurück, wenn keine Maps konfiguriert sind.
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

impl Default for MapCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
