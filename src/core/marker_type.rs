//! Registry der Marker-Typen: Name ⇔ stabiler Integer-Code.
//!
//! Das Wire-Format speichert nur Codes. Ein einmal vergebener Code darf deshalb
//! nie einem anderen Namen zugeordnet werden, sonst rendern alte Links falsch.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

/// Code des Standard-Custom-Markers.
pub const CUSTOM_CODE: u32 = 0;
/// Code des Standard-Routenkanals.
pub const ROUTE_CODE: u32 = 3;
/// Code des roten Custom-Markers.
pub const CUSTOM1_CODE: u32 = 10;
/// Code des grünen Custom-Markers.
pub const CUSTOM2_CODE: u32 = 11;
/// Code des zweiten Routenkanals (blau).
pub const ROUTE1_CODE: u32 = 12;
/// Code des dritten Routenkanals (rot).
pub const ROUTE2_CODE: u32 = 13;

/// Reservierte Typen: (Code, Name, Label). Unabhängig von jeder geladenen Konfiguration.
pub const RESERVED_MARKER_TYPES: [(u32, &str, &str); 6] = [
    (CUSTOM_CODE, "custom", "Custom Marker"),
    (ROUTE_CODE, "route", "Route"),
    (CUSTOM1_CODE, "custom1", "Custom Marker (red)"),
    (CUSTOM2_CODE, "custom2", "Custom Marker (green)"),
    (ROUTE1_CODE, "route1", "Route (blue)"),
    (ROUTE2_CODE, "route2", "Route (red)"),
];

/// Mitgelieferter Katalog der festen Marker-Typen.
pub const DEFAULT_MARKER_CATALOG: &str = include_str!("../../assets/marker-types.json");

static MARKER_NAME_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| match Regex::new(r"^[a-z][a-z0-9-]*$") {
        Ok(re) => Some(re),
        Err(e) => {
            log::error!(
                "Namensmuster fuer Marker-Typen ungueltig, keine Registrierung moeglich: {}",
                e
            );
            None
        }
    });

/// Prüft, ob ein Code zur reservierten Menge gehört.
pub fn is_reserved_code(code: u32) -> bool {
    RESERVED_MARKER_TYPES.iter().any(|(c, _, _)| *c == code)
}

/// Einer der drei unabhängigen Routenkanäle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RouteChannel {
    /// `route` (Code 3)
    #[default]
    Primary,
    /// `route1` (Code 12)
    Secondary,
    /// `route2` (Code 13)
    Tertiary,
}

impl RouteChannel {
    /// Alle Kanäle in Render-Reihenfolge.
    pub const ALL: [RouteChannel; 3] = [Self::Primary, Self::Secondary, Self::Tertiary];

    /// Wire-Code des Kanals.
    pub fn code(self) -> u32 {
        match self {
            Self::Primary => ROUTE_CODE,
            Self::Secondary => ROUTE1_CODE,
            Self::Tertiary => ROUTE2_CODE,
        }
    }

    /// Symbolischer Typname des Kanals.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Primary => "route",
            Self::Secondary => "route1",
            Self::Tertiary => "route2",
        }
    }

    /// Kanal zu einem Wire-Code, falls der Code ein Routen-Code ist.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Kanal zu einem Typnamen (`route`, `route1`, `route2`).
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.type_name() == name)
    }
}

/// Ein registrierter Marker-Typ.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerType {
    /// Stabiler Wire-Code
    pub code: u32,
    /// Symbolischer Name (kebab-case)
    pub name: String,
    /// Anzeigename
    pub label: String,
    /// Icon-Glyphe für den Renderer
    pub icon: Option<String>,
    /// ID der Katalog-Kategorie
    pub category: Option<String>,
    /// Gehört zur reservierten Menge
    pub reserved: bool,
}

/// Zusatzdaten bei dynamischer Registrierung.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerTypeMeta {
    pub label: String,
    pub icon: Option<String>,
    pub category: Option<String>,
}

/// Kategorie aus dem Marker-Katalog (Legenden-Gruppierung).
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerCategory {
    pub id: String,
    pub label: String,
}

/// Gründe, aus denen eine dynamische Registrierung abgelehnt wird.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistrationError {
    #[error("Code {code} ist reserviert ('{name}' abgelehnt)")]
    ReservedCode { code: u32, name: String },

    #[error("Code {code} ist bereits an '{existing}' vergeben ('{name}' abgelehnt)")]
    CodeInUse {
        code: u32,
        existing: String,
        name: String,
    },

    #[error("Name '{name}' ist bereits an Code {existing_code} vergeben (Code {code} abgelehnt)")]
    NameInUse {
        name: String,
        existing_code: u32,
        code: u32,
    },

    #[error("Ungueltiger Marker-Typname '{0}'")]
    InvalidName(String),

    #[error("Fehlerhafter Katalog-Eintrag in Kategorie '{category}': {reason}")]
    MalformedEntry { category: String, reason: String },
}

/// Ergebnis eines Katalog-Ladevorgangs.
#[derive(Debug, Default)]
pub struct CatalogLoadReport {
    /// Anzahl neu registrierter (oder bestätigter) Typen
    pub registered: usize,
    /// Abgelehnte Einträge mit Begründung
    pub skipped: Vec<RegistrationError>,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    categories: Vec<CatalogCategory>,
}

#[derive(Debug, Deserialize)]
struct CatalogCategory {
    id: String,
    label: String,
    #[serde(default)]
    markers: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct CatalogMarker {
    id: u32,
    #[serde(rename = "type")]
    type_name: String,
    label: String,
    #[serde(default)]
    icon: Option<String>,
}

/// Bidirektionale Zuordnung Marker-Typname ⇔ Code.
///
/// Wird einmal pro Session aufgebaut; danach nur noch additiv erweitert.
#[derive(Debug, Clone)]
pub struct MarkerTypeRegistry {
    by_code: IndexMap<u32, MarkerType>,
    by_name: IndexMap<String, u32>,
    categories: Vec<MarkerCategory>,
}

impl MarkerTypeRegistry {
    /// Erstellt eine Registry, die nur die reservierten Typen kennt.
    pub fn new() -> Self {
        let mut by_code = IndexMap::new();
        let mut by_name = IndexMap::new();
        for (code, name, label) in RESERVED_MARKER_TYPES {
            by_code.insert(
                code,
                MarkerType {
                    code,
                    name: name.to_string(),
                    label: label.to_string(),
                    icon: None,
                    category: None,
                    reserved: true,
                },
            );
            by_name.insert(name.to_string(), code);
        }
        Self {
            by_code,
            by_name,
            categories: Vec::new(),
        }
    }

    /// Registry mit reservierten Typen plus mitgeliefertem Katalog.
    pub fn with_default_catalog() -> Self {
        let mut registry = Self::new();
        if let Err(e) = registry.load_catalog(DEFAULT_MARKER_CATALOG) {
            log::error!("Mitgelieferter Marker-Katalog fehlerhaft: {:#}", e);
        }
        registry
    }

    /// Code zu einem Typnamen.
    pub fn resolve_code(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }

    /// Typname zu einem Code.
    pub fn resolve_name(&self, code: u32) -> Option<&str> {
        self.by_code.get(&code).map(|t| t.name.as_str())
    }

    /// Vollständiger Typ-Eintrag zu einem Code.
    pub fn get(&self, code: u32) -> Option<&MarkerType> {
        self.by_code.get(&code)
    }

    /// Prüft, ob der Code bekannt ist.
    pub fn contains_code(&self, code: u32) -> bool {
        self.by_code.contains_key(&code)
    }

    /// Prüft, ob der Code reserviert ist.
    pub fn is_reserved(&self, code: u32) -> bool {
        is_reserved_code(code)
    }

    /// Routenkanal zu einem Code (nur `route`, `route1`, `route2`).
    pub fn route_channel(&self, code: u32) -> Option<RouteChannel> {
        RouteChannel::from_code(code)
    }

    /// Alle Typen in Registrierungsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &MarkerType> {
        self.by_code.values()
    }

    /// Feste Marker-Typen (alles außer Custom und Route) in Katalog-Reihenfolge.
    pub fn fixed_marker_types(&self) -> impl Iterator<Item = &MarkerType> {
        self.by_code.values().filter(|t| !t.reserved)
    }

    /// Prüft, ob ein Typname ein fester (Admin-)Marker-Typ ist.
    pub fn is_fixed_marker_type(&self, name: &str) -> bool {
        self.resolve_code(name).is_some_and(|code| !is_reserved_code(code))
    }

    /// Katalog-Kategorien in Ladereihenfolge.
    pub fn categories(&self) -> &[MarkerCategory] {
        &self.categories
    }

    /// Anzahl bekannter Typen.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Gibt `true` zurück, wenn keine Typen bekannt sind.
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Registriert einen dynamischen Typ.
    ///
    /// Reservierte Codes werden zuerst geprüft. Ein bereits vergebener Code
    /// oder Name wird nie umgebogen; das identische Paar erneut zu registrieren
    /// ist ein No-op.
    pub fn register_dynamic(
        &mut self,
        name: &str,
        code: u32,
        meta: MarkerTypeMeta,
    ) -> Result<(), RegistrationError> {
        if is_reserved_code(code) {
            return Err(RegistrationError::ReservedCode {
                code,
                name: name.to_string(),
            });
        }

        let name_ok = MARKER_NAME_PATTERN
            .as_ref()
            .is_some_and(|re| re.is_match(name));
        if !name_ok {
            return Err(RegistrationError::InvalidName(name.to_string()));
        }

        if let Some(existing) = self.by_code.get(&code) {
            if existing.name == name {
                return Ok(());
            }
            return Err(RegistrationError::CodeInUse {
                code,
                existing: existing.name.clone(),
                name: name.to_string(),
            });
        }

        if let Some(&existing_code) = self.by_name.get(name) {
            return Err(RegistrationError::NameInUse {
                name: name.to_string(),
                existing_code,
                code,
            });
        }

        self.by_code.insert(
            code,
            MarkerType {
                code,
                name: name.to_string(),
                label: meta.label,
                icon: meta.icon,
                category: meta.category,
                reserved: false,
            },
        );
        self.by_name.insert(name.to_string(), code);
        Ok(())
    }

    /// Lädt einen Katalog im Format `{categories: [{id, label, markers: [...]}]}`.
    ///
    /// Ist das Dokument als Ganzes unlesbar, wird nichts registriert.
    /// Einzelne fehlerhafte oder kollidierende Einträge werden übersprungen.
    pub fn load_catalog(&mut self, json: &str) -> Result<CatalogLoadReport> {
        let document: CatalogDocument =
            serde_json::from_str(json).context("Marker-Katalog konnte nicht gelesen werden")?;

        let mut report = CatalogLoadReport::default();

        for category in document.categories {
            if !self.categories.iter().any(|c| c.id == category.id) {
                self.categories.push(MarkerCategory {
                    id: category.id.clone(),
                    label: category.label.clone(),
                });
            }

            for raw in category.markers {
                let marker: CatalogMarker = match serde_json::from_value(raw) {
                    Ok(m) => m,
                    Err(e) => {
                        let err = RegistrationError::MalformedEntry {
                            category: category.id.clone(),
                            reason: e.to_string(),
                        };
                        log::warn!("{}", err);
                        report.skipped.push(err);
                        continue;
                    }
                };

                let meta = MarkerTypeMeta {
                    label: marker.label,
                    icon: marker.icon,
                    category: Some(category.id.clone()),
                };
                match self.register_dynamic(&marker.type_name, marker.id, meta) {
                    Ok(()) => report.registered += 1,
                    Err(err) => {
                        log::warn!("Marker-Typ uebersprungen: {}", err);
                        report.skipped.push(err);
                    }
                }
            }
        }

        log::info!(
            "Marker-Katalog geladen: {} Typen registriert, {} uebersprungen",
            report.registered,
            report.skipped.len()
        );
        Ok(report)
    }
}

impl Default for MarkerTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
