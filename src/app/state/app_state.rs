use crate::app::CommandLog;
use crate::core::{FixedMarkerSet, MapCatalog, MapState, MarkerTypeRegistry};
use crate::shared::PlannerOptions;
use crate::storage::SavedRouteStore;

use super::{EditorState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Laufzeit-Optionen
    pub options: PlannerOptions,
    /// Marker-Typen (reserviert + Katalog)
    pub registry: MarkerTypeRegistry,
    /// Verfügbare Maps
    pub maps: MapCatalog,
    /// ID der aktuell gewählten Map
    pub current_map: String,
    /// Marker und Routen-Nodes des Nutzers
    pub map_state: MapState,
    /// Feste Marker der aktuellen Map
    pub fixed_markers: FixedMarkerSet,
    /// Zeichenwerkzeuge und Admin-Modus
    pub editor: EditorState,
    /// Sichtbarkeit und Legende
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Gespeicherte Routen
    pub saved_routes: SavedRouteStore,
    /// Zuletzt erzeugter Share-Link
    pub last_share_url: Option<String>,
    /// Statusmeldung für den Host
    pub status_message: Option<String>,
    /// State hat sich seit dem letzten Render-Durchlauf geändert
    pub needs_render: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(PlannerOptions::default())
    }

    /// Erstellt einen App-State aus Optionen.
    ///
    /// Ein konfigurierter Marker-Katalog, der sich nicht laden lässt, wird
    /// gemeldet; die Registry enthält dann nur die reservierten Typen.
    pub fn with_options(options: PlannerOptions) -> Self {
        let registry = match &options.marker_catalog_path {
            Some(path) => load_registry_from(path),
            None => MarkerTypeRegistry::with_default_catalog(),
        };
        let maps = MapCatalog::builtin();
        let current_map = options
            .default_map
            .as_deref()
            .and_then(|id| maps.find(id))
            .or_else(|| maps.first())
            .map(|m| m.id.clone())
            .unwrap_or_default();
        let saved_routes = SavedRouteStore::new(options.saved_routes_path.clone());

        Self {
            options,
            registry,
            maps,
            current_map,
            map_state: MapState::new(),
            fixed_markers: FixedMarkerSet::new(),
            editor: EditorState::new(),
            view: ViewState::new(),
            command_log: CommandLog::new(),
            saved_routes,
            last_share_url: None,
            status_message: None,
            needs_render: true,
        }
    }

    /// Markiert den State als geändert (Render-Callback fällig).
    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    /// Liefert und quittiert das Render-Flag (Aufruf nach dem Render-Durchlauf).
    pub fn take_needs_render(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }

    /// Ob der Admin-Modus aktiv ist.
    pub fn is_admin(&self) -> bool {
        self.editor.admin_mode
    }

    /// Anzahl der Nutzer-Einträge (für Statusanzeige)
    pub fn entry_count(&self) -> usize {
        self.map_state.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn load_registry_from(path: &std::path::Path) -> MarkerTypeRegistry {
    let mut registry = MarkerTypeRegistry::new();
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            log::warn!(
                "Marker-Katalog {} nicht lesbar, nur reservierte Typen aktiv: {}",
                path.display(),
                e
            );
            return registry;
        }
    };
    if let Err(e) = registry.load_catalog(&json) {
        log::warn!(
            "Marker-Katalog {} ungueltig, nur reservierte Typen aktiv: {:#}",
            path.display(),
            e
        );
    }
    registry
}
