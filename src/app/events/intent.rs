use crate::app::state::MarkerLayer;
use crate::core::RouteChannel;
use std::path::PathBuf;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Klick auf die Karte (Map-CRS)
    MapClicked { lat: f64, lng: f64 },
    /// Pin-Werkzeug eines Typs an/aus
    PinToolToggled { type_code: u32 },
    /// Routenwerkzeug eines Kanals an/aus
    RouteToolToggled { channel: RouteChannel },
    /// Klick auf einen bestehenden Marker (Index im State)
    MarkerClicked { index: usize },
    /// Marker löschen (Popup-Aktion)
    DeleteMarkerRequested { index: usize },
    /// Alle Nodes eines Routenkanals löschen
    DeleteRouteRequested { channel: RouteChannel },
    /// Letzte Aktion rückgängig (Ctrl+Z)
    UndoRequested,
    /// Notiz eines Eintrags bearbeitet
    NoteEdited { index: usize, text: String },
    /// Alle Marker und Routen entfernen
    ClearRequested,
    /// Share-Link erzeugen
    ShareRequested,
    /// Seite mit URL geöffnet (Share-Link oder Lesezeichen)
    UrlOpened { url: String },
    /// Map im Auswahlfeld gewechselt
    MapSelected { map_id: String },
    /// Aktuellen State als Route speichern
    SaveRouteRequested { name: String },
    /// Gespeicherte Route öffnen
    SavedRouteOpened { id: String },
    /// Gespeicherte Route löschen
    SavedRouteDeleteRequested { id: String },
    /// Legende auf-/zuklappen
    LegendToggled,
    /// Sichtbarkeit eines Marker-Typs auf einer Ebene umschalten
    TypeVisibilityToggled { layer: MarkerLayer, type_code: u32 },
    /// Alle festen Typen einblenden
    ShowAllFixedTypesRequested,
    /// Alle festen Typen ausblenden
    HideAllFixedTypesRequested,
    /// Admin: feste Marker der aktuellen Map als `{map_id}.json` exportieren
    FixedMarkersExportRequested { dir: PathBuf },
}
