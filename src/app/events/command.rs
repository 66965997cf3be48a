use crate::app::state::{DrawMode, MarkerLayer};
use crate::core::RouteChannel;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Zeichenmodus setzen
    SetDrawMode { mode: DrawMode },
    /// Nutzer-Marker setzen
    PlaceMarker { type_code: u32, lat: f64, lng: f64 },
    /// Node an Routenkanal anhängen
    AppendRouteNode {
        channel: RouteChannel,
        lat: f64,
        lng: f64,
    },
    /// Eintrag per Index entfernen
    RemoveEntry { index: usize },
    /// Alle Nodes eines Routenkanals entfernen
    RemoveRouteChannel { channel: RouteChannel },
    /// Letzten Eintrag entfernen
    UndoLastEntry,
    /// Notiz setzen (leer = entfernen)
    SetNote { index: usize, text: String },
    /// State leeren
    ClearState,
    /// Share-Link erzeugen
    ShareState,
    /// URL-Parameter anwenden (Map, State, Admin)
    OpenUrl { url: String },
    /// Map wechseln (leert den State)
    SelectMap { map_id: String },
    /// State als Route speichern
    SaveRoute { name: String },
    /// Gespeicherte Route laden
    LoadSavedRoute { id: String },
    /// Gespeicherte Route löschen
    DeleteSavedRoute { id: String },
    /// Legende umschalten
    ToggleLegend,
    /// Sichtbarkeit eines Typs umschalten
    ToggleTypeVisibility { layer: MarkerLayer, type_code: u32 },
    /// Sichtbarkeit aller festen Typen setzen
    SetFixedTypesVisible { visible: bool },
    /// Admin: festen Marker setzen
    PlaceFixedMarker { type_code: u32, lat: f64, lng: f64 },
    /// Admin: letzten festen Marker entfernen
    UndoLastFixedMarker,
    /// Admin: feste Marker exportieren
    ExportFixedMarkers { dir: PathBuf },
}
