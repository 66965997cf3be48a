//! Render-Vertrag zwischen App-Layer und Host.

use crate::core::{FixedMarker, LatLng, RouteChannel, StateEntry};

/// Sichtbarer Marker mit seinem Index im State (für Klick-Rückmeldungen).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderMarker {
    /// Index im State-Container
    pub index: usize,
    /// Eintrag (Typ, Position, Notiz)
    pub entry: StateEntry,
}

/// Polyline eines Routenkanals.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRoute {
    pub channel: RouteChannel,
    /// Nodes in Array-Reihenfolge
    pub path: Vec<LatLng>,
}

/// Alles, was der Host für einen Render-Durchlauf benötigt.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderScene {
    /// Map-ID des Hintergrundbilds
    pub map_id: String,
    /// Sichtbare Nutzer-Marker (ohne Routen-Nodes)
    pub markers: Vec<RenderMarker>,
    /// Sichtbare, nicht-leere Routenkanäle
    pub routes: Vec<RenderRoute>,
    /// Sichtbare feste Marker
    pub fixed_markers: Vec<FixedMarker>,
    /// Legende ausgeklappt
    pub legend_open: bool,
    /// Admin-Modus aktiv
    pub admin_mode: bool,
}
