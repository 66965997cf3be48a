use crate::core::marker_type::{CUSTOM1_CODE, CUSTOM2_CODE, CUSTOM_CODE};
use crate::core::RouteChannel;

/// Aktiver Zeichenmodus. Pin- und Routenmodus schließen sich gegenseitig aus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Klicks auf die Karte bewirken nichts
    #[default]
    None,
    /// Klick setzt einen Marker dieses Typ-Codes
    Pin(u32),
    /// Klick hängt einen Node an diesen Routenkanal an
    Route(RouteChannel),
}

impl DrawMode {
    /// `true` im Pin-Modus eines der drei Custom-Typen.
    pub fn is_custom_pin(self) -> bool {
        matches!(self, Self::Pin(code) if is_custom_code(code))
    }
}

/// `custom`, `custom1` oder `custom2`.
pub fn is_custom_code(code: u32) -> bool {
    matches!(code, CUSTOM_CODE | CUSTOM1_CODE | CUSTOM2_CODE)
}

/// Zustand der Zeichenwerkzeuge
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Aktiver Zeichenmodus
    pub draw_mode: DrawMode,
    /// Admin-Modus: Klicks setzen feste Marker, Teilen ist deaktiviert
    pub admin_mode: bool,
}

impl EditorState {
    /// Erstellt den Standard-Zustand (kein Zeichenmodus, kein Admin).
    pub fn new() -> Self {
        Self::default()
    }
}
