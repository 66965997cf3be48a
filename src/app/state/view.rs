use std::collections::HashSet;

/// Ebene eines Sichtbarkeitsfilters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerLayer {
    /// Eigene Einträge des States (Pins und Routen)
    User,
    /// Feste Marker der Map
    Fixed,
}

/// Sichtbarkeit von Marker-Typen und Legende
///
/// Beide Ebenen filtern unabhängig: ein ausgeblendeter fester `spawn`-Typ
/// lässt eigene `spawn`-Pins sichtbar.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Ausgeblendete Typ-Codes eigener Einträge
    pub hidden_user_types: HashSet<u32>,
    /// Ausgeblendete Typ-Codes fester Marker
    pub hidden_fixed_types: HashSet<u32>,
    /// Legende ausgeklappt
    pub legend_open: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    fn hidden_mut(&mut self, layer: MarkerLayer) -> &mut HashSet<u32> {
        match layer {
            MarkerLayer::User => &mut self.hidden_user_types,
            MarkerLayer::Fixed => &mut self.hidden_fixed_types,
        }
    }

    /// Ob Marker dieses Typs auf der Ebene gezeichnet werden.
    pub fn is_visible(&self, layer: MarkerLayer, type_code: u32) -> bool {
        let hidden = match layer {
            MarkerLayer::User => &self.hidden_user_types,
            MarkerLayer::Fixed => &self.hidden_fixed_types,
        };
        !hidden.contains(&type_code)
    }

    /// Schaltet die Sichtbarkeit eines Typs um. Liefert die neue Sichtbarkeit.
    pub fn toggle(&mut self, layer: MarkerLayer, type_code: u32) -> bool {
        let hidden = self.hidden_mut(layer);
        if hidden.remove(&type_code) {
            true
        } else {
            hidden.insert(type_code);
            false
        }
    }

    /// Setzt die Sichtbarkeit für mehrere Typen einer Ebene.
    pub fn set_visible(
        &mut self,
        layer: MarkerLayer,
        codes: impl IntoIterator<Item = u32>,
        visible: bool,
    ) {
        let hidden = self.hidden_mut(layer);
        for code in codes {
            if visible {
                hidden.remove(&code);
            } else {
                hidden.insert(code);
            }
        }
    }
}
