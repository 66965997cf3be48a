//! Der State-Container: geordnete Liste aller Marker und Routen-Nodes einer Map.

use super::coords::{quantize, LatLng};
use super::marker_type::RouteChannel;
use super::state_entry::{normalize_note, StateEntry};

/// Autoritative, renderunabhängige Eintragsliste einer Map-Ansicht.
///
/// Die Reihenfolge ist Vertrag: sie definiert die Polyline je Routenkanal und
/// die Z-Reihenfolge beim Rendern (letzter Eintrag liegt oben).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapState {
    entries: Vec<StateEntry>,
}

impl MapState {
    /// Erstellt einen leeren State.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Erstellt einen State aus Einträgen (Koordinaten werden quantisiert).
    pub fn from_entries(entries: Vec<StateEntry>) -> Self {
        let mut state = Self::new();
        state.replace_all(entries);
        state
    }

    /// Hängt einen Eintrag an; Koordinaten werden beim Übernehmen gerundet.
    pub fn append(&mut self, entry: StateEntry) {
        self.entries.push(commit(entry));
    }

    /// Entfernt den Eintrag am Index. Außerhalb der Grenzen: No-op.
    pub fn remove_at(&mut self, index: usize) -> Option<StateEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Entfernt alle Einträge eines Typs (z.B. einen ganzen Routenkanal).
    pub fn remove_all_of_type(&mut self, type_code: u32) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.type_code != type_code);
        before - self.entries.len()
    }

    /// Ersetzt den gesamten Inhalt.
    pub fn replace_all(&mut self, entries: Vec<StateEntry>) {
        self.entries = entries.into_iter().map(commit).collect();
    }

    /// Leert den State.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entfernt den zuletzt angehängten Eintrag (Undo).
    pub fn pop_last(&mut self) -> Option<StateEntry> {
        self.entries.pop()
    }

    /// Setzt die Notiz am Index.
    ///
    /// Der Text wird getrimmt; bleibt nichts übrig, entfällt das Notizfeld
    /// komplett (4-Tupel wird wieder 3-Tupel). Gibt `false` bei ungültigem Index.
    pub fn set_note(&mut self, index: usize, text: &str) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };
        entry.note = normalize_note(text);
        true
    }

    /// Notiz am Index.
    pub fn note(&self, index: usize) -> Option<&str> {
        self.entries.get(index).and_then(|e| e.note.as_deref())
    }

    /// Eintrag am Index.
    pub fn get(&self, index: usize) -> Option<&StateEntry> {
        self.entries.get(index)
    }

    /// Read-only Sicht auf alle Einträge in Reihenfolge.
    pub fn entries(&self) -> &[StateEntry] {
        &self.entries
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Einträge vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Polyline-Pfad eines Routenkanals in Array-Reihenfolge.
    pub fn route_path(&self, channel: RouteChannel) -> Vec<LatLng> {
        let code = channel.code();
        self.entries
            .iter()
            .filter(|e| e.type_code == code)
            .map(StateEntry::position)
            .collect()
    }

    /// Letzter Node eines Routenkanals (Startpunkt der Vorschau-Linie).
    pub fn last_route_node(&self, channel: RouteChannel) -> Option<LatLng> {
        let code = channel.code();
        self.entries
            .iter()
            .rev()
            .find(|e| e.type_code == code)
            .map(StateEntry::position)
    }

    /// Anzahl der Einträge eines Typs.
    pub fn count_of_type(&self, type_code: u32) -> usize {
        self.entries
            .iter()
            .filter(|e| e.type_code == type_code)
            .count()
    }

    /// Übernimmt die Einträge als Vec.
    pub fn into_entries(self) -> Vec<StateEntry> {
        self.entries
    }
}

fn commit(mut entry: StateEntry) -> StateEntry {
    entry.lat = quantize(entry.lat);
    entry.lng = quantize(entry.lng);
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::marker_type::{CUSTOM_CODE, ROUTE1_CODE, ROUTE_CODE};

    fn sample_state() -> MapState {
        let mut state = MapState::new();
        state.append(StateEntry::new(CUSTOM_CODE, 1.0, 1.0));
        state.append(StateEntry::new(ROUTE_CODE, 0.0, 0.0));
        state.append(StateEntry::new(ROUTE1_CODE, 5.0, 5.0));
        state.append(StateEntry::new(ROUTE_CODE, 10.0, 10.0));
        state
    }

    #[test]
    fn test_append_quantizes_coordinates() {
        let mut state = MapState::new();
        state.append(StateEntry::new(1, 12.3456, -40.254));
        let entry = state.get(0).expect("Eintrag erwartet");
        assert_eq!(entry.lat, 12.35);
        assert_eq!(entry.lng, -40.25);
    }

    #[test]
    fn test_remove_at_out_of_bounds_is_noop() {
        let mut state = sample_state();
        assert!(state.remove_at(99).is_none());
        assert_eq!(state.len(), 4);

        let removed = state.remove_at(0).expect("Index 0 existiert");
        assert_eq!(removed.type_code, CUSTOM_CODE);
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn test_remove_all_of_type_drops_whole_channel() {
        let mut state = sample_state();
        assert_eq!(state.remove_all_of_type(ROUTE_CODE), 2);
        assert!(state.route_path(RouteChannel::Primary).is_empty());
        assert_eq!(state.route_path(RouteChannel::Secondary).len(), 1);
    }

    #[test]
    fn test_route_path_preserves_array_order() {
        let state = sample_state();
        let path = state.route_path(RouteChannel::Primary);
        assert_eq!(path, vec![LatLng::new(0.0, 0.0), LatLng::new(10.0, 10.0)]);
        assert_eq!(
            state.last_route_node(RouteChannel::Primary),
            Some(LatLng::new(10.0, 10.0))
        );
    }

    #[test]
    fn test_set_note_trims_and_empty_removes() {
        let mut state = sample_state();
        assert!(state.set_note(2, "  watch corner  "));
        assert_eq!(state.note(2), Some("watch corner"));
        assert_eq!(state.get(2).map(StateEntry::arity), Some(4));

        assert!(state.set_note(2, "   "));
        assert_eq!(state.note(2), None);
        assert_eq!(state.get(2).map(StateEntry::arity), Some(3));

        assert!(!state.set_note(17, "nope"));
    }

    #[test]
    fn test_replace_all_swaps_content() {
        let mut state = sample_state();
        state.replace_all(vec![StateEntry::new(ROUTE_CODE, 0.004, 1.006)]);
        assert_eq!(state.len(), 1);
        assert_eq!(state.entries()[0].lat, 0.0);
        assert_eq!(state.entries()[0].lng, 1.01);
    }

    #[test]
    fn test_pop_last_undoes_latest_entry() {
        let mut state = sample_state();
        let last = state.pop_last().expect("Eintrag erwartet");
        assert_eq!(last.type_code, ROUTE_CODE);
        assert_eq!(state.len(), 3);
        state.clear();
        assert!(state.pop_last().is_none());
    }
}
