//! Gespeicherte Routen als JSON-Datei (Array von `SavedRoute`).
//!
//! Die Datei wird bei jeder Operation vollständig gelesen und geschrieben.

use crate::core::SavedRoute;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Dateibasierter Speicher für gespeicherte Routen.
#[derive(Debug, Clone)]
pub struct SavedRouteStore {
    path: PathBuf,
}

impl SavedRouteStore {
    /// Erstellt einen Store für die angegebene Datei (muss noch nicht existieren).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Pfad der Speicherdatei.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Alle gespeicherten Routen in Speicherreihenfolge.
    ///
    /// Fehlende oder kaputte Datei ergibt eine leere Liste.
    pub fn list(&self) -> Vec<SavedRoute> {
        match self.read() {
            Ok(routes) => routes,
            Err(e) => {
                log::warn!("Gespeicherte Routen nicht lesbar, verwende leere Liste: {:#}", e);
                Vec::new()
            }
        }
    }

    /// Speichert eine Route zum aktuellen Zeitpunkt.
    pub fn save(&self, name: &str, map_id: &str, token: &str) -> Result<SavedRoute> {
        self.save_at(name, map_id, token, Utc::now())
    }

    /// Speichert eine Route mit explizitem Zeitstempel.
    ///
    /// Kollidiert die Millisekunden-ID mit einer bestehenden, wird sie hochgezählt.
    pub fn save_at(
        &self,
        name: &str,
        map_id: &str,
        token: &str,
        saved_at: DateTime<Utc>,
    ) -> Result<SavedRoute> {
        let mut routes = self.list();
        let mut route = SavedRoute::new(name, map_id, token.to_string(), saved_at);

        let mut id = saved_at.timestamp_millis();
        while routes.iter().any(|r| r.id == route.id) {
            id += 1;
            route.id = id.to_string();
        }

        routes.push(route.clone());
        self.write(&routes)?;
        log::info!(
            "Route '{}' gespeichert (id {}, map {})",
            route.name,
            route.id,
            route.map_id
        );
        Ok(route)
    }

    /// Sucht eine Route per ID.
    pub fn get(&self, id: &str) -> Option<SavedRoute> {
        self.list().into_iter().find(|r| r.id == id)
    }

    /// Löscht eine Route. `false`, wenn die ID unbekannt ist.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut routes = self.list();
        let before = routes.len();
        routes.retain(|r| r.id != id);
        if routes.len() == before {
            return Ok(false);
        }
        self.write(&routes)?;
        log::info!("Route {} geloescht", id);
        Ok(true)
    }

    fn read(&self) -> Result<Vec<SavedRoute>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Datei nicht lesbar: {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("Ungueltiges JSON in {}", self.path.display()))
    }

    fn write(&self, routes: &[SavedRoute]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Verzeichnis nicht anlegbar: {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(routes)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Datei nicht schreibbar: {}", self.path.display()))?;
        Ok(())
    }
}
