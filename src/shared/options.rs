//! Zentrale Konfiguration des ArcMaps-Planners.
//!
//! `PlannerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::codec::Compression;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Share-Links ─────────────────────────────────────────────────────

/// Basis-URL für Share-Links.
pub const SHARE_BASE_URL: &str = "https://arcmaps.example/";

// ── Dateien ─────────────────────────────────────────────────────────

/// Verzeichnis der Fixture-Dateien `{map_id}.json`.
pub const FIXED_MARKERS_DIR: &str = "assets/fixed-markers";
/// Datei der gespeicherten Routen.
pub const SAVED_ROUTES_FILE: &str = "arcmaps_saved_routes.json";
/// Name der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "arcmaps_planner.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Planner-Optionen.
/// Wird als `arcmaps_planner.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerOptions {
    // ── Share ───────────────────────────────────────────────────
    /// Basis-URL, auf der `state` und `map` gesetzt werden
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
    /// Kompression beim Kodieren
    #[serde(default)]
    pub compression: Compression,

    // ── Kataloge ────────────────────────────────────────────────
    /// Eigener Marker-Katalog (JSON); `None` = mitgelieferter Katalog
    #[serde(default)]
    pub marker_catalog_path: Option<PathBuf>,
    /// Verzeichnis der festen Marker je Map
    #[serde(default = "default_fixed_markers_dir")]
    pub fixed_markers_dir: PathBuf,
    /// Standard-Map, wenn URL und Token keine liefern
    #[serde(default)]
    pub default_map: Option<String>,

    // ── Speicher ────────────────────────────────────────────────
    /// JSON-Datei der gespeicherten Routen
    #[serde(default = "default_saved_routes_path")]
    pub saved_routes_path: PathBuf,

    // ── Admin ───────────────────────────────────────────────────
    /// Admin-Modus grundsätzlich erlauben (zusätzlich `admin=true` in der URL nötig)
    #[serde(default)]
    pub allow_admin_mode: bool,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            share_base_url: SHARE_BASE_URL.to_string(),
            compression: Compression::Gzip,
            marker_catalog_path: None,
            fixed_markers_dir: PathBuf::from(FIXED_MARKERS_DIR),
            default_map: None,
            saved_routes_path: PathBuf::from(SAVED_ROUTES_FILE),
            allow_admin_mode: false,
        }
    }
}

/// Serde-Default für `share_base_url` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_share_base_url() -> String {
    SHARE_BASE_URL.to_string()
}

fn default_fixed_markers_dir() -> PathBuf {
    PathBuf::from(FIXED_MARKERS_DIR)
}

fn default_saved_routes_path() -> PathBuf {
    PathBuf::from(SAVED_ROUTES_FILE)
}

impl PlannerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("ArcMaps-Planner"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Pfad der Fixture-Datei einer Map.
    pub fn fixed_markers_path(&self, map_id: &str) -> PathBuf {
        self.fixed_markers_dir.join(format!("{}.json", map_id))
    }
}
