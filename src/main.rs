//! ArcMaps-Planner (Kommandozeile).
//!
//! Kodiert und dekodiert teilbare Karten-States, erzeugt Share-Links,
//! verwaltet gespeicherte Routen und prüft Fixture-Dateien fester Marker.

use anyhow::{Context, Result};
use arcmaps_planner::codec::{self, build_share_url, entries_to_json, parse_url_params, resolve_map};
use arcmaps_planner::core::{parse_fixture, MarkerTypeRegistry};
use arcmaps_planner::{AppState, Compression, PlannerOptions, SavedRouteStore, StateEntry};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ArcMaps-Planner")]
#[command(version)]
#[command(about = "Teilbare Karten-States: Marker, Routen und Notizen als URL-Token")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Optionen-Datei (Standard: arcmaps_planner.toml neben der Binary)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Flache JSON-Einträge in ein Token kodieren
    Encode {
        /// Eingabedatei (liest stdin, wenn nicht angegeben)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Ohne gzip kodieren
        #[arg(long)]
        no_compress: bool,
    },

    /// Token oder Share-URL dekodieren
    Decode {
        /// Token oder vollständige URL
        input: String,
    },

    /// Share-Link für Einträge und Map erzeugen
    Share {
        /// Map-ID
        #[arg(short, long)]
        map: String,

        /// Eingabedatei (liest stdin, wenn nicht angegeben)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Gespeicherte Routen verwalten
    Routes {
        #[command(subcommand)]
        action: RouteAction,
    },

    /// Feste Marker
    Fixed {
        #[command(subcommand)]
        action: FixedAction,
    },

    /// Registrierte Marker-Typen auflisten
    Types,
}

#[derive(Subcommand)]
enum RouteAction {
    /// Alle gespeicherten Routen
    List,
    /// Einträge als Route speichern
    Save {
        /// Anzeigename
        #[arg(short, long, default_value = "")]
        name: String,

        /// Map-ID
        #[arg(short, long)]
        map: String,

        /// Eingabedatei (liest stdin, wenn nicht angegeben)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Route anzeigen (inklusive dekodierter Einträge)
    Show { id: String },
    /// Route löschen
    Delete { id: String },
}

#[derive(Subcommand)]
enum FixedAction {
    /// Fixture-Datei prüfen
    Check { file: PathBuf },
}

fn main() -> Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        let cli = Cli::parse();

        log::debug!("ArcMaps-Planner v{} startet...", env!("CARGO_PKG_VERSION"));

        let config_path = cli.config.unwrap_or_else(PlannerOptions::config_path);
        let options = PlannerOptions::load_from_file(&config_path);
        let state = AppState::with_options(options);

        match cli.command {
            Commands::Encode { file, no_compress } => {
                let entries = read_entries(file, &state.registry)?;
                let compression = if no_compress {
                    Compression::None
                } else {
                    state.options.compression
                };
                println!("{}", codec::encode_state(&entries, compression));
            }
            Commands::Decode { input } => decode(&state, &input)?,
            Commands::Share { map, file } => {
                if !state.maps.contains(&map) {
                    anyhow::bail!("Unbekannte Map: '{}'", map);
                }
                let entries = read_entries(file, &state.registry)?;
                let token = codec::encode_state(&entries, state.options.compression);
                println!("{}", build_share_url(&state.options.share_base_url, &map, &token)?);
            }
            Commands::Routes { action } => routes(&state, action)?,
            Commands::Fixed {
                action: FixedAction::Check { file },
            } => check_fixture(&state.registry, &file)?,
            Commands::Types => list_types(&state.registry),
        }

        Ok(())
    }
}

/// Liest flache JSON-Einträge; ungültige Einträge werden verworfen und gemeldet.
fn read_entries(file: Option<PathBuf>, registry: &MarkerTypeRegistry) -> Result<Vec<StateEntry>> {
    let json = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Datei nicht lesbar: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("stdin nicht lesbar")?;
            buffer
        }
    };
    let decoded = codec::decode_json(&json, registry).context("Eingabe ist kein gueltiger State")?;
    // Koordinaten wie beim Setzen auf der Karte quantisieren
    let mut state = arcmaps_planner::MapState::new();
    state.replace_all(decoded.entries);
    Ok(state.into_entries())
}

fn decode(state: &AppState, input: &str) -> Result<()> {
    let params = parse_url_params(input);
    let token = params.state.as_deref().unwrap_or(input);
    let decoded = codec::try_decode_state(token, &state.registry)
        .context("Token konnte nicht dekodiert werden")?;
    let map = resolve_map(
        &state.maps,
        params.map.as_deref(),
        Some(&decoded),
        state.options.default_map.as_deref(),
    );

    let entries: Value = serde_json::from_str(&entries_to_json(&decoded.entries))?;
    let output = json!({
        "schema": format!("{:?}", decoded.schema),
        "map": map.map(|m| m.id.as_str()),
        "dropped": decoded.dropped,
        "entries": entries,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn routes(state: &AppState, action: RouteAction) -> Result<()> {
    let store: &SavedRouteStore = &state.saved_routes;
    match action {
        RouteAction::List => {
            for route in store.list() {
                println!(
                    "{}\t{}\t{}\t{}",
                    route.id,
                    route.map_id,
                    route.saved_at.to_rfc3339(),
                    route.name
                );
            }
        }
        RouteAction::Save { name, map, file } => {
            if !state.maps.contains(&map) {
                anyhow::bail!("Unbekannte Map: '{}'", map);
            }
            let entries = read_entries(file, &state.registry)?;
            let token = codec::encode_state(&entries, state.options.compression);
            let route = store.save(&name, &map, &token)?;
            println!("{}", route.id);
        }
        RouteAction::Show { id } => {
            let route = store
                .get(&id)
                .with_context(|| format!("Route {} nicht gefunden", id))?;
            let entries = codec::decode_state(&route.state, &state.registry)
                .map(|d| entries_to_json(&d.entries));
            let entries: Value = match entries {
                Some(json) => serde_json::from_str(&json)?,
                None => Value::Null,
            };
            let output = json!({ "route": route, "entries": entries });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        RouteAction::Delete { id } => {
            if !store.delete(&id)? {
                anyhow::bail!("Route {} nicht gefunden", id);
            }
        }
    }
    Ok(())
}

fn check_fixture(registry: &MarkerTypeRegistry, file: &std::path::Path) -> Result<()> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Fixture nicht lesbar: {}", file.display()))?;
    let result = parse_fixture(&json, registry)?;
    println!(
        "{}: {} gueltig, {} verworfen",
        file.display(),
        result.markers.len(),
        result.dropped
    );
    if result.dropped > 0 {
        anyhow::bail!("Fixture enthaelt ungueltige Eintraege");
    }
    Ok(())
}

fn list_types(registry: &MarkerTypeRegistry) {
    for marker_type in registry.iter() {
        println!(
            "{:>3}  {:<16} {:<10} {}{}",
            marker_type.code,
            marker_type.name,
            marker_type.category.as_deref().unwrap_or("-"),
            marker_type.label,
            if marker_type.reserved { "  (reserviert)" } else { "" }
        );
    }
}
