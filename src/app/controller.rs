//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeichnen ===
            AppCommand::SetDrawMode { mode } => handlers::drawing::set_draw_mode(state, mode),
            AppCommand::PlaceMarker {
                type_code,
                lat,
                lng,
            } => handlers::drawing::place_marker(state, type_code, lat, lng)?,
            AppCommand::AppendRouteNode { channel, lat, lng } => {
                handlers::drawing::append_route_node(state, channel, lat, lng)
            }
            AppCommand::RemoveEntry { index } => handlers::drawing::remove_entry(state, index),
            AppCommand::RemoveRouteChannel { channel } => {
                handlers::drawing::remove_route_channel(state, channel)
            }
            AppCommand::UndoLastEntry => handlers::drawing::undo_last_entry(state),
            AppCommand::SetNote { index, text } => {
                handlers::drawing::set_note(state, index, &text)
            }
            AppCommand::ClearState => handlers::drawing::clear_state(state),

            // === Teilen & Maps ===
            AppCommand::ShareState => handlers::sharing::share(state)?,
            AppCommand::OpenUrl { url } => handlers::sharing::open_url(state, &url),
            AppCommand::SelectMap { map_id } => handlers::sharing::select_map(state, &map_id)?,

            // === Gespeicherte Routen ===
            AppCommand::SaveRoute { name } => handlers::saved_routes::save(state, &name)?,
            AppCommand::LoadSavedRoute { id } => handlers::saved_routes::load(state, &id)?,
            AppCommand::DeleteSavedRoute { id } => handlers::saved_routes::delete(state, &id)?,

            // === Ansicht ===
            AppCommand::ToggleLegend => handlers::view::toggle_legend(state),
            AppCommand::ToggleTypeVisibility { layer, type_code } => {
                handlers::view::toggle_type_visibility(state, layer, type_code)
            }
            AppCommand::SetFixedTypesVisible { visible } => {
                handlers::view::set_fixed_types_visible(state, visible)
            }

            // === Admin ===
            AppCommand::PlaceFixedMarker {
                type_code,
                lat,
                lng,
            } => handlers::admin::place_fixed_marker(state, type_code, lat, lng)?,
            AppCommand::UndoLastFixedMarker => handlers::admin::undo_last_fixed_marker(state),
            AppCommand::ExportFixedMarkers { dir } => handlers::admin::export(state, &dir)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene für den Host.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
