//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::DrawMode;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let admin = state.is_admin();
    let draw_mode = state.editor.draw_mode;

    match intent {
        AppIntent::MapClicked { lat, lng } => match draw_mode {
            DrawMode::None => vec![],
            DrawMode::Pin(type_code) if admin => {
                if state.registry.get(type_code).is_some_and(|t| !t.reserved) {
                    vec![AppCommand::PlaceFixedMarker {
                        type_code,
                        lat,
                        lng,
                    }]
                } else {
                    vec![]
                }
            }
            DrawMode::Pin(type_code) => vec![AppCommand::PlaceMarker {
                type_code,
                lat,
                lng,
            }],
            DrawMode::Route(_) if admin => vec![],
            DrawMode::Route(channel) => vec![AppCommand::AppendRouteNode { channel, lat, lng }],
        },
        AppIntent::PinToolToggled { type_code } => {
            let registered = state.registry.contains_code(type_code);
            let is_route = state.registry.route_channel(type_code).is_some();
            if !registered || is_route {
                return vec![];
            }
            let mode = if draw_mode == DrawMode::Pin(type_code) {
                DrawMode::None
            } else {
                DrawMode::Pin(type_code)
            };
            vec![AppCommand::SetDrawMode { mode }]
        }
        AppIntent::RouteToolToggled { channel } => {
            let mode = if draw_mode == DrawMode::Route(channel) {
                DrawMode::None
            } else {
                DrawMode::Route(channel)
            };
            vec![AppCommand::SetDrawMode { mode }]
        }
        AppIntent::MarkerClicked { index } => {
            let clicked_custom = state
                .map_state
                .get(index)
                .is_some_and(|e| super::state::is_custom_code(e.type_code));
            if !admin && draw_mode.is_custom_pin() && clicked_custom {
                vec![AppCommand::RemoveEntry { index }]
            } else {
                vec![]
            }
        }
        AppIntent::DeleteMarkerRequested { index } => vec![AppCommand::RemoveEntry { index }],
        AppIntent::DeleteRouteRequested { channel } => {
            vec![AppCommand::RemoveRouteChannel { channel }]
        }
        AppIntent::UndoRequested if admin => vec![AppCommand::UndoLastFixedMarker],
        AppIntent::UndoRequested => vec![AppCommand::UndoLastEntry],
        AppIntent::NoteEdited { index, text } => vec![AppCommand::SetNote { index, text }],
        AppIntent::ClearRequested => vec![AppCommand::ClearState],
        AppIntent::ShareRequested if admin => {
            log::info!("Teilen ist im Admin-Modus deaktiviert");
            vec![]
        }
        AppIntent::ShareRequested => vec![AppCommand::ShareState],
        AppIntent::UrlOpened { url } => vec![AppCommand::OpenUrl { url }],
        AppIntent::MapSelected { map_id } => vec![AppCommand::SelectMap { map_id }],
        AppIntent::SaveRouteRequested { name } => vec![AppCommand::SaveRoute { name }],
        AppIntent::SavedRouteOpened { id } => vec![AppCommand::LoadSavedRoute { id }],
        AppIntent::SavedRouteDeleteRequested { id } => vec![AppCommand::DeleteSavedRoute { id }],
        AppIntent::LegendToggled => vec![AppCommand::ToggleLegend],
        AppIntent::TypeVisibilityToggled { layer, type_code } => {
            vec![AppCommand::ToggleTypeVisibility { layer, type_code }]
        }
        AppIntent::ShowAllFixedTypesRequested => {
            vec![AppCommand::SetFixedTypesVisible { visible: true }]
        }
        AppIntent::HideAllFixedTypesRequested => {
            vec![AppCommand::SetFixedTypesVisible { visible: false }]
        }
        AppIntent::FixedMarkersExportRequested { dir } if admin => {
            vec![AppCommand::ExportFixedMarkers { dir }]
        }
        AppIntent::FixedMarkersExportRequested { .. } => vec![],
    }
}
