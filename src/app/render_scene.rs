//! Builder für Render-Szenen aus dem AppState.

use crate::app::{AppState, MarkerLayer};
use crate::core::RouteChannel;
use crate::shared::{RenderMarker, RenderRoute, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Ausgeblendete Typen fehlen in der Szene; Routen-Nodes erscheinen nur als Polyline.
pub fn build(state: &AppState) -> RenderScene {
    let view = &state.view;

    let markers = state
        .map_state
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, e)| RouteChannel::from_code(e.type_code).is_none())
        .filter(|(_, e)| view.is_visible(MarkerLayer::User, e.type_code))
        .map(|(index, entry)| RenderMarker {
            index,
            entry: entry.clone(),
        })
        .collect();

    let routes = RouteChannel::ALL
        .into_iter()
        .filter(|channel| view.is_visible(MarkerLayer::User, channel.code()))
        .map(|channel| RenderRoute {
            channel,
            path: state.map_state.route_path(channel),
        })
        .filter(|route| !route.path.is_empty())
        .collect();

    let fixed_markers = state
        .fixed_markers
        .markers()
        .iter()
        .filter(|m| view.is_visible(MarkerLayer::Fixed, m.type_code))
        .copied()
        .collect();

    RenderScene {
        map_id: state.current_map.clone(),
        markers,
        routes,
        fixed_markers,
        legend_open: view.legend_open,
        admin_mode: state.is_admin(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::{AppState, MarkerLayer};
    use crate::core::marker_type::{CUSTOM_CODE, ROUTE1_CODE, ROUTE_CODE};
    use crate::core::{RouteChannel, StateEntry};

    fn populated_state() -> AppState {
        let mut state = AppState::new();
        state.map_state.append(StateEntry::new(CUSTOM_CODE, 1.0, 1.0));
        state.map_state.append(StateEntry::new(ROUTE_CODE, 0.0, 0.0));
        state.map_state.append(StateEntry::new(1, 2.0, 2.0));
        state.map_state.append(StateEntry::new(ROUTE_CODE, 5.0, 5.0));
        state.fixed_markers.add(4, 3.0, 3.0);
        state
    }

    #[test]
    fn build_separates_markers_and_route_paths() {
        let scene = build(&populated_state());

        let indices: Vec<usize> = scene.markers.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(scene.routes.len(), 1);
        assert_eq!(scene.routes[0].channel, RouteChannel::Primary);
        assert_eq!(scene.routes[0].path.len(), 2);
        assert_eq!(scene.fixed_markers.len(), 1);
    }

    #[test]
    fn build_omits_hidden_types() {
        let mut state = populated_state();
        state.view.toggle(MarkerLayer::User, CUSTOM_CODE);
        state.view.toggle(MarkerLayer::User, ROUTE_CODE);
        state.view.toggle(MarkerLayer::Fixed, 4);
        state.map_state.append(StateEntry::new(ROUTE1_CODE, 9.0, 9.0));

        let scene = build(&state);

        assert_eq!(scene.markers.len(), 1);
        assert_eq!(scene.routes.len(), 1);
        assert_eq!(scene.routes[0].channel, RouteChannel::Secondary);
        assert!(scene.fixed_markers.is_empty());
    }

    #[test]
    fn build_filters_user_and_fixed_layers_independently() {
        let mut state = populated_state();
        state.fixed_markers.add(1, 7.0, 7.0);
        state.view.toggle(MarkerLayer::Fixed, 1);

        let scene = build(&state);
        assert!(scene.markers.iter().any(|m| m.entry.type_code == 1));
        assert!(scene.fixed_markers.iter().all(|m| m.type_code != 1));

        state.view.toggle(MarkerLayer::Fixed, 1);
        state.view.toggle(MarkerLayer::User, 1);
        let scene = build(&state);
        assert!(scene.markers.iter().all(|m| m.entry.type_code != 1));
        assert!(scene.fixed_markers.iter().any(|m| m.type_code == 1));
    }
}
