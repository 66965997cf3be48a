//! Core-Domänentypen: Marker-Typen, Koordinaten, State-Container, Maps, feste Marker.

pub mod coords;
pub mod fixed_markers;
pub mod map_catalog;
pub mod map_state;
pub mod marker_type;
pub mod saved_route;
pub mod state_entry;

pub use coords::{quantize, LatLng};
pub use fixed_markers::{parse_fixture, FixedMarker, FixedMarkerSet, FixtureParseResult};
pub use map_catalog::{MapCatalog, MapDefinition};
pub use map_state::MapState;
pub use marker_type::{
    CatalogLoadReport, MarkerCategory, MarkerType, MarkerTypeMeta, MarkerTypeRegistry,
    RegistrationError, RouteChannel,
};
pub use saved_route::SavedRoute;
pub use state_entry::StateEntry;
