//! ArcMaps-Planner Library.
//! Marker-Typen, State-Container und Wire-Codec für teilbare Karten-Links,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod codec;
pub mod core;
pub mod shared;
pub mod storage;

pub use app::{AppCommand, AppController, AppIntent, AppState, DrawMode, MarkerLayer};
pub use codec::{
    decode_state, encode_state, try_decode_state, Compression, DecodeError, DecodedState,
    WireSchema,
};
pub use core::{
    quantize, FixedMarkerSet, LatLng, MapCatalog, MapState, MarkerTypeRegistry,
    RegistrationError, RouteChannel, SavedRoute, StateEntry,
};
pub use shared::{PlannerOptions, RenderScene};
pub use storage::SavedRouteStore;
