//! Persistenz außerhalb des Wire-Codecs.

pub mod saved_routes;

pub use saved_routes::SavedRouteStore;
