//! Use-Cases der Application-Layer-Orchestrierung.

pub mod drawing;
pub mod fixed_markers;
pub mod map_select;
pub mod saved_routes;
pub mod sharing;
pub mod visibility;
