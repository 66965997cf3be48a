//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem Host geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::PlannerOptions;
pub use options::{CONFIG_FILE_NAME, SHARE_BASE_URL};
pub use render_scene::{RenderMarker, RenderRoute, RenderScene};
