//! Application State: zentrale Datenhaltung einer Planer-Sitzung.

mod app_state;
mod editor;
mod view;

pub use app_state::AppState;
pub use editor::{is_custom_code, DrawMode, EditorState};
pub use view::{MarkerLayer, ViewState};
