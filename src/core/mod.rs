//! Process state and user preferences.

mod state;
pub mod theme;

pub use state::{is_shutdown, register_server, setup_shutdown_handler};
pub use theme::{PreferenceStore, Theme};
