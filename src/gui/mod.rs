pub mod ack_overlay;
pub mod app;
pub mod error_modal;
pub mod form_panel;
pub mod game_panel;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::ArcadeApp;
pub use settings::{
    SettingsData,
    SETTINGS_FILE,
};
