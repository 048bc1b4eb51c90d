use eframe::egui;
use feedback_arcade::{
    core::AppError,
    gui::{
        ArcadeApp,
        SettingsData,
        SETTINGS_FILE,
    },
    persistence::load_json_or_default,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Feedback Arcade")
            .with_inner_size([960.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Feedback Arcade",
        options,
        Box::new(move |cc| Ok(Box::new(ArcadeApp::new(cc, settings)))),
    )?;

    Ok(())
}
