use dash_forge::gui::DashForgeApp;
use dash_forge::logging;
use dash_forge::settings::Settings;

use eframe::egui;

const SETTINGS_FILE: &str = "settings.json";

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    logging::init(settings.debug_logging, settings.log_path());
    tracing::info!(settings = SETTINGS_FILE, "starting dashboard generator");

    let (w, h) = settings.window_size();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([w, h])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Dashboard Generator"),
        ..Default::default()
    };

    eframe::run_native(
        "Dashboard Generator",
        native_options,
        Box::new(move |_cc| Box::new(DashForgeApp::new(&settings, SETTINGS_FILE))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start ui: {e}"))?;
    Ok(())
}
