use expbuilder::app::EditorApp;
use expbuilder::cli::EditorArgs;
use expbuilder::{config, logging};

use anyhow::anyhow;
use clap::Parser;
use eframe::egui;
use log::{debug, error, info};

fn main() -> anyhow::Result<()> {
    let args = EditorArgs::parse();

    // Create path configuration from CLI args and environment
    let path_config = config::PathConfig::from_env_and_cli(args.config_dir.clone());
    if let Err(e) = config::ensure_dirs(&path_config) {
        eprintln!("Warning: Failed to create application directories: {:#}", e);
    }

    logging::init(
        args.verbosity,
        args.log_file.as_ref(),
        "expbuilder.log",
        &path_config,
    )?;

    info!("Experiment builder starting...");
    debug!("Command-line args: {:?}", args);

    let settings_path = config::config_file("expbuilder.json", &path_config);
    info!("Config path: {}", settings_path.display());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "Experiment Builder v{} • F1 for help",
                env!("CARGO_PKG_VERSION")
            ))
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 600.0]),
        persist_window: true,
        #[cfg(not(target_arch = "wasm32"))]
        persistence_path: Some(settings_path),
        ..Default::default()
    };

    eframe::run_native(
        "expbuilder",
        native_options,
        Box::new(move |cc| {
            // Load persisted settings if available, otherwise defaults
            let mut app: EditorApp = cc
                .storage
                .and_then(|storage| storage.get_string(eframe::APP_KEY))
                .and_then(|json| serde_json::from_str(&json).ok())
                .unwrap_or_else(|| {
                    info!("No persisted state found, creating default app");
                    EditorApp::default()
                });

            app.path_config = path_config;
            app.show_help = app.settings.show_help;

            // CLI file first, then the last experiment unless --new
            let reopen = if !args.new && app.settings.reopen_last {
                app.settings.last_experiment.clone()
            } else {
                None
            };
            if let Some(path) = args.file_path.clone().or(reopen) {
                info!("Opening {}", path.display());
                if let Err(e) = app.load_experiment(&path) {
                    error!("{:#}", e);
                    app.error_msg = Some(format!("{:#}", e));
                }
            }

            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow!("Editor window error: {}", e))
}
