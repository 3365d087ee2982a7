mod app;
mod config;
mod game;
mod load;
mod nsave;
mod paths;
mod util;

use crate::app::NsaveApp;
use crate::util::expand_path;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    let mut saves_override = None;
    if let Some(saves_index) = args.iter().position(|arg| arg == "--saves") {
        if let Some(next_arg) = args.get(saves_index + 1) {
            saves_override = Some(expand_path(next_arg));
        } else {
            eprintln!("{}", USAGE_TEXT);
            std::process::exit(1);
        }
    }

    let fullscreen = args.iter().any(|arg| arg == "--fullscreen");

    let app = NsaveApp::new(saves_override);
    if let Err(e) = std::fs::create_dir_all(&app.saves_dir) {
        log::warn!(
            "Failed to create saves directory {}: {}",
            app.saves_dir.display(),
            e
        );
    }

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([800.0, 500.0])
            .with_min_inner_size([480.0, 360.0])
            .with_fullscreen(fullscreen),
        ..Default::default()
    };

    log::info!("Starting eframe app...");

    eframe::run_native(
        "nsave",
        options,
        Box::new(|_cc| Ok(Box::<NsaveApp>::new(app))),
    )
}

static USAGE_TEXT: &str = r#"
Usage: nsave [OPTIONS]

Options:
    --saves <dir>         Read saves from <dir> instead of the configured saves directory
    --fullscreen          Start the GUI in fullscreen mode
    --help                Show this message
"#;
