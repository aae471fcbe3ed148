//! Timeline Viewer GUI Application
//!
//! Interactive viewer for education/experience timelines built with egui.
//! The viewer features:
//! - Two tracks laid out by the `rtimeline` engine, overlapping entries stacked
//! - Horizontal scrolling canvas with a year axis, scrolled to the latest entry on load
//! - Keyboard navigation (Tab, Enter/Space) and a modal details window
//! - Asynchronous document loading with a loading indicator
//! - Light/Dark themes and the last opened document persisted across sessions

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `domain/` - Layout-to-screen mapping
//! - `presentation/` - Visual styling and color mapping
//! - `io/` - Background document loading
//! - `utils/` - Formatting helpers
//! - `ui/` - UI panel rendering and interaction
//! - `rendering/` - Low-level drawing of items and the time axis
//! - `state/` - Document, selection, theme and canvas state

use anyhow::Result;
use eframe::egui;
use std::path::PathBuf;

mod utils;
mod domain;
mod presentation;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator, SettingsCoordinator};
use io::AsyncLoader;
use rtimeline::LayoutConfig;
use ui::panel_manager::{PanelInteraction, PanelManager};

const LAST_DOCUMENT_KEY: &str = "last_document";

/// Command-line options of the viewer.
#[derive(Default)]
struct Args {
    document: Option<PathBuf>,
    config_file: Option<String>,
}

fn parse_args() -> Result<Args> {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("--config requires a file path argument");
                }
                parsed.config_file = Some(args[i].clone());
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            arg if arg.starts_with('-') => {
                log::warn!("Unknown argument: {}", arg);
            }
            arg => {
                if parsed.document.is_some() {
                    anyhow::bail!("Only one document can be opened, got a second: {}", arg);
                }
                parsed.document = Some(PathBuf::from(arg));
            }
        }
        i += 1;
    }

    Ok(parsed)
}

fn print_help() {
    println!("Timeline Viewer");
    println!("Usage: timeline-gui [DOCUMENT] [--config FILE]");
    println!();
    println!("ARGS:");
    println!("  DOCUMENT           Timeline JSON document (.json or .json.br)");
    println!();
    println!("OPTIONS:");
    println!("  --config <FILE>    Layout configuration JSON (missing fields use defaults)");
    println!("  -h, --help         Print this help message");
}

/// Main application entry point that initializes and launches the timeline viewer.
fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args()?;

    // A broken layout config is reported in the header, not fatal
    let (config, config_error) = match &args.config_file {
        Some(path) => match LayoutConfig::from_file(path) {
            Ok(config) => (config, None),
            Err(e) => {
                log::error!("{:#}", e);
                (LayoutConfig::default(), Some(format!("{:#}", e)))
            }
        },
        None => (LayoutConfig::default(), None),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 520.0])
            .with_title("Timeline Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Timeline Viewer",
        options,
        Box::new(move |cc| {
            Ok(Box::new(TimelineViewerApp::new(cc, args.document, config, config_error)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start viewer: {}", e))
}

/// What to show on the first frame.
enum InitialDocument {
    File(PathBuf),
    Sample,
}

/// The main timeline viewer application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles document loading and item activation
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct TimelineViewerApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous document loader
    loader: AsyncLoader,
    /// Document to load on the first frame
    pending_load: Option<InitialDocument>,
    /// Layout config error, shown once the initial document is in
    config_error: Option<String>,
}

impl TimelineViewerApp {
    /// Creates a new viewer instance with theme and last document loaded from persistent storage.
    ///
    /// A document given on the command line wins over the stored one; with
    /// neither, the built-in sample is shown.
    fn new(
        cc: &eframe::CreationContext,
        document: Option<PathBuf>,
        config: LayoutConfig,
        config_error: Option<String>,
    ) -> Self {
        let current_theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);

        let last_document: Option<PathBuf> =
            SettingsCoordinator::load_setting_or(cc.storage, LAST_DOCUMENT_KEY, None);

        let initial = match document.or_else(|| last_document.filter(|path| path.exists())) {
            Some(path) => InitialDocument::File(path),
            None => InitialDocument::Sample,
        };

        Self {
            state: AppState::with_theme_and_config(current_theme_name, config),
            loader: AsyncLoader::new(),
            pending_load: Some(initial),
            config_error,
        }
    }

    /// Handles panel interactions by delegating to the coordinators.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::OpenSampleRequested => {
                ApplicationCoordinator::open_sample(&mut self.state, &mut self.loader);
            }
            PanelInteraction::ItemActivated(item) => {
                ApplicationCoordinator::handle_item_activated(&mut self.state, item);
            }
            PanelInteraction::DetailsClosed => {
                ApplicationCoordinator::close_details(&mut self.state);
            }
            PanelInteraction::DarkModeToggled(dark) => {
                ThemeCoordinator::set_dark_mode(&mut self.state, dark);
            }
        }
    }

    fn save_preferences(&self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        if let Some(path) = self.state.document.file_path() {
            SettingsCoordinator::save_setting(storage, LAST_DOCUMENT_KEY, path);
        }
    }
}

impl eframe::App for TimelineViewerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.save_preferences(storage);
    }

    /// Main update loop:
    /// 1. Check for async loading completion
    /// 2. Apply theme
    /// 3. Load the initial document (first frame only)
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let loaded = ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Persist preferences after changes (for crash resilience)
        if loaded {
            if let Some(storage) = frame.storage_mut() {
                self.save_preferences(storage);
            }
        }

        match self.pending_load.take() {
            Some(InitialDocument::File(path)) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            Some(InitialDocument::Sample) => {
                ApplicationCoordinator::open_sample(&mut self.state, &mut self.loader);
            }
            None => {}
        }

        // Loading clears the error line, so wait until the initial load is done
        if !self.loader.is_loading() && self.state.error_message.is_none() {
            if let Some(err) = self.config_error.take() {
                self.state.error_message = Some(format!("Using default layout: {}", err));
            }
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            let theme_changed = matches!(interaction, PanelInteraction::DarkModeToggled(_));
            self.handle_panel_interaction(interaction, ctx);

            if theme_changed {
                if let Some(storage) = frame.storage_mut() {
                    ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
                }
            }
        }
    }
}
