//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, timeline, details window, status bar)
//! and turns their interactions into one result for the application.

use std::path::PathBuf;
use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::state::ItemRef;
use crate::ui::{details_window, header, status_bar, timeline_panel};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a file
    OpenFileRequested(PathBuf),
    /// User requested the built-in sample
    OpenSampleRequested,
    /// A timeline item was activated
    ItemActivated(ItemRef),
    /// The details window was dismissed
    DetailsClosed,
    /// Dark mode was switched on or off
    DarkModeToggled(bool),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors = state.theme.colors().clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::OpenSampleRequested => {
                        PanelInteraction::OpenSampleRequested
                    }
                    header::HeaderInteraction::DarkModeToggled(dark) => {
                        PanelInteraction::DarkModeToggled(dark)
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let timeline_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(timeline_frame)
            .show(ctx, |ui| {
                if let Some(timeline_interaction) = timeline_panel::render_timeline_panel(
                    ui,
                    ctx,
                    state,
                    loader,
                    &theme_colors,
                ) {
                    interaction = Some(match timeline_interaction {
                        timeline_panel::TimelinePanelInteraction::ItemActivated(item) => {
                            PanelInteraction::ItemActivated(item)
                        }
                    });
                }
            });

        // Modal on top of everything else
        if let Some(details_window::DetailsInteraction::Closed) =
            details_window::render_details_window(ctx, state, &theme_colors)
        {
            interaction = Some(PanelInteraction::DetailsClosed);
        }

        interaction
    }
}
