//! LPK Kibou Genius site
//!
//! A single-window rendition of the institute's landing page using egui.
//! The page scrolls through hero, about, program carousel, story book,
//! gallery and contact sections, with pointer-driven 3D tilt, snowfall,
//! autoplaying carousels and a page-flip book.
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and the coordinators that mutate it
//! - `state/` - Focused state components per page area
//! - `presentation/` - Text styling for marked-up titles
//! - `io/` - Startup file loading and outbound links
//! - `ui/` - Page sections, pointer tracking and the panel manager
//! - `rendering/` - Low-level painting for gradients, tilted cards, the book and snow

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod io;
mod presentation;
mod rendering;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use kibou::{SiteConfig, SiteContent};
use ui::panel_manager::PanelManager;

#[derive(Parser, Debug)]
#[command(author, version, about = "LPK Kibou Genius landing page", long_about = None)]
struct Cli {
    /// JSON file overriding timings, contact number and snowfall density.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file replacing the built-in site copy.
    #[arg(long)]
    content: Option<PathBuf>,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

/// Parses arguments, loads inputs and launches the site window.
fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = io::load_config(cli.config.as_deref())?;
    let content = io::load_content(cli.content.as_deref())?;

    // Fail before opening a window if a slide set would be empty.
    content.program_slides().context("site content has no program slides")?;
    content.story_slides().context("site content has no story pages")?;

    tracing::info!(
        programs = content.programs.len(),
        pages = content.story_pages.len(),
        "starting site"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("LPK Kibou Genius"),
        ..Default::default()
    };

    eframe::run_native(
        "LPK Kibou Genius",
        options,
        Box::new(move |cc| Ok(Box::new(KibouSiteApp::new(cc, config, content)?))),
    )
    .map_err(|e| anyhow::anyhow!("site window failed: {e}"))
}

/// The site application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` ticks timers and applies interactions
/// - `ThemeCoordinator` applies the palette
/// - `PanelManager` lays out and renders the page
struct KibouSiteApp {
    state: AppState,
}

impl KibouSiteApp {
    fn new(cc: &eframe::CreationContext, config: SiteConfig, content: SiteContent) -> kibou::Result<Self> {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let now = cc.egui_ctx.input(|i| i.time);
        Ok(Self {
            state: AppState::new(config, content, now)?,
        })
    }
}

impl eframe::App for KibouSiteApp {
    /// Main update loop.
    ///
    /// 1. Advance widget timers to the frame time
    /// 2. Apply theme
    /// 3. Render the page via PanelManager
    /// 4. Apply the interactions it reported
    /// 5. Schedule the next repaint
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        ApplicationCoordinator::advance(&mut self.state, now);
        ThemeCoordinator::apply_current_theme(ctx);

        for interaction in PanelManager::render_all_panels(ctx, &mut self.state, now) {
            ApplicationCoordinator::handle_interaction(&mut self.state, interaction, ctx, now);
        }

        ApplicationCoordinator::schedule_repaint(ctx, &self.state, now);
    }
}
