//! Page orchestration and layout management.
//!
//! Lays out the header and the scrolling page of sections, and collects
//! every interaction the sections report so the application coordinator can
//! apply them after drawing.

use eframe::egui;

use crate::app::{AppState, SurfaceId, ThemeCoordinator};
use crate::state::Section;
use crate::ui::{
    about_section, alert, contact_section, gallery_section, header, hero, program_section,
    story_section,
};

const MAX_CONTENT_WIDTH: f32 = 1200.0;

/// Pointer activity over a hover-driven surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The pointer is over `rect` at `pointer`
    Moved { rect: egui::Rect, pointer: egui::Pos2 },
    /// The pointer left the surface
    Left,
}

/// Result of page interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum PageInteraction {
    /// Scroll the page to a section
    NavigateTo(Section),
    CarouselNext,
    CarouselPrev,
    CarouselGoTo(usize),
    /// Pointer entered (`true`) or left (`false`) the carousel
    CarouselHover(bool),
    BookNext,
    BookPrev,
    BookGoTo(usize),
    /// Pointer entered (`true`) or left (`false`) the book
    BookHover(bool),
    Tilt {
        surface: SurfaceId,
        event: PointerEvent,
    },
    /// Badge spotlight on a gallery tile
    Spotlight {
        tile: usize,
        event: PointerEvent,
    },
    /// A contact card with a link was clicked
    OpenLink(String),
    SubmitContact,
    DismissAlert,
}

/// Manages the layout and rendering of the page.
pub struct PanelManager;

impl PanelManager {
    /// Renders the header, every section and the alert, if any.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        now: f64,
    ) -> Vec<PageInteraction> {
        let mut interactions = Vec::new();
        let colors = ThemeCoordinator::colors();

        state.layout.update_width(ctx.content_rect().width());

        let header_frame = egui::Frame::default()
            .inner_margin(egui::Margin::symmetric(16, 10))
            .fill(colors.extreme_background);

        egui::TopBottomPanel::top("header")
            .frame(header_frame)
            .show(ctx, |ui| {
                if let Some(section) = header::render_header(ui, &state.content.brand, colors) {
                    interactions.push(PageInteraction::NavigateTo(section));
                }
            });

        let page_frame = egui::Frame::default().fill(colors.background);

        egui::CentralPanel::default()
            .frame(page_frame)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let gutter = state.layout.breakpoint().gutter();

                        for section in Section::ALL {
                            let rect = centered_column(ui, gutter, |ui| {
                                Self::render_section(ui, section, state, now, &mut interactions);
                            });

                            if state.layout.take_scroll_target(section) {
                                ui.scroll_to_rect(rect, Some(egui::Align::TOP));
                            }
                            ui.add_space(gutter * 3.0);
                        }
                    });
            });

        if let Some(message) = state.contact.alert() {
            if alert::render_alert(ctx, message, colors) {
                interactions.push(PageInteraction::DismissAlert);
            }
        }

        interactions
    }

    fn render_section(
        ui: &mut egui::Ui,
        section: Section,
        state: &mut AppState,
        now: f64,
        interactions: &mut Vec<PageInteraction>,
    ) {
        let colors = ThemeCoordinator::colors();
        let breakpoint = state.layout.breakpoint();

        match section {
            Section::Home => {
                if let Some(target) = hero::render_hero(ui, &state.content.hero, breakpoint, colors) {
                    interactions.push(PageInteraction::NavigateTo(target));
                }
            }
            Section::About => {
                about_section::render_about(ui, &state.content.about, breakpoint, colors);
            }
            Section::Program => {
                program_section::render_programs(ui, state, now, colors, interactions);
            }
            Section::Story => {
                story_section::render_story(ui, state, now, colors, interactions);
            }
            Section::Gallery => {
                gallery_section::render_gallery(ui, state, now, colors, interactions);
            }
            Section::Contact => {
                contact_section::render_contact(ui, state, now, colors, interactions);
            }
        }
    }
}

/// Lays out `add_contents` in a column no wider than the page maximum,
/// centered horizontally. Returns the column's rectangle.
fn centered_column(ui: &mut egui::Ui, gutter: f32, add_contents: impl FnOnce(&mut egui::Ui)) -> egui::Rect {
    let full_width = ui.available_width();
    let width = (full_width - gutter * 2.0).min(MAX_CONTENT_WIDTH).max(0.0);
    let margin = ((full_width - width) / 2.0).max(0.0);

    let spacing = ui.spacing().item_spacing;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing = spacing;
            ui.set_width(width);
            add_contents(ui);
        })
        .response
        .rect
    })
    .inner
}
