//! Application-level coordination and workflow management.
//!
//! Advances every widget with the frame time, applies the interactions the
//! panels report and asks egui for the next repaint.

use std::time::Duration;

use kibou::{BookEvent, FlipOutcome, LinkOpener};

use crate::app::{AppState, SurfaceId};
use crate::io::EguiLinkOpener;
use crate::ui::panel_manager::{PageInteraction, PointerEvent};

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Ticking widget timers once per frame
/// - Routing panel interactions to the state component they target
/// - Submitting the contact form and surfacing validation alerts
/// - Scheduling the next repaint from pending deadlines
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Advances all timers to `now`.
    ///
    /// Called once per frame before any panel is drawn.
    pub fn advance(state: &mut AppState, now: f64) {
        state.showcase.tick(now);
        state.gallery.tick(now);
        state.contact.tick(now);

        match state.story.tick(now) {
            Some(BookEvent::Committed { page }) => {
                tracing::trace!(page, "story page shown");
            }
            Some(BookEvent::Autoplayed(FlipOutcome::Ignored(reason))) => {
                tracing::trace!(?reason, "book autoplay skipped");
            }
            Some(BookEvent::Autoplayed(FlipOutcome::Started { .. })) | None => {}
        }
    }

    /// Applies one interaction reported by the panels.
    pub fn handle_interaction(
        state: &mut AppState,
        interaction: PageInteraction,
        ctx: &egui::Context,
        now: f64,
    ) {
        match interaction {
            PageInteraction::NavigateTo(section) => {
                state.layout.request_scroll(section);
            }
            PageInteraction::CarouselNext => state.showcase.carousel_mut().next(now),
            PageInteraction::CarouselPrev => state.showcase.carousel_mut().prev(now),
            PageInteraction::CarouselGoTo(index) => state.showcase.carousel_mut().go_to(index, now),
            PageInteraction::CarouselHover(true) => state.showcase.carousel_mut().hover_enter(),
            PageInteraction::CarouselHover(false) => state.showcase.carousel_mut().hover_leave(now),
            PageInteraction::BookNext => {
                let outcome = state.story.book_mut().next(now);
                tracing::debug!(?outcome, "book next");
            }
            PageInteraction::BookPrev => {
                let outcome = state.story.book_mut().prev(now);
                tracing::debug!(?outcome, "book prev");
            }
            PageInteraction::BookGoTo(index) => {
                let outcome = state.story.book_mut().go_to(index, now);
                tracing::debug!(index, ?outcome, "book page indicator");
            }
            PageInteraction::BookHover(true) => state.story.book_mut().hover_enter(),
            PageInteraction::BookHover(false) => state.story.book_mut().hover_leave(now),
            PageInteraction::Tilt { surface, event } => {
                Self::handle_tilt(state, surface, event, now);
            }
            PageInteraction::Spotlight { tile, event } => {
                if let Some(spotlight) = state.gallery.spotlight_mut(tile) {
                    match event {
                        PointerEvent::Moved { rect, pointer } => {
                            spotlight.pointer_entered();
                            spotlight.pointer_moved(rect, pointer);
                        }
                        PointerEvent::Left => spotlight.pointer_left(),
                    }
                }
            }
            PageInteraction::OpenLink(url) => {
                EguiLinkOpener::new(ctx).open_in_new_tab(&url);
            }
            PageInteraction::SubmitContact => {
                Self::submit_contact(state, &mut EguiLinkOpener::new(ctx));
            }
            PageInteraction::DismissAlert => state.contact.dismiss_alert(),
        }
    }

    fn handle_tilt(state: &mut AppState, surface: SurfaceId, event: PointerEvent, now: f64) {
        match (surface, event) {
            // The book resets on leave even while a flip blocks tracking.
            (SurfaceId::Book, PointerEvent::Left) => state.story.tilt_left(now),
            (surface, PointerEvent::Left) => {
                if let Some(tilt) = state.tilt_mut(surface) {
                    tilt.pointer_left(now);
                }
            }
            (surface, PointerEvent::Moved { rect, pointer }) => {
                if let Some(tilt) = state.tilt_mut(surface) {
                    tilt.pointer_moved(rect, pointer);
                }
            }
        }
    }

    /// Sends the contact form, or raises the validation alert.
    pub fn submit_contact(state: &mut AppState, opener: &mut dyn LinkOpener) {
        let number = &state.config.contact.whatsapp_number;
        if let Err(err) = state.contact.form_mut().submit(number, opener) {
            state.contact.raise_alert(err.to_string());
        }
    }

    /// Requests a repaint at the earliest pending deadline.
    ///
    /// A deadline too far away to express as a `Duration` requests nothing;
    /// the next input event repaints anyway.
    pub fn schedule_repaint(ctx: &egui::Context, state: &AppState, now: f64) {
        let Some(due) = state.next_wakeup(now) else {
            return;
        };
        match Duration::try_from_secs_f64((due - now).max(0.0)) {
            Ok(delay) => ctx.request_repaint_after(delay),
            Err(err) => tracing::warn!(due, now, error = %err, "wake-up out of range, no repaint scheduled"),
        }
    }
}
