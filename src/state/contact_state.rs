//! Contact section state.

use kibou::{ContactForm, SiteConfig, TiltProfile, TiltSurface};

/// Form fields and the tilts of the contact section.
///
/// Responsibilities:
/// - Holding the editable form between frames
/// - Remembering a validation alert until the user dismisses it
pub struct ContactState {
    form: ContactForm,
    panel_tilt: TiltSurface,
    card_tilts: Vec<TiltSurface>,
    alert: Option<String>,
}

impl ContactState {
    pub fn new(config: &SiteConfig, card_count: usize) -> Self {
        let card_profile = TiltProfile::CONTACT_CARD.with_reset_duration(config.timing.tilt_reset);
        let panel_profile = TiltProfile::CONTACT_PANEL.with_reset_duration(config.timing.tilt_reset);

        Self {
            form: ContactForm::new(),
            panel_tilt: TiltSurface::new(panel_profile),
            card_tilts: (0..card_count).map(|_| TiltSurface::new(card_profile)).collect(),
            alert: None,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn panel_tilt(&self) -> &TiltSurface {
        &self.panel_tilt
    }

    pub fn panel_tilt_mut(&mut self) -> &mut TiltSurface {
        &mut self.panel_tilt
    }

    pub fn card_tilt(&self, index: usize) -> Option<&TiltSurface> {
        self.card_tilts.get(index)
    }

    pub fn card_tilt_mut(&mut self, index: usize) -> Option<&mut TiltSurface> {
        self.card_tilts.get_mut(index)
    }

    // ===== Alert =====

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn raise_alert(&mut self, message: String) {
        self.alert = Some(message);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn tick(&mut self, now: f64) {
        self.panel_tilt.tick(now);
        for tilt in &mut self.card_tilts {
            tilt.tick(now);
        }
    }

    pub fn next_wakeup(&self, now: f64) -> Option<f64> {
        std::iter::once(&self.panel_tilt)
            .chain(&self.card_tilts)
            .filter_map(|t| t.next_wakeup(now))
            .reduce(f64::min)
    }
}
