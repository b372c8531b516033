//! Opens outbound links through the egui platform integration.

use kibou::LinkOpener;

/// [`LinkOpener`] backed by `egui::Context::open_url`.
pub struct EguiLinkOpener<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiLinkOpener<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl LinkOpener for EguiLinkOpener<'_> {
    fn open_in_new_tab(&mut self, url: &str) {
        tracing::debug!(url, "opening link in new tab");
        self.ctx.open_url(egui::OpenUrl::new_tab(url));
    }
}
