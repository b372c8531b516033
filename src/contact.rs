//! Contact form and the outbound messaging link.
//!
//! Submitting the form does not talk to any server. It builds a WhatsApp
//! deep link carrying the message as percent-encoded text and hands it to a
//! [`LinkOpener`], which in the app opens a new browser tab.

use crate::error::{Result, SiteError};

const MESSAGE_HEADER: &str = "*PESAN BARU DARI WEBSITE*";
const MESSAGE_FOOTER: &str = "Dikirim melalui website contact form";
const EMPTY_ADDRESS: &str = "Tidak diisi";

/// Opens an external link in a new browsing context.
pub trait LinkOpener {
    fn open_in_new_tab(&mut self, url: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Nama,
    Email,
    Alamat,
    Pesan,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Nama,
        ContactField::Email,
        ContactField::Alamat,
        ContactField::Pesan,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Nama => "Nama Lengkap",
            ContactField::Email => "Email",
            ContactField::Alamat => "Alamat",
            ContactField::Pesan => "Pesan",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Nama => "Masukkan nama lengkap",
            ContactField::Email => "contoh@email.com",
            ContactField::Alamat => "Masukkan alamat",
            ContactField::Pesan => "Ceritakan kebutuhan atau pertanyaan",
        }
    }

    /// Fields that must be non-empty for a submission to go out.
    pub fn is_required(self) -> bool {
        !matches!(self, ContactField::Alamat)
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, ContactField::Pesan)
    }
}

/// Free-text fields of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub nama: String,
    pub email: String,
    pub alamat: String,
    pub pesan: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Nama => &self.nama,
            ContactField::Email => &self.email,
            ContactField::Alamat => &self.alamat,
            ContactField::Pesan => &self.pesan,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Nama => &mut self.nama,
            ContactField::Email => &mut self.email,
            ContactField::Alamat => &mut self.alamat,
            ContactField::Pesan => &mut self.pesan,
        }
    }

    /// Checks that every required field is present. Content is not inspected.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<ContactField> = ContactField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.field(*f).is_empty())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(SiteError::IncompleteContactForm { missing })
        }
    }

    /// The text block sent as the message body.
    pub fn compose_message(&self) -> String {
        let alamat = if self.alamat.is_empty() {
            EMPTY_ADDRESS
        } else {
            &self.alamat
        };

        format!(
            "{MESSAGE_HEADER}\n\n\
             📝 *Nama:* {}\n\
             📧 *Email:* {}\n\
             📍 *Alamat:* {}\n\n\
             💬 *Pesan:*\n\
             {}\n\n\
             ---\n\
             {MESSAGE_FOOTER}",
            self.nama, self.email, alamat, self.pesan
        )
    }

    /// Deep link that opens a chat with `number` prefilled with the message.
    pub fn outbound_url(&self, number: &str) -> String {
        whatsapp_url(number, Some(&self.compose_message()))
    }

    /// Validates, opens the outbound link once and clears the form.
    ///
    /// On validation failure nothing is opened and the fields are kept.
    pub fn submit(&mut self, number: &str, opener: &mut dyn LinkOpener) -> Result<String> {
        if let Err(err) = self.validate() {
            tracing::warn!(error = %err, "contact form rejected");
            return Err(err);
        }

        let url = self.outbound_url(number);
        opener.open_in_new_tab(&url);
        tracing::info!(number, "contact message handed to messaging link");

        self.clear();
        Ok(url)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// `https://wa.me/<number>`, with an optional prefilled text.
pub fn whatsapp_url(number: &str, text: Option<&str>) -> String {
    match text {
        Some(text) => format!("https://wa.me/{number}?text={}", urlencoding::encode(text)),
        None => format!("https://wa.me/{number}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingOpener {
        opened: Vec<String>,
    }

    impl LinkOpener for RecordingOpener {
        fn open_in_new_tab(&mut self, url: &str) {
            self.opened.push(url.to_string());
        }
    }

    fn filled() -> ContactForm {
        ContactForm {
            nama: "Budi".to_string(),
            email: "budi@example.com".to_string(),
            alamat: String::new(),
            pesan: "Halo".to_string(),
        }
    }

    #[test]
    fn address_is_optional() {
        assert!(filled().validate().is_ok());
        assert!(!ContactField::Alamat.is_required());
    }

    #[test]
    fn missing_fields_are_reported_in_form_order() {
        let form = ContactForm {
            email: "x@y.com".to_string(),
            ..ContactForm::default()
        };
        match form.validate() {
            Err(SiteError::IncompleteContactForm { missing }) => {
                assert_eq!(missing, vec![ContactField::Nama, ContactField::Pesan]);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn empty_address_falls_back_in_message() {
        let message = filled().compose_message();
        assert!(message.starts_with("*PESAN BARU DARI WEBSITE*\n\n"));
        assert!(message.contains("📍 *Alamat:* Tidak diisi\n"));
        assert!(message.contains("💬 *Pesan:*\nHalo\n\n---\n"));
        assert!(message.ends_with("Dikirim melalui website contact form"));
    }

    #[test]
    fn submit_opens_once_and_clears() {
        let mut form = filled();
        let mut opener = RecordingOpener::default();

        let url = form.submit("6281325835578", &mut opener).unwrap();

        assert_eq!(opener.opened, vec![url.clone()]);
        assert!(url.starts_with("https://wa.me/6281325835578?text="));
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn rejected_submit_keeps_fields() {
        let mut form = ContactForm {
            pesan: "hi".to_string(),
            ..ContactForm::default()
        };
        let mut opener = RecordingOpener::default();

        assert!(form.submit("1", &mut opener).is_err());
        assert!(opener.opened.is_empty());
        assert_eq!(form.pesan, "hi");
    }

    #[test]
    fn plain_link_has_no_query() {
        assert_eq!(whatsapp_url("62", None), "https://wa.me/62");
    }
}
