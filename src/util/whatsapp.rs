use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::{debug, warn};

use crate::dto::quote_dto::QuoteSubmission;

/// Title line of every quote message.
pub const QUOTE_TITLE: &str = "Solicitação de Orçamento";

/// Characters escaped when embedding text in the wa.me query string. This is
/// the encodeURIComponent set, so the WhatsApp bold markers (`*`) stay
/// literal in the encoded URL.
const WA_TEXT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode text for use as the wa.me `text` query parameter.
pub fn encode_text(text: &str) -> String {
    utf8_percent_encode(text, WA_TEXT).to_string()
}

/// The WhatsApp quote message composed from a validated submission.
///
/// Line order is fixed: title, name, phone, then email, vehicle and service
/// when present, then the free-text block preceded by a blank line. Absent
/// fields are skipped without leaving separators behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteMessage {
    text: String,
}

impl QuoteMessage {
    pub fn from_submission(submission: &QuoteSubmission) -> Self {
        let mut text = format!("*{}*\n\n", QUOTE_TITLE);
        text.push_str(&format!("*Nome:* {}\n", submission.name));
        text.push_str(&format!("*Telefone:* {}\n", submission.phone));
        if let Some(email) = &submission.email {
            text.push_str(&format!("*Email:* {}\n", email));
        }
        if let Some(vehicle) = &submission.vehicle {
            text.push_str(&format!("*Veículo:* {}\n", vehicle));
        }
        if let Some(service) = submission.service_type {
            text.push_str(&format!("*Serviço:* {}\n", service.label()));
        }
        if let Some(message) = &submission.message {
            text.push_str(&format!("\n*Mensagem:*\n{}", message));
        }
        QuoteMessage { text }
    }

    /// The message as WhatsApp renders it after decoding.
    pub fn as_text(&self) -> &str {
        &self.text
    }

    /// The message percent-encoded for the wa.me query string.
    pub fn encoded(&self) -> String {
        encode_text(&self.text)
    }
}

/// The composed deep link handed to the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppLink {
    pub url: String,
}

impl WhatsAppLink {
    pub fn new(number: &str, message: &QuoteMessage) -> Self {
        WhatsAppLink {
            url: format!("https://wa.me/{}?text={}", number, message.encoded()),
        }
    }
}

/// External-navigation capability. Implementations open the URL in an
/// independent context; nothing about the outcome is reported back.
pub trait Navigator: Send + Sync {
    fn open_external(&self, url: &str);
}

/// Navigator backed by the platform browser opener. The open call is
/// detached; a spawn failure is logged and otherwise ignored.
pub struct SystemNavigator;

impl Navigator for SystemNavigator {
    fn open_external(&self, url: &str) {
        debug!("Opening external link");
        if let Err(e) = open::that_detached(url) {
            warn!("Failed to hand off external link: {}", e);
        }
    }
}
