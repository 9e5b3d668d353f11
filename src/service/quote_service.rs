use tracing::{info, instrument};

use crate::config::ContactConfig;
use crate::dto::quote_dto::QuoteSubmission;
use crate::util::whatsapp::{Navigator, QuoteMessage, WhatsAppLink};

/// Dispatch capability for validated quote submissions.
pub trait QuoteService: Send + Sync {
    /// Compose the WhatsApp message, open the deep link and return it.
    fn dispatch_quote(&self, submission: &QuoteSubmission) -> WhatsAppLink;
}

pub struct WhatsAppQuoteService {
    pub config: ContactConfig,
    navigator: Box<dyn Navigator>,
}

impl WhatsAppQuoteService {
    pub fn new(config: ContactConfig, navigator: Box<dyn Navigator>) -> Self {
        WhatsAppQuoteService { config, navigator }
    }
}

impl QuoteService for WhatsAppQuoteService {
    #[instrument(skip(self, submission))]
    fn dispatch_quote(&self, submission: &QuoteSubmission) -> WhatsAppLink {
        info!("Dispatching quote request to WhatsApp");
        let message = QuoteMessage::from_submission(submission);
        let link = WhatsAppLink::new(&self.config.whatsapp_number, &message);
        // Fire and forget: nothing comes back from the external application.
        self.navigator.open_external(&link.url);
        info!("Quote redirect issued");
        link
    }
}
