use std::sync::Arc;

use bestcar_contact::config::ContactConfig;
use bestcar_contact::handler::form_handler::{QuoteFormHandler, SubmitOutcome};
use bestcar_contact::model::quote::{FieldPatch, ServiceType};
use bestcar_contact::service::quote_service::WhatsAppQuoteService;
use bestcar_contact::util::logger;
use bestcar_contact::util::notify::TracingNotifier;
use bestcar_contact::util::whatsapp::Navigator;
use tracing::{info, warn};

/// Prints the composed link instead of opening a browser.
struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn open_external(&self, url: &str) {
        println!("wa.me link: {}", url);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_logging();

    info!("Starting quote link demo");

    let config = ContactConfig::from_env()?;
    info!("Quotes will target {}", config.display_phone);

    let service = WhatsAppQuoteService::new(config, Box::new(PrintNavigator));
    let mut handler = QuoteFormHandler::new(Arc::new(service), Arc::new(TracingNotifier));

    handler.handle_field_change(FieldPatch::Name("Maria Silva".to_string()));
    handler.handle_field_change(FieldPatch::Phone("(11) 98888-7777".to_string()));
    handler.handle_field_change(FieldPatch::Vehicle("Civic 2020".to_string()));
    handler.handle_field_change(FieldPatch::ServiceType(Some(ServiceType::EngineRebuild)));
    handler.handle_field_change(FieldPatch::Message(
        "Gostaria de um orçamento para retífica completa.".to_string(),
    ));

    match handler.handle_submit() {
        SubmitOutcome::Redirected(link) => info!("Redirect issued: {}", link.url),
        SubmitOutcome::Rejected(err) => warn!("Submission rejected: {}", err),
    }

    Ok(())
}
