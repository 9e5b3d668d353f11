use std::sync::{Arc, Mutex};

use bestcar_contact::config::ContactConfig;
use bestcar_contact::dto::quote_dto::QuoteSubmission;
use bestcar_contact::service::quote_service::{QuoteService, WhatsAppQuoteService};
use bestcar_contact::util::whatsapp::Navigator;

/// Records constructed URLs instead of performing real navigation.
#[derive(Clone, Default)]
struct RecordingNavigator {
    opened: Arc<Mutex<Vec<String>>>,
}

impl Navigator for RecordingNavigator {
    fn open_external(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}

fn submission() -> QuoteSubmission {
    QuoteSubmission {
        name: "Maria Silva".to_string(),
        phone: "(11) 98888-7777".to_string(),
        email: None,
        vehicle: None,
        service_type: None,
        message: None,
    }
}

#[test]
fn test_dispatch_opens_the_returned_link() {
    let navigator = RecordingNavigator::default();
    let service = WhatsAppQuoteService::new(ContactConfig::default(), Box::new(navigator.clone()));

    let link = service.dispatch_quote(&submission());

    let opened = navigator.opened.lock().unwrap();
    assert_eq!(opened.len(), 1);
    assert_eq!(opened[0], link.url);
}

#[test]
fn test_link_targets_configured_number() {
    let config = ContactConfig {
        whatsapp_number: "5511900001111".to_string(),
        ..ContactConfig::default()
    };
    let navigator = RecordingNavigator::default();
    let service = WhatsAppQuoteService::new(config, Box::new(navigator));

    let link = service.dispatch_quote(&submission());
    assert!(link.url.starts_with("https://wa.me/5511900001111?text="));
}

#[test]
fn test_default_config_targets_shop_number() {
    let navigator = RecordingNavigator::default();
    let service = WhatsAppQuoteService::new(ContactConfig::default(), Box::new(navigator));

    let link = service.dispatch_quote(&submission());
    assert!(link.url.starts_with("https://wa.me/5511977035404?text="));
}
