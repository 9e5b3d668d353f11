use std::sync::Arc;

use tracing::{info, warn};

use crate::dto::quote_dto::QuoteSubmission;
use crate::model::quote::{FieldPatch, QuoteField, QuoteRequest};
use crate::service::quote_service::QuoteService;
use crate::util::error::SubmitError;
use crate::util::notify::{Notification, NotificationSink};
use crate::util::whatsapp::WhatsAppLink;

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; the form is left untouched.
    Rejected(SubmitError),
    /// The WhatsApp redirect was issued and the form was reset.
    Redirected(WhatsAppLink),
}

/// Owns the quote form state and runs the submit sequence.
pub struct QuoteFormHandler {
    form: QuoteRequest,
    submitting: bool,
    service: Arc<dyn QuoteService>,
    notifier: Arc<dyn NotificationSink>,
}

impl QuoteFormHandler {
    pub fn new(service: Arc<dyn QuoteService>, notifier: Arc<dyn NotificationSink>) -> Self {
        QuoteFormHandler {
            form: QuoteRequest::default(),
            submitting: false,
            service,
            notifier,
        }
    }

    pub fn form(&self) -> &QuoteRequest {
        &self.form
    }

    pub fn field_value(&self, field: QuoteField) -> &str {
        self.form.field_value(field)
    }

    /// True while a submission is being processed; drives the submit
    /// control's disabled state and label.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Apply one field mutation, leaving every other field untouched.
    pub fn handle_field_change(&mut self, patch: FieldPatch) {
        self.form.apply(patch);
    }

    /// Run one full submission: validate, compose, redirect, notify, reset.
    /// Every submission starts from scratch; nothing carries over.
    pub fn handle_submit(&mut self) -> SubmitOutcome {
        info!("Quote form submitted");

        let submission = match QuoteSubmission::try_from_request(&self.form) {
            Ok(submission) => submission,
            Err(err) => {
                warn!("Quote submission rejected: {}", err);
                self.notifier.notify(Notification::required_fields());
                return SubmitOutcome::Rejected(err);
            }
        };

        self.submitting = true;
        let link = self.service.dispatch_quote(&submission);
        self.notifier.notify(Notification::redirecting());
        self.submitting = false;
        self.form.reset();

        SubmitOutcome::Redirected(link)
    }
}
