use crate::model::quote::{QuoteRequest, ServiceType};
use crate::util::error::SubmitError;
use serde::{Deserialize, Serialize};

use validator::Validate;

/// Trimmed snapshot of the form, taken once at submit time. Optional fields
/// that trim to nothing are dropped here rather than carried as empties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct QuoteSubmission {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 20))]
    pub phone: String,

    #[validate(length(max = 255))]
    pub email: Option<String>,

    #[validate(length(max = 100))]
    pub vehicle: Option<String>,

    pub service_type: Option<ServiceType>,

    #[validate(length(max = 1000))]
    pub message: Option<String>,
}

impl QuoteSubmission {
    pub fn from_request(request: &QuoteRequest) -> Self {
        QuoteSubmission {
            name: request.name.trim().to_string(),
            phone: request.phone.trim().to_string(),
            email: non_empty(&request.email),
            vehicle: non_empty(&request.vehicle),
            service_type: request.service_type,
            message: non_empty(&request.message),
        }
    }

    /// Trim and validate in one step. Failing the required-fields rule is
    /// the only rejection the submit path knows.
    pub fn try_from_request(request: &QuoteRequest) -> Result<Self, SubmitError> {
        let submission = Self::from_request(request);
        submission.validate()?;
        Ok(submission)
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
