use bestcar_contact::dto::quote_dto::QuoteSubmission;
use bestcar_contact::model::quote::{FieldPatch, QuoteField, QuoteRequest, ServiceType};
use bestcar_contact::util::error::SubmitError;

#[test]
fn test_patch_replaces_single_field() {
    let mut form = QuoteRequest::default();
    form.apply(FieldPatch::Name("Maria".to_string()));
    form.apply(FieldPatch::Phone("11999999999".to_string()));
    form.apply(FieldPatch::Name("Maria Silva".to_string()));

    assert_eq!(form.name, "Maria Silva");
    assert_eq!(form.phone, "11999999999");
    assert_eq!(form.email, "");
    assert_eq!(form.vehicle, "");
    assert_eq!(form.service_type, None);
    assert_eq!(form.message, "");
}

#[test]
fn test_patch_clamps_to_max_length() {
    let mut form = QuoteRequest::default();
    form.apply(FieldPatch::Name("a".repeat(120)));
    assert_eq!(form.name.chars().count(), 100);

    form.apply(FieldPatch::Phone("9".repeat(25)));
    assert_eq!(form.phone.chars().count(), 20);

    form.apply(FieldPatch::Message("m".repeat(1500)));
    assert_eq!(form.message.chars().count(), 1000);
}

#[test]
fn test_clamp_counts_chars_not_bytes() {
    let mut form = QuoteRequest::default();
    form.apply(FieldPatch::Name("ç".repeat(120)));
    assert_eq!(form.name.chars().count(), 100);
}

#[test]
fn test_service_patch_reads_back_as_label() {
    let mut form = QuoteRequest::default();
    assert_eq!(form.field_value(QuoteField::ServiceType), "");

    form.apply(FieldPatch::ServiceType(Some(ServiceType::EngineRebuild)));
    assert_eq!(form.field_value(QuoteField::ServiceType), "Retífica");

    form.apply(FieldPatch::ServiceType(None));
    assert_eq!(form.field_value(QuoteField::ServiceType), "");
}

#[test]
fn test_reset_clears_every_field() {
    let mut form = QuoteRequest::default();
    form.apply(FieldPatch::Name("Maria".to_string()));
    form.apply(FieldPatch::Email("maria@example.com".to_string()));
    form.apply(FieldPatch::ServiceType(Some(ServiceType::Other)));
    form.reset();
    assert_eq!(form, QuoteRequest::default());
}

#[test]
fn test_from_request_trims_and_drops_empty_optionals() {
    let mut form = QuoteRequest::default();
    form.apply(FieldPatch::Name("  Maria Silva  ".to_string()));
    form.apply(FieldPatch::Phone(" 11999999999 ".to_string()));
    form.apply(FieldPatch::Email("   ".to_string()));
    form.apply(FieldPatch::Vehicle(" Civic 2020 ".to_string()));

    let submission = QuoteSubmission::from_request(&form);
    assert_eq!(submission.name, "Maria Silva");
    assert_eq!(submission.phone, "11999999999");
    assert_eq!(submission.email, None);
    assert_eq!(submission.vehicle, Some("Civic 2020".to_string()));
    assert_eq!(submission.message, None);
}

#[test]
fn test_try_from_request_rejects_missing_name() {
    let mut form = QuoteRequest::default();
    form.apply(FieldPatch::Phone("11999999999".to_string()));
    assert_eq!(
        QuoteSubmission::try_from_request(&form),
        Err(SubmitError::MissingRequiredFields)
    );
}

#[test]
fn test_try_from_request_rejects_whitespace_only_phone() {
    let mut form = QuoteRequest::default();
    form.apply(FieldPatch::Name("Maria".to_string()));
    form.apply(FieldPatch::Phone("   ".to_string()));
    assert_eq!(
        QuoteSubmission::try_from_request(&form),
        Err(SubmitError::MissingRequiredFields)
    );
}

#[test]
fn test_try_from_request_accepts_required_only() {
    let mut form = QuoteRequest::default();
    form.apply(FieldPatch::Name("Maria".to_string()));
    form.apply(FieldPatch::Phone("11999999999".to_string()));
    assert!(QuoteSubmission::try_from_request(&form).is_ok());
}

#[test]
fn test_service_type_serializes_as_label() {
    let json = serde_json::to_string(&ServiceType::EngineRebuild).unwrap();
    assert_eq!(json, "\"Retífica\"");

    let parsed: ServiceType = serde_json::from_str("\"Diagnóstico Geral\"").unwrap();
    assert_eq!(parsed, ServiceType::GeneralDiagnostics);
}

#[test]
fn test_service_type_label_round_trip() {
    for service in ServiceType::ALL {
        assert_eq!(ServiceType::from_label(service.label()), Some(service));
    }
    assert_eq!(ServiceType::from_label("Funilaria"), None);
}

#[test]
fn test_required_fields() {
    assert!(QuoteField::Name.is_required());
    assert!(QuoteField::Phone.is_required());
    assert!(!QuoteField::Email.is_required());
    assert!(!QuoteField::Vehicle.is_required());
    assert!(!QuoteField::ServiceType.is_required());
    assert!(!QuoteField::Message.is_required());
}
