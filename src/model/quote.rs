use serde::{Deserialize, Serialize};

/// The seven fixed service labels offered on the quote form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "Preparação de Motor")]
    EnginePreparation,
    #[serde(rename = "Retífica")]
    EngineRebuild,
    #[serde(rename = "Suspensão Esportiva")]
    SportSuspension,
    #[serde(rename = "Injeção Eletrônica")]
    ElectronicInjection,
    #[serde(rename = "Manutenção Preventiva")]
    PreventiveMaintenance,
    #[serde(rename = "Diagnóstico Geral")]
    GeneralDiagnostics,
    #[serde(rename = "Outro")]
    Other,
}

impl ServiceType {
    pub const ALL: [ServiceType; 7] = [
        ServiceType::EnginePreparation,
        ServiceType::EngineRebuild,
        ServiceType::SportSuspension,
        ServiceType::ElectronicInjection,
        ServiceType::PreventiveMaintenance,
        ServiceType::GeneralDiagnostics,
        ServiceType::Other,
    ];

    /// The label shown on the form and sent in the message.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::EnginePreparation => "Preparação de Motor",
            ServiceType::EngineRebuild => "Retífica",
            ServiceType::SportSuspension => "Suspensão Esportiva",
            ServiceType::ElectronicInjection => "Injeção Eletrônica",
            ServiceType::PreventiveMaintenance => "Manutenção Preventiva",
            ServiceType::GeneralDiagnostics => "Diagnóstico Geral",
            ServiceType::Other => "Outro",
        }
    }

    pub fn from_label(label: &str) -> Option<ServiceType> {
        ServiceType::ALL.iter().copied().find(|s| s.label() == label)
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Identifies one field of the quote form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteField {
    Name,
    Phone,
    Email,
    Vehicle,
    ServiceType,
    Message,
}

impl QuoteField {
    /// Maximum accepted length in characters, where the field has one.
    pub fn max_len(&self) -> Option<usize> {
        match self {
            QuoteField::Name => Some(100),
            QuoteField::Phone => Some(20),
            QuoteField::Email => Some(255),
            QuoteField::Vehicle => Some(100),
            QuoteField::ServiceType => None,
            QuoteField::Message => Some(1000),
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, QuoteField::Name | QuoteField::Phone)
    }
}

/// A single-field mutation of the quote form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPatch {
    Name(String),
    Phone(String),
    Email(String),
    Vehicle(String),
    ServiceType(Option<ServiceType>),
    Message(String),
}

impl FieldPatch {
    pub fn field(&self) -> QuoteField {
        match self {
            FieldPatch::Name(_) => QuoteField::Name,
            FieldPatch::Phone(_) => QuoteField::Phone,
            FieldPatch::Email(_) => QuoteField::Email,
            FieldPatch::Vehicle(_) => QuoteField::Vehicle,
            FieldPatch::ServiceType(_) => QuoteField::ServiceType,
            FieldPatch::Message(_) => QuoteField::Message,
        }
    }
}

/// The in-memory quote request being edited. Never persisted; lives from
/// form mount until the reset that follows a successful submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub vehicle: String,
    pub service_type: Option<ServiceType>,
    pub message: String,
}

impl QuoteRequest {
    /// Apply one mutation, leaving every other field untouched. Text values
    /// are clamped to the field's maximum length.
    pub fn apply(&mut self, patch: FieldPatch) {
        let field = patch.field();
        match patch {
            FieldPatch::Name(value) => self.name = clamp(value, field),
            FieldPatch::Phone(value) => self.phone = clamp(value, field),
            FieldPatch::Email(value) => self.email = clamp(value, field),
            FieldPatch::Vehicle(value) => self.vehicle = clamp(value, field),
            FieldPatch::ServiceType(value) => self.service_type = value,
            FieldPatch::Message(value) => self.message = clamp(value, field),
        }
    }

    /// Current value of one field as text; the service type reads as its
    /// label, or "" when none is selected.
    pub fn field_value(&self, field: QuoteField) -> &str {
        match field {
            QuoteField::Name => &self.name,
            QuoteField::Phone => &self.phone,
            QuoteField::Email => &self.email,
            QuoteField::Vehicle => &self.vehicle,
            QuoteField::ServiceType => self.service_type.map(|s| s.label()).unwrap_or(""),
            QuoteField::Message => &self.message,
        }
    }

    /// Return every field to its initial empty state.
    pub fn reset(&mut self) {
        *self = QuoteRequest::default();
    }
}

fn clamp(value: String, field: QuoteField) -> String {
    match field.max_len() {
        Some(max) if value.chars().count() > max => value.chars().take(max).collect(),
        _ => value,
    }
}
