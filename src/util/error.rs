/// The single error the submit path can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    MissingRequiredFields,
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::MissingRequiredFields => {
                write!(f, "required fields missing: nome and telefone must be filled")
            }
        }
    }
}

impl std::error::Error for SubmitError {}

// The only constraints that can fail on a clamped form are the min-length
// rules on the trimmed required fields.
impl From<validator::ValidationErrors> for SubmitError {
    fn from(_: validator::ValidationErrors) -> Self {
        SubmitError::MissingRequiredFields
    }
}
