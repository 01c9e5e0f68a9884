use crate::customization::ValidationIssue;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Requires Higher Plan")]
    RequiresHigherPlan,

    #[error("Validation failed with {} issue(s)", .0.len())]
    Validation(Vec<ValidationIssue>),

    #[error("Internal error: {0}")]
    Internal(String),
}
