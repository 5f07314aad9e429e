use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error("invalid material name '{0}', only letters, digits, '_', '-' and '.' are allowed")]
    InvalidName(String),
    #[error("no key '{0}' found")]
    MissingField(&'static str),
}

impl MaterialError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}
