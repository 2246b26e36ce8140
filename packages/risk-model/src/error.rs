use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("field '{field}' must be numeric, got {found}")]
    NotNumeric { field: &'static str, found: String },

    #[error("field '{field}' must be an integer, got {found}")]
    NotInteger { field: &'static str, found: String },

    #[error("field '{field}' must be finite")]
    NotFinite { field: &'static str },

    #[error("field '{field}' is too large, the {quantity} overflows")]
    LossOverflow {
        field: &'static str,
        quantity: &'static str,
    },
}

impl InputError {
    /// Name of the request field that was rejected.
    pub fn field(&self) -> &'static str {
        match self {
            InputError::NotNumeric { field, .. }
            | InputError::NotInteger { field, .. }
            | InputError::NotFinite { field }
            | InputError::LossOverflow { field, .. } => field,
        }
    }
}
